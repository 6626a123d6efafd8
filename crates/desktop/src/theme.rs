use iced::color;
use iced::theme::Palette;
use iced::Theme;

pub fn app_theme() -> Theme {
    Theme::custom("SignBridge", palette())
}

fn palette() -> Palette {
    Palette {
        background: color!(0xe8, 0xf1, 0xf7),
        text: color!(0x1d, 0x2b, 0x33),
        primary: color!(0x2f, 0x80, 0xc2),
        success: color!(0x2e, 0xa0, 0x5c),
        warning: color!(0xe8, 0x9c, 0x1e),
        danger: color!(0xd9, 0x3b, 0x3b),
    }
}
