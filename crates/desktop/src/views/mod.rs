pub mod animation_panel;
pub mod main_view;
pub mod spelling_panel;
