pub mod animation;
pub mod phrase_library;
pub mod spelling;
