pub mod gif_loader;
pub mod letter_image_loader;
pub mod visual_error;
