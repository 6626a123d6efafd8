pub mod audio;
pub mod dispatch;
pub mod pipeline;
pub mod shared;
pub mod visuals;
