mod gray;
mod sepia;

pub use gray::{
    blue_component, gray_from_rgb, green_component, intensity_from_rgb, luma_from_rgb,
    red_component, value_from_rgb,
};
pub use sepia::sepia_from_rgb;
