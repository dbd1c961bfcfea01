//! Application pages

mod audio;
mod home;
mod image;
mod signin;
mod text;
mod three_d;
mod video;
mod workflows;

pub use audio::*;
pub use home::*;
pub use image::*;
pub use signin::*;
pub use text::*;
pub use three_d::*;
pub use video::*;
pub use workflows::*;
