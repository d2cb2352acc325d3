mod misc;
mod shape;

pub use misc::*;
pub use shape::*;
