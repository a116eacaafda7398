//! Frame-driven animation primitives (easing, springs, tweens, 2D values)

mod easing;
mod spring;
mod timing;
mod value;

pub use easing::Easing;
pub use spring::SpringConfig;
pub use value::{AnimatedXY, AnimationId, Completion};
