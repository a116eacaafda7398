//! Swipeable card discovery: gesture tracking, card motion, tint feedback and exits

mod controller;
mod deck;
mod exit;
mod feedback;
mod gesture;
mod position;

pub use controller::{RenderFrame, SwipeController, SwipeEvent};
pub use exit::ExitTiming;
pub use feedback::TintColors;
