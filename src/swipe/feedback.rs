//! Background tint derived from the card offset

use crate::color::{ColorRamp, Rgba};
use crate::types::Offset;

/// Which colour ramp applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TintMode {
    /// Red for "no", green for "yes", keyed on x
    #[default]
    Horizontal,
    /// Orange for "save", keyed on y
    Vertical,
}

impl TintMode {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical { TintMode::Vertical } else { TintMode::Horizontal }
    }
}

/// Fully committed colours for each decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintColors {
    pub no: Rgba,
    pub yes: Rgba,
    pub save: Rgba,
}

impl Default for TintColors {
    fn default() -> Self {
        Self { no: Rgba::RED, yes: Rgba::GREEN, save: Rgba::ORANGE }
    }
}

#[derive(Debug, Clone)]
pub struct ColorFeedback {
    horizontal: ColorRamp,
    vertical: ColorRamp,
}

impl ColorFeedback {
    pub fn new(swipe_threshold: f32, lock_threshold: f32, colors: TintColors) -> Self {
        Self {
            horizontal: ColorRamp::new(vec![
                (-swipe_threshold, colors.no),
                (-lock_threshold, Rgba::WHITE),
                (0.0, Rgba::WHITE),
                (lock_threshold, Rgba::WHITE),
                (swipe_threshold, colors.yes),
            ]),
            vertical: ColorRamp::new(vec![(0.0, Rgba::WHITE), (swipe_threshold, colors.save)]),
        }
    }

    pub fn tint(&self, offset: Offset, mode: TintMode) -> Rgba {
        match mode {
            TintMode::Horizontal => self.horizontal.sample(offset.x),
            TintMode::Vertical => self.vertical.sample(offset.y),
        }
    }
}
