//! Shared value types for the swipe core

use serde::{Deserialize, Serialize};

/// 2D translation in logical units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }
}

/// One component of a 2D value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Axis committed for the rest of a gesture session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisLock {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// What a completed swipe means for the hangout on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Horizontal, negative x
    No,
    /// Horizontal, positive x
    Yes,
    /// Vertical, downward
    Save,
}

impl SwipeDirection {
    pub fn axis(self) -> Axis {
        match self {
            SwipeDirection::No | SwipeDirection::Yes => Axis::X,
            SwipeDirection::Save => Axis::Y,
        }
    }

    /// Sign of travel along [`SwipeDirection::axis`]
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::No => -1.0,
            SwipeDirection::Yes | SwipeDirection::Save => 1.0,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == SwipeDirection::Save
    }

    pub fn label(self) -> &'static str {
        match self {
            SwipeDirection::No => "no",
            SwipeDirection::Yes => "yes",
            SwipeDirection::Save => "save",
        }
    }
}

impl std::str::FromStr for SwipeDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "no" | "n" => Ok(SwipeDirection::No),
            "yes" | "y" => Ok(SwipeDirection::Yes),
            "save" | "s" => Ok(SwipeDirection::Save),
            other => Err(anyhow::anyhow!("Unknown swipe action '{other}' (expected yes, no or save)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_axis_access() {
        let mut offset = Offset::new(3.0, -4.0);
        assert_eq!(offset.get(Axis::X), 3.0);
        assert_eq!(offset.get(Axis::Y), -4.0);

        offset.set(Axis::Y, 12.0);
        assert_eq!(offset, Offset::new(3.0, 12.0));
    }

    #[test]
    fn test_swipe_direction_parse() {
        assert_eq!("Yes".parse::<SwipeDirection>().unwrap(), SwipeDirection::Yes);
        assert_eq!(" n ".parse::<SwipeDirection>().unwrap(), SwipeDirection::No);
        assert_eq!("save".parse::<SwipeDirection>().unwrap(), SwipeDirection::Save);
        assert!("up".parse::<SwipeDirection>().is_err());
    }

    #[test]
    fn test_swipe_direction_geometry() {
        assert_eq!(SwipeDirection::No.axis(), Axis::X);
        assert_eq!(SwipeDirection::No.sign(), -1.0);
        assert_eq!(SwipeDirection::Save.axis(), Axis::Y);
        assert!(SwipeDirection::Save.is_vertical());
        assert!(!SwipeDirection::Yes.is_vertical());
    }
}
