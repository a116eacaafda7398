//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Swipe gesture thresholds (logical units)
pub mod swipe {
    /// Release distance on the dominant axis that commits a card exit
    pub const SWIPE_THRESHOLD: f32 = 80.0;

    /// Distance on either axis after which movement locks to one axis
    pub const DIRECTION_LOCK_THRESHOLD: f32 = 20.0;

    /// Rotation applied at half a screen width of horizontal travel
    pub const MAX_ROTATION_DEG: f32 = 10.0;

    /// Logical screen width used when none is configured
    pub const DEFAULT_SCREEN_WIDTH: f32 = 390.0;

    /// Exit distance expressed in screen widths
    pub const EXIT_DISTANCE_SCREENS: f32 = 2.0;
}

/// Animation timing constants (milliseconds unless noted)
pub mod animation {
    /// Duration of the off-screen exit animation
    pub const EXIT_DURATION_MS: f32 = 400.0;

    /// Hold after an exit with rendering suppressed (about two frames)
    pub const TRANSITION_HOLD_MS: f32 = 32.0;

    /// Duration of the nudge past the lock threshold done by action buttons
    pub const NUDGE_DURATION_MS: f32 = 100.0;

    /// Spring-back tension for the card reset
    pub const RESET_SPRING_TENSION: f32 = 40.0;

    /// Spring-back friction for the card reset
    pub const RESET_SPRING_FRICTION: f32 = 5.0;

    /// Displacement and speed below which a spring is considered at rest
    pub const SPRING_REST_EPSILON: f32 = 0.001;

    /// Largest integration step for springs; longer frames are subdivided
    pub const SPRING_MAX_STEP_MS: f32 = 4.0;
}

/// Filter menu constants
pub mod filters {
    /// Smallest selectable group size
    pub const MIN_PEOPLE: u8 = 2;

    /// Largest selectable group size
    pub const MAX_PEOPLE: u8 = 10;

    /// Group size selected before any edit
    pub const DEFAULT_PEOPLE: u8 = 2;
}

/// Onboarding flow constants
pub mod onboarding {
    /// Simulated account creation time on the profile setup screen
    pub const SETUP_DURATION_MS: f32 = 2000.0;
}

/// Configuration file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "knizo";

    /// Config file name
    pub const FILENAME: &str = "config.json";
}
