//! Configuration for Knizo
//!
//! Stored as pretty JSON under the platform config directory. Every field has
//! a serde default so partial files load, and values are repaired by
//! `validate_and_clamp` after loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::animation::SpringConfig;
use crate::color::Rgba;
use crate::constants::{animation, swipe};
use crate::swipe::{ExitTiming, TintColors};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub swipe: SwipeSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// JSON array of hangouts replacing the built-in deck
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hangouts_file: Option<PathBuf>,
}

/// Desktop shell window size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
}

/// Gesture thresholds and animation tuning for the card swipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeSettings {
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,
    #[serde(default = "default_direction_lock_threshold")]
    pub direction_lock_threshold: f32,
    #[serde(default = "default_exit_duration_ms")]
    pub exit_duration_ms: f32,
    #[serde(default = "default_transition_hold_ms")]
    pub transition_hold_ms: f32,
    #[serde(default = "default_nudge_duration_ms")]
    pub nudge_duration_ms: f32,
    #[serde(default = "default_spring_tension")]
    pub spring_tension: f32,
    #[serde(default = "default_spring_friction")]
    pub spring_friction: f32,
    /// Logical screen width; exits travel twice this far
    #[serde(default = "default_screen_width")]
    pub screen_width: f32,
    /// Tint colours as `#RRGGBB` or `#AARRGGBB`
    #[serde(default = "default_no_color")]
    pub no_color_hex: String,
    #[serde(default = "default_yes_color")]
    pub yes_color_hex: String,
    #[serde(default = "default_save_color")]
    pub save_color_hex: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_width() -> f32 {
    420.0
}

fn default_window_height() -> f32 {
    820.0
}

fn default_swipe_threshold() -> f32 {
    swipe::SWIPE_THRESHOLD
}

fn default_direction_lock_threshold() -> f32 {
    swipe::DIRECTION_LOCK_THRESHOLD
}

fn default_exit_duration_ms() -> f32 {
    animation::EXIT_DURATION_MS
}

fn default_transition_hold_ms() -> f32 {
    animation::TRANSITION_HOLD_MS
}

fn default_nudge_duration_ms() -> f32 {
    animation::NUDGE_DURATION_MS
}

fn default_spring_tension() -> f32 {
    animation::RESET_SPRING_TENSION
}

fn default_spring_friction() -> f32 {
    animation::RESET_SPRING_FRICTION
}

fn default_screen_width() -> f32 {
    swipe::DEFAULT_SCREEN_WIDTH
}

fn default_no_color() -> String {
    TintColors::default().no.to_string()
}

fn default_yes_color() -> String {
    TintColors::default().yes.to_string()
}

fn default_save_color() -> String {
    TintColors::default().save.to_string()
}

const MIN_SCREEN_WIDTH: f32 = 100.0;
const MIN_DURATION_MS: f32 = 1.0;
const SPRING_TENSION_RANGE: (f32, f32) = (1.0, 1000.0);
const MAX_SPRING_FRICTION: f32 = 100.0;

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            direction_lock_threshold: default_direction_lock_threshold(),
            exit_duration_ms: default_exit_duration_ms(),
            transition_hold_ms: default_transition_hold_ms(),
            nudge_duration_ms: default_nudge_duration_ms(),
            spring_tension: default_spring_tension(),
            spring_friction: default_spring_friction(),
            screen_width: default_screen_width(),
            no_color_hex: default_no_color(),
            yes_color_hex: default_yes_color(),
            save_color_hex: default_save_color(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            swipe: SwipeSettings::default(),
            log_level: default_log_level(),
            hangouts_file: None,
        }
    }
}

impl SwipeSettings {
    pub fn reset_spring(&self) -> SpringConfig {
        SpringConfig::new(self.spring_tension, self.spring_friction)
    }

    pub fn exit_timing(&self) -> ExitTiming {
        ExitTiming {
            distance: self.screen_width * swipe::EXIT_DISTANCE_SCREENS,
            duration_ms: self.exit_duration_ms,
            hold_ms: self.transition_hold_ms,
            nudge_ms: self.nudge_duration_ms,
            nudge_distance: self.direction_lock_threshold,
        }
    }

    /// Parsed tint colours; unparsable entries fall back to their default
    pub fn tint_colors(&self) -> TintColors {
        let defaults = TintColors::default();
        let parse = |name: &str, hex: &str, fallback: Rgba| {
            Rgba::parse_hex(hex).unwrap_or_else(|| {
                error!(field = name, value = %hex, "Invalid colour hex, using default");
                fallback
            })
        };
        TintColors {
            no: parse("no_color_hex", &self.no_color_hex, defaults.no),
            yes: parse("yes_color_hex", &self.yes_color_hex, defaults.yes),
            save: parse("save_color_hex", &self.save_color_hex, defaults.save),
        }
    }

    /// Repair out-of-range values. Returns the names of repaired fields.
    fn validate_and_clamp(&mut self) -> Vec<&'static str> {
        let mut repaired = Vec::new();

        if !(self.swipe_threshold > 0.0) {
            warn!(swipe_threshold = self.swipe_threshold, "swipe_threshold must be positive, using default");
            self.swipe_threshold = default_swipe_threshold();
            repaired.push("swipe_threshold");
        }

        if !(self.direction_lock_threshold >= 1.0 && self.direction_lock_threshold < self.swipe_threshold) {
            let fallback = default_direction_lock_threshold().min(self.swipe_threshold / 2.0);
            warn!(
                direction_lock_threshold = self.direction_lock_threshold,
                swipe_threshold = self.swipe_threshold,
                using = fallback,
                "direction_lock_threshold must be at least 1 and below swipe_threshold"
            );
            self.direction_lock_threshold = fallback;
            repaired.push("direction_lock_threshold");
        }

        for (name, value) in [
            ("exit_duration_ms", &mut self.exit_duration_ms),
            ("transition_hold_ms", &mut self.transition_hold_ms),
            ("nudge_duration_ms", &mut self.nudge_duration_ms),
        ] {
            if !(*value >= MIN_DURATION_MS) {
                warn!(field = name, value = *value, min = MIN_DURATION_MS, "duration below minimum, clamping");
                *value = MIN_DURATION_MS;
                repaired.push(name);
            }
        }

        if !(self.screen_width >= MIN_SCREEN_WIDTH) {
            warn!(screen_width = self.screen_width, min = MIN_SCREEN_WIDTH, "screen_width below minimum, clamping");
            self.screen_width = MIN_SCREEN_WIDTH;
            repaired.push("screen_width");
        }

        if !(self.spring_friction > 0.0) {
            warn!(spring_friction = self.spring_friction, "spring_friction must be positive, using default");
            self.spring_friction = default_spring_friction();
            repaired.push("spring_friction");
        } else if self.spring_friction > MAX_SPRING_FRICTION {
            warn!(spring_friction = self.spring_friction, max = MAX_SPRING_FRICTION, "spring_friction too high, clamping");
            self.spring_friction = MAX_SPRING_FRICTION;
            repaired.push("spring_friction");
        }

        let (min_tension, max_tension) = SPRING_TENSION_RANGE;
        if !self.spring_tension.is_finite() {
            warn!("spring_tension is not a number, using default");
            self.spring_tension = default_spring_tension();
            repaired.push("spring_tension");
        } else if !(min_tension..=max_tension).contains(&self.spring_tension) {
            let clamped = self.spring_tension.clamp(min_tension, max_tension);
            warn!(spring_tension = self.spring_tension, using = clamped, "spring_tension out of range, clamping");
            self.spring_tension = clamped;
            repaired.push("spring_tension");
        }

        repaired
    }
}

impl Config {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load from the default location, creating it with defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load configuration from a JSON file or create a default one there
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, creating default config at {:?}", path);
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        let repaired = config.validate_and_clamp();
        if !repaired.is_empty() {
            warn!(fields = ?repaired, "Config contained invalid values, repaired in memory");
        }

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate_and_clamp(&mut self) -> Vec<&'static str> {
        let mut repaired = self.swipe.validate_and_clamp();

        if !(self.window.width >= 200.0 && self.window.height >= 200.0) {
            warn!(width = self.window.width, height = self.window.height, "window size too small, using defaults");
            self.window = WindowSettings::default();
            repaired.push("window");
        }

        repaired
    }
}
