//! GUI-specific constants for layout, palette and repaint pacing

use egui;

/// Window limits; the initial size comes from the config file
pub const WINDOW_MIN_WIDTH: f32 = 360.0;
pub const WINDOW_MIN_HEIGHT: f32 = 640.0;

/// Layout spacing
pub const PADDING: f32 = 12.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Discovery card geometry
pub const CARD_WIDTH_RATIO: f32 = 0.9;
pub const CARD_HEIGHT_RATIO: f32 = 0.72;
pub const CARD_HEADER_RATIO: f32 = 0.28;
pub const CARD_SHADOW_OFFSET: egui::Vec2 = egui::vec2(0.0, 6.0);
pub const CARD_TEXT_MARGIN: f32 = 18.0;

/// Action button row
pub const ACTION_BUTTON_SIZE: egui::Vec2 = egui::vec2(84.0, 44.0);

/// Longest frame fed to the animation clock, after stalls or idle periods
pub const MAX_FRAME_MS: f32 = 100.0;

/// Search results listed under the expanded search field
pub const MAX_SEARCH_RESULTS: usize = 5;

/// Filter bar icon size
pub const FILTER_ICON_SIZE: egui::Vec2 = egui::vec2(52.0, 36.0);
pub const FILTER_ICON_COMPRESSED: egui::Vec2 = egui::vec2(42.0, 30.0);

/// Palette
pub const BRAND_BLUE: egui::Color32 = egui::Color32::from_rgb(0x00, 0x7A, 0xFF);
pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xF3, 0xF4, 0xF6);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(0x66, 0x66, 0x66);
pub const NO_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x4B, 0x4B);
pub const YES_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const SAVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xA5, 0x00);
pub const CARD_SHADOW: egui::Color32 = egui::Color32::from_black_alpha(40);

/// Interests shown on the profile tab
pub const PROFILE_INTERESTS: &[&str] = &["Basketball", "Volleyball", "Astronomy", "Psychology", "Electronic & Dance"];
