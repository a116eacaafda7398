//! Reusable GUI components

pub mod card;
pub mod filter_bar;
pub mod filter_menu;
pub mod onboarding;
pub mod post_form;
pub mod profile;

use eframe::egui;

use crate::color::Rgba;

pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
