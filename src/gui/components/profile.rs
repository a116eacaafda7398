//! Read-only profile tab

use eframe::egui;

use crate::filters::FilterState;
use crate::gui::constants::*;

pub fn ui(ui: &mut egui::Ui, school: Option<&str>, active_filters: &FilterState) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("evanDoe").heading().strong());
        ui.label("Class of 2027");
        ui.label(egui::RichText::new("Undeclared").color(MUTED_TEXT));
        if let Some(school) = school {
            ui.label(egui::RichText::new(school).color(MUTED_TEXT));
        }
        ui.add_space(ITEM_SPACING);
        ui.label(egui::RichText::new("If I were a class, I would be Psych101").italics());
        ui.add_space(ITEM_SPACING);
        ui.horizontal_wrapped(|ui| {
            for interest in PROFILE_INTERESTS {
                ui.label(egui::RichText::new(*interest).background_color(BACKGROUND));
            }
        });
    });

    ui.add_space(SECTION_SPACING);
    ui.group(|ui| {
        ui.label(egui::RichText::new("Discover filters").strong());
        if active_filters.active_count() == 0 {
            ui.colored_label(MUTED_TEXT, "No filters applied");
        } else {
            if !active_filters.tags.is_empty() {
                ui.label(format!("Tags: {}", active_filters.tags.join(", ")));
            }
            if !active_filters.locations.is_empty() {
                ui.label(format!("Locations: {}", active_filters.locations.join(", ")));
            }
            ui.label(format!("Group size: {}", active_filters.people));
        }
    });

    ui.add_space(SECTION_SPACING);
    for (section, items) in [
        ("General Settings", &["Dark mode"][..]),
        ("Questionnaire Settings", &["Personality test", "Interests list", "Lifestyle questions"][..]),
        ("Contact", &["Knizo Help Center"][..]),
    ] {
        ui.label(egui::RichText::new(section).strong());
        for item in items {
            ui.label(*item);
        }
        ui.add_space(ITEM_SPACING);
    }
}
