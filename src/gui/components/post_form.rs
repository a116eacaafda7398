//! "Post a Hangout" tab. Posting only logs and clears; nothing is stored.

use eframe::egui;
use tracing::info;

use crate::gui::constants::*;

#[derive(Default)]
pub struct PostForm {
    title: String,
    location: String,
    description: String,
    date: String,
    time: String,
    max_people: String,
}

impl PostForm {
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Post a Hangout");
        ui.add_space(SECTION_SPACING);

        field(ui, "Title", &mut self.title, "Give your hangout a name");
        field(ui, "Location", &mut self.location, "Where will it take place?");

        ui.label(egui::RichText::new("Description").strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.description)
                .hint_text("What's the plan?")
                .desired_width(f32::INFINITY)
                .desired_rows(4),
        );
        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            ui.vertical(|ui| field(ui, "Date", &mut self.date, "YYYY-MM-DD"));
            ui.vertical(|ui| field(ui, "Time", &mut self.time, "HH:MM"));
        });
        field(ui, "Max people", &mut self.max_people, "Maximum number of people");

        ui.add_space(SECTION_SPACING);
        let ready = !self.title.trim().is_empty();
        if ui.add_enabled(ready, egui::Button::new("Post").fill(BRAND_BLUE)).clicked() {
            self.post();
        }
    }

    fn post(&mut self) {
        info!(
            title = %self.title,
            location = %self.location,
            date = %self.date,
            time = %self.time,
            max_people = %self.max_people,
            "Hangout posted"
        );
        *self = Self::default();
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(egui::RichText::new(label).strong());
    ui.add(egui::TextEdit::singleline(value).hint_text(hint));
    ui.add_space(ITEM_SPACING);
}
