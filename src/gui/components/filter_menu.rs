//! Filter category panels. Every panel edits the shared draft; only the
//! confirm and cancel buttons touch the active filters.

use chrono::{NaiveDate, NaiveTime};
use eframe::egui;

use crate::catalog::{LOCATIONS, TAGS};
use crate::constants::filters::{MAX_PEOPLE, MIN_PEOPLE};
use crate::filters::{Endpoint, FilterCategory, FilterState, FilterStore, MenuPanel, SelectionKind, TimeSelection};
use crate::gui::constants::*;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Text buffers for the date and time pickers
#[derive(Default)]
pub struct FilterMenu {
    date_input: [String; 2],
    time_input: [String; 2],
    error: Option<String>,
}

impl FilterMenu {
    pub fn ui(&mut self, ui: &mut egui::Ui, store: &mut FilterStore) {
        let MenuPanel::Category(category) = store.panel() else {
            return;
        };

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new(category.label()).heading().strong());
            ui.add_space(ITEM_SPACING);

            let draft = store.draft_mut();
            match category {
                FilterCategory::Tags => tags_panel(ui, draft),
                FilterCategory::Calendar => self.calendar_panel(ui, draft),
                FilterCategory::People => people_panel(ui, draft),
                FilterCategory::Location => location_panel(ui, draft),
            }

            ui.add_space(SECTION_SPACING);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    self.error = None;
                    store.cancel();
                }
                if ui.button(egui::RichText::new("Confirm").strong().color(BRAND_BLUE)).clicked() {
                    self.error = None;
                    store.confirm();
                }
            });
        });
    }

    fn calendar_panel(&mut self, ui: &mut egui::Ui, draft: &mut FilterState) {
        ui.label(egui::RichText::new("Date").strong());
        selection_rows(
            ui,
            "date",
            &mut draft.date,
            &mut self.date_input,
            &mut self.error,
            |text| NaiveDate::parse_from_str(text, DATE_FORMAT),
            |date| date.format(DATE_FORMAT).to_string(),
        );

        ui.add_space(ITEM_SPACING);
        ui.label(egui::RichText::new("Time").strong());
        selection_rows(
            ui,
            "time",
            &mut draft.time,
            &mut self.time_input,
            &mut self.error,
            |text| NaiveTime::parse_from_str(text, TIME_FORMAT),
            |time| time.format(TIME_FORMAT).to_string(),
        );

        if let Some(error) = &self.error {
            ui.colored_label(NO_COLOR, error);
        }
    }
}

fn tags_panel(ui: &mut egui::Ui, draft: &mut FilterState) {
    ui.horizontal_wrapped(|ui| {
        for tag in TAGS {
            let button = egui::Button::new(*tag).selected(draft.has_tag(tag));
            if ui.add(button).clicked() {
                draft.toggle_tag(tag);
            }
        }
    });
}

fn people_panel(ui: &mut egui::Ui, draft: &mut FilterState) {
    let mut people = draft.people;
    ui.horizontal(|ui| {
        ui.label("Group size:");
        if ui.add(egui::Slider::new(&mut people, MIN_PEOPLE..=MAX_PEOPLE)).changed() {
            draft.set_people(people);
        }
    });
}

fn location_panel(ui: &mut egui::Ui, draft: &mut FilterState) {
    for location in LOCATIONS {
        let mut checked = draft.has_location(location);
        if ui.checkbox(&mut checked, *location).changed() {
            draft.toggle_location(location);
        }
    }
}

/// Kind radio buttons plus one text row per editable endpoint
fn selection_rows<T, E: std::fmt::Display>(
    ui: &mut egui::Ui,
    id: &str,
    selection: &mut TimeSelection<T>,
    input: &mut [String; 2],
    error: &mut Option<String>,
    parse: impl Fn(&str) -> Result<T, E>,
    format: impl Fn(&T) -> String,
) {
    ui.horizontal(|ui| {
        let mut kind = selection.kind;
        ui.radio_value(&mut kind, SelectionKind::Specific, "Specific");
        ui.radio_value(&mut kind, SelectionKind::Range, "Range");
        if kind != selection.kind {
            selection.set_kind(kind);
        }
    });

    let endpoints: &[(Endpoint, &str)] = match selection.kind {
        SelectionKind::Specific => &[(Endpoint::Start, "On")],
        SelectionKind::Range => &[(Endpoint::Start, "From"), (Endpoint::End, "To")],
    };

    for (slot, &(endpoint, label)) in endpoints.iter().enumerate() {
        let current = match endpoint {
            Endpoint::Start => selection.start.as_ref(),
            Endpoint::End => selection.end.as_ref(),
        };
        let shown = current.map(&format).unwrap_or_else(|| "any".to_string());

        ui.horizontal(|ui| {
            ui.label(format!("{label}: {shown}"));
            ui.add(
                egui::TextEdit::singleline(&mut input[slot])
                    .id_salt((id, slot))
                    .desired_width(96.0),
            );
            if ui.button("Set").clicked() {
                match parse(input[slot].trim()) {
                    Ok(value) => {
                        selection.set(endpoint, value);
                        input[slot].clear();
                        *error = None;
                    }
                    Err(err) => *error = Some(format!("{label}: {err}")),
                }
            }
        });
    }
}
