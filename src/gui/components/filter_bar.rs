//! Filter icon row with the expandable search field

use eframe::egui;

use crate::catalog::Hangout;
use crate::filters::search::search_hangouts;
use crate::filters::{FilterCategory, FilterIcon, FilterStore, MenuPanel};
use crate::gui::constants::*;

pub fn ui(ui: &mut egui::Ui, store: &mut FilterStore, cards: &[Hangout]) {
    let expanded = store.is_search_expanded();
    let icon_size = if expanded { FILTER_ICON_COMPRESSED } else { FILTER_ICON_SIZE };

    ui.horizontal(|ui| {
        for icon in FilterIcon::ALL {
            if icon == FilterIcon::Search && expanded {
                search_field(ui, store);
                continue;
            }

            let selected = match (icon, store.panel()) {
                (FilterIcon::Category(category), MenuPanel::Category(open)) => category == open,
                (FilterIcon::Search, MenuPanel::Search) => true,
                _ => false,
            };
            let label = if expanded { short_label(icon) } else { icon.label() };
            let button = egui::Button::new(label).selected(selected).min_size(icon_size);
            if ui.add(button).on_hover_text(icon.label()).clicked() {
                store.select_icon(icon);
            }
        }
    });

    let active = store.active().active_count();
    if active > 0 {
        ui.label(egui::RichText::new(format!("{active} filter(s) active")).small().color(BRAND_BLUE));
    }
    if store.panel() == MenuPanel::Idle && store.draft() != store.active() {
        ui.label(egui::RichText::new("Unconfirmed filter edits").small().color(MUTED_TEXT));
    }

    if expanded && !store.query().trim().is_empty() {
        let matches = search_hangouts(cards, store.query());
        ui.add_space(ITEM_SPACING);
        if matches.is_empty() {
            ui.colored_label(MUTED_TEXT, "No hangouts match");
        }
        for hangout in matches.iter().take(MAX_SEARCH_RESULTS) {
            ui.label(format!("{} (@{})", hangout.title, hangout.poster.username));
        }
        if matches.len() > MAX_SEARCH_RESULTS {
            ui.colored_label(MUTED_TEXT, format!("and {} more", matches.len() - MAX_SEARCH_RESULTS));
        }
    }
}

fn search_field(ui: &mut egui::Ui, store: &mut FilterStore) {
    let mut query = store.query().to_string();
    let edit = egui::TextEdit::singleline(&mut query)
        .hint_text("Search hangouts")
        .desired_width(ui.available_width() - FILTER_ICON_COMPRESSED.x - ITEM_SPACING);
    if ui.add(edit).changed() {
        store.set_query(query);
    }
    if ui.button("Close").clicked() {
        store.collapse_search();
    }
}

fn short_label(icon: FilterIcon) -> &'static str {
    match icon {
        FilterIcon::Category(FilterCategory::Tags) => "Tags",
        FilterIcon::Category(FilterCategory::Calendar) => "Date",
        FilterIcon::Category(FilterCategory::People) => "Ppl",
        FilterIcon::Category(FilterCategory::Location) => "Loc",
        FilterIcon::Search => "Search",
    }
}
