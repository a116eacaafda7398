use eframe::egui;

use crate::gui::constants::*;
use crate::onboarding::{Onboarding, Screen};

/// Renders the current sign-up screen
pub fn ui(ui: &mut egui::Ui, flow: &mut Onboarding) {
    if flow.can_go_back() && flow.screen() != Screen::SetupProfile && ui.button("< Back").clicked() {
        flow.back();
        return;
    }
    ui.add_space(SECTION_SPACING);

    match flow.screen() {
        Screen::Welcome => welcome(ui, flow),
        Screen::SchoolSelect => school_select(ui, flow),
        Screen::Login => login(ui, flow),
        Screen::SetupProfile => setup(ui, flow),
        Screen::Discover => {}
    }
}

fn welcome(ui: &mut egui::Ui, flow: &mut Onboarding) {
    ui.vertical_centered(|ui| {
        ui.add_space(SECTION_SPACING * 4.0);
        ui.label(egui::RichText::new("Knizo").size(48.0).strong().color(BRAND_BLUE));
        ui.label(egui::RichText::new("Find people on campus to hang out with").color(MUTED_TEXT));
        ui.add_space(SECTION_SPACING * 2.0);
        if ui.add(egui::Button::new("Get started").min_size(ACTION_BUTTON_SIZE * egui::vec2(2.0, 1.0))).clicked() {
            flow.get_started();
        }
    });
}

fn school_select(ui: &mut egui::Ui, flow: &mut Onboarding) {
    ui.heading("Find your campus");
    ui.add_space(ITEM_SPACING);

    let mut query = flow.school_query().to_string();
    let edit = egui::TextEdit::singleline(&mut query)
        .hint_text("Search for your school")
        .desired_width(f32::INFINITY);
    if ui.add(edit).changed() {
        flow.set_school_query(query);
    }
    ui.add_space(ITEM_SPACING);

    let mut chosen = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for school in flow.schools() {
            let button = egui::Button::new(school).min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                chosen = Some(school);
            }
        }
    });
    if let Some(school) = chosen {
        flow.choose_school(school);
    }
}

fn login(ui: &mut egui::Ui, flow: &mut Onboarding) {
    if let Some(school) = flow.school() {
        ui.label(egui::RichText::new(school).color(MUTED_TEXT));
    }
    ui.heading("Log in");
    ui.add_space(ITEM_SPACING);

    ui.label("NetID");
    ui.add(egui::TextEdit::singleline(flow.net_id_mut()).hint_text("Enter your NetID"));
    ui.add_space(ITEM_SPACING);
    ui.label("Password");
    ui.add(
        egui::TextEdit::singleline(flow.password_mut())
            .password(true)
            .hint_text("Enter your password"),
    );
    ui.add_space(SECTION_SPACING);

    if ui.button(egui::RichText::new("Log in").strong()).clicked() {
        flow.login();
    }
}

fn setup(ui: &mut egui::Ui, flow: &Onboarding) {
    ui.vertical_centered(|ui| {
        ui.add_space(SECTION_SPACING * 4.0);
        ui.spinner();
        ui.add_space(ITEM_SPACING);
        ui.label("Creating your Knizo account...");
        ui.add(egui::ProgressBar::new(flow.setup_progress()));
    });
}
