//! Knizo desktop shell: onboarding, then a tabbed discover / post / profile UI

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::info;

use super::components::card::{self, CardView};
use super::components::filter_menu::FilterMenu;
use super::components::post_form::PostForm;
use super::components::{filter_bar, onboarding, profile};
use super::constants::*;
use crate::catalog::Hangout;
use crate::config::Config;
use crate::filters::FilterStore;
use crate::onboarding::{Onboarding, Screen};
use crate::swipe::{SwipeController, SwipeEvent};
use crate::types::{AxisLock, SwipeDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    NewHangout,
    Discover,
    Profile,
}

struct KnizoApp {
    onboarding: Onboarding,
    controller: SwipeController,
    filters: FilterStore,
    card: CardView,
    filter_menu: FilterMenu,
    post_form: PostForm,
    tab: Tab,
    last_decision: Option<(String, SwipeDirection)>,
}

impl KnizoApp {
    fn new(_cc: &CreationContext<'_>, config: &Config, cards: Vec<Hangout>, skip_onboarding: bool) -> Self {
        info!(cards = cards.len(), skip_onboarding, "Initializing Knizo window");
        Self {
            onboarding: if skip_onboarding { Onboarding::skip() } else { Onboarding::new() },
            controller: SwipeController::new(&config.swipe, cards),
            filters: FilterStore::new(),
            card: CardView::default(),
            filter_menu: FilterMenu::default(),
            post_form: PostForm::default(),
            tab: Tab::Discover,
            last_decision: None,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (left, right, down, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if ctx.wants_keyboard_input() {
            return;
        }
        for (pressed, direction) in [
            (left, SwipeDirection::No),
            (right, SwipeDirection::Yes),
            (down, SwipeDirection::Save),
        ] {
            if pressed {
                self.controller.press(direction);
            }
        }
        if escape {
            self.controller.interrupt();
        }
    }

    fn discover(&mut self, ui: &mut egui::Ui) {
        filter_bar::ui(ui, &mut self.filters, self.controller.deck().cards());
        self.filter_menu.ui(ui, &mut self.filters);
        ui.add_space(ITEM_SPACING);

        if let Some((hint, color)) = swipe_hint(&self.controller) {
            ui.colored_label(color, egui::RichText::new(hint).strong());
        } else {
            match &self.last_decision {
                Some((title, direction)) => {
                    let color = decision_color(*direction);
                    ui.colored_label(color, format!("{}: {title}", direction.label()));
                }
                None => {
                    ui.colored_label(MUTED_TEXT, "Swipe right to join, left to pass, down to save");
                }
            }
        }

        self.card.ui(ui, &mut self.controller);
        ui.add_space(SECTION_SPACING);
        card::action_buttons(ui, &mut self.controller);
    }

    fn record(&mut self, events: Vec<SwipeEvent>) {
        for event in events {
            if let SwipeEvent::Decided { hangout_id, direction } = event {
                let title = self
                    .controller
                    .deck()
                    .cards()
                    .iter()
                    .find(|h| h.id == hangout_id)
                    .map(|h| h.title.clone())
                    .unwrap_or(hangout_id);
                self.last_decision = Some((title, direction));
            }
        }
    }
}

fn decision_color(direction: SwipeDirection) -> egui::Color32 {
    match direction {
        SwipeDirection::No => NO_COLOR,
        SwipeDirection::Yes => YES_COLOR,
        SwipeDirection::Save => SAVE_COLOR,
    }
}

/// Label for the decision the current drag is heading towards
fn swipe_hint(controller: &SwipeController) -> Option<(&'static str, egui::Color32)> {
    if controller.exit_in_flight() || !controller.is_dragging() {
        return None;
    }
    let direction = match controller.lock() {
        AxisLock::None => return None,
        AxisLock::Horizontal if controller.offset().x > 0.0 => SwipeDirection::Yes,
        AxisLock::Horizontal => SwipeDirection::No,
        AxisLock::Vertical if controller.offset().y > 0.0 => SwipeDirection::Save,
        AxisLock::Vertical => return None,
    };
    let label = match direction {
        SwipeDirection::No => "Pass",
        SwipeDirection::Yes => "Join",
        SwipeDirection::Save => "Save for later",
    };
    Some((label, decision_color(direction)))
}

impl eframe::App for KnizoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt_ms = (ctx.input(|i| i.stable_dt) * 1000.0).min(MAX_FRAME_MS);

        if self.onboarding.screen() != Screen::Discover {
            self.onboarding.tick(dt_ms);
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_space(PADDING);
                onboarding::ui(ui, &mut self.onboarding);
            });
            if self.onboarding.screen() == Screen::SetupProfile {
                ctx.request_repaint();
            }
            return;
        }

        let events = self.controller.tick(dt_ms);
        self.record(events);

        egui::TopBottomPanel::bottom("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::NewHangout, "New Hangout");
                ui.selectable_value(&mut self.tab, Tab::Discover, "Discover");
                ui.selectable_value(&mut self.tab, Tab::Profile, "My Profile");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(PADDING);
            match self.tab {
                Tab::Discover => self.discover(ui),
                Tab::NewHangout => self.post_form.ui(ui),
                Tab::Profile => profile::ui(ui, self.onboarding.school(), self.filters.active()),
            }
        });

        if self.tab == Tab::Discover {
            self.handle_keys(ctx);
        }

        if !self.controller.is_settled() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Knizo exiting");
    }
}

pub fn run_gui(config: Config, cards: Vec<Hangout>, skip_onboarding: bool) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Knizo"),
        ..Default::default()
    };

    eframe::run_native(
        "Knizo",
        options,
        Box::new(move |cc| Ok(Box::new(KnizoApp::new(cc, &config, cards, skip_onboarding)))),
    )
    .map_err(|err| anyhow!("Failed to launch Knizo window: {err}"))
}
