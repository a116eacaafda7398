//! Sign-up navigation: welcome, campus selection, login, account setup
//!
//! Screens form a stack. Setup replaces the whole stack with the discover
//! screen once its timer runs out, so there is no way back into onboarding.

use tracing::{debug, info};

use crate::catalog::UNIVERSITIES;
use crate::constants::onboarding::SETUP_DURATION_MS;
use crate::filters::search::search_schools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    SchoolSelect,
    Login,
    SetupProfile,
    Discover,
}

#[derive(Debug)]
pub struct Onboarding {
    stack: Vec<Screen>,
    school_query: String,
    school: Option<&'static str>,
    net_id: String,
    password: String,
    setup_remaining_ms: f32,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self::new()
    }
}

impl Onboarding {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Welcome],
            school_query: String::new(),
            school: None,
            net_id: String::new(),
            password: String::new(),
            setup_remaining_ms: SETUP_DURATION_MS,
        }
    }

    /// Start directly on the discover screen
    pub fn skip() -> Self {
        Self {
            stack: vec![Screen::Discover],
            ..Self::new()
        }
    }

    pub fn screen(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Discover)
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn back(&mut self) {
        if self.can_go_back() {
            let from = self.stack.pop();
            debug!(?from, to = ?self.screen(), "Navigated back");
        }
    }

    fn push(&mut self, screen: Screen) {
        debug!(from = ?self.screen(), to = ?screen, "Navigated");
        self.stack.push(screen);
    }

    /// Welcome screen "get started"
    pub fn get_started(&mut self) {
        if self.screen() == Screen::Welcome {
            self.push(Screen::SchoolSelect);
        }
    }

    pub fn school_query(&self) -> &str {
        &self.school_query
    }

    pub fn set_school_query(&mut self, query: impl Into<String>) {
        self.school_query = query.into();
    }

    /// Catalogue schools matching the current query
    pub fn schools(&self) -> Vec<&'static str> {
        search_schools(UNIVERSITIES, &self.school_query)
    }

    pub fn school(&self) -> Option<&'static str> {
        self.school
    }

    /// Pick a school and continue to login. Names outside the catalogue are ignored.
    pub fn choose_school(&mut self, school: &str) {
        if self.screen() != Screen::SchoolSelect {
            return;
        }
        let Some(known) = UNIVERSITIES.iter().copied().find(|u| *u == school) else {
            debug!(school, "Unknown school, ignoring");
            return;
        };
        self.school = Some(known);
        info!(school = known, "School selected");
        self.push(Screen::Login);
    }

    pub fn net_id_mut(&mut self) -> &mut String {
        &mut self.net_id
    }

    pub fn password_mut(&mut self) -> &mut String {
        &mut self.password
    }

    /// Credentials are not verified; login always proceeds to account setup
    pub fn login(&mut self) {
        if self.screen() != Screen::Login {
            return;
        }
        info!(net_id = %self.net_id, "Logged in");
        self.password.clear();
        self.setup_remaining_ms = SETUP_DURATION_MS;
        self.push(Screen::SetupProfile);
    }

    /// Progress of account setup in `[0, 1]`
    pub fn setup_progress(&self) -> f32 {
        (1.0 - self.setup_remaining_ms / SETUP_DURATION_MS).clamp(0.0, 1.0)
    }

    /// Advance the setup timer. Returns true on the frame that lands on discover.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.screen() != Screen::SetupProfile {
            return false;
        }
        self.setup_remaining_ms -= dt_ms;
        if self.setup_remaining_ms > 0.0 {
            return false;
        }
        self.stack = vec![Screen::Discover];
        info!("Account setup finished");
        true
    }
}
