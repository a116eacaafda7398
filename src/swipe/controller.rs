//! Card swipe controller
//!
//! Single owner of everything the discovery card needs: the deck pointer, the
//! gesture session, the animated position, the exit animator and the
//! vertical-mode flag that picks the tint ramp. All input and frame ticks are
//! serialised through `&mut self`.

use tracing::{debug, info};

use super::deck::CardDeck;
use super::exit::{ExitAnimator, ExitOutcome};
use super::feedback::{ColorFeedback, TintMode};
use super::gesture::{GestureTracker, Release};
use super::position::PositionModel;
use crate::catalog::Hangout;
use crate::color::Rgba;
use crate::config::SwipeSettings;
use crate::types::{AxisLock, Offset, SwipeDirection};

/// Emitted from [`SwipeController::tick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeEvent {
    /// A card left the screen for good
    Decided { hangout_id: String, direction: SwipeDirection },
    /// The deck pointer moved to `index`
    Advanced { index: usize },
    /// An exit stopped before landing; the card is springing back
    Abandoned { direction: SwipeDirection },
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub translation: Offset,
    pub rotation_deg: f32,
    pub tint: Rgba,
    /// Top card must not be drawn (post-exit hold)
    pub hidden: bool,
    pub card_index: usize,
    /// Card to preload invisibly while `hidden`
    pub preload_index: Option<usize>,
    pub flipped: bool,
}

#[derive(Debug)]
pub struct SwipeController {
    deck: CardDeck,
    tracker: GestureTracker,
    position: PositionModel,
    feedback: ColorFeedback,
    exit: ExitAnimator,
    vertical_mode: bool,
    flipped: bool,
}

impl SwipeController {
    pub fn new(settings: &SwipeSettings, cards: Vec<Hangout>) -> Self {
        Self {
            deck: CardDeck::new(cards),
            tracker: GestureTracker::new(settings.direction_lock_threshold, settings.swipe_threshold),
            position: PositionModel::new(settings.screen_width, settings.reset_spring()),
            feedback: ColorFeedback::new(
                settings.swipe_threshold,
                settings.direction_lock_threshold,
                settings.tint_colors(),
            ),
            exit: ExitAnimator::new(settings.exit_timing()),
            vertical_mode: false,
            flipped: false,
        }
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn current(&self) -> &Hangout {
        self.deck.current()
    }

    pub fn lock(&self) -> AxisLock {
        self.tracker.lock()
    }

    pub fn offset(&self) -> Offset {
        self.position.offset()
    }

    pub fn exit_in_flight(&self) -> bool {
        self.exit.in_flight()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    /// Nothing is moving and no touch is held
    pub fn is_settled(&self) -> bool {
        !self.exit.in_flight() && !self.position.is_animating() && !self.tracker.is_active()
    }

    /// Touch began on the card. Rejected while an exit is in flight.
    pub fn touch_down(&mut self) -> bool {
        if self.exit.in_flight() {
            debug!("Touch ignored, exit animation in flight");
            return false;
        }
        self.tracker.begin();
        self.position.set(Offset::ZERO);
        self.vertical_mode = false;
        true
    }

    /// Drag sample relative to the touch-down origin
    pub fn touch_move(&mut self, dx: f32, dy: f32) {
        if self.exit.in_flight() {
            return;
        }
        if let Some(offset) = self.tracker.track(dx, dy) {
            self.position.set(offset);
            match self.tracker.lock() {
                AxisLock::Vertical => self.vertical_mode = true,
                AxisLock::Horizontal => self.vertical_mode = false,
                AxisLock::None => {}
            }
        }
    }

    /// Touch lifted with its final origin-relative delta
    pub fn touch_release(&mut self, dx: f32, dy: f32) {
        if self.exit.in_flight() || !self.tracker.is_active() {
            self.tracker.cancel();
            return;
        }
        self.touch_move(dx, dy);
        match self.tracker.release(dx, dy) {
            Release::Exit(direction) => {
                self.flipped = false;
                self.vertical_mode = direction.is_vertical();
                self.exit.start(&mut self.position, direction);
            }
            Release::Reset => {
                self.position.spring_to_origin();
            }
        }
    }

    /// "No" / "Yes" / "Save" buttons: a synthesised drag past the threshold
    pub fn press(&mut self, direction: SwipeDirection) -> bool {
        if self.exit.in_flight() {
            debug!(?direction, "Button ignored, exit animation in flight");
            return false;
        }
        self.tracker.cancel();
        self.vertical_mode = direction.is_vertical();
        self.flipped = false;
        info!(?direction, card = %self.deck.current().id, "Action button pressed");
        self.exit.start_with_nudge(&mut self.position, direction)
    }

    /// Card tap toggles the flipped side. Ignored during an exit.
    pub fn tap_card(&mut self) {
        if self.exit.in_flight() {
            return;
        }
        self.flipped = !self.flipped;
        debug!(flipped = self.flipped, "Card flipped");
    }

    /// Stop whatever drives the card; an in-flight exit is abandoned on the
    /// next tick and springs back.
    pub fn interrupt(&mut self) {
        if self.exit.in_flight() && !self.exit.is_holding() {
            info!("Interrupting exit animation");
            self.position.stop();
        }
    }

    /// Advance animations by one frame of `dt_ms`
    pub fn tick(&mut self, dt_ms: f32) -> Vec<SwipeEvent> {
        let mut events = Vec::new();

        if let Some(outcome) = self.exit.tick_hold(&mut self.position, dt_ms) {
            self.apply_outcome(outcome, &mut events);
        }
        for completion in self.position.tick(dt_ms) {
            if let Some(outcome) = self.exit.on_completion(&mut self.position, completion) {
                self.apply_outcome(outcome, &mut events);
            }
        }

        events
    }

    pub fn frame(&self) -> RenderFrame {
        let hidden = self.exit.is_holding();
        let translation = self.position.offset();
        RenderFrame {
            translation,
            rotation_deg: self.position.rotation_deg(),
            tint: self.feedback.tint(translation, TintMode::from_vertical(self.vertical_mode)),
            hidden,
            card_index: self.deck.index(),
            preload_index: hidden.then(|| self.deck.next_index()),
            flipped: self.flipped,
        }
    }

    fn apply_outcome(&mut self, outcome: ExitOutcome, events: &mut Vec<SwipeEvent>) {
        match outcome {
            ExitOutcome::Completed(direction) => {
                let hangout_id = self.deck.current().id.clone();
                let index = self.deck.advance();
                self.vertical_mode = false;
                info!(hangout = %hangout_id, decision = direction.label(), next_index = index, "Card decided");
                events.push(SwipeEvent::Decided { hangout_id, direction });
                events.push(SwipeEvent::Advanced { index });
            }
            ExitOutcome::Abandoned(direction) => {
                events.push(SwipeEvent::Abandoned { direction });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    const FRAME_MS: f32 = 16.0;

    fn controller() -> SwipeController {
        SwipeController::new(&SwipeSettings::default(), catalog::default_hangouts())
    }

    /// Tick until nothing moves, returning every event seen
    fn settle(controller: &mut SwipeController) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        for _ in 0..2000 {
            events.extend(controller.tick(FRAME_MS));
            if controller.is_settled() {
                break;
            }
        }
        assert!(controller.is_settled(), "controller never settled");
        events
    }

    fn advanced(events: &[SwipeEvent]) -> Vec<usize> {
        events
            .iter()
            .filter_map(|event| match event {
                SwipeEvent::Advanced { index } => Some(*index),
                _ => None,
            })
            .collect()
    }

    fn drag(controller: &mut SwipeController, samples: &[(f32, f32)]) {
        assert!(controller.touch_down());
        for &(dx, dy) in samples {
            controller.touch_move(dx, dy);
        }
    }

    #[test]
    fn test_free_drag_follows_finger() {
        let mut controller = controller();
        drag(&mut controller, &[(5.0, 5.0), (-12.0, 19.0)]);
        assert_eq!(controller.offset(), Offset::new(-12.0, 19.0));
        assert_eq!(controller.lock(), AxisLock::None);
        assert!(!controller.vertical_mode);
    }

    #[test]
    fn test_horizontal_lock_holds_y_at_zero() {
        let mut controller = controller();
        drag(&mut controller, &[(25.0, 3.0), (40.0, 60.0), (45.0, 200.0)]);
        assert_eq!(controller.offset(), Offset::new(45.0, 0.0));
        assert!(!controller.vertical_mode);
    }

    #[test]
    fn test_vertical_lock_sets_vertical_mode_and_orange_tint() {
        let mut controller = controller();
        drag(&mut controller, &[(0.0, 30.0), (0.0, 80.0)]);
        assert!(controller.vertical_mode);
        assert_eq!(controller.frame().tint, Rgba::ORANGE);
    }

    #[test]
    fn test_release_past_threshold_exits_and_advances() {
        let mut controller = controller();
        drag(&mut controller, &[(30.0, 0.0)]);
        controller.touch_release(85.0, 0.0);
        assert!(controller.exit_in_flight());

        let events = settle(&mut controller);
        assert_eq!(
            events,
            vec![
                SwipeEvent::Decided { hangout_id: "1".to_string(), direction: SwipeDirection::Yes },
                SwipeEvent::Advanced { index: 1 },
            ]
        );
        assert_eq!(controller.offset(), Offset::ZERO);
    }

    #[test]
    fn test_release_short_of_threshold_springs_back() {
        let mut controller = controller();
        drag(&mut controller, &[(30.0, 0.0), (79.0, 0.0)]);
        controller.touch_release(79.0, 0.0);
        assert!(!controller.exit_in_flight());

        let events = settle(&mut controller);
        assert!(events.is_empty());
        assert_eq!(controller.offset(), Offset::ZERO);
        assert_eq!(controller.deck().index(), 0);
    }

    #[test]
    fn test_heavy_friction_config_still_springs_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "swipe": { "spring_friction": 1000 } }"#).unwrap();
        let config = crate::config::Config::load_from(&path).unwrap();

        let mut controller = SwipeController::new(&config.swipe, catalog::default_hangouts());
        drag(&mut controller, &[(30.0, 0.0)]);
        controller.touch_release(50.0, 0.0);

        assert!(settle(&mut controller).is_empty());
        assert_eq!(controller.offset(), Offset::ZERO);
    }

    #[test]
    fn test_upward_release_is_inert() {
        let mut controller = controller();
        drag(&mut controller, &[(0.0, -30.0), (0.0, -150.0)]);
        assert_eq!(controller.offset(), Offset::ZERO);
        controller.touch_release(0.0, -150.0);
        assert!(!controller.exit_in_flight());
        assert!(settle(&mut controller).is_empty());
        assert_eq!(controller.deck().index(), 0);
    }

    #[test]
    fn test_save_gesture_emits_save_decision() {
        let mut controller = controller();
        drag(&mut controller, &[(0.0, 40.0)]);
        controller.touch_release(0.0, 120.0);

        let events = settle(&mut controller);
        assert!(events.contains(&SwipeEvent::Decided { hangout_id: "1".to_string(), direction: SwipeDirection::Save }));
    }

    #[test]
    fn test_yes_three_times_walks_index() {
        let mut controller = controller();
        let mut seen = vec![controller.deck().index()];
        for _ in 0..3 {
            assert!(controller.press(SwipeDirection::Yes));
            seen.extend(advanced(&settle(&mut controller)));
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_n_exits_return_to_start() {
        let mut controller = controller();
        let n = controller.deck().len();
        for i in 0..n {
            let direction = [SwipeDirection::No, SwipeDirection::Yes, SwipeDirection::Save][i % 3];
            controller.press(direction);
            settle(&mut controller);
        }
        assert_eq!(controller.deck().index(), 0);
    }

    #[test]
    fn test_second_trigger_while_in_flight_is_noop() {
        let mut controller = controller();
        assert!(controller.press(SwipeDirection::Yes));
        controller.tick(FRAME_MS);
        assert!(!controller.press(SwipeDirection::No));
        assert!(!controller.press(SwipeDirection::Yes));

        // Gesture release during the exit is ignored too
        assert!(!controller.touch_down());
        controller.touch_release(200.0, 0.0);

        let events = settle(&mut controller);
        assert_eq!(advanced(&events), vec![1]);
        assert_eq!(controller.deck().index(), 1);
    }

    #[test]
    fn test_touch_down_rejected_during_hold() {
        let mut controller = controller();
        controller.press(SwipeDirection::No);
        for _ in 0..200 {
            controller.tick(FRAME_MS);
            if controller.frame().hidden {
                break;
            }
        }
        let frame = controller.frame();
        assert!(frame.hidden);
        assert_eq!(frame.preload_index, Some(1));
        assert!(!controller.touch_down());
    }

    #[test]
    fn test_interrupted_exit_springs_back_without_advancing() {
        let mut controller = controller();
        drag(&mut controller, &[(30.0, 0.0)]);
        controller.touch_release(100.0, 0.0);
        for _ in 0..5 {
            controller.tick(FRAME_MS);
        }
        controller.interrupt();

        let events = settle(&mut controller);
        assert_eq!(events, vec![SwipeEvent::Abandoned { direction: SwipeDirection::Yes }]);
        assert_eq!(controller.deck().index(), 0);
        assert_eq!(controller.offset(), Offset::ZERO);

        // A fresh exit still works afterwards
        controller.press(SwipeDirection::Yes);
        assert_eq!(advanced(&settle(&mut controller)), vec![1]);
    }

    #[test]
    fn test_button_sets_tint_mode() {
        let mut controller = controller();
        controller.press(SwipeDirection::Save);
        assert!(controller.vertical_mode);
        // Mid-exit the card is well below the save threshold
        for _ in 0..15 {
            controller.tick(FRAME_MS);
        }
        assert_eq!(controller.frame().tint, Rgba::ORANGE);
        assert_eq!(controller.offset().x, 0.0);
    }

    #[test]
    fn test_tap_flips_and_exit_clears_flip() {
        let mut controller = controller();
        controller.tap_card();
        assert!(controller.frame().flipped);

        controller.press(SwipeDirection::No);
        assert!(!controller.frame().flipped);
        controller.tap_card();
        assert!(!controller.frame().flipped, "tap during exit is ignored");
    }

    #[test]
    fn test_rotation_follows_drag() {
        let mut controller = controller();
        drag(&mut controller, &[(25.0, 0.0), (-195.0, 0.0)]);
        let frame = controller.frame();
        assert!((frame.rotation_deg + 10.0).abs() < 1e-4);
        assert_eq!(frame.tint, Rgba::RED);
    }
}
