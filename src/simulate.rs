//! Headless swipe session driven by a fixed frame clock
//!
//! Each scripted action is pressed once the previous transition has fully
//! settled, exactly like tapping the action buttons between cards.

use anyhow::{Result, bail};
use std::fmt;
use tracing::{debug, info};

use crate::catalog::Hangout;
use crate::config::SwipeSettings;
use crate::swipe::{SwipeController, SwipeEvent};
use crate::types::SwipeDirection;

/// Upper bound on frames spent waiting for one transition to settle
const MAX_FRAMES_PER_ACTION: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub hangout_id: String,
    pub title: String,
    pub direction: SwipeDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimulationReport {
    /// Deck index before the first action, then after each completed exit
    pub indices: Vec<usize>,
    pub decisions: Vec<Decision>,
    pub frames: u32,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices: Vec<String> = self.indices.iter().map(|i| i.to_string()).collect();
        writeln!(f, "index: {}", indices.join(" -> "))?;
        for (n, decision) in self.decisions.iter().enumerate() {
            writeln!(
                f,
                "{:>3}. {:<4} #{} {}",
                n + 1,
                decision.direction.label(),
                decision.hangout_id,
                decision.title
            )?;
        }
        write!(f, "frames: {}", self.frames)
    }
}

pub fn run(
    settings: &SwipeSettings,
    cards: Vec<Hangout>,
    actions: &[SwipeDirection],
    frame_ms: f32,
) -> Result<SimulationReport> {
    if !(frame_ms > 0.0) {
        bail!("Frame step must be positive, got {frame_ms}");
    }

    let mut controller = SwipeController::new(settings, cards);
    let mut report = SimulationReport {
        indices: vec![controller.deck().index()],
        ..SimulationReport::default()
    };
    info!(actions = actions.len(), frame_ms, deck = controller.deck().len(), "Starting simulation");

    for &direction in actions {
        let title = controller.current().title.clone();
        controller.press(direction);

        let mut frames = 0;
        loop {
            for event in controller.tick(frame_ms) {
                match event {
                    SwipeEvent::Decided { hangout_id, direction } => {
                        report.decisions.push(Decision { hangout_id, title: title.clone(), direction });
                    }
                    SwipeEvent::Advanced { index } => report.indices.push(index),
                    SwipeEvent::Abandoned { direction } => debug!(?direction, "Exit abandoned"),
                }
            }
            frames += 1;
            if controller.is_settled() {
                break;
            }
            if frames >= MAX_FRAMES_PER_ACTION {
                bail!("Transition for {direction:?} did not settle within {MAX_FRAMES_PER_ACTION} frames");
            }
        }
        report.frames += frames;
    }

    info!(frames = report.frames, decisions = report.decisions.len(), "Simulation finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_hangouts;

    #[test]
    fn test_three_yes_presses_advance_three_cards() {
        let actions = [SwipeDirection::Yes; 3];
        let report = run(&SwipeSettings::default(), default_hangouts(), &actions, 16.0).unwrap();
        assert_eq!(report.indices, vec![0, 1, 2, 3]);
        let ids: Vec<_> = report.decisions.iter().map(|d| d.hangout_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(report.decisions.iter().all(|d| d.direction == SwipeDirection::Yes));
    }

    #[test]
    fn test_full_cycle_wraps_to_start() {
        let actions = [
            SwipeDirection::No,
            SwipeDirection::Save,
            SwipeDirection::Yes,
            SwipeDirection::No,
            SwipeDirection::Save,
            SwipeDirection::Yes,
            SwipeDirection::No,
        ];
        let report = run(&SwipeSettings::default(), default_hangouts(), &actions, 16.0).unwrap();
        assert_eq!(report.indices, vec![0, 1, 2, 3, 4, 5, 6, 0]);
        assert_eq!(report.decisions[1].direction, SwipeDirection::Save);
        assert_eq!(report.decisions[1].title, "Board Game Night");
    }

    #[test]
    fn test_report_display() {
        let report = run(&SwipeSettings::default(), default_hangouts(), &[SwipeDirection::No], 16.0).unwrap();
        let text = report.to_string();
        assert!(text.starts_with("index: 0 -> 1"));
        assert!(text.contains("no   #1 Dayu Bay walk"));
    }

    #[test]
    fn test_rejects_non_positive_frame() {
        assert!(run(&SwipeSettings::default(), default_hangouts(), &[SwipeDirection::Yes], 0.0).is_err());
    }

    #[test]
    fn test_no_actions_reports_start_only() {
        let report = run(&SwipeSettings::default(), default_hangouts(), &[], 16.0).unwrap();
        assert_eq!(report.indices, vec![0]);
        assert_eq!(report.frames, 0);
    }
}
