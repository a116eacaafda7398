//! Static data sources: hangouts, filter vocabularies, universities, card palettes

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::color::Rgba;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poster {
    pub username: String,
}

/// One hangout card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hangout {
    pub id: String,
    pub title: String,
    pub description: String,
    pub poster: Poster,
    pub location: String,
    pub date: String,
    pub time: String,
}

/// Header/body palette for one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColors {
    pub header: Rgba,
    pub body: Rgba,
    pub text: Rgba,
    pub body_text: Rgba,
}

pub const TAGS: &[&str] = &["Dinner", "Walk", "Study sesh", "Cinema", "Sports", "Game Night"];

pub const LOCATIONS: &[&str] = &["On Campus", "Kunshan", "Shanghai", "Suzhou", "Somewhere Else"];

pub const UNIVERSITIES: &[&str] = &[
    "ALMA COLLEGE",
    "AMHERST COLLEGE",
    "BOSTON UNIVERSITY",
    "CARNEGIE MELLON UNIVERSITY",
    "COLUMBIA UNIVERSITY",
    "CORNELL UNIVERSITY",
    "DARTMOUTH COLLEGE",
    "DEPAUW UNIVERSITY",
    "DUKE KUNSHAN UNIVERSITY",
    "DUKE UNIVERSITY",
    "EMERSON COLLEGE",
    "GRINNELL COLLEGE",
    "HAMILTON COLLEGE",
    "HAMPSHIRE COLLEGE",
    "IE UNIVERSITY",
    "ILLINOIS INSTITUTE OF TECHNOLOGY",
    "JOHNS HOPKINS UNIVERSITY",
    "NEW YORK UNIVERSITY (SHANGHAI)",
    "NEW YORK UNIVERSITY",
    "POMONA COLLEGE",
    "RHODES COLLEGE",
    "RICE UNIVERSITY",
    "STANFORD UNIVERSITY",
    "TRINITY COLLEGE",
];

const BODY_TEXT: Rgba = Rgba::rgb(0x1F, 0x29, 0x37);

pub const CARD_COLORS: &[CardColors] = &[
    CardColors { header: Rgba::rgb(0x7C, 0x3A, 0xED), body: Rgba::rgb(0xF5, 0xF3, 0xFF), text: Rgba::WHITE, body_text: BODY_TEXT },
    CardColors { header: Rgba::rgb(0x0E, 0xA5, 0xE9), body: Rgba::rgb(0xF0, 0xF9, 0xFF), text: Rgba::WHITE, body_text: BODY_TEXT },
    CardColors { header: Rgba::rgb(0x05, 0x96, 0x69), body: Rgba::rgb(0xEC, 0xFD, 0xF5), text: Rgba::WHITE, body_text: BODY_TEXT },
    CardColors { header: Rgba::rgb(0xDC, 0x26, 0x26), body: Rgba::rgb(0xFE, 0xF2, 0xF2), text: Rgba::WHITE, body_text: BODY_TEXT },
    CardColors { header: Rgba::rgb(0xF5, 0x9E, 0x0B), body: Rgba::rgb(0xFF, 0xFB, 0xEB), text: Rgba::WHITE, body_text: BODY_TEXT },
];

/// Palette for the card shown at `index`
pub fn card_colors(index: usize) -> CardColors {
    CARD_COLORS[index % CARD_COLORS.len()]
}

fn hangout(
    id: &str,
    title: &str,
    description: &str,
    username: &str,
    location: &str,
    date: &str,
    time: &str,
) -> Hangout {
    Hangout {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        poster: Poster { username: username.to_string() },
        location: location.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    }
}

/// Built-in discovery deck
pub fn default_hangouts() -> Vec<Hangout> {
    vec![
        hangout(
            "1",
            "Dayu Bay walk",
            "Hey guys! I'm going to Dayu Bay for a walk. MAYBE go to Mammamia, if I have enough money lol. Join me?",
            "houda_douda",
            "Dayu Bay, right in front of the school",
            "2024-05-25",
            "15:00",
        ),
        hangout(
            "2",
            "Board Game Night",
            "We're hosting a game night in A lobby. Mainly play Catan. Pls read the rules before coming thx!",
            "xia__xia",
            "A Lobby",
            "2024-05-26",
            "19:00",
        ),
        hangout(
            "3",
            "Morning jog guys!!! Join :D",
            "Hey! Im going for a jog early in the morning before classes. Around campus. Comeee",
            "fitness_sara",
            "Around campus (or Dayu Bay)",
            "2024-05-26",
            "06:30",
        ),
        hangout(
            "4",
            "New York Trip",
            "Hi! I'm looking for people who'd be interested in going to New York for the upcoming break. Bonus: my Egyptian friend will be our tour guide!!!!",
            "knizo_personellement",
            "New York",
            "2024-05-26 to 2024-06-03",
            "TBD",
        ),
        hangout(
            "5",
            "Piano learning",
            "Hello, my friend and I are organizing a piano learning class for beginners. Join if interested, it's free!",
            "jack_macron",
            "CCTE Music Rooms",
            "2024-05-26",
            "15:00",
        ),
        hangout(
            "6",
            "Football table at CCTW lunch time",
            "Hi peeps! Organizing a football table at CCTE for lunch time. Coach will be there. Join if interested!",
            "lunaactions",
            "CCTW 2nd floor, right outside of Zaatar",
            "2024-05-26",
            "12:00",
        ),
        hangout(
            "7",
            "Clubbing after finals cuz we deserve it",
            "Early morning jog in Central Park. Beginners welcome! We will take it easy and enjoy the sunrise.",
            "fitness_sara",
            "Shanghai - Lola Club - 46 Yueyang Road / 岳阳路46",
            "2024-05-26",
            "20:00",
        ),
    ]
}

/// Load a deck from a JSON array of hangouts
pub fn load_hangouts(path: &Path) -> Result<Vec<Hangout>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read hangouts from {:?}", path))?;
    let hangouts: Vec<Hangout> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse hangouts JSON from {:?}", path))?;
    if hangouts.is_empty() {
        anyhow::bail!("Hangouts file {:?} contains no hangouts", path);
    }
    info!(count = hangouts.len(), path = %path.display(), "Loaded hangout deck");
    Ok(hangouts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_has_unique_ids() {
        let deck = default_hangouts();
        assert_eq!(deck.len(), 7);
        let mut ids: Vec<_> = deck.iter().map(|h| h.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_card_colors_cycle() {
        assert_eq!(card_colors(0), card_colors(CARD_COLORS.len()));
        assert_ne!(card_colors(0), card_colors(1));
    }

    #[test]
    fn test_load_hangouts_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let deck = vec![default_hangouts().remove(1)];
        fs::write(&path, serde_json::to_string_pretty(&deck).unwrap()).unwrap();

        let loaded = load_hangouts(&path).unwrap();
        assert_eq!(loaded, deck);
    }

    #[test]
    fn test_load_hangouts_rejects_empty_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.json");
        fs::write(&empty, "[]").unwrap();

        assert!(load_hangouts(&empty).is_err());
        assert!(load_hangouts(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_unknown_poster_fields_ignored() {
        let json = r#"[{"id":"9","title":"t","description":"d","poster":{"username":"u","profilePic":"a.png"},"location":"l","date":"x","time":"y"}]"#;
        let parsed: Vec<Hangout> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].poster.username, "u");
    }
}
