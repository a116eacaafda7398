//! Cyclic card deck with the current card pointer

use tracing::debug;

use crate::catalog::{self, Hangout};

/// Fixed, cyclic sequence of hangout cards with a current pointer
#[derive(Debug, Clone)]
pub struct CardDeck {
    cards: Vec<Hangout>,
    index: usize,
}

impl CardDeck {
    /// Falls back to the built-in deck when `cards` is empty.
    pub fn new(cards: Vec<Hangout>) -> Self {
        let cards = if cards.is_empty() { catalog::default_hangouts() } else { cards };
        Self { cards, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Hangout {
        &self.cards[self.index]
    }

    /// Index the next advance will land on
    pub fn next_index(&self) -> usize {
        (self.index + 1) % self.cards.len()
    }

    pub fn cards(&self) -> &[Hangout] {
        &self.cards
    }

    /// Step forward by one, wrapping at the end
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.cards.len();
        debug!(index = self.index, total = self.cards.len(), "Card deck advanced");
        self.index
    }
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new(catalog::default_hangouts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut deck = CardDeck::default();
        let n = deck.len();
        for expected in 1..n {
            assert_eq!(deck.advance(), expected);
        }
        assert_eq!(deck.advance(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut deck = CardDeck::default();
        deck.advance();
        deck.advance();
        let start = deck.index();
        for _ in 0..deck.len() {
            deck.advance();
        }
        assert_eq!(deck.index(), start);
    }

    #[test]
    fn test_next_index_wraps_from_last() {
        let mut deck = CardDeck::default();
        assert_eq!(deck.next_index(), 1);
        for _ in 0..deck.len() - 1 {
            deck.advance();
        }
        assert_eq!(deck.next_index(), 0);
    }

    #[test]
    fn test_empty_input_uses_builtin_deck() {
        let deck = CardDeck::new(Vec::new());
        assert_eq!(deck.len(), catalog::default_hangouts().len());
        assert_eq!(deck.current().title, "Dayu Bay walk");
    }
}
