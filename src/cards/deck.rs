//! Decks: five face-down stacks of cards.
//!
//! Index 0 of a stack is its top card, the only one that can be played or
//! attacked. A deck is valid when it has exactly `STACK_COUNT` stacks of
//! `STACK_SIZE` cards and holds exactly the catalog's supply of each kind.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::catalog::{Catalog, STACK_COUNT, STACK_SIZE};
use super::kind::CardKind;
use crate::core::{DeckRng, DuelError};

/// One stack of cards. Index 0 is the top.
pub type Stack = SmallVec<[CardKind; STACK_SIZE]>;

/// A player's stacks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    stacks: Vec<Stack>,
}

impl Deck {
    /// Create an empty deck (no stacks).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from explicit stacks, top card first.
    ///
    /// No validation happens here; call `validate` when the deck must be a
    /// full, legal deal.
    #[must_use]
    pub fn from_stacks<I, S>(stacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = CardKind>,
    {
        Self {
            stacks: stacks.into_iter().map(|s| s.into_iter().collect()).collect(),
        }
    }

    /// The catalog laid out in code order, five cards per stack.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_cards(Catalog::cards().collect())
    }

    /// Shuffle the catalog and split it into stacks.
    #[must_use]
    pub fn deal(rng: &mut DeckRng) -> Self {
        let mut cards: Vec<CardKind> = Catalog::cards().collect();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    fn from_cards(cards: Vec<CardKind>) -> Self {
        Self {
            stacks: cards.chunks(STACK_SIZE).map(Stack::from_slice).collect(),
        }
    }

    /// Get all stacks.
    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Get a mutable reference to a stack.
    pub fn stack_mut(&mut self, index: usize) -> Option<&mut Stack> {
        self.stacks.get_mut(index)
    }

    /// Number of stacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Read the top card of a stack without removing it.
    pub fn top(&self, index: usize) -> Result<CardKind, DuelError> {
        let stack = self.stacks.get(index).ok_or(DuelError::InvalidStack {
            index,
            stacks: self.stacks.len(),
        })?;

        stack.first().copied().ok_or(DuelError::EmptyStack { index })
    }

    /// Check shape first, then per-kind supply.
    pub fn validate(&self) -> Result<(), DuelError> {
        if self.stacks.len() != STACK_COUNT || self.stacks.iter().any(|s| s.len() != STACK_SIZE) {
            return Err(DuelError::InvalidDeckCounts);
        }

        let counts = Catalog::tally(self.stacks.iter().flatten());
        match Catalog::first_mismatch(&counts) {
            Some((kind, expected, found)) => Err(DuelError::InvalidCardCount {
                kind,
                expected,
                found,
            }),
            None => Ok(()),
        }
    }
}
