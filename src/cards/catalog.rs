//! Card catalog: how many of each kind a full deck holds.
//!
//! Every player is dealt the same 25 cards, split into five stacks of five.
//! `Catalog` exposes the per-kind supply and tallies arbitrary card
//! collections against it.

use rustc_hash::FxHashMap;

use super::kind::CardKind;

/// Number of stacks in a deck.
pub const STACK_COUNT: usize = 5;

/// Number of cards in each stack of a fresh deck.
pub const STACK_SIZE: usize = 5;

/// Total number of cards in a fresh deck.
pub const DECK_SIZE: usize = STACK_COUNT * STACK_SIZE;

/// Per-kind supply lookup.
///
/// ## Example
///
/// ```
/// use stack_duel::cards::{Catalog, CardKind, DECK_SIZE};
///
/// assert_eq!(Catalog::supply(CardKind::Dagger), 4);
/// assert_eq!(Catalog::supply(CardKind::Crown), 1);
/// assert_eq!(Catalog::total(), DECK_SIZE);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Catalog;

impl Catalog {
    /// Number of copies of `kind` in a full deck.
    #[must_use]
    pub const fn supply(kind: CardKind) -> usize {
        match kind {
            CardKind::Dagger | CardKind::ShortSword | CardKind::Mace | CardKind::BattleAxe => 4,
            CardKind::Spear | CardKind::LongSword => 2,
            CardKind::Archer | CardKind::Shield => 2,
            CardKind::Crown => 1,
        }
    }

    /// Sum of all supplies.
    #[must_use]
    pub fn total() -> usize {
        CardKind::ALL.iter().map(|&k| Self::supply(k)).sum()
    }

    /// Every card of a full deck, grouped by kind in code order.
    pub fn cards() -> impl Iterator<Item = CardKind> {
        CardKind::ALL
            .into_iter()
            .flat_map(|kind| std::iter::repeat(kind).take(Self::supply(kind)))
    }

    /// Count cards by kind.
    pub fn tally<'a>(cards: impl IntoIterator<Item = &'a CardKind>) -> FxHashMap<CardKind, usize> {
        let mut counts = FxHashMap::default();
        for &card in cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    /// Find the first kind whose count differs from its supply.
    ///
    /// Returns `(kind, expected, found)`, or `None` if the tally matches the
    /// catalog exactly.
    #[must_use]
    pub fn first_mismatch(counts: &FxHashMap<CardKind, usize>) -> Option<(CardKind, usize, usize)> {
        CardKind::ALL.into_iter().find_map(|kind| {
            let expected = Self::supply(kind);
            let found = counts.get(&kind).copied().unwrap_or(0);
            (expected != found).then_some((kind, expected, found))
        })
    }
}
