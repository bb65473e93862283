//! Card kinds.
//!
//! The duel uses nine fixed kinds. Six are ranked weapons with a strict
//! order; three are special cards that bend the combat rules:
//!
//! - `Archer`: the attack wildcard. Wins every attack it makes.
//! - `Shield`: the defence wildcard. Loses every attack it makes, ties most
//!   attacks made against it.
//! - `Crown`: the apex card. Beaten by every ranked card in either role.
//!
//! Each kind has a stable integer code (1..=9) which is also its persisted
//! encoding. Decoding an unknown code fails with `DuelError::IllegalMove`.

use serde::{Deserialize, Serialize};

use crate::core::DuelError;

/// One of the nine card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum CardKind {
    Dagger = 1,
    ShortSword = 2,
    Mace = 3,
    BattleAxe = 4,
    Spear = 5,
    LongSword = 6,
    Archer = 7,
    Shield = 8,
    Crown = 9,
}

/// Combat class of a card kind.
///
/// The combat resolver only ever looks at classes, never at kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardClass {
    /// A ranked weapon. Higher rank beats lower rank.
    Ranked(u8),
    /// The attack wildcard (`Archer`).
    WildcardAttacker,
    /// The defence wildcard (`Shield`).
    WildcardDefender,
    /// The apex card (`Crown`).
    Apex,
}

impl CardKind {
    /// Every kind, in code order.
    pub const ALL: [CardKind; 9] = [
        CardKind::Dagger,
        CardKind::ShortSword,
        CardKind::Mace,
        CardKind::BattleAxe,
        CardKind::Spear,
        CardKind::LongSword,
        CardKind::Archer,
        CardKind::Shield,
        CardKind::Crown,
    ];

    /// Get the integer code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode an integer code.
    pub fn from_code(code: u8) -> Result<Self, DuelError> {
        Self::ALL
            .get(usize::from(code).wrapping_sub(1))
            .copied()
            .ok_or(DuelError::IllegalMove { code })
    }

    /// Get the combat class.
    #[must_use]
    pub const fn class(self) -> CardClass {
        match self {
            CardKind::Archer => CardClass::WildcardAttacker,
            CardKind::Shield => CardClass::WildcardDefender,
            CardKind::Crown => CardClass::Apex,
            ranked => CardClass::Ranked(ranked as u8),
        }
    }

    /// Get the rank for ranked kinds, `None` for special cards.
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self.class() {
            CardClass::Ranked(rank) => Some(rank),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_ranked(self) -> bool {
        self.rank().is_some()
    }
}

impl TryFrom<u8> for CardKind {
    type Error = DuelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<CardKind> for u8 {
    fn from(kind: CardKind) -> Self {
        kind.code()
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Dagger => "Dagger",
            CardKind::ShortSword => "Short Sword",
            CardKind::Mace => "Mace",
            CardKind::BattleAxe => "Battle Axe",
            CardKind::Spear => "Spear",
            CardKind::LongSword => "Long Sword",
            CardKind::Archer => "Archer",
            CardKind::Shield => "Shield",
            CardKind::Crown => "Crown",
        };
        f.write_str(name)
    }
}
