//! Combat resolution: who wins when one card attacks another.
//!
//! Resolution walks a fixed precedence ladder and stops at the first rule
//! that matches the pair. Three special cards are layered over the ranked
//! hierarchy, so "higher number wins" is only the last rung.
//!
//! | # | Rule            | Matches                         | Outcome        |
//! |---|-----------------|---------------------------------|----------------|
//! | 1 | `ShieldAttacks` | attacker is Shield              | defender wins  |
//! | 2 | `ArcherAttacks` | attacker is Archer              | attacker wins  |
//! | 3 | `ArcherDefends` | defender is Archer              | attacker wins  |
//! | 4 | `ShieldDefends` | defender is Shield              | tie            |
//! | 5 | `CrownMirror`   | Crown attacks Crown             | attacker wins  |
//! | 6 | `CrownAttacks`  | Crown attacks a ranked card     | defender wins  |
//! | 7 | `CrownDefends`  | ranked card attacks Crown       | attacker wins  |
//! | 8 | `RankedClash`   | two ranked cards                | higher rank    |
//!
//! ```
//! use stack_duel::cards::CardKind;
//! use stack_duel::rules::{resolve, Outcome};
//!
//! assert_eq!(resolve(CardKind::Spear, CardKind::Mace), Outcome::AttackerWins);
//! assert_eq!(resolve(CardKind::Crown, CardKind::Dagger), Outcome::DefenderWins);
//! assert_eq!(resolve(CardKind::Shield, CardKind::Crown), Outcome::DefenderWins);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{CardClass, CardKind};
use crate::core::{DuelError, PlayerId};

/// Result of a single attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    AttackerWins,
    DefenderWins,
    Tie,
}

impl Outcome {
    /// Map the outcome onto the two combatants.
    ///
    /// Returns `None` for a tie.
    #[must_use]
    pub fn winner(self, attacker: PlayerId, defender: PlayerId) -> Option<PlayerId> {
        match self {
            Outcome::AttackerWins => Some(attacker),
            Outcome::DefenderWins => Some(defender),
            Outcome::Tie => None,
        }
    }
}

/// The rung of the precedence ladder that decided an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The Shield cannot attack.
    ShieldAttacks,
    /// The Archer wins every attack it makes.
    ArcherAttacks,
    /// Any other card beats a defending Archer.
    ArcherDefends,
    /// A defending Shield stops any other attack.
    ShieldDefends,
    /// Crown against Crown goes to the attacker.
    CrownMirror,
    /// A ranked card always beats an attacking Crown.
    CrownAttacks,
    /// A ranked card always beats a defending Crown.
    CrownDefends,
    /// Two ranked cards: compare ranks.
    RankedClash { attacking: u8, defending: u8 },
}

impl Rule {
    /// Pick the first rule that applies to the pair.
    ///
    /// The match arms are the ladder, top to bottom.
    #[must_use]
    pub fn select(attacking: CardKind, defending: CardKind) -> Self {
        use CardClass::{Apex, Ranked, WildcardAttacker, WildcardDefender};

        match (attacking.class(), defending.class()) {
            (WildcardDefender, _) => Rule::ShieldAttacks,
            (WildcardAttacker, _) => Rule::ArcherAttacks,
            (_, WildcardAttacker) => Rule::ArcherDefends,
            (_, WildcardDefender) => Rule::ShieldDefends,
            (Apex, Apex) => Rule::CrownMirror,
            (Apex, Ranked(_)) => Rule::CrownAttacks,
            (Ranked(_), Apex) => Rule::CrownDefends,
            (Ranked(attacking), Ranked(defending)) => Rule::RankedClash { attacking, defending },
        }
    }

    /// The outcome this rule dictates.
    #[must_use]
    pub fn outcome(self) -> Outcome {
        match self {
            Rule::ShieldAttacks | Rule::CrownAttacks => Outcome::DefenderWins,
            Rule::ArcherAttacks | Rule::ArcherDefends | Rule::CrownMirror | Rule::CrownDefends => {
                Outcome::AttackerWins
            }
            Rule::ShieldDefends => Outcome::Tie,
            Rule::RankedClash { attacking, defending } => match attacking.cmp(&defending) {
                std::cmp::Ordering::Greater => Outcome::AttackerWins,
                std::cmp::Ordering::Less => Outcome::DefenderWins,
                std::cmp::Ordering::Equal => Outcome::Tie,
            },
        }
    }
}

/// A resolved attack together with the rule that decided it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ruling {
    pub rule: Rule,
    pub outcome: Outcome,
}

/// Resolve an attack and report which rule decided it.
#[must_use]
pub fn ruling(attacking: CardKind, defending: CardKind) -> Ruling {
    let rule = Rule::select(attacking, defending);
    Ruling {
        rule,
        outcome: rule.outcome(),
    }
}

/// Resolve an attack.
#[must_use]
pub fn resolve(attacking: CardKind, defending: CardKind) -> Outcome {
    ruling(attacking, defending).outcome
}

/// Resolve an attack given raw card codes.
///
/// Fails with `IllegalMove` if either code is outside the catalog.
pub fn resolve_codes(attacking: u8, defending: u8) -> Result<Outcome, DuelError> {
    let attacking = CardKind::from_code(attacking)?;
    let defending = CardKind::from_code(defending)?;
    Ok(resolve(attacking, defending))
}
