//! Deterministic random number generation for dealing decks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Per-player streams**: Each player's deal comes from its own stream,
//!   so adding a player never changes what the others are dealt
//!
//! ```
//! use stack_duel::cards::Deck;
//! use stack_duel::core::DeckRng;
//!
//! let mut a = DeckRng::new(42);
//! let mut b = DeckRng::new(42);
//! assert_eq!(Deck::deal(&mut a), Deck::deal(&mut b));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use super::entity::PlayerId;

/// Seeded RNG used to shuffle decks.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream for one player.
    ///
    /// The same seed and player always produce the same stream.
    #[must_use]
    pub fn for_player(&self, player: PlayerId) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        player.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
