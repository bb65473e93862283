//! Load, mutate, and save glue between the game model and storage.
//!
//! ## Key Types
//!
//! - `GameManager`: typed stores for players and games over one shared
//!   driver, with the request-level operations (register, create, move,
//!   delete) that check credentials before touching state.

pub mod game_manager;

pub use game_manager::GameManager;
