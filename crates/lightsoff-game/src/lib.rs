//! Game session management for the Lights Off toggle grid.
//!
//! This crate holds everything between the raw grid mechanics of
//! [`lightsoff_core`] and a user interface:
//!
//! - [`history`]: the chronological press history with its undo/redo cursor
//!   and redo ceiling
//! - [`pack`]: curated puzzle packs of pre-solved levels with per-pack
//!   unlock progression
//! - [`progress`]: the durable key/value preference contract read at
//!   startup and written at shutdown
//! - [`session`]: the [`Session`] controller tying grid, history, packs,
//!   and random dealing together, including win detection and move-count
//!   grading
//!
//! # Examples
//!
//! ```
//! use lightsoff_game::{Completion, PackLevel, PressOutcome, PuzzlePack, PuzzlePackSet, Session};
//! use lightsoff_generator::PuzzleGenerator;
//!
//! // One-level pack whose target is exactly the plus shape around cell 12.
//! let packs = PuzzlePackSet::new(vec![PuzzlePack::new(
//!     "Starter",
//!     vec![PackLevel::new(0x0002_3880, 1)],
//! )]);
//! let mut session = Session::new(packs, PuzzleGenerator::from_seed(1));
//! session.select_pack(0);
//!
//! // Pressing the center clears the level in one move: a normal win.
//! let outcome = session.press(12);
//! assert!(matches!(
//!     outcome,
//!     PressOutcome::Won(Completion::Advanced { completed: 0, .. })
//! ));
//! ```

pub mod history;
pub mod pack;
pub mod progress;
pub mod session;

pub use self::{
    history::{MoveHistory, RecordedPress},
    pack::{PackLevel, PuzzlePack, PuzzlePackSet},
    progress::{MemoryStore, Preferences, ProgressStore},
    session::{Completion, PressOutcome, PuzzleSource, Session},
};
