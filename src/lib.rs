//! Core of the fitness coach: plan text parsing, the program log with its
//! streak bookkeeping, prompt construction and the persistence boundary.

pub mod error;
pub mod models;
pub mod parser;
pub mod persistence;
pub mod program;
pub mod prompt;
pub mod session;

pub use error::{CoachError, Result};
pub use parser::{PlanFormat, PlanParser};
pub use persistence::{KeyValueStore, MemoryStore, SavedState, StateStore};
pub use program::{Program, ToggleOutcome};
pub use session::{Coach, PlanGenerator};
