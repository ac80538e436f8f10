//! Game session state machine
//!
//! `GameSession` is the single owner of a round's state. `ObservedSession` wraps one
//! and broadcasts what happened to renderers and audio.

mod entry;
mod game;
mod observed;

pub use entry::EntryBuffer;
pub use game::{AttemptRecord, GameSession, SessionStatus};
pub use observed::{ObservedSession, SessionEvent, SessionObserver};
