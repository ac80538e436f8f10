//! VRdle
//!
//! The word-guess evaluation and grid-state engine behind the VRdle word game,
//! plus terminal front ends for playing it.
//!
//! # Quick Start
//!
//! ```rust
//! use vrdle::core::{Word, evaluate};
//! use vrdle::session::{GameSession, SessionStatus};
//!
//! // Evaluate a single guess
//! let guess = Word::new("erase").unwrap();
//! let target = Word::new("speed").unwrap();
//! println!("{}", evaluate(&guess, &target).unwrap().to_emoji());
//!
//! // Play a round
//! let mut session = GameSession::new("world", 6).unwrap();
//! session.submit_guess("worms").unwrap();
//! session.submit_guess("world").unwrap();
//! assert_eq!(session.status(), SessionStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round state machine and observers
pub mod session;

// Round shape
pub mod config;

// Collaborator adapters
pub mod audio;
pub mod drill;
pub mod themes;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
