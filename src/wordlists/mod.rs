//! Word lists for picking targets
//!
//! The session never chooses its own target; these lists feed the binary's
//! front ends and the spoken-word drill.

pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Built-in five-letter targets
pub const TARGETS: &[&str] = &[
    "about", "above", "actor", "adapt", "after", "again", "alarm", "album", "alert", "alien",
    "align", "alive", "angel", "apple", "arena", "audio", "beach", "blaze", "block", "brain",
    "brave", "bread", "brick", "cabin", "candy", "chair", "charm", "chess", "cloud", "coral",
    "crane", "crown", "dance", "dream", "eagle", "earth", "ember", "fable", "flame", "frost",
    "ghost", "giant", "glass", "globe", "grape", "heart", "honey", "house", "image", "jelly",
    "knife", "laser", "lemon", "light", "magic", "maple", "metal", "mango", "music", "night",
    "ocean", "orbit", "piano", "pilot", "plant", "prism", "quiet", "radio", "raven", "river",
    "robot", "shade", "shine", "slate", "smile", "solar", "sound", "space", "spark", "speed",
    "stone", "storm", "sugar", "table", "tiger", "torch", "train", "ultra", "vapor", "vivid",
    "voice", "water", "whale", "world", "yacht", "zebra",
];

/// Number of words in [`TARGETS`]
pub const TARGETS_COUNT: usize = TARGETS.len();

/// Pick a random target
///
/// Returns `None` for an empty slice.
pub fn random_target<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
