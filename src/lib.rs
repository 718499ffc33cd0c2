//! Spellchecking for chat bots.
//!
//! Words are matched against a dictionary by optimal string alignment distance (Levenshtein with
//! adjacent transpositions), and every dictionary word at the smallest distance is suggested.
//! A small cache of the last message per (nick, channel) lets a command check what someone
//! just said.
//!
//! # Example
//!
//! ```
//! use chatspell::{Assistant, Config, Markup};
//!
//! let assistant = Assistant::new(Config {
//!     dictionary: "data/words.txt".into(),
//!     markup: Markup::Plain,
//!     ..Config::default()
//! });
//!
//! assert_eq!(assistant.handle_message("alice", "#c", "the quikc brown fox"), None);
//! assert_eq!(
//!     assistant.handle_message("bob", "#c", ";sp alice").as_deref(),
//!     Some("<bob> the *quikc* (quick) brown fox"),
//! );
//! ```

#![warn(clippy::all, clippy::pedantic, missing_docs)]

pub mod assistant;
pub mod cache;
pub mod checker;
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod format;
pub mod tokenize;

pub use assistant::Assistant;
pub use cache::LastMessageCache;
pub use checker::{Check, EditDistance, Spellchecker};
pub use config::Config;
pub use dictionary::{Dictionary, Word};
pub use error::SpellError;
pub use format::Markup;
