//! Runtime settings.

use std::path::PathBuf;

use anyhow::Context;

use crate::format::Markup;

/// `Config` holds everything the assistant needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list, one word per line.
    pub dictionary: PathBuf,
    /// Most (identity, channel) pairs remembered; `None` for no limit.
    pub cache_capacity: Option<usize>,
    /// Suggestions listed per misspelled word before the rest are summarised.
    pub max_suggestions: usize,
    /// Highlighting used in replies.
    pub markup: Markup,
    /// Character that starts a command.
    pub prefix: char,
    /// Command names that trigger a spellcheck.
    pub commands: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("/usr/share/dict/words"),
            cache_capacity: Some(4096),
            max_suggestions: 3,
            markup: Markup::Irc,
            prefix: ';',
            commands: vec!["spellcheck".to_string(), "sp".to_string()],
        }
    }
}

impl Config {
    /// `from_env` reads `CHATSPELL_*` environment variables on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// `from_lookup` is [`Config::from_env`] with variables read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to a value that cannot be parsed.
    ///
    /// # Example
    ///
    /// ```
    /// use chatspell::{Config, Markup};
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let config = Config::from_lookup(|name| match name {
    ///         "CHATSPELL_MARKUP" => Some("plain".to_string()),
    ///         "CHATSPELL_CACHE_CAPACITY" => Some("0".to_string()),
    ///         _ => None,
    ///     })?;
    ///     assert_eq!(config.markup, Markup::Plain);
    ///     assert_eq!(config.cache_capacity, None);
    ///     Ok(())
    /// }
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("CHATSPELL_DICTIONARY") {
            config.dictionary = PathBuf::from(path);
        }
        if let Some(value) = lookup("CHATSPELL_CACHE_CAPACITY") {
            let capacity: usize = value
                .trim()
                .parse()
                .with_context(|| format!("CHATSPELL_CACHE_CAPACITY={value:?}"))?;
            config.cache_capacity = (capacity > 0).then_some(capacity);
        }
        if let Some(value) = lookup("CHATSPELL_MAX_SUGGESTIONS") {
            config.max_suggestions = value
                .trim()
                .parse()
                .with_context(|| format!("CHATSPELL_MAX_SUGGESTIONS={value:?}"))?;
        }
        if let Some(value) = lookup("CHATSPELL_MARKUP") {
            config.markup = value
                .trim()
                .parse()
                .with_context(|| format!("CHATSPELL_MARKUP={value:?}"))?;
        }
        if let Some(value) = lookup("CHATSPELL_PREFIX") {
            let mut chars = value.chars();
            config.prefix = match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_whitespace() => c,
                _ => anyhow::bail!("CHATSPELL_PREFIX={value:?}: expected a single character"),
            };
        }

        Ok(config)
    }
}
