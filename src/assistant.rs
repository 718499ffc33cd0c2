//! The spellcheck command as seen by the chat layer.

use std::sync::Arc;

use crate::cache::{normalize_identity, LastMessageCache};
use crate::checker::{EditDistance, Spellchecker};
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::SpellError;
use crate::format::format_word;
use crate::tokenize::{is_link, strip_punctuation, tokenize};

/// `Assistant` answers spellcheck commands and remembers what everyone said last.
///
/// Every method takes `&self`, so one assistant can be shared across the threads handling chat
/// events.
pub struct Assistant {
    checker: Arc<dyn Spellchecker>,
    cache: LastMessageCache,
    config: Config,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("cache", &self.cache)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Assistant {
    /// `new` loads the configured dictionary and creates an assistant over it.
    ///
    /// A missing dictionary is logged and replaced by an empty one.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let dictionary = Dictionary::load_or_empty(&config.dictionary);
        Self::with_checker(Arc::new(EditDistance::new(dictionary)), config)
    }

    /// `with_checker` creates an assistant backed by any [`Spellchecker`].
    #[must_use]
    pub fn with_checker(checker: Arc<dyn Spellchecker>, config: Config) -> Self {
        let cache = match config.cache_capacity {
            Some(capacity) => LastMessageCache::with_capacity(capacity),
            None => LastMessageCache::new(),
        };
        Self {
            checker,
            cache,
            config,
        }
    }

    /// The last-message cache.
    #[must_use]
    pub fn cache(&self) -> &LastMessageCache {
        &self.cache
    }

    /// `on_message_observed` remembers `text` as the latest message from `sender` in `channel`.
    pub fn on_message_observed(&self, sender: &str, channel: &str, text: &str) {
        self.cache.record(sender, channel, text);
    }

    /// `resolve_targets` decides which words a spellcheck command should check.
    ///
    /// * Two or more arguments are the words themselves.
    /// * A single argument names someone whose last message in `channel` is checked.
    /// * No arguments checks the invoker's own last message.
    ///
    /// Arguments made only of punctuation are dropped before counting, so `, alice` is one
    /// argument.
    ///
    /// # Errors
    ///
    /// Returns error if the message to check has not been seen. A single argument is never
    /// checked as a word.
    pub fn resolve_targets<S: AsRef<str>>(
        &self,
        invoker: &str,
        channel: &str,
        args: &[S],
    ) -> Result<Vec<String>, SpellError> {
        let args: Vec<&str> = args
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|arg| is_link(arg) || !strip_punctuation(arg).is_empty())
            .collect();

        match args.as_slice() {
            [] => self
                .cache
                .get(invoker, channel)
                .map(|text| tokenize(&text))
                .ok_or(SpellError::NothingFromYou),
            [identity] => {
                let identity = normalize_identity(identity);
                self.cache
                    .get(&identity, channel)
                    .map(|text| tokenize(&text))
                    .ok_or(SpellError::NothingFrom { identity })
            }
            words => Ok(words
                .iter()
                .flat_map(|word| tokenize(word))
                .collect()),
        }
    }

    /// `spellcheck_words` checks each word and joins the rendered results with spaces.
    #[must_use]
    pub fn spellcheck_words(&self, words: &[String]) -> String {
        words
            .iter()
            .map(|word| {
                let check = (!is_link(word)).then(|| self.checker.check(word));
                format_word(
                    word,
                    check.as_ref(),
                    self.config.markup,
                    self.config.max_suggestions,
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `run_spellcheck` produces the reply to a spellcheck command.
    ///
    /// # Example
    ///
    /// ```
    /// use chatspell::{Assistant, Config, Markup};
    ///
    /// let assistant = Assistant::new(Config {
    ///     dictionary: "data/words.txt".into(),
    ///     markup: Markup::Plain,
    ///     ..Config::default()
    /// });
    /// assistant.on_message_observed("alice", "#c", "hello wrold");
    /// assert_eq!(
    ///     assistant.run_spellcheck("bob", "#c", &["alice"]),
    ///     "<bob> hello *wrold* (world)"
    /// );
    /// assert_eq!(
    ///     assistant.run_spellcheck("bob", "#c", &["carol"]),
    ///     "bob: haven't seen anything from carol recently"
    /// );
    /// ```
    pub fn run_spellcheck<S: AsRef<str>>(
        &self,
        invoker: &str,
        channel: &str,
        args: &[S],
    ) -> String {
        match self.resolve_targets(invoker, channel, args) {
            Ok(words) => {
                log::debug!("{invoker} in {channel}: checking {} words", words.len());
                format!("<{invoker}> {}", self.spellcheck_words(&words))
            }
            Err(err) => {
                log::debug!("{invoker} in {channel}: {err}");
                format!("{invoker}: {err}")
            }
        }
    }

    /// `handle_message` is the entry point for every chat message.
    ///
    /// If `text` is a spellcheck command, the reply is returned. The message is recorded
    /// afterwards either way, so a bare command checks the message before it.
    pub fn handle_message(&self, sender: &str, channel: &str, text: &str) -> Option<String> {
        let reply = self
            .parse_command(text)
            .map(|args| self.run_spellcheck(sender, channel, args.as_slice()));
        self.on_message_observed(sender, channel, text);
        reply
    }

    fn parse_command<'t>(&self, text: &'t str) -> Option<Vec<&'t str>> {
        let rest = text.strip_prefix(self.config.prefix)?;
        if rest.starts_with(char::is_whitespace) {
            return None;
        }
        let mut words = rest.split_whitespace();
        let name = words.next()?;
        self.config
            .commands
            .iter()
            .any(|command| command == name)
            .then(|| words.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Markup;
    use pretty_assertions::assert_eq;

    fn assistant(words: &[&str]) -> Assistant {
        let config = Config {
            markup: Markup::Plain,
            ..Config::default()
        };
        Assistant::with_checker(
            Arc::new(EditDistance::new(Dictionary::from_lines(words))),
            config,
        )
    }

    #[test]
    fn two_arguments_are_checked_directly() {
        let a = assistant(&["world", "test"]);
        assert_eq!(
            a.resolve_targets("bob", "#c", &["Wrold,", "test"]).unwrap(),
            vec!["wrold", "test"]
        );
        assert_eq!(
            a.run_spellcheck("bob", "#c", &["wrold", "test"]),
            "<bob> *wrold* (world) test"
        );
    }

    #[test]
    fn one_argument_is_an_identity() {
        let a = assistant(&["alice"]);
        assert_eq!(
            a.resolve_targets("bob", "#c", &["alice"]),
            Err(SpellError::NothingFrom {
                identity: "alice".into()
            })
        );
        a.on_message_observed("alice", "#c", "Hi there");
        assert_eq!(
            a.resolve_targets("bob", "#c", &["alice:"]).unwrap_err(),
            SpellError::NothingFrom {
                identity: "alice:".into()
            }
        );
        assert_eq!(
            a.resolve_targets("bob", "#c", &["alice,"]).unwrap(),
            vec!["hi", "there"]
        );
    }

    #[test]
    fn no_arguments_checks_the_invoker() {
        let a = assistant(&["hello"]);
        assert_eq!(
            a.run_spellcheck::<&str>("bob", "#c", &[]),
            "bob: haven't seen anything from you recently"
        );
        a.on_message_observed("bob", "#c", "helo");
        assert_eq!(a.run_spellcheck::<&str>("bob", "#c", &[]), "<bob> *helo* (hello)");
        assert_eq!(
            a.run_spellcheck::<&str>("bob", "#other", &[]),
            "bob: haven't seen anything from you recently"
        );
    }

    #[test]
    fn links_are_never_scored() {
        let a = assistant(&[]);
        assert_eq!(
            a.spellcheck_words(&["https://example.org/x".to_string()]),
            "https://example.org/x"
        );
        assert_eq!(
            a.resolve_targets("bob", "#c", &["<https://x.org>", "wrold"]).unwrap(),
            vec!["<https://x.org>", "wrold"]
        );
    }

    #[test]
    fn commands_are_answered_before_being_recorded() {
        let a = assistant(&["hello"]);
        assert_eq!(a.handle_message("bob", "#c", "helo"), None);
        assert_eq!(
            a.handle_message("bob", "#c", ";sp").as_deref(),
            Some("<bob> *helo* (hello)")
        );
        assert_eq!(a.cache().get("bob", "#c").as_deref(), Some(";sp"));
    }

    #[test]
    fn only_configured_commands_trigger() {
        let a = assistant(&["hello"]);
        assert_eq!(a.handle_message("bob", "#c", ";ping"), None);
        assert_eq!(a.handle_message("bob", "#c", "sp helo there"), None);
        assert_eq!(a.handle_message("bob", "#c", ";"), None);
        assert_eq!(
            a.handle_message("bob", "#c", ";spellcheck helo hello").as_deref(),
            Some("<bob> *helo* (hello) hello")
        );
    }

    #[test]
    fn punctuation_only_arguments_are_not_counted() {
        let a = assistant(&["world", "quick"]);
        assert_eq!(
            a.handle_message("bob", "#c", ";sp , wrold").as_deref(),
            Some("bob: haven't seen anything from wrold recently")
        );
        assert_eq!(
            a.handle_message("bob", "#c", ";sp alice .").as_deref(),
            Some("bob: haven't seen anything from alice recently")
        );
        a.on_message_observed("alice", "#c", "quikc");
        assert_eq!(
            a.run_spellcheck("bob", "#c", &["!", "alice", "?"]),
            "<bob> *quikc* (quick)"
        );
    }

    #[test]
    fn command_name_must_follow_the_prefix() {
        let a = assistant(&["hello"]);
        assert_eq!(a.handle_message("bob", "#c", "; sp helo hello"), None);
        assert_eq!(
            a.handle_message("bob", "#c", ";sp  helo   hello").as_deref(),
            Some("<bob> *helo* (hello) hello")
        );
    }
}
