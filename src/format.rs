//! Rendering spellcheck results as chat text.

use std::str::FromStr;

use crate::checker::Check;

const UNDERLINE: &str = "\x1f";
const GREEN: &str = "\x033";
const RESET: &str = "\x0f";

/// `Markup` selects how flagged words and suggestions are highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Markup {
    /// mIRC control codes: flagged words underlined, suggestions green.
    #[default]
    Irc,
    /// Flagged words wrapped in `*`, no control codes.
    Plain,
}

impl Markup {
    fn flagged(self, word: &str) -> String {
        match self {
            Self::Irc => format!("{UNDERLINE}{word}{RESET}"),
            Self::Plain => format!("*{word}*"),
        }
    }

    fn suggestion(self, text: &str) -> String {
        match self {
            Self::Irc => format!("{GREEN}{text}{RESET}"),
            Self::Plain => text.to_string(),
        }
    }
}

impl FromStr for Markup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "irc" => Ok(Self::Irc),
            "plain" => Ok(Self::Plain),
            other => anyhow::bail!("unknown markup {other:?} (expected `irc` or `plain`)"),
        }
    }
}

/// `format_word` renders one checked word.
///
/// Correct words and links come back unchanged. A misspelled word is flagged and followed by its
/// suggestions in parentheses, separated by `|`. At most `max_suggestions` are listed; the rest
/// are summarised as `...(+N)`. A word with no suggestions at all is only flagged.
///
/// # Arguments
///
/// * `word` - The token that was checked.
/// * `check` - Its search result, or `None` for a link that was never scored.
/// * `markup` - Highlighting style.
/// * `max_suggestions` - How many suggestions to list before summarising.
///
/// # Example
///
/// ```
/// use chatspell::{format::format_word, Check, Markup};
///
/// let check = Check { distance: 1, matches: vec!["cat".into(), "bat".into()] };
/// assert_eq!(format_word("xat", Some(&check), Markup::Plain, 3), "*xat* (cat|bat)");
/// ```
#[must_use]
pub fn format_word(
    word: &str,
    check: Option<&Check>,
    markup: Markup,
    max_suggestions: usize,
) -> String {
    let Some(check) = check.filter(|check| !check.is_correct()) else {
        return word.to_string();
    };

    let flagged = markup.flagged(word);
    if check.matches.is_empty() {
        return flagged;
    }

    let shown = check.matches.len().min(max_suggestions);
    let mut parts: Vec<String> = check.matches[..shown]
        .iter()
        .map(|m| markup.suggestion(m))
        .collect();
    let hidden = check.matches.len() - shown;
    if hidden > 0 {
        parts.push(markup.suggestion(&format!("...(+{hidden})")));
    }

    format!("{flagged} ({})", parts.join("|"))
}
