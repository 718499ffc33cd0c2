//! Errors reported back to chat users.

use thiserror::Error;

/// Reasons a spellcheck command cannot run. The message is shown to the invoker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    /// The invoker has said nothing in this channel.
    #[error("haven't seen anything from you recently")]
    NothingFromYou,

    /// The named identity has said nothing in this channel.
    #[error("haven't seen anything from {identity} recently")]
    NothingFrom {
        /// Who was asked about.
        identity: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            SpellError::NothingFromYou.to_string(),
            "haven't seen anything from you recently"
        );
        let err = SpellError::NothingFrom {
            identity: "alice".into(),
        };
        assert_eq!(err.to_string(), "haven't seen anything from alice recently");
    }
}
