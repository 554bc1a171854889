//! Configuration errors raised by chain evaluation
//!
//! A failing rule is *not* an error: it is reported as
//! [`Outcome::Failed`](crate::evaluable::Outcome::Failed) carrying the
//! caller's payload. [`ChainError`] covers the other category, a chain that
//! was built in a way that makes a failure unreportable.
//!
//! # Examples
//!
//! ```
//! use nebula_chain::prelude::*;
//! use serde_json::json;
//!
//! // No message and no default negative: nothing to report on failure.
//! let chain = Chain::<String>::new().number();
//! let err = chain.check(Some(&json!("42"))).unwrap_err();
//! assert!(matches!(err, ChainError::MissingNegative { link: 0 }));
//! ```

/// Error returned when a chain cannot produce a failure payload.
///
/// These are programmer errors: the chain needs either a message on the
/// failing link or a default negative configured through
/// [`def`](crate::chain::def).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ChainError {
    /// A link failed but had no message and the chain has no default negative.
    #[error("link {link} failed without a message and the chain has no default negative")]
    MissingNegative {
        /// Zero-based position of the failing link.
        link: usize,
    },
}

impl ChainError {
    /// Creates a missing-negative error for the link at `link`.
    #[must_use]
    pub fn missing_negative(link: usize) -> Self {
        Self::MissingNegative { link }
    }

    /// Returns the position of the link that triggered the error.
    pub fn link(&self) -> usize {
        match self {
            Self::MissingNegative { link } => *link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_negative_display() {
        let err = ChainError::missing_negative(3);
        assert_eq!(
            err.to_string(),
            "link 3 failed without a message and the chain has no default negative"
        );
        assert_eq!(err.link(), 3);
    }
}
