//! Failure payloads attached to links
//!
//! A [`Message`] is either a fixed payload or a factory invoked at the moment
//! a link fails. Factories let a chain built once report payloads that depend
//! on state at check time, such as the current locale.
//!
//! # Examples
//!
//! ```
//! use nebula_chain::message::Message;
//!
//! let fixed: Message<String> = Message::fixed("too small".to_string());
//! assert_eq!(fixed.resolve(), "too small");
//!
//! let lazy = Message::factory(|| "computed".to_string());
//! assert_eq!(lazy.resolve(), "computed");
//! ```

use std::fmt;
use std::sync::Arc;

/// Zero-argument function producing a failure payload.
pub type MessageFactory<M> = Arc<dyn Fn() -> M + Send + Sync>;

/// A failure payload, either fixed or produced lazily.
pub enum Message<M> {
    /// Payload cloned on every failure.
    Fixed(M),
    /// Factory called on every failure.
    Factory(MessageFactory<M>),
}

impl<M> Message<M> {
    /// Creates a fixed message.
    pub fn fixed(payload: M) -> Self {
        Self::Fixed(payload)
    }

    /// Creates a lazily evaluated message.
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn() -> M + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(factory))
    }

    /// Returns `true` if the payload is produced by a factory.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Factory(_))
    }
}

impl<M: Clone> Message<M> {
    /// Produces the payload for a failure happening now.
    pub fn resolve(&self) -> M {
        match self {
            Self::Fixed(payload) => payload.clone(),
            Self::Factory(factory) => factory(),
        }
    }
}

impl<M: Clone> Clone for Message<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(payload) => Self::Fixed(payload.clone()),
            Self::Factory(factory) => Self::Factory(Arc::clone(factory)),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Message<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(payload) => f.debug_tuple("Fixed").field(payload).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

impl<M> From<M> for Message<M> {
    fn from(payload: M) -> Self {
        Self::Fixed(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_factory_runs_on_every_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let message = Message::factory(move || counter.fetch_add(1, Ordering::SeqCst));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(message.resolve(), 0);
        assert_eq!(message.resolve(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_hides_factory() {
        let fixed: Message<&str> = Message::from("invalid");
        assert_eq!(format!("{fixed:?}"), "Fixed(\"invalid\")");
        assert!(!fixed.is_lazy());

        let lazy = Message::factory(|| "invalid");
        assert_eq!(format!("{lazy:?}"), "Factory(..)");
        assert!(lazy.is_lazy());
    }
}
