//! The chain builder and evaluation engine
//!
//! A [`Chain`] is an ordered, append-only sequence of links. Each builder call
//! consumes the chain and returns it, so chains read left to right in the
//! order their links are evaluated:
//!
//! ```
//! use nebula_chain::prelude::*;
//! use serde_json::json;
//!
//! let volume = Chain::<String>::new()
//!     .gte(10).message("too small")
//!     .lte(100).message("too big");
//!
//! assert_eq!(volume.check(Some(&json!(5))).unwrap(), Outcome::Failed("too small".into()));
//! assert_eq!(volume.check(Some(&json!(150))).unwrap(), Outcome::Failed("too big".into()));
//! assert!(volume.check(Some(&json!(50))).unwrap().is_passed());
//! ```
//!
//! # Where decorators apply
//!
//! - [`message`](Chain::message), [`message_with`](Chain::message_with),
//!   [`modify`](Chain::modify), [`optional`](Chain::optional) and
//!   [`or`](Chain::or) decorate the most recently attached rule.
//! - [`not`](Chain::not) and [`inject`](Chain::inject) decorate the next rule
//!   to be attached.
//!
//! On a chain with no rule yet, every decorator applies to the first rule
//! attached afterwards.
//!
//! # Evaluation
//!
//! Links run in order. For each link:
//!
//! 1. A failing injection ends the evaluation with its payload.
//! 2. The rule runs, unless the link is optional and the value is absent.
//!    The result is inverted for `not` links (never for an optional skip).
//! 3. On failure, an alternative (if any) receives the modified value and its
//!    outcome is final. Without one, the link's message or the chain's default
//!    negative is returned.
//! 4. On success, the modifier produces the value for the next link.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, trace};

use crate::context::Context;
use crate::error::ChainError;
use crate::evaluable::{Evaluable, Outcome};
use crate::link::{Link, Modifier};
use crate::message::Message;
use crate::rules;

/// A sequence of rules validating one value.
///
/// `M` is the failure payload type shared by every link, the default
/// negative and any nested chain used as an alternative or injection.
///
/// A built chain is immutable and, when `M: Send + Sync`, can be evaluated
/// from several threads at once.
pub struct Chain<M> {
    /// Attached links followed by exactly one rule-less open tail.
    links: Vec<Link<M>>,
    default_negative: Option<M>,
}

/// Creates an empty chain without a default negative.
pub fn chain<M>() -> Chain<M> {
    Chain::new()
}

/// Creates an empty chain reporting `negative` for failing links that have
/// no message.
///
/// # Examples
///
/// ```
/// use nebula_chain::prelude::*;
/// use serde_json::json;
///
/// let check = def(false).number().gte(10).lte(100);
/// assert_eq!(check.check(Some(&json!("42"))).unwrap(), Outcome::Failed(false));
/// assert!(check.check(Some(&json!(50))).unwrap().is_passed());
/// ```
pub fn def<M>(negative: M) -> Chain<M> {
    Chain::with_default(negative)
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl<M> Chain<M> {
    /// Creates an empty chain without a default negative.
    pub fn new() -> Self {
        Self {
            links: vec![Link::open()],
            default_negative: None,
        }
    }

    /// Creates an empty chain with a default negative payload.
    pub fn with_default(negative: M) -> Self {
        Self {
            links: vec![Link::open()],
            default_negative: Some(negative),
        }
    }

    /// Returns the default negative payload, if configured.
    pub fn default_negative(&self) -> Option<&M> {
        self.default_negative.as_ref()
    }

    /// Returns the number of attached rules.
    pub fn len(&self) -> usize {
        self.links.len() - 1
    }

    /// Returns `true` if no rule is attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns every link in evaluation order, including the rule-less tail.
    pub fn links(&self) -> &[Link<M>] {
        &self.links
    }

    /// Attaches a rule.
    ///
    /// The rule fills the open tail and a fresh tail is appended, so a rule
    /// already in the chain is never replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use nebula_chain::prelude::*;
    /// use serde_json::json;
    ///
    /// let integer = def(false).attach(|value, _ctx| {
    ///     value
    ///         .and_then(|v| v.as_str())
    ///         .is_some_and(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
    /// });
    ///
    /// assert!(integer.check(Some(&json!("42"))).unwrap().is_passed());
    /// assert!(integer.check(Some(&json!("42a"))).unwrap().is_failed());
    /// ```
    pub fn attach<F>(self, rule: F) -> Self
    where
        F: Fn(Option<&Value>, &mut Context) -> bool + Send + Sync + 'static,
    {
        self.attach_with(rule, None, None)
    }

    /// Attaches a rule together with its message and modifier.
    pub fn attach_with<F>(
        mut self,
        rule: F,
        message: Option<Message<M>>,
        modifier: Option<Modifier>,
    ) -> Self
    where
        F: Fn(Option<&Value>, &mut Context) -> bool + Send + Sync + 'static,
    {
        let tail = self.tail();
        tail.rule = Some(Arc::new(rule));
        if message.is_some() {
            tail.message = message;
        }
        if modifier.is_some() {
            tail.modifier = modifier;
        }

        self.links.push(Link::open());
        self
    }

    /// Sets the failure payload of the last attached rule.
    pub fn message(mut self, payload: impl Into<M>) -> Self {
        self.decorated().message = Some(Message::Fixed(payload.into()));
        self
    }

    /// Sets a factory producing the failure payload of the last attached
    /// rule at the moment it fails.
    pub fn message_with<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> M + Send + Sync + 'static,
    {
        self.decorated().message = Some(Message::factory(factory));
        self
    }

    /// Sets the modifier of the last attached rule.
    ///
    /// The modifier transforms the value seen by the next link (or by the
    /// alternative), never the value of the rule it belongs to.
    pub fn modify<F>(mut self, modifier: F) -> Self
    where
        F: Fn(Option<&Value>, &Context) -> Option<Value> + Send + Sync + 'static,
    {
        self.decorated().modifier = Some(Arc::new(modifier));
        self
    }

    /// Lets the last attached rule accept an absent value without running.
    pub fn optional(mut self) -> Self {
        self.decorated().strict = false;
        self
    }

    /// Sets the fallback consulted when the last attached rule fails.
    pub fn or(mut self, alternative: impl Into<Evaluable<M>>) -> Self {
        self.decorated().alternative = Some(alternative.into());
        self
    }

    /// Inverts the next rule to be attached.
    ///
    /// Has no effect on absent values skipped by [`optional`](Self::optional).
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.tail().inverse = true;
        self
    }

    /// Runs `injection` before the next rule to be attached.
    ///
    /// A failing injection ends the evaluation with its payload; a passing
    /// one lets the chain continue.
    pub fn inject(mut self, injection: impl Into<Evaluable<M>>) -> Self {
        self.tail().injection = Some(injection.into());
        self
    }

    fn tail(&mut self) -> &mut Link<M> {
        let last = self.links.len() - 1;
        &mut self.links[last]
    }

    /// The last attached link, or the tail while nothing is attached.
    fn decorated(&mut self) -> &mut Link<M> {
        let index = self.links.len().saturating_sub(2);
        &mut self.links[index]
    }
}

// ============================================================================
// BUILT-IN ATTACHERS
// ============================================================================

impl<M> Chain<M> {
    type_check_attachers! {
        /// Attaches a check that the value is a string.
        string => rules::is_string;
        /// Attaches a check that the value is a number.
        number => rules::is_number;
        /// Attaches a check that the value is a boolean.
        boolean => rules::is_boolean;
        /// Attaches a check that the value is an object or an array.
        object => rules::is_object;
        /// Attaches a check that the value is `null`.
        null => rules::is_null;
        /// Attaches a check that the value is present.
        defined => rules::is_defined;
        /// Attaches a check that the value is absent.
        not_defined => rules::is_undefined;
        /// Attaches a check that the value is absent or `null`.
        none => rules::is_none;
        /// Attaches a check that the value is present and not `null`.
        not_none => rules::is_not_none;
    }

    /// Attaches a check that the value equals `reference`.
    pub fn eq(self, reference: impl Into<Value>) -> Self {
        let reference = reference.into();
        self.attach(move |value, _| rules::eq(&reference, value))
    }

    /// Attaches a check that the value differs from `reference`.
    pub fn ne(self, reference: impl Into<Value>) -> Self {
        let reference = reference.into();
        self.attach(move |value, _| rules::ne(&reference, value))
    }

    /// Attaches a check that the value is a number greater than `threshold`.
    pub fn gt(self, threshold: impl Into<f64>) -> Self {
        let threshold = threshold.into();
        self.attach(move |value, _| rules::gt(threshold, value))
    }

    /// Attaches a check that the value is a number of at least `threshold`.
    pub fn gte(self, threshold: impl Into<f64>) -> Self {
        let threshold = threshold.into();
        self.attach(move |value, _| rules::gte(threshold, value))
    }

    /// Attaches a check that the value is a number less than `threshold`.
    pub fn lt(self, threshold: impl Into<f64>) -> Self {
        let threshold = threshold.into();
        self.attach(move |value, _| rules::lt(threshold, value))
    }

    /// Attaches a check that the value is a number of at most `threshold`.
    pub fn lte(self, threshold: impl Into<f64>) -> Self {
        let threshold = threshold.into();
        self.attach(move |value, _| rules::lte(threshold, value))
    }

    /// Same as [`gte`](Self::gte).
    pub fn min(self, threshold: impl Into<f64>) -> Self {
        self.gte(threshold)
    }

    /// Same as [`lte`](Self::lte).
    pub fn max(self, threshold: impl Into<f64>) -> Self {
        self.lte(threshold)
    }

    /// Attaches a check that the value is a number in `minimum..=maximum`.
    pub fn between(self, minimum: impl Into<f64>, maximum: impl Into<f64>) -> Self {
        let (minimum, maximum) = (minimum.into(), maximum.into());
        self.attach(move |value, _| rules::between(minimum, maximum, value))
    }

    /// Attaches a check that a string or array has at least `min` elements.
    pub fn min_length(self, min: usize) -> Self {
        self.attach(move |value, _| rules::min_length(min, value))
    }

    /// Attaches a check that a string or array has at most `max` elements.
    pub fn max_length(self, max: usize) -> Self {
        self.attach(move |value, _| rules::max_length(max, value))
    }

    /// Attaches a check that a string or array has exactly `length` elements.
    pub fn strict_length(self, length: usize) -> Self {
        self.attach(move |value, _| rules::strict_length(length, value))
    }

    /// Attaches a check that a string or array length is in
    /// `minimum..=maximum`.
    pub fn length_between(self, minimum: usize, maximum: usize) -> Self {
        self.attach(move |value, _| rules::length_between(minimum, maximum, value))
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

impl<M: Clone> Chain<M> {
    /// Checks a value with a fresh, empty context.
    ///
    /// `None` stands for an absent value.
    pub fn check(&self, value: Option<&Value>) -> Result<Outcome<M>, ChainError> {
        self.check_with(value, &mut Context::new())
    }

    /// Checks a value, sharing `ctx` with every rule of this evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::MissingNegative`] when a link fails with neither
    /// a message nor a default negative to report.
    #[tracing::instrument(level = "trace", skip_all, fields(links = self.links.len()))]
    pub fn check_with(
        &self,
        value: Option<&Value>,
        ctx: &mut Context,
    ) -> Result<Outcome<M>, ChainError> {
        let mut current = value.map(Cow::Borrowed);

        for (index, link) in self.links.iter().enumerate() {
            if let Some(injection) = &link.injection
                && let Outcome::Failed(payload) = injection.evaluate(current.as_deref(), ctx)?
            {
                trace!(link = index, "injection preempted the chain");
                return Ok(Outcome::Failed(payload));
            }

            if !link.has_rule() {
                continue;
            }

            if link.test(current.as_deref(), ctx) {
                current = link.hand_off(current, ctx);
                continue;
            }

            if let Some(alternative) = &link.alternative {
                trace!(link = index, "rule failed, delegating to alternative");
                let handed = link.hand_off(current, ctx);
                return alternative.evaluate(handed.as_deref(), ctx);
            }

            // The modifier never runs on a final failure.
            let value_type = crate::value::type_name(current.as_deref());
            debug!(link = index, value_type, "link failed");
            return self.negative(index, link).map(Outcome::Failed);
        }

        Ok(Outcome::Passed)
    }

    fn negative(&self, index: usize, link: &Link<M>) -> Result<M, ChainError> {
        if let Some(message) = &link.message {
            return Ok(message.resolve());
        }

        match &self.default_negative {
            Some(negative) => Ok(negative.clone()),
            None => {
                error!(link = index, "failing link has no message and no default negative");
                Err(ChainError::missing_negative(index))
            }
        }
    }
}

impl<M> Default for Chain<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Clone> Clone for Chain<M> {
    fn clone(&self) -> Self {
        Self {
            links: self.links.clone(),
            default_negative: self.default_negative.clone(),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Chain<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("links", &self.links)
            .field("default_negative", &self.default_negative)
            .finish()
    }
}
