//! A single link of a chain
//!
//! Links are created and owned by [`Chain`](crate::chain::Chain); callers only
//! see them through [`Chain::links`](crate::chain::Chain::links) for
//! inspection.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::context::Context;
use crate::evaluable::Evaluable;
use crate::message::Message;

/// Boolean predicate over a value and the shared context.
///
/// Rules may write to the context to pass data to later links.
pub type Rule = Arc<dyn Fn(Option<&Value>, &mut Context) -> bool + Send + Sync>;

/// Transform applied to the value handed to the following link.
///
/// Returning `None` hands an absent value on.
pub type Modifier = Arc<dyn Fn(Option<&Value>, &Context) -> Option<Value> + Send + Sync>;

/// One node of a chain: a rule plus its message, modifier and flags.
pub struct Link<M> {
    pub(crate) rule: Option<Rule>,
    pub(crate) message: Option<Message<M>>,
    pub(crate) modifier: Option<Modifier>,
    pub(crate) strict: bool,
    pub(crate) inverse: bool,
    pub(crate) alternative: Option<Evaluable<M>>,
    pub(crate) injection: Option<Evaluable<M>>,
}

impl<M> Link<M> {
    /// Creates a rule-less, strict link.
    pub(crate) fn open() -> Self {
        Self {
            rule: None,
            message: None,
            modifier: None,
            strict: true,
            inverse: false,
            alternative: None,
            injection: None,
        }
    }

    /// Returns `true` if a rule is attached.
    pub fn has_rule(&self) -> bool {
        self.rule.is_some()
    }

    /// Returns the message, if any.
    pub fn message(&self) -> Option<&Message<M>> {
        self.message.as_ref()
    }

    /// Returns `true` if a modifier is attached.
    pub fn has_modifier(&self) -> bool {
        self.modifier.is_some()
    }

    /// Returns `true` unless the link was marked optional.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns `true` if the rule result is inverted.
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// Returns the alternative consulted when the rule fails.
    pub fn alternative(&self) -> Option<&Evaluable<M>> {
        self.alternative.as_ref()
    }

    /// Returns the pre-check evaluated before the rule.
    pub fn injection(&self) -> Option<&Evaluable<M>> {
        self.injection.as_ref()
    }

    /// Runs the rule with optional and inverse semantics applied.
    ///
    /// An absent value on a non-strict link passes without calling the rule,
    /// and that pass is never inverted.
    pub(crate) fn test(&self, value: Option<&Value>, ctx: &mut Context) -> bool {
        let Some(rule) = &self.rule else {
            return true;
        };

        if !self.strict && value.is_none() {
            return true;
        }

        rule(value, ctx) != self.inverse
    }

    /// Produces the value seen by the next link or the alternative.
    pub(crate) fn hand_off<'v>(
        &self,
        value: Option<Cow<'v, Value>>,
        ctx: &Context,
    ) -> Option<Cow<'v, Value>> {
        match &self.modifier {
            Some(modifier) => modifier(value.as_deref(), ctx).map(Cow::Owned),
            None => value,
        }
    }
}

impl<M: Clone> Clone for Link<M> {
    fn clone(&self) -> Self {
        Self {
            rule: self.rule.clone(),
            message: self.message.clone(),
            modifier: self.modifier.clone(),
            strict: self.strict,
            inverse: self.inverse,
            alternative: self.alternative.clone(),
            injection: self.injection.clone(),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Link<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("has_rule", &self.has_rule())
            .field("message", &self.message)
            .field("has_modifier", &self.has_modifier())
            .field("strict", &self.strict)
            .field("inverse", &self.inverse)
            .field("alternative", &self.alternative)
            .field("injection", &self.injection)
            .finish()
    }
}
