//! Evaluation outcomes and the values `or` / `inject` accept
//!
//! An [`Evaluable`] is anything with the shape of a chain check: either a
//! whole [`Chain`] or a raw check function. Alternatives and injections take
//! either kind interchangeably.
//!
//! # Examples
//!
//! ```
//! use nebula_chain::prelude::*;
//! use serde_json::json;
//!
//! // A raw check function used as an alternative.
//! let even = Evaluable::from_fn(|value, _ctx| match value.and_then(|v| v.as_i64()) {
//!     Some(n) if n % 2 == 0 => Outcome::Passed,
//!     _ => Outcome::Failed("odd".to_string()),
//! });
//!
//! let chain = def("not a string".to_string()).string().or(even);
//! assert!(chain.check(Some(&json!(4))).unwrap().is_passed());
//! assert_eq!(chain.check(Some(&json!(3))).unwrap().failure(), Some(&"odd".to_string()));
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::chain::Chain;
use crate::context::Context;
use crate::error::ChainError;

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of evaluating a chain against a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a validation outcome must be inspected"]
pub enum Outcome<M> {
    /// Every consulted link passed.
    Passed,
    /// A link failed with this payload.
    Failed(M),
}

impl<M> Outcome<M> {
    /// Returns `true` if the value passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Returns `true` if the value failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the failure payload, if any.
    pub fn failure(&self) -> Option<&M> {
        match self {
            Self::Passed => None,
            Self::Failed(payload) => Some(payload),
        }
    }

    /// Consumes the outcome and returns the failure payload, if any.
    pub fn into_failure(self) -> Option<M> {
        match self {
            Self::Passed => None,
            Self::Failed(payload) => Some(payload),
        }
    }

    /// Converts into `Ok(())` on pass and `Err(payload)` on failure.
    pub fn into_result(self) -> Result<(), M> {
        match self {
            Self::Passed => Ok(()),
            Self::Failed(payload) => Err(payload),
        }
    }
}

impl<M> From<Outcome<M>> for Result<(), M> {
    fn from(outcome: Outcome<M>) -> Self {
        outcome.into_result()
    }
}

impl<M> From<Result<(), M>> for Outcome<M> {
    fn from(result: Result<(), M>) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(payload) => Self::Failed(payload),
        }
    }
}

// ============================================================================
// EVALUABLE
// ============================================================================

/// Raw check function with the same shape as a chain check.
pub type CheckFn<M> = Arc<dyn Fn(Option<&Value>, &mut Context) -> Outcome<M> + Send + Sync>;

/// A chain or a raw check function.
pub enum Evaluable<M> {
    /// A nested chain, evaluated with its own default negative.
    Chain(Arc<Chain<M>>),
    /// A raw check function.
    Check(CheckFn<M>),
}

impl<M> Evaluable<M> {
    /// Wraps a raw check function.
    pub fn from_fn<F>(check: F) -> Self
    where
        F: Fn(Option<&Value>, &mut Context) -> Outcome<M> + Send + Sync + 'static,
    {
        Self::Check(Arc::new(check))
    }
}

impl<M: Clone> Evaluable<M> {
    /// Evaluates against a value, sharing the caller's context.
    pub fn evaluate(
        &self,
        value: Option<&Value>,
        ctx: &mut Context,
    ) -> Result<Outcome<M>, ChainError> {
        match self {
            Self::Chain(chain) => chain.check_with(value, ctx),
            Self::Check(check) => Ok(check(value, ctx)),
        }
    }
}

impl<M> From<Chain<M>> for Evaluable<M> {
    fn from(chain: Chain<M>) -> Self {
        Self::Chain(Arc::new(chain))
    }
}

impl<M> From<Arc<Chain<M>>> for Evaluable<M> {
    fn from(chain: Arc<Chain<M>>) -> Self {
        Self::Chain(chain)
    }
}

impl<M> Clone for Evaluable<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Chain(chain) => Self::Chain(Arc::clone(chain)),
            Self::Check(check) => Self::Check(Arc::clone(check)),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Evaluable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(chain) => f.debug_tuple("Chain").field(chain).finish(),
            Self::Check(_) => f.write_str("Check(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_conversions() {
        let passed: Outcome<&str> = Outcome::Passed;
        assert!(passed.is_passed());
        assert_eq!(passed.failure(), None);
        assert_eq!(passed.into_result(), Ok(()));

        let failed = Outcome::Failed("too small");
        assert!(failed.is_failed());
        assert_eq!(failed.failure(), Some(&"too small"));
        assert_eq!(Result::from(failed), Err("too small"));
        assert_eq!(Outcome::from(Err::<(), _>("x")), Outcome::Failed("x"));
    }

    #[test]
    fn test_check_fn_shares_context() {
        let check: Evaluable<&str> = Evaluable::from_fn(|value, ctx| {
            ctx.insert("seen", value.cloned().unwrap_or_default());
            Outcome::Passed
        });

        let mut ctx = Context::new();
        let outcome = check.evaluate(Some(&json!(7)), &mut ctx).unwrap();
        assert!(outcome.is_passed());
        assert_eq!(ctx.get("seen"), Some(&json!(7)));
    }

    #[test]
    fn test_chain_evaluable_uses_own_negative() {
        let nested: Evaluable<&str> = crate::chain::def("not a number").number().into();
        let outcome = nested
            .evaluate(Some(&json!("1")), &mut Context::new())
            .unwrap();
        assert_eq!(outcome, Outcome::Failed("not a number"));
        assert!(format!("{nested:?}").starts_with("Chain("));
    }
}
