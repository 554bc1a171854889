//! Result-shaping wrappers
//!
//! The engine reports [`Outcome`]s. These helpers reshape them for callers
//! that want a plain `Result<(), M>` ([`simplify`]) or a serializable
//! `{ success, error }` record ([`objectify`]). Both evaluate exactly once and
//! never change the evaluation itself.
//!
//! # Examples
//!
//! ```
//! use nebula_chain::prelude::*;
//! use serde_json::json;
//!
//! let chain = Chain::<String>::new()
//!     .number().message("not a number")
//!     .gte(10).message("too small");
//!
//! let check = simplify(&chain);
//! assert_eq!(check(Some(&json!(5)), &mut Context::new()).unwrap(), Err("too small".to_string()));
//! drop(check);
//!
//! let check = objectify(chain);
//! let result = check(Some(&json!(50)), &mut Context::new()).unwrap();
//! assert!(result.is_success());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chain::Chain;
use crate::context::Context;
use crate::error::ChainError;
use crate::evaluable::{Evaluable, Outcome};

/// Successful or failed validation, as a plain record.
///
/// Serializes as `{"success": true}` or `{"success": false, "error": ...}`.
/// Deserializing a record whose `success` flag disagrees with the presence
/// of `error` fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "ValidationRecord<M>",
    bound(deserialize = "M: Deserialize<'de>")
)]
pub struct ValidationResult<M> {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<M>,
}

/// Wire shape of a [`ValidationResult`] before consistency checks.
#[derive(Deserialize)]
#[serde(bound(deserialize = "M: Deserialize<'de>"))]
struct ValidationRecord<M> {
    success: bool,
    #[serde(default)]
    error: Option<M>,
}

/// A `{ success, error }` record whose flag contradicts its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InconsistentRecord {
    /// `success` is `true` but an `error` is present.
    #[error("validation record reports success but carries an error")]
    PassedWithError,
    /// `success` is `false` and no `error` is present.
    #[error("validation record reports failure without an error")]
    FailedWithoutError,
}

impl<M> TryFrom<ValidationRecord<M>> for ValidationResult<M> {
    type Error = InconsistentRecord;

    fn try_from(record: ValidationRecord<M>) -> Result<Self, Self::Error> {
        match (record.success, record.error) {
            (true, None) => Ok(Self::passed()),
            (false, Some(error)) => Ok(Self::failed(error)),
            (true, Some(_)) => Err(InconsistentRecord::PassedWithError),
            (false, None) => Err(InconsistentRecord::FailedWithoutError),
        }
    }
}

impl<M> ValidationResult<M> {
    /// Creates a successful result.
    #[must_use]
    pub fn passed() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Creates a failed result.
    pub fn failed(error: M) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }

    /// Returns `true` if the validation passed.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the failure payload, if any.
    pub fn error(&self) -> Option<&M> {
        self.error.as_ref()
    }

    /// Consumes the result and returns the failure payload, if any.
    pub fn into_error(self) -> Option<M> {
        self.error
    }
}

impl<M> From<Outcome<M>> for ValidationResult<M> {
    fn from(outcome: Outcome<M>) -> Self {
        match outcome {
            Outcome::Passed => Self::passed(),
            Outcome::Failed(error) => Self::failed(error),
        }
    }
}

/// Wraps a chain so that checks return `Ok(())` or `Err(payload)`.
pub fn simplify<M: Clone>(
    chain: &Chain<M>,
) -> impl Fn(Option<&Value>, &mut Context) -> Result<Result<(), M>, ChainError> + '_ {
    move |value: Option<&Value>, ctx: &mut Context| {
        chain.check_with(value, ctx).map(Outcome::into_result)
    }
}

/// Wraps a chain or a raw check function so that checks return a
/// [`ValidationResult`].
pub fn objectify<M: Clone>(
    evaluable: impl Into<Evaluable<M>>,
) -> impl Fn(Option<&Value>, &mut Context) -> Result<ValidationResult<M>, ChainError> {
    let evaluable = evaluable.into();
    move |value: Option<&Value>, ctx: &mut Context| {
        evaluable.evaluate(value, ctx).map(ValidationResult::from)
    }
}
