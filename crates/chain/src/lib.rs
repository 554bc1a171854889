//! # nebula-chain
//!
//! Composable rule chains for validating one value at a time.
//!
//! A [`Chain`](chain::Chain) is built fluently from small predicate checks and
//! evaluated against a JSON value, producing either a pass or a
//! caller-chosen failure payload.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_chain::prelude::*;
//! use serde_json::json;
//!
//! let volume = Chain::<String>::new()
//!     .number().message("not a number")
//!     .gte(0).message("cannot be less than silence")
//!     .lte(100).message("too loud");
//!
//! assert!(volume.check(Some(&json!(10))).unwrap().is_passed());
//! assert_eq!(
//!     volume.check(Some(&json!(120))).unwrap(),
//!     Outcome::Failed("too loud".to_string()),
//! );
//! ```
//!
//! ## Building Chains
//!
//! - Rules run in the order they are attached; the first failure wins.
//! - [`optional`](chain::Chain::optional) accepts an absent value (`None`).
//! - [`not`](chain::Chain::not) inverts the next rule.
//! - [`or`](chain::Chain::or) consults an alternative when a rule fails.
//! - [`inject`](chain::Chain::inject) runs a pre-check that can end the
//!   evaluation early.
//! - [`modify`](chain::Chain::modify) transforms the value for later links.
//!
//! ## Context
//!
//! [`Context`](context::Context) is shared by every rule of one evaluation.
//! Rules may write to it to hand results to later links.
//!
//! ## Errors
//!
//! Failing validation is an [`Outcome`](evaluable::Outcome), not an error.
//! [`ChainError`](error::ChainError) reports a chain that fails without any
//! payload to return.

#[macro_use]
mod macros;

pub mod chain;
pub mod context;
pub mod error;
pub mod evaluable;
pub mod link;
pub mod message;
pub mod prelude;
pub mod result;
pub mod rules;
pub mod value;

pub use chain::{Chain, chain, def};
pub use error::ChainError;
pub use evaluable::{Evaluable, Outcome};
