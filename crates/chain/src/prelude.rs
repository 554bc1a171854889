//! Common imports for building and checking chains.
//!
//! ```
//! use nebula_chain::prelude::*;
//! ```

pub use crate::chain::{Chain, chain, def};
pub use crate::context::{Context, ContextBuilder};
pub use crate::error::ChainError;
pub use crate::evaluable::{CheckFn, Evaluable, Outcome};
pub use crate::link::{Link, Modifier, Rule};
pub use crate::message::{Message, MessageFactory};
pub use crate::result::{ValidationResult, objectify, simplify};
