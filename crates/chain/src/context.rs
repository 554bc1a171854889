//! Shared evaluation context
//!
//! A [`Context`] is threaded by mutable reference through one evaluation of a
//! chain, including its alternatives and injections. Rules may read it for
//! cross-field checks and write to it to hand results to later links, for
//! example a collection sorted once by one rule and consulted by the next.
//!
//! # Examples
//!
//! ```
//! use nebula_chain::context::Context;
//! use serde_json::json;
//!
//! let mut ctx = Context::builder()
//!     .with("name", "the answer")
//!     .with("value", "42")
//!     .build();
//!
//! assert_eq!(ctx.get("name"), Some(&json!("the answer")));
//!
//! ctx.insert("sorted", vec![1, 2, 3]);
//! assert_eq!(ctx.get_as::<Vec<i64>>("sorted"), Some(vec![1, 2, 3]));
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Mutable key/value bag shared by every link of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Context {
    entries: Map<String, Value>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing contexts.
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Creates a context from a JSON value.
    ///
    /// Returns `None` unless the value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(entries) => Some(Self { entries }),
            _ => None,
        }
    }

    /// Inserts a value, returning the previous one for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Deserializes the value stored under `key` into `T`.
    ///
    /// Returns `None` if the key is missing or the value has a different shape.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|value| T::deserialize(value).ok())
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the context holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Consumes the context and returns the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.entries
    }
}

impl From<Map<String, Value>> for Context {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<Context> for Value {
    fn from(ctx: Context) -> Self {
        Value::Object(ctx.entries)
    }
}

/// Builder for [`Context`].
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    entries: Map<String, Value>,
}

impl ContextBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Builds the context.
    pub fn build(self) -> Context {
        Context {
            entries: self.entries,
        }
    }
}
