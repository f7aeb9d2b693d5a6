//! Loosely-typed values arriving from a scripting layer.
//!
//! ## Purpose
//!
//! This module defines [`Value`], the form in which data crosses a dynamic
//! boundary (a Python call, a parsed document) before it is dispatched to one
//! of the typed input shapes.
//!
//! ## Design notes
//!
//! * **Closed set**: Only the kinds a script can hand over are represented.
//! * **Keys are values**: Mappings keep arbitrary keys so that non-string keys
//!   can be reported instead of silently stringified.
//!
//! ## Non-goals
//!
//! * This module does not classify or coerce values (see the engine validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

/// A value handed over by a dynamically-typed caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value (`None`, `null`).
    Null,

    /// A boolean. Never treated as a number.
    Bool(bool),

    /// An integer; coerces to a float element.
    Integer(i64),

    /// A floating-point number.
    Float(f64),

    /// A string.
    Text(String),

    /// An ordered sequence.
    List(Vec<Value>),

    /// Key/value pairs in caller order.
    Map(Vec<(Value, Value)>),

    /// An object this layer has no representation for, by type name.
    Other(String),
}

impl Value {
    /// Human-readable kind of the value, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::List(_) => "sequence",
            Self::Map(_) => "mapping",
            Self::Other(_) => "object",
        }
    }

    /// The numeric value, if this is a real number.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            Self::Integer(i) => Some(i as f64),
            _ => None,
        }
    }

    /// Whether this value is a container (sequence or mapping).
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
