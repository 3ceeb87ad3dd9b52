//! Named automaton states and their output values.
//!
//! A state is a plain record: a unique name, an opaque output value and a
//! flag marking it as a valid stopping point for a run.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named node of the automaton.
///
/// The output value is generic. Most callers use [`StateValue`], the default,
/// which covers the text, integer and boolean outputs an automaton definition
/// file can express.
///
/// # Example
///
/// ```rust
/// use fsa::core::{State, StateValue};
///
/// let accepting = State::terminal("S1", StateValue::Integer(1));
/// assert!(accepting.is_final);
/// assert_eq!(accepting.label(), "S1=1");
///
/// let dead = State::transient("Trap", StateValue::from("trap"));
/// assert!(!dead.is_final);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State<V = StateValue> {
    /// Unique name of the state within its automaton
    pub name: String,
    /// Output value reported when a run ends here
    pub value: V,
    /// Whether a run may validly end in this state
    #[serde(rename = "final", default)]
    pub is_final: bool,
}

impl<V> State<V> {
    pub fn new(name: impl Into<String>, value: V, is_final: bool) -> Self {
        Self {
            name: name.into(),
            value,
            is_final,
        }
    }

    /// Create a terminal (accepting) state.
    pub fn terminal(name: impl Into<String>, value: V) -> Self {
        Self::new(name, value, true)
    }

    /// Create a non-terminal state.
    pub fn transient(name: impl Into<String>, value: V) -> Self {
        Self::new(name, value, false)
    }
}

impl<V: fmt::Display> State<V> {
    /// Render the `<name>=<value>` label reported for a finished run.
    pub fn label(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// Default output value carried by a [`State`].
///
/// Human-readable formats (JSON definition files) read and write the bare
/// value: `"idle"`, `2` or `true`. Binary formats keep the variant tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl Serialize for StateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            return match self {
                Self::Text(text) => serializer.serialize_str(text),
                Self::Integer(n) => serializer.serialize_i64(*n),
                Self::Boolean(b) => serializer.serialize_bool(*b),
            };
        }
        match self {
            Self::Text(text) => serializer.serialize_newtype_variant("StateValue", 0, "Text", text),
            Self::Integer(n) => serializer.serialize_newtype_variant("StateValue", 1, "Integer", n),
            Self::Boolean(b) => serializer.serialize_newtype_variant("StateValue", 2, "Boolean", b),
        }
    }
}

/// Mirror of [`StateValue`] used for the tagged binary encoding.
#[derive(Deserialize)]
#[serde(rename = "StateValue")]
enum TaggedValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl From<TaggedValue> for StateValue {
    fn from(value: TaggedValue) -> Self {
        match value {
            TaggedValue::Text(text) => Self::Text(text),
            TaggedValue::Integer(n) => Self::Integer(n),
            TaggedValue::Boolean(b) => Self::Boolean(b),
        }
    }
}

struct BareValueVisitor;

impl<'de> Visitor<'de> for BareValueVisitor {
    type Value = StateValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, an integer or a boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<StateValue, E> {
        Ok(StateValue::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StateValue, E> {
        Ok(StateValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StateValue, E> {
        i64::try_from(v)
            .map(StateValue::Integer)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StateValue, E> {
        Ok(StateValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<StateValue, E> {
        Ok(StateValue::Text(v))
    }
}

impl<'de> Deserialize<'de> for StateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(BareValueVisitor)
        } else {
            TaggedValue::deserialize(deserializer).map(StateValue::from)
        }
    }
}
