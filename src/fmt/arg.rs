//! Positional log arguments and the message slot they trail.
//!
//! A log call is a `(Message, &[Arg])` pair: the message is usually a template,
//! but may be any value (an error, a JSON document) that the caller wants logged as-is.

use serde::Serialize;
use serde_json::Value;

/// Shown by `%j` when a value could not be serialized.
pub const UNSERIALIZABLE: &str = "[Unserializable]";

/// One positional argument to a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Structured value, rendered as JSON.
    Json(Value),
    /// An error, captured by its display text.
    Error(String),
    /// A value whose serialization failed; holds the Rust type name.
    Unserializable(&'static str),
}

impl Arg {
    /// Captures any serializable value. Serialization failures are kept, not raised,
    /// so the formatter can fall back to a placeholder.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(Value::String(s)) => Self::Str(s),
            Ok(v) => Self::Json(v),
            Err(_) => Self::Unserializable(std::any::type_name::<T>()),
        }
    }

    /// Captures an error by its display text.
    pub fn error(err: &(dyn std::error::Error + '_)) -> Self {
        Self::Error(err.to_string())
    }

    /// Strings, numbers, booleans and null are appended to messages verbatim;
    /// everything else goes through the structured rendering.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Str(_)
        )
    }

    /// Plain-text rendering (`%s`, `%b`).
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => fmt_number(*f),
            Self::Str(s) => s.clone(),
            Self::Json(Value::String(s)) => s.clone(),
            Self::Json(v) => v.to_string(),
            Self::Error(msg) => msg.clone(),
            Self::Unserializable(ty) => format!("[{ty}]"),
        }
    }

    /// Numeric coercion (`%d`). Anything that is not a number becomes `NaN`.
    #[must_use]
    pub fn to_number(&self) -> String {
        match self {
            Self::Null => "0".to_string(),
            Self::Bool(b) => u8::from(*b).to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => fmt_number(*f),
            Self::Str(s) => parse_number(s),
            Self::Json(v) => match v {
                Value::Null => "0".to_string(),
                Value::Bool(b) => u8::from(*b).to_string(),
                Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), fmt_number),
                Value::String(s) => parse_number(s),
                Value::Array(_) | Value::Object(_) => "NaN".to_string(),
            },
            Self::Error(_) | Self::Unserializable(_) => "NaN".to_string(),
        }
    }

    /// Serialized structured form (`%j`). `None` when the value could not be serialized.
    #[must_use]
    pub fn to_json(&self) -> Option<String> {
        let value = match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            // Non-finite floats have no JSON form and serialize as null.
            Self::Float(f) => serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Self::Str(s) => Value::String(s.clone()),
            Self::Json(v) => return serde_json::to_string(v).ok(),
            Self::Error(msg) => serde_json::json!({ "error": msg }),
            Self::Unserializable(_) => return None,
        };
        serde_json::to_string(&value).ok()
    }

    /// Human-readable dump used for trailing non-primitive arguments and non-text messages.
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::Error(msg) => format!("Error: {msg}"),
            Self::Unserializable(ty) => format!("[Unserializable {ty}]"),
            Self::Json(_) => self.to_json().unwrap_or_else(|| UNSERIALIZABLE.to_string()),
            _ => self.to_text(),
        }
    }
}

/// Integral values print without a fractional part, the way log readers expect `7`, not `7.0`.
pub(crate) fn fmt_number(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    if f.fract() == 0.0 && f.abs() < 1e21 {
        return format!("{f:.0}");
    }
    f.to_string()
}

fn parse_number(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return "0".to_string();
    }
    trimmed
        .parse::<f64>()
        .map_or_else(|_| "NaN".to_string(), fmt_number)
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Arg {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Arg {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for Arg {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u64> for Arg {
    #[allow(clippy::cast_precision_loss)]
    fn from(i: u64) -> Self {
        i64::try_from(i).map_or(Self::Float(i as f64), Self::Int)
    }
}

impl From<usize> for Arg {
    #[allow(clippy::cast_precision_loss)]
    fn from(i: usize) -> Self {
        i64::try_from(i).map_or(Self::Float(i as f64), Self::Int)
    }
}

impl From<f32> for Arg {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<f64> for Arg {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::String(s) => Self::Str(s),
            other => Self::Json(other),
        }
    }
}

impl<T: Into<Self>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// The first slot of a log call: a template, or any other value logged as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Value(Arg),
}

impl Message {
    /// Logs an error value in the message slot.
    pub fn error(err: &(dyn std::error::Error + '_)) -> Self {
        Self::Value(Arg::error(err))
    }

    /// Logs a structured value in the message slot.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        Self::from(Arg::json(value))
    }

    /// The template text, if the message is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Value(_) => None,
        }
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Message {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Arg> for Message {
    fn from(arg: Arg) -> Self {
        match arg {
            Arg::Str(s) => Self::Text(s),
            other => Self::Value(other),
        }
    }
}

impl From<Value> for Message {
    fn from(v: Value) -> Self {
        Self::from(Arg::from(v))
    }
}
