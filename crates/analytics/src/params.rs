//! Event parameters.

use indexmap::IndexMap;
use serde::Serialize;

/// A single parameter value.
///
/// Values keep their type for analytics backends. The on-screen log only
/// ever shows their string form (see the [`Display`](std::fmt::Display)
/// impl).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Double(f64),
    Long(i64),
    Bool(bool),
    /// Nested item bundles, e.g. the `items` of a purchase.
    Items(Vec<EventParams>),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::String(s) => f.write_str(s),
            ParamValue::Double(d) => write_double(f, *d),
            ParamValue::Long(l) => write!(f, "{l}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Items(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Writes a double the way JVM analytics payloads print it: plain decimal
/// with at least one fractional digit for magnitudes in `[1e-3, 1e7)`,
/// `<mantissa>E<exponent>` outside that range.
fn write_double(f: &mut std::fmt::Formatter<'_>, d: f64) -> std::fmt::Result {
    if d.is_nan() {
        return f.write_str("NaN");
    }
    if d.is_infinite() {
        return f.write_str(if d > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = d.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps the fractional part of whole numbers: 10.0, not 10.
        return write!(f, "{d:?}");
    }

    let scientific = format!("{d:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    if mantissa.contains('.') {
        write!(f, "{mantissa}E{exponent}")
    } else {
        write!(f, "{mantissa}.0E{exponent}")
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<f64> for ParamValue {
    fn from(d: f64) -> Self {
        ParamValue::Double(d)
    }
}

impl From<i64> for ParamValue {
    fn from(l: i64) -> Self {
        ParamValue::Long(l)
    }
}

impl From<u32> for ParamValue {
    fn from(l: u32) -> Self {
        ParamValue::Long(i64::from(l))
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<Vec<EventParams>> for ParamValue {
    fn from(items: Vec<EventParams>) -> Self {
        ParamValue::Items(items)
    }
}

/// Ordered key/value parameters of an event.
///
/// Keys keep insertion order; inserting an existing key replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventParams(IndexMap<String, ParamValue>);

impl EventParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter and returns the parameters, for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for EventParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for EventParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = EventParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
