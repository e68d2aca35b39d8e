//! Arguments and their sanitized rendering
//!
//! Whatever gets interpolated into a message first becomes an [`Arg`], and each
//! kind of `Arg` knows how to render itself as a short token. Rendering never
//! fails and keeps container dumps bounded.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Bounded rendering of long values: `width` characters at most, the last
/// `suffix.len()` of which are the suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abbreviation {
    pub width: usize,
    pub suffix: String,
}

impl Abbreviation {
    pub fn new(width: usize, suffix: impl Into<String>) -> Self {
        Self {
            width,
            suffix: suffix.into(),
        }
    }

    /// Shorten `text` to `width` characters including the suffix.
    ///
    /// ```
    /// use eggshell::Abbreviation;
    ///
    /// let abbr = Abbreviation::new(10, "...");
    /// assert_eq!(abbr.apply("Kevin van Zonneveld"), "Kevin v...");
    /// assert_eq!(abbr.apply("short"), "short");
    /// ```
    pub fn apply(&self, text: &str) -> String {
        if text.chars().count() <= self.width {
            return text.to_string();
        }

        let keep = self.width.saturating_sub(self.suffix.chars().count());
        let mut out: String = text.chars().take(keep).collect();
        out.push_str(&self.suffix);
        out
    }
}

impl Default for Abbreviation {
    fn default() -> Self {
        Self::new(30, "...")
    }
}

/// A value passed to a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered container; keys are the positions.
    List(Vec<Arg>),
    /// Keyed container in insertion order.
    Map(Vec<(String, Arg)>),
    /// Opaque value known only by its type name.
    Object(String),
}

impl Arg {
    /// An opaque argument named after the type of `value`.
    ///
    /// ```
    /// use eggshell::Arg;
    ///
    /// struct Connection;
    /// assert_eq!(Arg::opaque(&Connection), Arg::Object("Connection".to_string()));
    /// ```
    pub fn opaque<T: ?Sized>(_value: &T) -> Self {
        Arg::Object(short_type_name(std::any::type_name::<T>()).to_string())
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Arg::List(_) | Arg::Map(_))
    }

    /// Render as a short, human-readable token.
    ///
    /// Objects render as their type name, numbers as themselves, other
    /// scalars single-quoted. Booleans render as the words `true` and `false`,
    /// not as `1` and an empty string. Containers become `key: value` pairs
    /// with every value abbreviated.
    ///
    /// ```
    /// use eggshell::{Abbreviation, Arg};
    ///
    /// let abbr = Abbreviation::default();
    /// assert_eq!(Arg::from(true).sanitize(&abbr), "true");
    /// assert_eq!(Arg::from(false).sanitize(&abbr), "false");
    /// assert_eq!(Arg::from("db1").sanitize(&abbr), "'db1'");
    /// ```
    pub fn sanitize(&self, abbr: &Abbreviation) -> String {
        match self {
            Arg::List(items) => items
                .iter()
                .enumerate()
                .map(|(key, value)| format!("{}: {}", key, value.sanitize_member(abbr)))
                .collect::<Vec<_>>()
                .join(", "),
            Arg::Map(entries) => entries
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value.sanitize_member(abbr)))
                .collect::<Vec<_>>()
                .join(", "),
            scalar => scalar.scalar_token(),
        }
    }

    /// Like [`sanitize`](Self::sanitize) but leaves strings unquoted.
    pub fn plain(&self, abbr: &Abbreviation) -> String {
        match self {
            Arg::Str(s) => s.clone(),
            other => other.sanitize(abbr),
        }
    }

    fn sanitize_member(&self, abbr: &Abbreviation) -> String {
        let token = if self.is_container() {
            self.to_json_value().to_string()
        } else {
            self.scalar_token()
        };
        abbr.apply(&token)
    }

    fn scalar_token(&self) -> String {
        match self {
            Arg::Null => "''".to_string(),
            Arg::Bool(b) => b.to_string(),
            Arg::Int(i) => i.to_string(),
            Arg::Float(f) => f.to_string(),
            Arg::Str(s) if is_numeric(s) => s.clone(),
            Arg::Str(s) => format!("'{}'", s),
            Arg::Object(name) => name.clone(),
            Arg::List(_) | Arg::Map(_) => self.to_json_value().to_string(),
        }
    }

    /// Convert to serde_json::Value for compact nested rendering
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            Arg::Null => Value::Null,
            Arg::Bool(b) => Value::Bool(*b),
            Arg::Int(i) => Value::Number((*i).into()),
            Arg::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Arg::Str(s) => Value::String(s.clone()),
            Arg::List(items) => Value::Array(items.iter().map(Arg::to_json_value).collect()),
            Arg::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json_value()))
                    .collect(),
            ),
            Arg::Object(name) => Value::String(name.clone()),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sanitize(&Abbreviation::default()))
    }
}

/// Numeric strings are left unquoted: optional sign, digits, optional
/// fraction and exponent, surrounding whitespace allowed.
pub(crate) fn is_numeric(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }
    let body = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let has_digit = body.chars().any(|c| c.is_ascii_digit());
    let only_numeric_chars = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    has_digit && only_numeric_chars && trimmed.parse::<f64>().is_ok()
}

fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl From<()> for Arg {
    fn from(_: ()) -> Self {
        Arg::Null
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

macro_rules! arg_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(i: $t) -> Self {
                Arg::Int(i as i64)
            }
        })*
    };
}

arg_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Arg {
    fn from(u: u64) -> Self {
        i64::try_from(u)
            .map(Arg::Int)
            .unwrap_or_else(|_| Arg::Str(u.to_string()))
    }
}

impl From<usize> for Arg {
    fn from(u: usize) -> Self {
        Arg::from(u as u64)
    }
}

impl From<isize> for Arg {
    fn from(i: isize) -> Self {
        Arg::Int(i as i64)
    }
}

impl From<f32> for Arg {
    fn from(f: f32) -> Self {
        Arg::Float(f as f64)
    }
}

impl From<f64> for Arg {
    fn from(f: f64) -> Self {
        Arg::Float(f)
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Str(c.to_string())
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<&std::path::Path> for Arg {
    fn from(path: &std::path::Path) -> Self {
        Arg::Str(path.display().to_string())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Arg::Null)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Arg>> From<&[T]> for Arg {
    fn from(items: &[T]) -> Self {
        Arg::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<K: ToString, V: Into<Arg>> From<BTreeMap<K, V>> for Arg {
    fn from(map: BTreeMap<K, V>) -> Self {
        Arg::Map(
            map.into_iter()
                .map(|(key, value)| (key.to_string(), value.into()))
                .collect(),
        )
    }
}

impl<K: ToString, V: Into<Arg>> From<HashMap<K, V>> for Arg {
    fn from(map: HashMap<K, V>) -> Self {
        Arg::Map(
            map.into_iter()
                .map(|(key, value)| (key.to_string(), value.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Arg {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Arg::Null,
            Value::Bool(b) => Arg::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(Arg::Int)
                .or_else(|| n.as_f64().map(Arg::Float))
                .unwrap_or_else(|| Arg::Str(n.to_string())),
            Value::String(s) => Arg::Str(s),
            Value::Array(items) => Arg::List(items.into_iter().map(Arg::from).collect()),
            Value::Object(map) => {
                Arg::Map(map.into_iter().map(|(k, v)| (k, Arg::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abbr() -> Abbreviation {
        Abbreviation::default()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(Arg::from(42).sanitize(&abbr()), "42");
        assert_eq!(Arg::from(1.5).sanitize(&abbr()), "1.5");
        assert_eq!(Arg::from(true).sanitize(&abbr()), "true");
        assert_eq!(Arg::from("kevin").sanitize(&abbr()), "'kevin'");
        assert_eq!(Arg::from("42").sanitize(&abbr()), "42");
        assert_eq!(Arg::from("-3.5e2").sanitize(&abbr()), "-3.5e2");
        assert_eq!(Arg::Null.sanitize(&abbr()), "''");
    }

    #[test]
    fn test_top_level_scalar_is_not_abbreviated() {
        let long = "x".repeat(80);
        assert_eq!(Arg::from(long.as_str()).sanitize(&abbr()), format!("'{}'", long));
    }

    #[test]
    fn test_object_renders_type_name() {
        struct Database;
        let arg = Arg::opaque(&Database);
        assert_eq!(arg.sanitize(&abbr()), "Database");
        assert_eq!(Arg::opaque(&vec![1u8]).sanitize(&abbr()), "Vec");
    }

    #[test]
    fn test_list() {
        let arg = Arg::from(vec!["a", "1"]);
        assert_eq!(arg.sanitize(&abbr()), "0: 'a', 1: 1");
    }

    #[test]
    fn test_map_with_nested_container() {
        let arg = Arg::Map(vec![
            ("name".to_string(), Arg::from("egg")),
            ("size".to_string(), Arg::from(3)),
            ("tags".to_string(), Arg::from(vec!["a", "b"])),
        ]);
        assert_eq!(arg.sanitize(&abbr()), "name: 'egg', size: 3, tags: [\"a\",\"b\"]");
    }

    #[test]
    fn test_container_values_are_abbreviated() {
        let arg = Arg::Map(vec![("text".to_string(), Arg::from("y".repeat(50)))]);
        let rendered = arg.sanitize(&abbr());
        let value = rendered.strip_prefix("text: ").unwrap();
        assert_eq!(value.chars().count(), 30);
        assert!(value.ends_with("..."));
        assert!(value.starts_with("'yyy"));
    }

    #[test]
    fn test_abbreviation_boundaries() {
        let abbr = Abbreviation::new(5, "~");
        assert_eq!(abbr.apply("12345"), "12345");
        assert_eq!(abbr.apply("123456"), "1234~");
        assert_eq!(abbr.apply("ééééééé"), "éééé~");
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("10"));
        assert!(is_numeric(" 10 "));
        assert!(is_numeric("+0.5"));
        assert!(is_numeric("1e3"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("inf"));
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric("0x1A"));
        assert!(!is_numeric("12abc"));
    }

    #[test]
    fn test_from_json_value_preserves_order() {
        let value: serde_json::Value = serde_json::from_str(r#"{"b": 1, "a": [true]}"#).unwrap();
        let arg = Arg::from(value);
        assert_eq!(arg.sanitize(&abbr()), "b: 1, a: [true]");
    }
}
