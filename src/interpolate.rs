// SPDX-License-Identifier: MPL-2.0
//! `{name}` placeholder substitution for translated strings.
//!
//! Templates are scanned once into literal and placeholder runs, then
//! rendered against a [`Params`] set. A placeholder name is a non-empty run
//! of ASCII letters, digits, or underscores between braces; any other brace
//! sequence is plain text. Substituted values are never rescanned, so a
//! parameter value containing brace syntax passes through untouched.

use std::collections::HashMap;
use std::fmt;

/// A value substitutable into a `{name}` placeholder.
///
/// Numbers render in canonical decimal form, the same text `format!` would
/// produce for the underlying type.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(text) => write!(f, "{}", text),
            ParamValue::Int(number) => write!(f, "{}", number),
            ParamValue::Float(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

/// Named parameters for one lookup call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value under `name`.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

enum Token<'t> {
    Literal(&'t str),
    /// `name` is the text between the braces, `raw` the full `{name}` span
    /// kept for verbatim fallback when the parameter is absent.
    Placeholder {
        name: &'t str,
        raw: &'t str,
    },
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Splits `template` into literal and placeholder runs.
///
/// A `{` that does not open a well-formed placeholder is consumed as a
/// single literal byte and scanning resumes right after it, so
/// `"{ {count}"` still yields a `count` placeholder.
fn tokenize(template: &str) -> Vec<Token<'_>> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while cursor < bytes.len() {
        if bytes[cursor] == b'{' {
            let mut end = cursor + 1;
            while end < bytes.len() && is_name_byte(bytes[end]) {
                end += 1;
            }
            let has_name = end > cursor + 1;
            if has_name && end < bytes.len() && bytes[end] == b'}' {
                if literal_start < cursor {
                    tokens.push(Token::Literal(&template[literal_start..cursor]));
                }
                tokens.push(Token::Placeholder {
                    name: &template[cursor + 1..end],
                    raw: &template[cursor..=end],
                });
                cursor = end + 1;
                literal_start = cursor;
                continue;
            }
        }
        cursor += 1;
    }

    if literal_start < bytes.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }
    tokens
}

/// Substitutes `{name}` placeholders in `template` from `params`.
///
/// Every occurrence of a present name is replaced with the value's string
/// form; absent names stay as their original `{name}` text. Single pass,
/// never errors.
pub fn interpolate(template: &str, params: &Params) -> String {
    let mut output = String::with_capacity(template.len());
    for token in tokenize(template) {
        match token {
            Token::Literal(text) => output.push_str(text),
            Token::Placeholder { name, raw } => match params.get(name) {
                Some(value) => output.push_str(&value.to_string()),
                None => output.push_str(raw),
            },
        }
    }
    output
}
