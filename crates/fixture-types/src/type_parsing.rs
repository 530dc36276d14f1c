//! Type string parsing utilities.
//!
//! Turns descriptor strings into [`TypeDescriptor`]s. Shared by catalogs,
//! the CLI and tests so the grammar lives in one place.

use crate::descriptor::{Classifier, TypeDescriptor};
use std::fmt;

/// A type string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParseError {
    /// The full input that was being parsed
    pub input: String,
    /// What was wrong with it
    pub reason: String,
}

impl TypeParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid type '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for TypeParseError {}

/// Parse a type string into a TypeDescriptor.
///
/// Supports:
/// - Well-known types: `Any`, `Boolean`, `Char`, `Int`, `Long`, `Float`, `Double`, `String`
///   (plus the Rust spellings `bool`, `char`, `i32`, `i64`, `f32`, `f64`)
/// - Containers: `List<T>`, `Collection<T>`, `Array<T>`, `Map<K, V>` (`Vec`, `HashMap`, `BTreeMap`)
/// - Catalog types: `Pair<String, Int>`, `com.example.User`
/// - Nullability: a trailing `?`
/// - Star projections as arguments: `List<*>`
///
/// # Examples
///
/// ```
/// use fixture_types::parse_type_descriptor;
///
/// let ty = parse_type_descriptor("List<Pair<String, Int>>").unwrap();
/// assert_eq!(ty.to_string(), "List<Pair<String, Int>>");
/// ```
pub fn parse_type_descriptor(type_str: &str) -> Result<TypeDescriptor, TypeParseError> {
    parse_type_descriptor_with_params::<&str>(type_str, &[])
}

/// Parse a type string with generic parameter names in scope.
///
/// Bare names listed in `type_params` become [`Classifier::Param`] references,
/// which is how constructor and method signatures of generic catalog types
/// are written (`List<T>` inside `Box<T>`).
pub fn parse_type_descriptor_with_params<S: AsRef<str>>(
    type_str: &str,
    type_params: &[S],
) -> Result<TypeDescriptor, TypeParseError> {
    parse_inner(type_str, type_params, type_str)
}

fn parse_inner<S: AsRef<str>>(
    type_str: &str,
    type_params: &[S],
    original: &str,
) -> Result<TypeDescriptor, TypeParseError> {
    let type_str = type_str.trim();
    if type_str.is_empty() {
        return Err(TypeParseError::new(original, "empty type"));
    }

    let (body, nullable) = match type_str.strip_suffix('?') {
        Some(body) => (body.trim_end(), true),
        None => (type_str, false),
    };

    if body == "*" {
        if nullable {
            return Err(TypeParseError::new(
                original,
                "star projection cannot be nullable",
            ));
        }
        return Ok(TypeDescriptor::star());
    }

    // Split "Name<Args>" into its base and argument list
    let (base, args_str) = match body.find('<') {
        Some(angle_pos) => (body[..angle_pos].trim(), Some(&body[angle_pos..])),
        None => (body, None),
    };

    validate_identifier(base, original)?;

    let type_arguments = match args_str {
        Some(args) => parse_type_args(args, type_params, original)?,
        None => Vec::new(),
    };

    let classifier = if type_params.iter().any(|p| p.as_ref() == base) {
        if !type_arguments.is_empty() {
            return Err(TypeParseError::new(
                original,
                format!("type parameter {} cannot take type arguments", base),
            ));
        }
        Classifier::Param(base.to_string())
    } else {
        Classifier::from_name(base)
    };

    Ok(TypeDescriptor {
        classifier,
        type_arguments,
        nullable,
    })
}

/// Parse type arguments string like "<T1, T2, T3>".
fn parse_type_args<S: AsRef<str>>(
    args_str: &str,
    type_params: &[S],
    original: &str,
) -> Result<Vec<TypeDescriptor>, TypeParseError> {
    let inner = args_str
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| TypeParseError::new(original, "unterminated type argument list"))?;

    if inner.trim().is_empty() {
        return Err(TypeParseError::new(original, "empty type argument list"));
    }
    if inner.trim_end().ends_with(',') {
        return Err(TypeParseError::new(original, "trailing comma in type arguments"));
    }

    let mut depth: i32 = 0;
    for c in inner.chars() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth < 0 {
                    return Err(TypeParseError::new(original, "unbalanced '>'"));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(TypeParseError::new(original, "unbalanced '<'"));
    }

    split_type_params(inner)
        .into_iter()
        .map(|arg| parse_inner(arg, type_params, original))
        .collect()
}

fn validate_identifier(name: &str, original: &str) -> Result<(), TypeParseError> {
    let mut chars = name.chars();
    let first = chars
        .next()
        .ok_or_else(|| TypeParseError::new(original, "missing type name"))?;
    if first.is_ascii_digit() {
        return Err(TypeParseError::new(
            original,
            format!("type name '{}' starts with a digit", name),
        ));
    }
    let valid = |c: char| c.is_alphanumeric() || matches!(c, '_' | '.' | ':' | '$');
    if !valid(first) || !chars.all(valid) {
        return Err(TypeParseError::new(
            original,
            format!("invalid character in type name '{}'", name),
        ));
    }
    Ok(())
}

/// Split type parameters respecting nested angle brackets.
///
/// Given "A, B<C, D>, E", returns ["A", "B<C, D>", "E"] by tracking bracket depth.
pub fn split_type_params(s: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut depth = 0;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            ',' if depth == 0 => {
                result.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < s.len() {
        result.push(s[start..].trim());
    }

    result
}
