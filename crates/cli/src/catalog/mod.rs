// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in tutorial units, one module per topic.
//!
//! Each unit prints through its [`Host`](crate::unit::Host) and carries the
//! transcript the tutorial promises. Values are printed the way a console
//! shows them: objects as `{ key: value }`, arrays as `[ a, b ]`, strings
//! inside containers in single quotes.

mod builtins;
mod conditionals;
mod datatypes;
mod functions;
mod keywords;
mod loops;
mod operators;

use crate::registry::{Registry, RegistryError};

type RegisterFn = fn(&mut Registry) -> Result<(), RegistryError>;

/// Topics in tutorial order
const TOPICS: &[RegisterFn] = &[
    conditionals::register,
    loops::register,
    functions::register,
    operators::register,
    datatypes::register,
    keywords::register,
    builtins::register,
];

/// Registry holding every built-in unit
pub fn builtin() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    for register in TOPICS {
        register(&mut registry)?;
    }
    Ok(registry)
}

/// A loosely typed value, printed the way a console prints it
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Dynamic {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl std::fmt::Display for Dynamic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dynamic::Number(n) => write!(f, "{}", n),
            Dynamic::Text(s) => f.write_str(s),
            Dynamic::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// `'text'`, the way a string shows inside an object or array
pub(crate) fn quoted(text: &str) -> String {
    format!("'{}'", text)
}

/// `{ a: 1, b: 'x' }`
pub(crate) fn object<K, V>(fields: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}: {}", k.as_ref(), v.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {} }}", body)
}

/// `[ 1, 2, 3 ]`
pub(crate) fn array<T: std::fmt::Display>(items: &[T]) -> String {
    let body = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[ {} ]", body)
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
