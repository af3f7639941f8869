// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, id-unique collection of example units.

use crate::unit::ExampleUnit;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate unit id: {0}")]
    DuplicateId(String),

    #[error("unit {0} has a zero timeout")]
    InvalidTimeout(String),
}

/// Units in registration order
#[derive(Debug, Default)]
pub struct Registry {
    units: Vec<ExampleUnit>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit; ids must be unique and budgets non-zero
    pub fn register(&mut self, unit: ExampleUnit) -> Result<(), RegistryError> {
        if self.index.contains_key(unit.id()) {
            return Err(RegistryError::DuplicateId(unit.id().to_string()));
        }
        if unit.timeout_ms() == 0 {
            return Err(RegistryError::InvalidTimeout(unit.id().to_string()));
        }
        self.index.insert(unit.id().to_string(), self.units.len());
        self.units.push(unit);
        Ok(())
    }

    /// Every unit in registration order; the iterator can be cloned to
    /// restart it.
    pub fn all(&self) -> std::slice::Iter<'_, ExampleUnit> {
        self.units.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ExampleUnit> {
        self.index.get(id).and_then(|&i| self.units.get(i))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Automated units matching any filter, in registration order.
    ///
    /// No filters selects every automated unit. Manual units are never
    /// selected.
    pub fn select<S: AsRef<str>>(&self, filters: &[S]) -> Vec<&ExampleUnit> {
        self.units
            .iter()
            .filter(|unit| !unit.is_manual())
            .filter(|unit| {
                filters.is_empty() || filters.iter().any(|f| filter_matches(f.as_ref(), unit.id()))
            })
            .collect()
    }

    /// Filters that select no automated unit
    pub fn unmatched<'f, S: AsRef<str>>(&self, filters: &'f [S]) -> Vec<&'f str> {
        filters
            .iter()
            .map(AsRef::as_ref)
            .filter(|f| {
                !self
                    .units
                    .iter()
                    .any(|unit| !unit.is_manual() && filter_matches(f, unit.id()))
            })
            .collect()
    }
}

/// Match a filter against a unit id.
///
/// A filter selects its exact id, any id under it as a dotted prefix
/// (`loops` selects `loops.for`), or ids matching it as a glob.
pub fn filter_matches(filter: &str, id: &str) -> bool {
    if filter == id {
        return true;
    }
    if let Some(rest) = id.strip_prefix(filter) {
        if rest.starts_with('.') {
            return true;
        }
    }
    glob::Pattern::new(filter)
        .map(|pattern| pattern.matches(id))
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
