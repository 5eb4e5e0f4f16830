//! Declarative filter model.
//!
//! Each site exposes a handful of named option sets (genre, list kind, sort
//! order). A filter's selected option maps to the raw query value the site
//! understands; for the shipped sites that value is a path fragment such as
//! `genre/Action` or `hot-novel`. The empty value always means "not applied".

use serde::{Deserialize, Serialize};

/// The role a filter plays during request resolution.
///
/// Roles form a small closed set; the resolver consumes an explicit priority
/// list over them and silently ignores roles it does not know, so a profile
/// can ship a `Sort` filter today and a future resolver can start honoring it
/// without breaking older hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterRole {
    /// Genre or category of the work.
    Genre,
    /// Listing kind, e.g. hot / completed / most-popular shelves.
    Kind,
    /// Result ordering. Not consulted by the current resolver.
    Sort,
}

/// One selectable entry of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Text shown to the user.
    pub label: String,
    /// Raw value the site expects; unique within the filter, empty for "any".
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// A named, user-adjustable option set.
///
/// Constructed once per site profile; the host mutates `selected` between
/// searches and the filter is read-only while a request is built. `selected`
/// staying in bounds is the constructor's and the host's contract; an
/// out-of-bounds index is a programmer error and panics on access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub role: FilterRole,
    pub name: String,
    pub options: Vec<FilterOption>,
    #[serde(default)]
    pub selected: usize,
}

impl Filter {
    pub fn new(role: FilterRole, name: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self { role, name: name.into(), options, selected: 0 }
    }

    /// Builds a composite filter: a synthetic ("All", "") option is prepended
    /// so "no filter applied" is always representable at index 0.
    pub fn with_any(role: FilterRole, name: impl Into<String>, options: Vec<FilterOption>) -> Self {
        let mut all = vec![FilterOption::new("All", "")];
        all.extend(options);
        Self::new(role, name, all)
    }

    /// Raw query value of the selected option.
    pub fn query_value(&self) -> &str {
        &self.options[self.selected].value
    }

    /// True when the selected option carries the empty "any" value.
    pub fn is_default(&self) -> bool {
        self.query_value().is_empty()
    }

    /// Selects the option whose raw value equals `value`, if present.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|opt| opt.value == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }
}
