//! Table references
//!
//! A [`Table`] is a named relation plus the alias used to qualify its
//! columns. It is a plain value: cloning it is how columns, criteria and
//! orderings refer back to it.

use crate::column::{Column, Projection};
use crate::output::SqlOutput;
use crate::traits::Render;
use crate::validation::{ValidatedIdentifier, ValidatedTableName, ValidationError};
use std::fmt;

/// A (possibly schema-qualified) table and its alias.
///
/// Two tables are equal when both name and alias match. Without an explicit
/// alias, the alias is the name itself.
///
/// Names and aliases are unquoted identifiers: they must start with a letter
/// or `_`, and may not be one of the keywords the renderer emits (`SELECT`,
/// `DISTINCT`, `FROM`, `WHERE`, `AND`, `OR`, `NOT`, `NULL`, `IN`, `LIKE`,
/// `BETWEEN`, `AS`, `ORDER`, `OFFSET`, `FETCH`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: String,
    alias: String,
}

impl Table {
    /// Table referenced by its own name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = ValidatedTableName::new(name)?.into_string();
        Ok(Self {
            alias: name.clone(),
            name,
        })
    }

    /// Table referenced through an alias (`people employees`)
    pub fn with_alias(name: &str, alias: &str) -> Result<Self, ValidationError> {
        let name = ValidatedTableName::new(name)?.into_string();
        let alias = ValidatedIdentifier::new(alias)?.into_string();
        Ok(Self { name, alias })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alias used to qualify columns; the name when no alias was given
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn has_alias(&self) -> bool {
        self.alias != self.name
    }

    /// New column bound to this table
    pub fn column(&self, name: &str) -> Result<Column, ValidationError> {
        Column::new(self, name)
    }

    /// New column bound to this table, selected under `alias`
    pub fn column_as(&self, name: &str, alias: &str) -> Result<Column, ValidationError> {
        Column::with_alias(self, name, alias)
    }

    /// `<alias>.*` projection for this table
    pub fn wildcard(&self) -> Projection {
        Projection::Wildcard(self.clone())
    }
}

impl Render for Table {
    fn write_to(&self, out: &mut dyn SqlOutput) {
        out.print(&self.name);
        if self.has_alias() {
            out.print_char(' ');
            out.print(&self.alias);
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_alias() {
            write!(f, "{} {}", self.name, self.alias)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
