//! Columns and SELECT-list projections

use crate::output::SqlOutput;
use crate::table::Table;
use crate::traits::{QueryElement, Render, TableSet};
use crate::validation::{ValidatedIdentifier, ValidationError};
use std::hash::{Hash, Hasher};

/// A column of a [`Table`], optionally selected under an alias.
///
/// Identity is `(table, effective alias)`: two columns of the same table that
/// end up under the same output name are interchangeable, whatever their
/// underlying column name.
///
/// Column names and aliases follow the same identifier rules as [`Table`]
/// names, so `end`, `table` or `is` are fine while `from` or `order` are not.
#[derive(Debug, Clone)]
pub struct Column {
    table: Table,
    name: String,
    alias: Option<String>,
}

impl Column {
    pub fn new(table: &Table, name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            table: table.clone(),
            name: ValidatedIdentifier::new(name)?.into_string(),
            alias: None,
        })
    }

    pub fn with_alias(table: &Table, name: &str, alias: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            table: table.clone(),
            name: ValidatedIdentifier::new(name)?.into_string(),
            alias: Some(ValidatedIdentifier::new(alias)?.into_string()),
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an explicit alias was supplied
    pub fn has_alias(&self) -> bool {
        self.alias.is_some()
    }

    /// Effective alias: the explicit alias, else the column name
    pub fn alias(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// `<table alias>.<name>`, without any output alias
    pub(crate) fn write_qualified_name(&self, out: &mut dyn SqlOutput) {
        out.print(self.table.alias());
        out.print_char('.');
        out.print(&self.name);
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.alias() == other.alias() && self.table == other.table
    }
}

impl Eq for Column {}

impl Hash for Column {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        self.alias().hash(state);
    }
}

impl Render for Column {
    fn write_to(&self, out: &mut dyn SqlOutput) {
        self.write_qualified_name(out);
        if let Some(alias) = &self.alias {
            out.print(" as ");
            out.print(alias);
        }
    }
}

impl QueryElement for Column {
    fn collect_tables(&self, tables: &mut TableSet) {
        tables.insert(self.table.clone());
    }
}

/// An entry of the SELECT list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Projection {
    /// A single column
    Column(Column),
    /// Every column of a table: `<alias>.*`
    Wildcard(Table),
}

impl From<Column> for Projection {
    fn from(column: Column) -> Self {
        Projection::Column(column)
    }
}

impl Render for Projection {
    fn write_to(&self, out: &mut dyn SqlOutput) {
        match self {
            Projection::Column(column) => column.write_to(out),
            Projection::Wildcard(table) => {
                out.print(table.alias());
                out.print(".*");
            }
        }
    }
}

impl QueryElement for Projection {
    fn collect_tables(&self, tables: &mut TableSet) {
        match self {
            Projection::Column(column) => column.collect_tables(tables),
            Projection::Wildcard(table) => {
                tables.insert(table.clone());
            }
        }
    }
}
