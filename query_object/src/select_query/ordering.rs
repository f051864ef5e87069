//! ORDER BY entries

use crate::column::Column;
use crate::output::SqlOutput;
use crate::traits::{QueryElement, Render, TableSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    /// Suffix written after the sort key; ascending is the unmarked default
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "",
            SortOrder::Desc => " DESC",
        }
    }
}

/// A sort key: a column plus its direction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    column: Column,
    direction: SortOrder,
}

impl Order {
    pub fn new(column: Column, ascending: bool) -> Self {
        Self {
            column,
            direction: SortOrder::from_ascending(ascending),
        }
    }

    pub fn asc(column: Column) -> Self {
        Self::new(column, true)
    }

    pub fn desc(column: Column) -> Self {
        Self::new(column, false)
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn direction(&self) -> SortOrder {
        self.direction
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortOrder::Asc
    }
}

impl Render for Order {
    fn write_to(&self, out: &mut dyn SqlOutput) {
        self.column.write_qualified_name(out);
        out.print(self.direction.to_sql());
    }
}

impl QueryElement for Order {
    fn collect_tables(&self, tables: &mut TableSet) {
        self.column.collect_tables(tables);
    }
}
