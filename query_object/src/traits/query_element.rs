use crate::output::SqlOutput;
use crate::table::Table;
use indexmap::IndexSet;

/// Insertion-ordered set of tables, de-duplicated by table equality
pub type TableSet = IndexSet<Table>;

/// Anything that can write itself to a render sink
pub trait Render {
    fn write_to(&self, out: &mut dyn SqlOutput);
}

/// A renderable part of a query that also knows which tables it touches
pub trait QueryElement: Render {
    /// Add every table referenced by this element, in discovery order
    fn collect_tables(&self, tables: &mut TableSet);

    /// Referenced tables of this element alone
    fn referenced_tables(&self) -> Vec<Table> {
        let mut tables = TableSet::new();
        self.collect_tables(&mut tables);
        tables.into_iter().collect()
    }
}
