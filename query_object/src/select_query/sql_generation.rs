//! Statement rendering
//!
//! Walks a [`SelectQuery`] and emits its clauses to a render sink in fixed
//! order: SELECT, FROM, WHERE, ORDER BY, OFFSET, FETCH NEXT.

use crate::output::SqlOutput;
use crate::select_query::builder::SelectQuery;
use crate::traits::{QueryElement, Render};

pub struct SqlGenerator;

impl SqlGenerator {
    /// Write the complete statement for `query`
    pub fn write_select(query: &SelectQuery, out: &mut dyn SqlOutput) {
        debug_log!(
            selection = query.list_selection().len(),
            criteria = query.list_criteria().len(),
            order = query.list_order().len(),
            "rendering select query"
        );

        Self::write_select_clause(query, out);

        // Recomputed from current contents on every render
        let tables = query.referenced_tables();
        trace_log!(tables = tables.len(), "discovered referenced tables");
        if !tables.is_empty() {
            out.println_str("FROM");
            Self::write_indented_list(out, &tables, ",");
        }

        if !query.list_criteria().is_empty() {
            out.println_str("WHERE");
            Self::write_indented_list(out, query.list_criteria(), "AND");
        }

        if !query.list_order().is_empty() {
            out.println_str("ORDER BY");
            Self::write_indented_list(out, query.list_order(), ",");
        }

        let pagination = query.pagination();
        if let Some(offset) = pagination.offset_clause() {
            out.println_str(&offset);
        }
        if let Some(fetch) = pagination.fetch_clause() {
            out.println_str(&fetch);
        }
    }

    fn write_select_clause(query: &SelectQuery, out: &mut dyn SqlOutput) {
        out.print("SELECT");
        if query.is_distinct() {
            out.print(" DISTINCT");
        }

        if query.is_all_columns() {
            out.print(" *");
            out.println();
        } else {
            out.println();
            Self::write_indented_list(out, query.list_selection(), ",");
        }
    }

    /// One entry per line inside a single indent level. Every entry is
    /// followed by a space; all but the last also get `separator`.
    pub fn write_indented_list<'a, T, I>(out: &mut dyn SqlOutput, items: I, separator: &str)
    where
        T: Render + 'a,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let last = items.len().saturating_sub(1);

        out.indent();
        for (position, item) in items.enumerate() {
            item.write_to(out);
            out.print_char(' ');
            if position < last {
                out.print(separator);
            }
            out.println();
        }
        out.unindent();
    }
}
