//! SELECT query assembler
//!
//! Holds the selection, criteria and ordering collections plus the
//! DISTINCT / `*` flags and pagination counters, and renders them as one
//! statement.

use crate::column::Projection;
use crate::errors::QueryError;
use crate::output::{IndentedWriter, SqlOutput};
use crate::select_query::filter::{ComparisonOperator, Criteria};
use crate::select_query::ordering::Order;
use crate::select_query::pagination::Pagination;
use crate::select_query::sql_generation::SqlGenerator;
use crate::table::Table;
use crate::traits::{QueryElement, Render, TableSet};
use config::RenderConfig;
use std::fmt;

/// Object model of a SELECT statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    pub(crate) selection: Vec<Projection>,
    pub(crate) criteria: Vec<Criteria>,
    pub(crate) order: Vec<Order>,
    pub(crate) distinct: bool,
    pub(crate) all_columns: bool,
    pub(crate) pagination: Pagination,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables referenced anywhere in the query: selection first, then
    /// criteria, then order, each table listed once
    pub fn list_tables(&self) -> Vec<Table> {
        self.referenced_tables()
    }

    /// Append a projection to the SELECT list (duplicates are kept)
    pub fn add_to_selection(&mut self, projection: impl Into<Projection>) -> &mut Self {
        self.selection.push(projection.into());
        self
    }

    /// Select `table.name`
    pub fn add_column(&mut self, table: &Table, name: &str) -> Result<&mut Self, QueryError> {
        let column = table.column(name)?;
        Ok(self.add_to_selection(column))
    }

    /// Select `table.name as alias`
    pub fn add_column_as(
        &mut self,
        table: &Table,
        name: &str,
        alias: &str,
    ) -> Result<&mut Self, QueryError> {
        let column = table.column_as(name, alias)?;
        Ok(self.add_to_selection(column))
    }

    /// Remove the first equal projection; returns whether one was found
    pub fn remove_from_selection(&mut self, projection: &Projection) -> bool {
        remove_first(&mut self.selection, projection)
    }

    pub fn list_selection(&self) -> &[Projection] {
        &self.selection
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn set_distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct = distinct;
        self
    }

    pub fn is_all_columns(&self) -> bool {
        self.all_columns
    }

    /// Render `SELECT *` instead of the selection list. Selected entries
    /// still contribute their tables to FROM.
    pub fn set_all_columns(&mut self, all_columns: bool) -> &mut Self {
        self.all_columns = all_columns;
        self
    }

    pub fn offset(&self) -> u64 {
        self.pagination.offset
    }

    /// Rows to skip; 0 omits the OFFSET clause
    pub fn set_offset(&mut self, offset: u64) -> &mut Self {
        self.pagination.offset = offset;
        self
    }

    pub fn limit(&self) -> u64 {
        self.pagination.limit
    }

    /// Rows to fetch; 0 omits the FETCH NEXT clause
    pub fn set_limit(&mut self, limit: u64) -> &mut Self {
        self.pagination.limit = limit;
        self
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn add_criteria(&mut self, criteria: Criteria) -> &mut Self {
        self.criteria.push(criteria);
        self
    }

    pub fn remove_criteria(&mut self, criteria: &Criteria) -> bool {
        remove_first(&mut self.criteria, criteria)
    }

    pub fn list_criteria(&self) -> &[Criteria] {
        &self.criteria
    }

    /// Join two tables on column equality: `src.src_column = dest.dest_column`
    pub fn add_join(
        &mut self,
        src_table: &Table,
        src_column: &str,
        dest_table: &Table,
        dest_column: &str,
    ) -> Result<&mut Self, QueryError> {
        self.add_join_with(
            src_table,
            src_column,
            ComparisonOperator::Eq,
            dest_table,
            dest_column,
        )
    }

    /// Join two tables with an explicit comparison operator
    pub fn add_join_with(
        &mut self,
        src_table: &Table,
        src_column: &str,
        operator: ComparisonOperator,
        dest_table: &Table,
        dest_column: &str,
    ) -> Result<&mut Self, QueryError> {
        let criteria = Criteria::matches(
            src_table.column(src_column)?,
            operator,
            dest_table.column(dest_column)?,
        );
        Ok(self.add_criteria(criteria))
    }

    pub fn add_order(&mut self, order: Order) -> &mut Self {
        self.order.push(order);
        self
    }

    /// Order by `table.name`, ascending or descending
    pub fn add_order_by(
        &mut self,
        table: &Table,
        name: &str,
        ascending: bool,
    ) -> Result<&mut Self, QueryError> {
        let order = Order::new(table.column(name)?, ascending);
        Ok(self.add_order(order))
    }

    pub fn remove_order(&mut self, order: &Order) -> bool {
        remove_first(&mut self.order, order)
    }

    pub fn list_order(&self) -> &[Order] {
        &self.order
    }

    /// Render with the default layout
    pub fn to_sql(&self) -> String {
        self.to_sql_with(&RenderConfig::default())
    }

    /// Render with an explicit layout
    pub fn to_sql_with(&self, config: &RenderConfig) -> String {
        let mut out = IndentedWriter::new(config);
        self.write_to(&mut out);
        out.into_string()
    }
}

fn remove_first<T: PartialEq>(items: &mut Vec<T>, target: &T) -> bool {
    match items.iter().position(|item| item == target) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

impl Render for SelectQuery {
    fn write_to(&self, out: &mut dyn SqlOutput) {
        SqlGenerator::write_select(self, out);
    }
}

impl QueryElement for SelectQuery {
    fn collect_tables(&self, tables: &mut TableSet) {
        for projection in &self.selection {
            projection.collect_tables(tables);
        }
        for criteria in &self.criteria {
            criteria.collect_tables(tables);
        }
        for order in &self.order {
            order.collect_tables(tables);
        }
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
