//! WHERE-clause criteria
//!
//! Every criteria renders as a boolean SQL expression and reports the tables
//! its operands touch, so that a query picks up tables that only appear in
//! its predicates.

use crate::column::Column;
use crate::errors::QueryError;
use crate::output::SqlOutput;
use crate::traits::{QueryElement, Render, TableSet};
use crate::validation::{validate_operator, ValidationError};
use sql_literal::{to_sql_literal, SqlValue};
use std::str::FromStr;

/// One side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(Column),
    Literal(SqlValue),
}

impl Operand {
    pub fn literal(value: impl Into<SqlValue>) -> Self {
        Operand::Literal(value.into())
    }
}

impl From<Column> for Operand {
    fn from(column: Column) -> Self {
        Operand::Column(column)
    }
}

impl From<&Column> for Operand {
    fn from(column: &Column) -> Self {
        Operand::Column(column.clone())
    }
}

impl From<SqlValue> for Operand {
    fn from(value: SqlValue) -> Self {
        Operand::Literal(value)
    }
}

impl From<serde_json::Value> for Operand {
    fn from(value: serde_json::Value) -> Self {
        Operand::Literal(sql_literal::from_json(value))
    }
}

impl Render for Operand {
    fn write_to(&self, out: &mut dyn SqlOutput) {
        match self {
            // Operands never carry the SELECT-list alias
            Operand::Column(column) => column.write_qualified_name(out),
            Operand::Literal(value) => out.print(&to_sql_literal(value)),
        }
    }
}

impl QueryElement for Operand {
    fn collect_tables(&self, tables: &mut TableSet) {
        if let Operand::Column(column) = self {
            column.collect_tables(tables);
        }
    }
}

/// Caller-supplied operator text that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomOperator(String);

impl CustomOperator {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comparison operators for match criteria
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComparisonOperator {
    #[default]
    Eq, // =
    Ne,   // <>
    Lt,   // <
    Gt,   // >
    Le,   // <=
    Ge,   // >=
    Like, // LIKE
    Custom(CustomOperator),
}

impl ComparisonOperator {
    /// Arbitrary operator text, e.g. `ILIKE` or `@>`
    pub fn custom(text: &str) -> Result<Self, ValidationError> {
        let text = validate_operator(text)?;
        Ok(ComparisonOperator::Custom(CustomOperator(text.to_string())))
    }

    pub fn to_sql(&self) -> &str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::Ne => "<>",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Le => "<=",
            ComparisonOperator::Ge => ">=",
            ComparisonOperator::Like => "LIKE",
            ComparisonOperator::Custom(op) => op.as_str(),
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim() {
            "=" => ComparisonOperator::Eq,
            "<>" | "!=" => ComparisonOperator::Ne,
            "<" => ComparisonOperator::Lt,
            ">" => ComparisonOperator::Gt,
            "<=" => ComparisonOperator::Le,
            ">=" => ComparisonOperator::Ge,
            other if other.eq_ignore_ascii_case("LIKE") => ComparisonOperator::Like,
            other => ComparisonOperator::custom(other)?,
        };
        Ok(op)
    }
}

/// Logical operators for combining criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

/// A boolean predicate usable in a WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria {
    /// `<left> <operator> <right>`
    Match {
        left: Operand,
        operator: ComparisonOperator,
        right: Operand,
    },
    /// Parenthesised AND/OR of nested criteria
    Group {
        operator: LogicalOperator,
        criteria: Vec<Criteria>,
    },
    Not(Box<Criteria>),
    IsNull {
        operand: Operand,
        negated: bool,
    },
    In {
        operand: Operand,
        values: Vec<SqlValue>,
        negated: bool,
    },
    Between {
        operand: Operand,
        low: Operand,
        high: Operand,
    },
}

impl Criteria {
    /// Match criteria with an explicit operator
    pub fn matches(
        left: impl Into<Operand>,
        operator: ComparisonOperator,
        right: impl Into<Operand>,
    ) -> Self {
        Criteria::Match {
            left: left.into(),
            operator,
            right: right.into(),
        }
    }

    pub fn eq(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::matches(left, ComparisonOperator::Eq, right)
    }

    pub fn ne(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::matches(left, ComparisonOperator::Ne, right)
    }

    pub fn lt(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::matches(left, ComparisonOperator::Lt, right)
    }

    pub fn gt(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::matches(left, ComparisonOperator::Gt, right)
    }

    pub fn le(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::matches(left, ComparisonOperator::Le, right)
    }

    pub fn ge(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::matches(left, ComparisonOperator::Ge, right)
    }

    pub fn like(left: impl Into<Operand>, pattern: &str) -> Self {
        Self::matches(left, ComparisonOperator::Like, Operand::literal(pattern))
    }

    /// Create AND group
    pub fn and(criteria: Vec<Criteria>) -> Self {
        Criteria::Group {
            operator: LogicalOperator::And,
            criteria,
        }
    }

    /// Create OR group
    pub fn or(criteria: Vec<Criteria>) -> Self {
        Criteria::Group {
            operator: LogicalOperator::Or,
            criteria,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(criteria: Criteria) -> Self {
        Criteria::Not(Box::new(criteria))
    }

    pub fn is_null(operand: impl Into<Operand>) -> Self {
        Criteria::IsNull {
            operand: operand.into(),
            negated: false,
        }
    }

    pub fn is_not_null(operand: impl Into<Operand>) -> Self {
        Criteria::IsNull {
            operand: operand.into(),
            negated: true,
        }
    }

    pub fn in_values(operand: impl Into<Operand>, values: Vec<SqlValue>) -> Self {
        Criteria::In {
            operand: operand.into(),
            values,
            negated: false,
        }
    }

    pub fn not_in_values(operand: impl Into<Operand>, values: Vec<SqlValue>) -> Self {
        Criteria::In {
            operand: operand.into(),
            values,
            negated: true,
        }
    }

    pub fn between(
        operand: impl Into<Operand>,
        low: impl Into<Operand>,
        high: impl Into<Operand>,
    ) -> Self {
        Criteria::Between {
            operand: operand.into(),
            low: low.into(),
            high: high.into(),
        }
    }
}

impl Render for Criteria {
    fn write_to(&self, out: &mut dyn SqlOutput) {
        match self {
            Criteria::Match {
                left,
                operator,
                right,
            } => {
                left.write_to(out);
                out.print_char(' ');
                out.print(operator.to_sql());
                out.print_char(' ');
                right.write_to(out);
            }
            Criteria::Group { operator, criteria } => match criteria.as_slice() {
                // Empty groups keep their neutral truth value
                [] => out.print(match operator {
                    LogicalOperator::And => "1=1",
                    LogicalOperator::Or => "1=0",
                }),
                [single] => single.write_to(out),
                many => {
                    out.print_char('(');
                    for (position, criteria) in many.iter().enumerate() {
                        if position > 0 {
                            out.print_char(' ');
                            out.print(operator.to_sql());
                            out.print_char(' ');
                        }
                        criteria.write_to(out);
                    }
                    out.print_char(')');
                }
            },
            Criteria::Not(inner) => {
                out.print("NOT (");
                inner.write_to(out);
                out.print_char(')');
            }
            Criteria::IsNull { operand, negated } => {
                operand.write_to(out);
                out.print(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Criteria::In {
                operand,
                values,
                negated,
            } => {
                if values.is_empty() {
                    out.print(if *negated { "1=1" } else { "1=0" });
                    return;
                }
                operand.write_to(out);
                out.print(if *negated { " NOT IN (" } else { " IN (" });
                let literals: Vec<String> = values.iter().map(to_sql_literal).collect();
                out.print(&literals.join(", "));
                out.print_char(')');
            }
            Criteria::Between { operand, low, high } => {
                operand.write_to(out);
                out.print(" BETWEEN ");
                low.write_to(out);
                out.print(" AND ");
                high.write_to(out);
            }
        }
    }
}

impl QueryElement for Criteria {
    fn collect_tables(&self, tables: &mut TableSet) {
        match self {
            Criteria::Match { left, right, .. } => {
                left.collect_tables(tables);
                right.collect_tables(tables);
            }
            Criteria::Group { criteria, .. } => {
                for criteria in criteria {
                    criteria.collect_tables(tables);
                }
            }
            Criteria::Not(inner) => inner.collect_tables(tables),
            Criteria::IsNull { operand, .. } | Criteria::In { operand, .. } => {
                operand.collect_tables(tables)
            }
            Criteria::Between { operand, low, high } => {
                operand.collect_tables(tables);
                low.collect_tables(tables);
                high.collect_tables(tables);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::IndentedWriter;
    use crate::table::Table;
    use serde_json::json;

    fn rendered(criteria: &Criteria) -> String {
        let mut out = IndentedWriter::default();
        criteria.write_to(&mut out);
        out.into_string()
    }

    fn people() -> Table {
        Table::new("people").unwrap()
    }

    #[test]
    fn test_column_to_column_match() {
        let employees = Table::with_alias("people", "employees").unwrap();
        let managers = Table::with_alias("people", "managers").unwrap();

        let join = Criteria::eq(
            employees.column("managerID").unwrap(),
            managers.column("id").unwrap(),
        );

        assert_eq!(rendered(&join), "employees.managerID = managers.id");
        assert_eq!(join.referenced_tables(), vec![employees, managers]);
    }

    #[test]
    fn test_operand_ignores_select_alias() {
        let people = people();
        let criteria = Criteria::gt(
            people.column_as("age", "years").unwrap(),
            SqlValue::from(30),
        );
        assert_eq!(rendered(&criteria), "people.age > 30");
    }

    #[test]
    fn test_literal_operands() {
        let people = people();
        let name = people.column("name").unwrap();

        assert_eq!(
            rendered(&Criteria::eq(&name, SqlValue::from("O'Brien"))),
            "people.name = 'O''Brien'"
        );
        assert_eq!(
            rendered(&Criteria::ne(&name, json!(null))),
            "people.name <> NULL"
        );
        assert_eq!(
            rendered(&Criteria::like(&name, "J%")),
            "people.name LIKE 'J%'"
        );

        // Literals reference no tables
        let criteria = Criteria::eq(Operand::literal(1), Operand::literal(1));
        assert!(criteria.referenced_tables().is_empty());
    }

    #[test]
    fn test_all_standard_operators() {
        let people = people();
        let age = people.column("age").unwrap();
        let cases = [
            (Criteria::lt(&age, json!(1)), "people.age < 1"),
            (Criteria::le(&age, json!(1)), "people.age <= 1"),
            (Criteria::ge(&age, json!(1)), "people.age >= 1"),
            (Criteria::gt(&age, json!(1)), "people.age > 1"),
        ];
        for (criteria, expected) in cases {
            assert_eq!(rendered(&criteria), expected);
        }
    }

    #[test]
    fn test_custom_operator() {
        let people = people();
        let op = ComparisonOperator::custom("ILIKE").unwrap();
        let criteria = Criteria::matches(
            people.column("name").unwrap(),
            op,
            SqlValue::from("%smith%"),
        );
        assert_eq!(rendered(&criteria), "people.name ILIKE '%smith%'");

        assert!(ComparisonOperator::custom("").is_err());
        assert!(ComparisonOperator::custom("= 1; DELETE").is_err());
    }

    #[test]
    fn test_operator_parsing() {
        let parse = |text: &str| text.parse::<ComparisonOperator>().unwrap();
        assert_eq!(parse("="), ComparisonOperator::Eq);
        assert_eq!(parse("!="), ComparisonOperator::Ne);
        assert_eq!(parse("<>"), ComparisonOperator::Ne);
        assert_eq!(parse("like"), ComparisonOperator::Like);
        assert_eq!(parse("@>").to_sql(), "@>");
        assert!(matches!(
            "".parse::<ComparisonOperator>(),
            Err(QueryError::Validation(ValidationError::InvalidOperator(_)))
        ));
        assert_eq!(ComparisonOperator::default(), ComparisonOperator::Eq);
    }

    #[test]
    fn test_groups() {
        let people = people();
        let status = people.column("status").unwrap();

        let either = Criteria::or(vec![
            Criteria::eq(&status, json!("active")),
            Criteria::eq(&status, json!("pending")),
        ]);
        assert_eq!(
            rendered(&either),
            "(people.status = 'active' OR people.status = 'pending')"
        );

        let single = Criteria::and(vec![Criteria::eq(&status, json!("active"))]);
        assert_eq!(rendered(&single), "people.status = 'active'");

        assert_eq!(rendered(&Criteria::and(vec![])), "1=1");
        assert_eq!(rendered(&Criteria::or(vec![])), "1=0");
    }

    #[test]
    fn test_nested_group_collects_all_tables() {
        let a = Table::new("a").unwrap();
        let b = Table::new("b").unwrap();
        let c = Table::new("c").unwrap();

        let criteria = Criteria::and(vec![
            Criteria::eq(a.column("id").unwrap(), b.column("a_id").unwrap()),
            Criteria::not(Criteria::or(vec![
                Criteria::is_null(c.column("x").unwrap()),
                Criteria::eq(a.column("id").unwrap(), json!(3)),
            ])),
        ]);

        assert_eq!(criteria.referenced_tables(), vec![a, b, c]);
        assert_eq!(
            rendered(&criteria),
            "(a.id = b.a_id AND NOT ((c.x IS NULL OR a.id = 3)))"
        );
    }

    #[test]
    fn test_null_checks() {
        let people = people();
        let deleted = people.column("deleted_at").unwrap();
        assert_eq!(rendered(&Criteria::is_null(&deleted)), "people.deleted_at IS NULL");
        assert_eq!(
            rendered(&Criteria::is_not_null(&deleted)),
            "people.deleted_at IS NOT NULL"
        );
    }

    #[test]
    fn test_in_lists() {
        let people = people();
        let id = people.column("id").unwrap();

        let criteria = Criteria::in_values(&id, vec![1.into(), 2.into(), 3.into()]);
        assert_eq!(rendered(&criteria), "people.id IN (1, 2, 3)");

        let criteria = Criteria::not_in_values(&id, vec!["a".into()]);
        assert_eq!(rendered(&criteria), "people.id NOT IN ('a')");

        assert_eq!(rendered(&Criteria::in_values(&id, vec![])), "1=0");
        assert_eq!(rendered(&Criteria::not_in_values(&id, vec![])), "1=1");
        assert_eq!(
            Criteria::in_values(&id, vec![]).referenced_tables(),
            vec![people]
        );
    }

    #[test]
    fn test_between() {
        let people = people();
        let limits = Table::new("limits").unwrap();
        let criteria = Criteria::between(
            people.column("age").unwrap(),
            SqlValue::from(18),
            limits.column("max_age").unwrap(),
        );

        assert_eq!(
            rendered(&criteria),
            "people.age BETWEEN 18 AND limits.max_age"
        );
        assert_eq!(criteria.referenced_tables(), vec![people, limits]);
    }
}
