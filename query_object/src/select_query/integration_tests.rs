//! Larger query scenarios

#[cfg(test)]
mod integration_tests {
    use crate::select_query::{Criteria, Order, SelectQuery};
    use crate::table::Table;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use sql_literal::SqlValue;
    use std::time::Instant;

    // ========================================
    // Volume Edge Cases
    // ========================================

    #[test]
    fn test_many_columns_from_one_table() {
        let start = Instant::now();
        let people = Table::new("people").unwrap();

        let mut query = SelectQuery::new();
        for i in 0..1000 {
            query.add_column(&people, &format!("field_{}", i)).unwrap();
        }

        let sql = query.to_sql();
        let duration = start.elapsed();

        assert!(duration.as_millis() < 500);
        assert_eq!(query.list_tables(), vec![people]);
        // 1000 entries = 999 separators
        assert_eq!(sql.matches(" ,\n").count(), 999);
        assert!(sql.contains("people.field_999 \nFROM"));
    }

    #[test]
    fn test_many_tables_are_deduplicated() {
        let tables: Vec<Table> = (0..50)
            .map(|i| Table::with_alias("people", &format!("p{}", i)).unwrap())
            .collect();

        let mut query = SelectQuery::new();
        for round in 0..3 {
            for table in &tables {
                query.add_column(table, &format!("c{}", round)).unwrap();
            }
        }

        assert_eq!(query.list_tables(), tables);
        let from = query.to_sql();
        let from = from.split("FROM\n").nth(1).unwrap();
        assert_eq!(from.lines().count(), 50);
    }

    #[test]
    fn test_deep_criteria_nesting() {
        let people = Table::new("people").unwrap();
        let mut criteria = Criteria::eq(people.column("base").unwrap(), json!("value"));

        for i in 0..50 {
            criteria = Criteria::and(vec![
                criteria,
                Criteria::eq(people.column(&format!("level_{}", i)).unwrap(), json!(i)),
            ]);
        }

        let mut query = SelectQuery::new();
        query.add_criteria(criteria);
        let sql = query.to_sql();

        assert_eq!(sql.matches('(').count(), 50);
        assert_eq!(sql.matches(')').count(), 50);
        assert_eq!(sql.matches(" AND ").count(), 50);
        assert_eq!(query.list_tables(), vec![people]);
    }

    #[test]
    fn test_large_in_clause() {
        let people = Table::new("people").unwrap();
        let values: Vec<SqlValue> = (0..1000).map(SqlValue::from).collect();

        let mut query = SelectQuery::new();
        query.add_to_selection(people.wildcard());
        query.add_criteria(Criteria::in_values(people.column("id").unwrap(), values));

        let sql = query.to_sql();
        assert!(sql.contains("people.id IN (0, 1, 2,"));
        assert!(sql.contains("998, 999) \n"));
    }

    // ========================================
    // Realistic Scenarios
    // ========================================

    #[test]
    fn test_report_query() {
        let orders = Table::with_alias("sales.orders", "o").unwrap();
        let customers = Table::with_alias("sales.customers", "c").unwrap();

        let mut query = SelectQuery::new();
        query.set_distinct(true);
        query.add_column_as(&customers, "name", "customer").unwrap();
        query.add_column(&orders, "total").unwrap();
        query.add_join(&orders, "customer_id", &customers, "id").unwrap();
        query.add_criteria(Criteria::or(vec![
            Criteria::eq(orders.column("status").unwrap(), json!("shipped")),
            Criteria::eq(orders.column("status").unwrap(), json!("delivered")),
        ]));
        query.add_criteria(Criteria::between(
            orders.column("placed_at").unwrap(),
            SqlValue::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            SqlValue::from(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
        ));
        query.add_order(Order::desc(orders.column("total").unwrap()));
        query.set_limit(25);

        assert_eq!(
            query.to_sql(),
            "SELECT DISTINCT\n\
             \x20   c.name as customer ,\n\
             \x20   o.total \n\
             FROM\n\
             \x20   sales.customers c ,\n\
             \x20   sales.orders o \n\
             WHERE\n\
             \x20   o.customer_id = c.id AND\n\
             \x20   (o.status = 'shipped' OR o.status = 'delivered') AND\n\
             \x20   o.placed_at BETWEEN '2024-01-01 00:00:00.000000' AND '2024-02-01 00:00:00.000000' \n\
             ORDER BY\n\
             \x20   o.total DESC \n\
             FETCH NEXT 25 ROWS ONLY\n"
        );
    }

    #[test]
    fn test_conditional_building() {
        let people = Table::new("people").unwrap();
        let name_filter: Option<&str> = Some("Smith");
        let min_age: Option<i64> = None;

        let mut query = SelectQuery::new();
        query.add_to_selection(people.wildcard());
        if let Some(name) = name_filter {
            query.add_criteria(Criteria::eq(
                people.column("lastname").unwrap(),
                SqlValue::from(name),
            ));
        }
        if let Some(age) = min_age {
            query.add_criteria(Criteria::ge(
                people.column("age").unwrap(),
                SqlValue::from(age),
            ));
        }

        let sql = query.to_sql();
        assert!(sql.contains("WHERE\n    people.lastname = 'Smith' \n"));
        assert!(!sql.contains("AND"));
    }
}
