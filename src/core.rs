//! Core sqlweave functionality
//!
//! This module contains the main SqlWeave struct: it owns the render
//! configuration and a catalog of named queries.

use std::collections::HashMap;

use crate::errors::SqlWeaveError;
use config::AppConfig;
use query_object::SelectQuery;

/// Main coordinator that renders queries with one configuration
#[derive(Debug, Clone, Default)]
pub struct SqlWeave {
    config: AppConfig,
    queries: HashMap<String, SelectQuery>,
}

impl SqlWeave {
    /// Create with an explicit configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            queries: HashMap::new(),
        }
    }

    /// Create from `SQLWEAVE_CONFIG` / `./sqlweave.toml`, falling back to defaults
    pub fn load() -> Result<Self, SqlWeaveError> {
        let config = AppConfig::load_or_default()?;
        tracing::debug!(
            indent_width = config.render.indent_width,
            "loaded render configuration"
        );
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render a query with this instance's configuration
    pub fn render(&self, query: &SelectQuery) -> String {
        query.to_sql_with(&self.config.render)
    }

    /// Register a query under a name
    pub fn register_query(
        &mut self,
        name: String,
        query: SelectQuery,
    ) -> Result<(), SqlWeaveError> {
        if self.queries.contains_key(&name) {
            return Err(SqlWeaveError::QueryAlreadyRegistered(name));
        }

        self.queries.insert(name, query);
        Ok(())
    }

    /// Get a registered query by name
    pub fn get_query(&self, name: &str) -> Result<&SelectQuery, SqlWeaveError> {
        self.queries
            .get(name)
            .ok_or_else(|| SqlWeaveError::QueryNotFound(name.to_string()))
    }

    /// Get a mutable reference to a registered query by name
    pub fn get_query_mut(&mut self, name: &str) -> Result<&mut SelectQuery, SqlWeaveError> {
        self.queries
            .get_mut(name)
            .ok_or_else(|| SqlWeaveError::QueryNotFound(name.to_string()))
    }

    /// Render a registered query by name
    pub fn render_named(&self, name: &str) -> Result<String, SqlWeaveError> {
        self.get_query(name).map(|query| self.render(query))
    }

    /// List all registered query names
    pub fn list_queries(&self) -> Vec<&String> {
        self.queries.keys().collect()
    }

    /// Remove a query by name
    pub fn unregister_query(&mut self, name: &str) -> Result<SelectQuery, SqlWeaveError> {
        self.queries
            .remove(name)
            .ok_or_else(|| SqlWeaveError::QueryNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{LineEnding, RenderConfig};
    use query_object::Table;

    fn people_query() -> SelectQuery {
        let people = Table::new("people").unwrap();
        let mut query = SelectQuery::new();
        query.add_column(&people, "id").unwrap();
        query
    }

    #[test]
    fn test_render_uses_configuration() {
        let weave = SqlWeave::new(AppConfig {
            render: RenderConfig::new(1, LineEnding::Lf),
        });
        assert_eq!(
            weave.render(&people_query()),
            "SELECT\n people.id \nFROM\n people \n"
        );
    }

    #[test]
    fn test_register_and_render_named() {
        let mut weave = SqlWeave::default();
        weave
            .register_query("people".to_string(), people_query())
            .unwrap();

        assert_eq!(
            weave.render_named("people").unwrap(),
            people_query().to_sql()
        );
        assert_eq!(weave.list_queries(), vec!["people"]);
    }

    #[test]
    fn test_duplicate_registration() {
        let mut weave = SqlWeave::default();
        weave
            .register_query("q".to_string(), SelectQuery::new())
            .unwrap();

        let result = weave.register_query("q".to_string(), SelectQuery::new());
        assert!(matches!(result, Err(SqlWeaveError::QueryAlreadyRegistered(name)) if name == "q"));
    }

    #[test]
    fn test_mutate_registered_query() {
        let mut weave = SqlWeave::default();
        weave
            .register_query("people".to_string(), people_query())
            .unwrap();

        weave.get_query_mut("people").unwrap().set_limit(1);
        assert!(weave
            .render_named("people")
            .unwrap()
            .ends_with("FETCH NEXT 1 ROW ONLY\n"));
    }

    #[test]
    fn test_missing_query() {
        let mut weave = SqlWeave::default();
        assert!(matches!(
            weave.render_named("absent"),
            Err(SqlWeaveError::QueryNotFound(_))
        ));
        assert!(weave.unregister_query("absent").is_err());

        weave
            .register_query("q".to_string(), SelectQuery::new())
            .unwrap();
        assert_eq!(weave.unregister_query("q").unwrap(), SelectQuery::new());
        assert!(weave.list_queries().is_empty());
    }
}
