//! sqlscribe core - a fluent SQL text builder
//!
//! Clause calls accumulate into a [`Statement`]; rendering turns it into SQL
//! text for exactly one of SELECT, INSERT, UPDATE or DELETE. Placeholders
//! written by the caller are embedded verbatim. Binding and running the SQL
//! is left to an execution layer (see [`ConnectionPool`]).

pub mod builder;
pub mod error;
pub mod executor;
pub mod limit;
pub mod sink;
pub mod value;

// Re-export main types
pub use builder::{
    Conjunction, Fragment, IntoFragments, PredicateTarget, QueryBuilder, Sql, Statement,
    StatementKind,
};
pub use error::{Error, Result};
pub use executor::{ConnectionPool, ExecutableStatement};
pub use limit::LimitStrategy;
pub use sink::OutputSink;
pub use value::Value;

/// Create a new, empty statement builder
pub fn sql() -> Sql {
    Sql::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_entry_point() {
        let mut query = sql();
        assert!(query.to_sql().unwrap().is_none());

        query.select("1");
        assert_eq!(query.to_sql().unwrap().as_deref(), Some("SELECT 1"));
    }
}
