//! Hand-off of rendered SQL to an execution layer
//!
//! Nothing in this crate connects to a database. [`ConnectionPool`] is the
//! contract an execution layer implements; [`ExecutableStatement`] renders a
//! builder and passes the text plus caller-assembled parameters to it.

use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::debug;

use crate::{Error, QueryBuilder, Result, Value};

/// Trait for whatever binds parameters and runs SQL
pub trait ConnectionPool: Send + Sync {
    /// Execute a statement that returns no rows (INSERT, UPDATE, DELETE)
    fn execute(&self, sql: &str, params: &[Value]) -> impl Future<Output = Result<u64>> + Send;

    /// Execute a query that returns multiple rows
    fn fetch_all<T>(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl Future<Output = Result<Vec<T>>> + Send
    where
        T: DeserializeOwned + Send + Unpin;

    /// Execute a query that returns exactly one row
    fn fetch_one<T>(&self, sql: &str, params: &[Value]) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send + Unpin;

    /// Execute a query that returns at most one row
    fn fetch_optional<T>(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl Future<Output = Result<Option<T>>> + Send
    where
        T: DeserializeOwned + Send + Unpin;
}

fn render_for_execution<B: QueryBuilder + ?Sized>(builder: &B) -> Result<String> {
    let sql = builder.to_sql()?.ok_or(Error::NoStatement)?;
    debug!(sql = %sql, "handing SQL to connection pool");
    Ok(sql)
}

/// Extension trait adding execution to every builder.
///
/// Rendering happens before the pool is called, so a builder with no
/// statement kind fails with [`Error::NoStatement`] without touching the pool.
pub trait ExecutableStatement: QueryBuilder {
    /// Execute and return the number of affected rows
    fn execute<P>(&self, pool: &P, params: &[Value]) -> impl Future<Output = Result<u64>> + Send
    where
        P: ConnectionPool,
    {
        let sql = render_for_execution(self);
        async move {
            let sql = sql?;
            pool.execute(&sql, params).await
        }
    }

    /// Execute and return all rows
    fn fetch_all<T, P>(
        &self,
        pool: &P,
        params: &[Value],
    ) -> impl Future<Output = Result<Vec<T>>> + Send
    where
        P: ConnectionPool,
        T: DeserializeOwned + Send + Unpin,
    {
        let sql = render_for_execution(self);
        async move {
            let sql = sql?;
            pool.fetch_all(&sql, params).await
        }
    }

    /// Execute and return the single row
    fn fetch_one<T, P>(&self, pool: &P, params: &[Value]) -> impl Future<Output = Result<T>> + Send
    where
        P: ConnectionPool,
        T: DeserializeOwned + Send + Unpin,
    {
        let sql = render_for_execution(self);
        async move {
            let sql = sql?;
            pool.fetch_one(&sql, params).await
        }
    }

    /// Execute and return the row, if any
    fn fetch_optional<T, P>(
        &self,
        pool: &P,
        params: &[Value],
    ) -> impl Future<Output = Result<Option<T>>> + Send
    where
        P: ConnectionPool,
        T: DeserializeOwned + Send + Unpin,
    {
        let sql = render_for_execution(self);
        async move {
            let sql = sql?;
            pool.fetch_optional(&sql, params).await
        }
    }
}

impl<B: QueryBuilder + ?Sized> ExecutableStatement for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sql;
    use serde::Deserialize;
    use std::sync::Mutex;

    /// Records every call and answers from canned JSON rows
    #[derive(Default)]
    struct RecordingPool {
        calls: Mutex<Vec<(String, Vec<Value>)>>,
        rows: Vec<serde_json::Value>,
    }

    impl RecordingPool {
        fn with_rows(rows: Vec<serde_json::Value>) -> Self {
            Self {
                rows,
                ..Default::default()
            }
        }

        fn record(&self, sql: &str, params: &[Value]) {
            self.calls
                .lock()
                .unwrap()
                .push((sql.to_string(), params.to_vec()));
        }

        fn calls(&self) -> Vec<(String, Vec<Value>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ConnectionPool for RecordingPool {
        async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64> {
            self.record(sql, params);
            Ok(self.rows.len() as u64)
        }

        async fn fetch_all<T>(&self, sql: &str, params: &[Value]) -> Result<Vec<T>>
        where
            T: DeserializeOwned + Send + Unpin,
        {
            self.record(sql, params);
            self.rows
                .iter()
                .map(|row| serde_json::from_value(row.clone()).map_err(Error::from))
                .collect()
        }

        async fn fetch_one<T>(&self, sql: &str, params: &[Value]) -> Result<T>
        where
            T: DeserializeOwned + Send + Unpin,
        {
            self.record(sql, params);
            let row = self
                .rows
                .first()
                .ok_or_else(|| Error::execution("no rows returned"))?;
            Ok(serde_json::from_value(row.clone())?)
        }

        async fn fetch_optional<T>(&self, sql: &str, params: &[Value]) -> Result<Option<T>>
        where
            T: DeserializeOwned + Send + Unpin,
        {
            self.record(sql, params);
            match self.rows.first() {
                Some(row) => Ok(Some(serde_json::from_value(row.clone())?)),
                None => Ok(None),
            }
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: i64,
        name: String,
    }

    #[tokio::test]
    async fn test_fetch_all_passes_sql_and_params() {
        let pool = RecordingPool::with_rows(vec![
            serde_json::json!({ "id": 1, "name": "Ada" }),
            serde_json::json!({ "id": 2, "name": "Grace" }),
        ]);

        let mut query = Sql::new();
        query.select(["id", "name"]).from("users").where_("age > ?");

        let users: Vec<User> = query.fetch_all(&pool, &[Value::from(18)]).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Grace");

        let calls = pool.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "SELECT id, name\nFROM users\nWHERE (age > ?)");
        assert_eq!(calls[0].1, vec![Value::Int(18)]);
    }

    #[tokio::test]
    async fn test_execute_modification() {
        let pool = RecordingPool::with_rows(vec![serde_json::json!(null)]);

        let mut query = Sql::new();
        query.delete_from("sessions").where_("expires_at < ?");

        let affected = query
            .execute(&pool, &[Value::from("2024-01-01")])
            .await
            .unwrap();
        assert_eq!(affected, 1);
        assert_eq!(pool.calls()[0].0, "DELETE FROM sessions\nWHERE (expires_at < ?)");
    }

    #[tokio::test]
    async fn test_unset_statement_never_reaches_pool() {
        let pool = RecordingPool::default();

        let mut query = Sql::new();
        query.from("users").where_("id = ?");

        let result = query.execute(&pool, &[Value::from(1)]).await;
        assert!(matches!(result, Err(Error::NoStatement)));
        assert!(pool.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_one_and_optional() {
        let pool = RecordingPool::with_rows(vec![serde_json::json!({ "id": 7, "name": "Lin" })]);

        let mut query = Sql::new();
        query.select(["id", "name"]).from("users").where_("id = ?").limit(1);

        let user: User = query.fetch_one(&pool, &[Value::from(7)]).await.unwrap();
        assert_eq!(user, User { id: 7, name: "Lin".to_string() });

        let maybe: Option<User> = query.fetch_optional(&pool, &[Value::from(7)]).await.unwrap();
        assert!(maybe.is_some());

        let empty = RecordingPool::default();
        let none: Option<User> = query.fetch_optional(&empty, &[]).await.unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_execute_blocking() {
        let pool = RecordingPool::default();
        let mut query = Sql::new();
        query.update("users").set("name = ?").where_("id = ?");

        let affected = tokio_test::block_on(
            query.execute(&pool, &[Value::from("Ada"), Value::from(1)]),
        )
        .unwrap();
        assert_eq!(affected, 0);
        assert_eq!(pool.calls()[0].1.len(), 2);
    }
}
