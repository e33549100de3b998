//! UPDATE rendering

use std::fmt::Write;

use super::common::render_clause;
use super::statement::Statement;
use crate::sink::OutputSink;
use crate::Result;

impl Statement {
    /// Only the limit takes part in the limiting clause; any offset is ignored.
    pub(super) fn render_update<W: Write + ?Sized>(&self, sink: &mut OutputSink<'_, W>) -> Result<()> {
        render_clause(sink, "UPDATE", &self.tables, "", "", "")?;
        self.render_joins(sink)?;
        render_clause(sink, "SET", &self.sets, "", "", ", ")?;
        self.render_where(sink)?;
        self.limiting_strategy
            .append_clause(sink, None, self.limit.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use crate::{QueryBuilder, Sql};

    #[test]
    fn test_update_with_set_and_where() {
        let mut q = Sql::new();
        q.update("users")
            .set("name = #{name}")
            .set(["age = #{age}", "active = true"])
            .where_("id = #{id}");
        assert_eq!(
            q.to_sql().unwrap().unwrap(),
            "UPDATE users\nSET name = #{name}, age = #{age}, active = true\nWHERE (id = #{id})"
        );
    }

    #[test]
    fn test_update_with_join() {
        let mut q = Sql::new();
        q.update("orders o")
            .inner_join("customers c on c.id = o.customer_id")
            .set("o.flag = 1")
            .where_("c.vip = 1");
        assert_eq!(
            q.to_sql().unwrap().unwrap(),
            "UPDATE orders o\nINNER JOIN customers c on c.id = o.customer_id\nSET o.flag = 1\nWHERE (c.vip = 1)"
        );
    }

    #[test]
    fn test_update_renders_limit_only() {
        let mut q = Sql::new();
        q.update("t").set("a = 1").limit(10).offset(5);
        assert_eq!(q.to_sql().unwrap().unwrap(), "UPDATE t\nSET a = 1 LIMIT 10");

        q.fetch_first_rows_only(3).offset_rows(7);
        assert_eq!(
            q.to_sql().unwrap().unwrap(),
            "UPDATE t\nSET a = 1 FETCH FIRST 3 ROWS ONLY"
        );
    }
}
