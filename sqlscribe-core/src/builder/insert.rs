//! INSERT rendering

use std::fmt::Write;

use super::common::render_clause;
use super::statement::Statement;
use crate::sink::OutputSink;
use crate::Result;

impl Statement {
    pub(super) fn render_insert<W: Write + ?Sized>(&self, sink: &mut OutputSink<'_, W>) -> Result<()> {
        render_clause(sink, "INSERT INTO", &self.tables, "", "", "")?;
        render_clause(sink, "", &self.columns, "(", ")", ", ")?;
        for (i, row) in self.values_list.iter().enumerate() {
            let keyword = if i == 0 { "VALUES" } else { "," };
            render_clause(sink, keyword, row, "(", ")", ", ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{QueryBuilder, Sql};

    #[test]
    fn test_single_row_insert() {
        let mut q = Sql::new();
        q.insert_into("t").into_columns(["a", "b"]).into_values(["1", "2"]);
        assert_eq!(
            q.to_sql().unwrap().unwrap(),
            "INSERT INTO t\n (a, b)\nVALUES (1, 2)"
        );
    }

    #[test]
    fn test_multi_row_insert_keeps_first_row() {
        let mut q = Sql::new();
        q.insert_into("t").into_columns(["a", "b"]).into_values(["1", "2"]);
        let single = q.to_sql().unwrap().unwrap();

        q.add_row().into_values(["3", "4"]);
        let multi = q.to_sql().unwrap().unwrap();

        assert_eq!(multi, format!("{}\n, (3, 4)", single));
    }

    #[test]
    fn test_values_sugar() {
        let mut q = Sql::new();
        q.insert_into("PERSON")
            .values("ID, FIRST_NAME", "#{id}, #{firstName}")
            .values("LAST_NAME", "#{lastName}");
        assert_eq!(
            q.to_sql().unwrap().unwrap(),
            "INSERT INTO PERSON\n (ID, FIRST_NAME, LAST_NAME)\nVALUES (#{id}, #{firstName}, #{lastName})"
        );
    }

    #[test]
    fn test_empty_trailing_row_is_skipped() {
        let mut q = Sql::new();
        q.insert_into("t").into_columns("a").into_values("1").add_row();
        assert_eq!(q.to_sql().unwrap().unwrap(), "INSERT INTO t\n (a)\nVALUES (1)");
    }

    #[test]
    fn test_insert_ignores_select_only_clauses() {
        let mut q = Sql::new();
        q.insert_into("t")
            .into_columns("a")
            .into_values("1")
            .where_("a = 1")
            .limit(5);
        assert_eq!(q.to_sql().unwrap().unwrap(), "INSERT INTO t\n (a)\nVALUES (1)");
    }
}
