//! SELECT rendering

use std::fmt::Write;

use super::common::render_clause;
use super::statement::Statement;
use crate::sink::OutputSink;
use crate::Result;

impl Statement {
    pub(super) fn render_select<W: Write + ?Sized>(&self, sink: &mut OutputSink<'_, W>) -> Result<()> {
        let keyword = if self.distinct {
            "SELECT DISTINCT"
        } else {
            "SELECT"
        };
        render_clause(sink, keyword, &self.select, "", "", ", ")?;
        render_clause(sink, "FROM", &self.tables, "", "", ", ")?;
        self.render_joins(sink)?;
        self.render_where(sink)?;
        render_clause(sink, "GROUP BY", &self.group_by, "", "", ", ")?;
        render_clause(sink, "HAVING", &self.having, "(", ")", " AND ")?;
        render_clause(sink, "ORDER BY", &self.order_by, "", "", ", ")?;
        self.limiting_strategy
            .append_clause(sink, self.offset.as_deref(), self.limit.as_deref())
    }
}
