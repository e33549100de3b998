//! DELETE rendering

use std::fmt::Write;

use super::common::render_clause;
use super::statement::Statement;
use crate::sink::OutputSink;
use crate::Result;

impl Statement {
    pub(super) fn render_delete<W: Write + ?Sized>(&self, sink: &mut OutputSink<'_, W>) -> Result<()> {
        render_clause(sink, "DELETE FROM", &self.tables, "", "", "")?;
        self.render_where(sink)?;
        self.limiting_strategy
            .append_clause(sink, None, self.limit.as_deref())
    }
}
