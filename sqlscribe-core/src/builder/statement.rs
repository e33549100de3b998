//! Accumulated statement state and render dispatch

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::{debug, trace};

use super::common::{render_clause, Fragment};
use crate::limit::LimitStrategy;
use crate::sink::OutputSink;
use crate::Result;

/// Which statement a builder renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatementKind {
    #[default]
    Unset,
    Select,
    Insert,
    Update,
    Delete,
}

/// The predicate list that `and()`/`or()` append to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PredicateTarget {
    /// Neither `where_` nor `having` has been called; conjunctions are dropped
    #[default]
    None,
    Where,
    Having,
}

/// Everything a builder has accumulated.
///
/// Lists only ever grow, in call order. Rendering reads this state and never
/// changes it, so the same statement renders to the same text every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub(crate) kind: StatementKind,
    pub(crate) select: Vec<Fragment>,
    pub(crate) tables: Vec<Fragment>,
    pub(crate) join: Vec<Fragment>,
    pub(crate) inner_join: Vec<Fragment>,
    pub(crate) outer_join: Vec<Fragment>,
    pub(crate) left_outer_join: Vec<Fragment>,
    pub(crate) right_outer_join: Vec<Fragment>,
    pub(crate) where_: Vec<Fragment>,
    pub(crate) having: Vec<Fragment>,
    pub(crate) group_by: Vec<Fragment>,
    pub(crate) order_by: Vec<Fragment>,
    pub(crate) sets: Vec<Fragment>,
    pub(crate) columns: Vec<Fragment>,
    pub(crate) values_list: Vec<Vec<Fragment>>,
    pub(crate) last_predicate_target: PredicateTarget,
    pub(crate) distinct: bool,
    pub(crate) limit: Option<String>,
    pub(crate) offset: Option<String>,
    pub(crate) limiting_strategy: LimitStrategy,
}

impl Default for Statement {
    fn default() -> Self {
        Self::new()
    }
}

impl Statement {
    /// Create an empty statement with one empty VALUES row
    pub fn new() -> Self {
        Self {
            kind: StatementKind::Unset,
            select: Vec::new(),
            tables: Vec::new(),
            join: Vec::new(),
            inner_join: Vec::new(),
            outer_join: Vec::new(),
            left_outer_join: Vec::new(),
            right_outer_join: Vec::new(),
            where_: Vec::new(),
            having: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            sets: Vec::new(),
            columns: Vec::new(),
            values_list: vec![Vec::new()],
            last_predicate_target: PredicateTarget::None,
            distinct: false,
            limit: None,
            offset: None,
            limiting_strategy: LimitStrategy::Nop,
        }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn limit(&self) -> Option<&str> {
        self.limit.as_deref()
    }

    pub fn offset(&self) -> Option<&str> {
        self.offset.as_deref()
    }

    pub fn limiting_strategy(&self) -> LimitStrategy {
        self.limiting_strategy
    }

    pub fn predicate_target(&self) -> PredicateTarget {
        self.last_predicate_target
    }

    /// Rows accumulated for INSERT ... VALUES
    pub fn value_rows(&self) -> &[Vec<Fragment>] {
        &self.values_list
    }

    pub(crate) fn set_kind(&mut self, kind: StatementKind) {
        if self.kind != StatementKind::Unset && self.kind != kind {
            trace!(from = ?self.kind, to = ?kind, "statement kind switched");
        }
        self.kind = kind;
    }

    pub(crate) fn set_limiting_strategy(&mut self, strategy: LimitStrategy) {
        if self.limiting_strategy != strategy {
            trace!(from = ?self.limiting_strategy, to = ?strategy, "limiting strategy switched");
        }
        self.limiting_strategy = strategy;
    }

    /// The list `and()`/`or()` currently append to, if any
    pub(crate) fn predicate_target_mut(&mut self) -> Option<&mut Vec<Fragment>> {
        match self.last_predicate_target {
            PredicateTarget::None => None,
            PredicateTarget::Where => Some(&mut self.where_),
            PredicateTarget::Having => Some(&mut self.having),
        }
    }

    /// The row INSERT values currently go to.
    ///
    /// A deserialized statement may carry no rows at all; one is opened then.
    pub(crate) fn current_row_mut(&mut self) -> &mut Vec<Fragment> {
        if self.values_list.is_empty() {
            self.values_list.push(Vec::new());
        }
        let last = self.values_list.len() - 1;
        &mut self.values_list[last]
    }

    /// Render into `out`.
    ///
    /// Returns the kind that was rendered, or `None` (writing nothing) when
    /// no statement kind was ever chosen.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<Option<StatementKind>> {
        let mut sink = OutputSink::new(out);
        match self.kind {
            StatementKind::Unset => return Ok(None),
            StatementKind::Select => self.render_select(&mut sink)?,
            StatementKind::Insert => self.render_insert(&mut sink)?,
            StatementKind::Update => self.render_update(&mut sink)?,
            StatementKind::Delete => self.render_delete(&mut sink)?,
        }
        debug!(kind = ?self.kind, "rendered SQL statement");
        Ok(Some(self.kind))
    }

    pub(super) fn render_where<W: Write + ?Sized>(&self, sink: &mut OutputSink<'_, W>) -> Result<()> {
        render_clause(sink, "WHERE", &self.where_, "(", ")", " AND ")
    }

    pub(super) fn render_joins<W: Write + ?Sized>(&self, sink: &mut OutputSink<'_, W>) -> Result<()> {
        render_clause(sink, "JOIN", &self.join, "", "", "\nJOIN ")?;
        render_clause(sink, "INNER JOIN", &self.inner_join, "", "", "\nINNER JOIN ")?;
        render_clause(sink, "OUTER JOIN", &self.outer_join, "", "", "\nOUTER JOIN ")?;
        render_clause(
            sink,
            "LEFT OUTER JOIN",
            &self.left_outer_join,
            "",
            "",
            "\nLEFT OUTER JOIN ",
        )?;
        render_clause(
            sink,
            "RIGHT OUTER JOIN",
            &self.right_outer_join,
            "",
            "",
            "\nRIGHT OUTER JOIN ",
        )
    }
}
