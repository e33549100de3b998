//! The fluent builder API

use std::fmt::Write;

use super::common::{Conjunction, Fragment, IntoFragments};
use super::statement::{PredicateTarget, Statement, StatementKind};
use crate::limit::LimitStrategy;
use crate::Result;

fn texts<F: IntoFragments>(fragments: F) -> impl Iterator<Item = Fragment> {
    fragments.into_fragments().into_iter().map(Fragment::Text)
}

/// Core trait for all query builders.
///
/// Implementors only hand out their [`Statement`]; every fluent method is
/// provided and returns the implementor itself, so a wrapper type gets the
/// whole chainable API by implementing the two accessors.
///
/// No call is ever rejected. Calling a second kind-setting method switches
/// the statement kind, and the last limiting call decides the strategy.
///
/// # Examples
/// ```
/// use sqlscribe_core::{QueryBuilder, Sql};
///
/// let mut query = Sql::new();
/// query
///     .select(["id", "name"])
///     .from("users")
///     .where_("age > #{age}")
///     .limit(10);
///
/// assert_eq!(
///     query.to_sql().unwrap().as_deref(),
///     Some("SELECT id, name\nFROM users\nWHERE (age > #{age}) LIMIT 10")
/// );
/// ```
pub trait QueryBuilder {
    fn statement(&self) -> &Statement;

    fn statement_mut(&mut self) -> &mut Statement;

    /// Start (or switch to) a SELECT and add columns
    fn select<F: IntoFragments>(&mut self, columns: F) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.set_kind(StatementKind::Select);
        stmt.select.extend(texts(columns));
        self
    }

    /// Like [`QueryBuilder::select`], rendering `SELECT DISTINCT`
    fn select_distinct<F: IntoFragments>(&mut self, columns: F) -> &mut Self {
        self.statement_mut().distinct = true;
        self.select(columns)
    }

    fn from<F: IntoFragments>(&mut self, tables: F) -> &mut Self {
        self.statement_mut().tables.extend(texts(tables));
        self
    }

    fn join<F: IntoFragments>(&mut self, joins: F) -> &mut Self {
        self.statement_mut().join.extend(texts(joins));
        self
    }

    fn inner_join<F: IntoFragments>(&mut self, joins: F) -> &mut Self {
        self.statement_mut().inner_join.extend(texts(joins));
        self
    }

    fn outer_join<F: IntoFragments>(&mut self, joins: F) -> &mut Self {
        self.statement_mut().outer_join.extend(texts(joins));
        self
    }

    fn left_outer_join<F: IntoFragments>(&mut self, joins: F) -> &mut Self {
        self.statement_mut().left_outer_join.extend(texts(joins));
        self
    }

    fn right_outer_join<F: IntoFragments>(&mut self, joins: F) -> &mut Self {
        self.statement_mut().right_outer_join.extend(texts(joins));
        self
    }

    /// Add WHERE predicates and make WHERE the target of `and()`/`or()`
    fn where_<F: IntoFragments>(&mut self, conditions: F) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.where_.extend(texts(conditions));
        stmt.last_predicate_target = PredicateTarget::Where;
        self
    }

    /// Join the next predicate of the current WHERE/HAVING list with AND.
    ///
    /// Does nothing before the first `where_`/`having` call.
    fn and(&mut self) -> &mut Self {
        if let Some(list) = self.statement_mut().predicate_target_mut() {
            list.push(Fragment::Conjunction(Conjunction::And));
        }
        self
    }

    /// Join the next predicate of the current WHERE/HAVING list with OR.
    ///
    /// Does nothing before the first `where_`/`having` call.
    fn or(&mut self) -> &mut Self {
        if let Some(list) = self.statement_mut().predicate_target_mut() {
            list.push(Fragment::Conjunction(Conjunction::Or));
        }
        self
    }

    fn group_by<F: IntoFragments>(&mut self, columns: F) -> &mut Self {
        self.statement_mut().group_by.extend(texts(columns));
        self
    }

    /// Add HAVING predicates and make HAVING the target of `and()`/`or()`
    fn having<F: IntoFragments>(&mut self, conditions: F) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.having.extend(texts(conditions));
        stmt.last_predicate_target = PredicateTarget::Having;
        self
    }

    fn order_by<F: IntoFragments>(&mut self, columns: F) -> &mut Self {
        self.statement_mut().order_by.extend(texts(columns));
        self
    }

    /// Set the limit (`10` or a placeholder such as `"#{limit}"`) using `LIMIT n`
    fn limit(&mut self, value: impl ToString) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.limit = Some(value.to_string());
        stmt.set_limiting_strategy(LimitStrategy::OffsetLimit);
        self
    }

    /// Set the offset using `OFFSET n`
    fn offset(&mut self, value: impl ToString) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.offset = Some(value.to_string());
        stmt.set_limiting_strategy(LimitStrategy::OffsetLimit);
        self
    }

    /// Set the limit using `FETCH FIRST n ROWS ONLY`
    fn fetch_first_rows_only(&mut self, value: impl ToString) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.limit = Some(value.to_string());
        stmt.set_limiting_strategy(LimitStrategy::Iso);
        self
    }

    /// Set the offset using `OFFSET n ROWS`
    fn offset_rows(&mut self, value: impl ToString) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.offset = Some(value.to_string());
        stmt.set_limiting_strategy(LimitStrategy::Iso);
        self
    }

    /// Start (or switch to) an INSERT into `table`
    fn insert_into(&mut self, table: impl Into<String>) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.set_kind(StatementKind::Insert);
        stmt.tables.push(Fragment::Text(table.into()));
        self
    }

    fn into_columns<F: IntoFragments>(&mut self, columns: F) -> &mut Self {
        self.statement_mut().columns.extend(texts(columns));
        self
    }

    /// Append values to the current (last) row
    fn into_values<F: IntoFragments>(&mut self, values: F) -> &mut Self {
        self.statement_mut().current_row_mut().extend(texts(values));
        self
    }

    /// Shorthand for one `into_columns` plus one `into_values`
    fn values(&mut self, columns: impl Into<String>, values: impl Into<String>) -> &mut Self {
        let (columns, values): (String, String) = (columns.into(), values.into());
        self.into_columns(columns).into_values(values)
    }

    /// Open a new row for multi-row INSERT
    fn add_row(&mut self) -> &mut Self {
        self.statement_mut().values_list.push(Vec::new());
        self
    }

    /// Start (or switch to) an UPDATE of `table`
    fn update(&mut self, table: impl Into<String>) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.set_kind(StatementKind::Update);
        stmt.tables.push(Fragment::Text(table.into()));
        self
    }

    fn set<F: IntoFragments>(&mut self, sets: F) -> &mut Self {
        self.statement_mut().sets.extend(texts(sets));
        self
    }

    /// Start (or switch to) a DELETE from `table`
    fn delete_from(&mut self, table: impl Into<String>) -> &mut Self {
        let stmt = self.statement_mut();
        stmt.set_kind(StatementKind::Delete);
        stmt.tables.push(Fragment::Text(table.into()));
        self
    }

    /// Render into a caller-supplied sink.
    ///
    /// Returns `Ok(None)` and writes nothing when no statement kind was chosen.
    fn write_sql<W: Write + ?Sized>(&self, out: &mut W) -> Result<Option<StatementKind>> {
        self.statement().write_to(out)
    }

    /// Generate the SQL text, or `None` when no statement kind was chosen
    fn to_sql(&self) -> Result<Option<String>> {
        let mut sql = String::new();
        Ok(self.write_sql(&mut sql)?.map(|_| sql))
    }
}

/// General purpose statement builder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sql {
    statement: Statement,
}

impl Sql {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume building from a previously captured statement
    pub fn from_statement(statement: Statement) -> Self {
        Self { statement }
    }

    pub fn into_statement(self) -> Statement {
        self.statement
    }
}

impl QueryBuilder for Sql {
    fn statement(&self) -> &Statement {
        &self.statement
    }

    fn statement_mut(&mut self) -> &mut Statement {
        &mut self.statement
    }
}
