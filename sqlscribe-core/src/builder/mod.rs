//! Statement builder module

pub mod common;
pub mod query;
pub mod statement;

mod delete;
mod insert;
mod select;
mod update;

// Re-export types from submodules
pub use common::{render_clause, Conjunction, Fragment, IntoFragments};
pub use query::{QueryBuilder, Sql};
pub use statement::{PredicateTarget, Statement, StatementKind};
