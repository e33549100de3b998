//! Fragment types and the clause renderer shared by every statement kind

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::sink::OutputSink;
use crate::Result;

/// Structural conjunction between two predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    /// Text emitted between the two predicates it joins.
    ///
    /// `Or` closes and reopens the surrounding parentheses so each side of
    /// the disjunction stays grouped.
    pub fn as_str(&self) -> &'static str {
        match self {
            Conjunction::And => " AND ",
            Conjunction::Or => ") OR (",
        }
    }
}

/// One entry of a clause list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    /// Caller-supplied SQL text, emitted verbatim
    Text(String),
    /// Marker placed by `and()`/`or()`
    Conjunction(Conjunction),
}

impl Fragment {
    pub fn is_conjunction(&self) -> bool {
        matches!(self, Fragment::Conjunction(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(text) => Some(text),
            Fragment::Conjunction(_) => None,
        }
    }
}

/// Render one clause: `keyword` `open` fragments joined by `separator` `close`.
///
/// Nothing is emitted when the list holds no text fragment. A newline
/// precedes the clause whenever the sink already has content.
///
/// Conjunction markers replace `separator` between the two text fragments
/// they sit between. A run of markers collapses to its last one, and markers
/// with no text fragment on one side are dropped.
pub fn render_clause<W: Write + ?Sized>(
    sink: &mut OutputSink<'_, W>,
    keyword: &str,
    fragments: &[Fragment],
    open: &str,
    close: &str,
    separator: &str,
) -> Result<()> {
    if !fragments.iter().any(|f| !f.is_conjunction()) {
        return Ok(());
    }
    if !sink.is_empty() {
        sink.append("\n")?;
    }
    sink.append(keyword)?.append(" ")?.append(open)?;

    let mut wrote_text = false;
    let mut pending: Option<Conjunction> = None;
    for fragment in fragments {
        match fragment {
            Fragment::Conjunction(conjunction) => pending = Some(*conjunction),
            Fragment::Text(text) => {
                if wrote_text {
                    sink.append(pending.map_or(separator, |c| c.as_str()))?;
                }
                pending = None;
                sink.append(text)?;
                wrote_text = true;
            }
        }
    }

    sink.append(close)?;
    Ok(())
}

/// Trait for values that can be appended to a clause list.
///
/// Covers both the single-fragment and the variadic call shapes.
pub trait IntoFragments {
    fn into_fragments(self) -> Vec<String>;
}

impl IntoFragments for &str {
    fn into_fragments(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoFragments for String {
    fn into_fragments(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoFragments for &String {
    fn into_fragments(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoFragments for Vec<&str> {
    fn into_fragments(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl IntoFragments for Vec<String> {
    fn into_fragments(self) -> Vec<String> {
        self
    }
}

impl IntoFragments for &[&str] {
    fn into_fragments(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoFragments for [&str; N] {
    fn into_fragments(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoFragments for [String; N] {
    fn into_fragments(self) -> Vec<String> {
        self.into_iter().collect()
    }
}

impl IntoFragments for (&str, &str) {
    fn into_fragments(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}

impl IntoFragments for (&str, &str, &str) {
    fn into_fragments(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string(), self.2.to_string()]
    }
}

impl IntoFragments for (&str, &str, &str, &str) {
    fn into_fragments(self) -> Vec<String> {
        vec![
            self.0.to_string(),
            self.1.to_string(),
            self.2.to_string(),
            self.3.to_string(),
        ]
    }
}
