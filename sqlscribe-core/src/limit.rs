//! Row limiting strategies

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::sink::OutputSink;
use crate::Result;

/// How the trailing row-limiting clause is rendered.
///
/// Chosen by whichever limiting call ran last: `limit`/`offset` select
/// [`LimitStrategy::OffsetLimit`], `fetch_first_rows_only`/`offset_rows`
/// select [`LimitStrategy::Iso`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LimitStrategy {
    /// No limiting clause
    #[default]
    Nop,
    /// `OFFSET n ROWS FETCH FIRST m ROWS ONLY`
    Iso,
    /// `LIMIT m OFFSET n`
    OffsetLimit,
}

impl LimitStrategy {
    /// Append the limiting clause for this strategy.
    ///
    /// ISO renders the offset first; the vendor form renders the limit first.
    pub fn append_clause<W: Write + ?Sized>(
        &self,
        sink: &mut OutputSink<'_, W>,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> Result<()> {
        match self {
            LimitStrategy::Nop => {}
            LimitStrategy::Iso => {
                if let Some(offset) = offset {
                    sink.append(" OFFSET ")?.append(offset)?.append(" ROWS")?;
                }
                if let Some(limit) = limit {
                    sink.append(" FETCH FIRST ")?
                        .append(limit)?
                        .append(" ROWS ONLY")?;
                }
            }
            LimitStrategy::OffsetLimit => {
                if let Some(limit) = limit {
                    sink.append(" LIMIT ")?.append(limit)?;
                }
                if let Some(offset) = offset {
                    sink.append(" OFFSET ")?.append(offset)?;
                }
            }
        }
        Ok(())
    }
}
