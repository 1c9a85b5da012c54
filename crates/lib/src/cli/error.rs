use core::fmt;
use core::ops::Range;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Associate an error raised by a solution with the position in the input it
/// was raised at.
#[doc(hidden)]
pub fn error_context<E>(path: &'static str, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);

    let Some(span) = find_range(&error) else {
        return error.context(CliError::Path(path));
    };

    let pos = crate::env::pos_from(data.as_data(), span);
    error.context(CliError::Position(path, pos))
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
    end: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0, 0);

    pub(crate) const fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;

        if self.end > self.start {
            write!(f, "{line}:{}-{}", self.start, self.end)
        } else {
            write!(f, "{line}:{}", self.start)
        }
    }
}

/// Errors are threaded through `anyhow`, so the parse error might be found
/// anywhere in the chain.
fn find_range(error: &anyhow::Error) -> Option<Range<Size>> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(|e| e.span.clone())
}

/// Context attached to errors raised by a solution.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Path(&'static str),
    #[error("{0}:{1}")]
    Position(&'static str, LineCol),
}
