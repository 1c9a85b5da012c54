//! Environment where input is read at runtime and spans are tracked, so
//! errors can point at the offending line and column.

use core::ops::Range;
use std::fs::File;
use std::io::Read;

use anyhow::{anyhow, Context};

use crate::cli::error::LineCol;
use crate::input::IStr;

/// Byte offset into the input.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column range covered by `span` in `data`.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    use crate::input::NL;

    let span = Size::usize_range(span);

    let Some(before) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, before).count();

    let line_start = memchr::memrchr(NL, before).map_or(0, |n| n + 1);
    let start = span.start - line_start;

    let end = match data.get(span) {
        Some(rest) => start + memchr::memchr(NL, rest).unwrap_or(rest.len()),
        None => start,
    };

    LineCol::new(line, start, end)
}

/// Read the input at `read_path` into memory which lives for the rest of the
/// process.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
    return inner(read_path).with_context(|| anyhow!(path));

    fn inner(read_path: &str) -> anyhow::Result<IStr> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(IStr::new(buf.leak()))
    }
}

/// Load the named file from the `inputs/` directory of the calling crate,
/// evaluating to `(IStr, &'static str)` of the input and its display path.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::env::input(path, read_path)?, path)
    }};
}
