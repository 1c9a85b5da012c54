use core::ops::Range;

use crate::env::Size;

/// The kind of an [IStrError].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(&'static str),
    #[error("not utf-8")]
    NotUtf8,
    #[error("bad array; expected {0}, but got {1}")]
    BadArray(usize, usize),
    #[error("expected character")]
    ExpectedChar,
    #[error("expected line")]
    ExpectedLine,
    #[error("expected tuple of length `{0}`")]
    ExpectedTuple(usize),
    #[error("unexpected eof")]
    UnexpectedEof,
    #[error("string out of capacity ({0})")]
    StringCapacity(usize),
    #[error("array out of capacity ({0})")]
    ArrayCapacity(usize),
    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{0}")]
    Custom(anyhow::Error),
}

/// Error raised through string processing.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The span of input the error was raised for.
    #[inline]
    pub fn span(&self) -> Range<Size> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
