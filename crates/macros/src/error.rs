use core::fmt;

use proc_macro::{Literal, Span};

use crate::into_tokens::{braced, IntoTokens};
use crate::token_stream::TokenStream;

/// An error raised while expanding a macro, emitted as `compile_error!`.
pub(crate) struct Error {
    span: Span,
    message: Box<str>,
}

impl Error {
    pub(crate) fn new(span: Span, message: impl fmt::Display) -> Self {
        Self {
            span,
            message: message.to_string().into(),
        }
    }
}

impl IntoTokens for Error {
    fn into_tokens(self, stream: &mut TokenStream, _: Span) {
        let message = Literal::string(&self.message);

        stream.write(
            self.span,
            (
                [':', ':'],
                "core",
                [':', ':'],
                "compile_error",
                '!',
                braced(message),
            ),
        );
    }
}
