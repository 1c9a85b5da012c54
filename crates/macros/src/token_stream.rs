use proc_macro::{Span, TokenTree};

use crate::into_tokens::IntoTokens;

/// Output token stream being built.
#[derive(Default)]
pub(crate) struct TokenStream {
    stream: proc_macro::TokenStream,
}

impl TokenStream {
    /// Push a single token tree.
    pub(crate) fn push(&mut self, tt: TokenTree) {
        self.stream.extend(std::iter::once(tt));
    }

    /// Write tokens using the given span for anything generated.
    pub(crate) fn write<T>(&mut self, span: Span, tokens: T)
    where
        T: IntoTokens,
    {
        tokens.into_tokens(self, span);
    }

    pub(crate) fn into_token_stream(self) -> proc_macro::TokenStream {
        self.stream
    }
}
