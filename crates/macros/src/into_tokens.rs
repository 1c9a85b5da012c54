use proc_macro::{Delimiter, Ident, Literal, Punct, Spacing, Span, TokenTree};

use crate::token_stream::TokenStream;

/// Something which can be written into a token stream.
pub(crate) trait IntoTokens {
    fn into_tokens(self, stream: &mut TokenStream, span: Span);
}

impl IntoTokens for () {
    #[inline]
    fn into_tokens(self, _: &mut TokenStream, _: Span) {}
}

/// Strings are identifiers.
impl IntoTokens for &str {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        stream.push(TokenTree::Ident(Ident::new(self, span)));
    }
}

impl IntoTokens for char {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        let mut p = Punct::new(self, Spacing::Alone);
        p.set_span(span);
        stream.push(TokenTree::Punct(p));
    }
}

/// Joint punctuation, like `::` or `->`.
impl<const N: usize> IntoTokens for [char; N] {
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        for (n, c) in self.into_iter().enumerate() {
            let spacing = if n + 1 < N {
                Spacing::Joint
            } else {
                Spacing::Alone
            };

            let mut p = Punct::new(c, spacing);
            p.set_span(span);
            stream.push(TokenTree::Punct(p));
        }
    }
}

/// Token trees keep their original span.
impl IntoTokens for TokenTree {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, _: Span) {
        stream.push(self);
    }
}

impl IntoTokens for Literal {
    #[inline]
    fn into_tokens(mut self, stream: &mut TokenStream, span: Span) {
        self.set_span(span);
        stream.push(TokenTree::Literal(self));
    }
}

impl<T> IntoTokens for Option<T>
where
    T: IntoTokens,
{
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        if let Some(tokens) = self {
            tokens.into_tokens(stream, span);
        }
    }
}

impl<T> IntoTokens for Vec<T>
where
    T: IntoTokens,
{
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        for tokens in self {
            tokens.into_tokens(stream, span);
        }
    }
}

macro_rules! tuple {
    ($($ty:ident $var:ident),*) => {
        impl<$($ty,)*> IntoTokens for ($($ty,)*)
        where
            $($ty: IntoTokens,)*
        {
            #[inline]
            fn into_tokens(self, stream: &mut TokenStream, span: Span) {
                let ($($var,)*) = self;
                $($var.into_tokens(stream, span);)*
            }
        }
    };
}

tuple!(A a);
tuple!(A a, B b);
tuple!(A a, B b, C c);
tuple!(A a, B b, C c, D d);
tuple!(A a, B b, C c, D d, E e);
tuple!(A a, B b, C c, D d, E e, F f);
tuple!(A a, B b, C c, D d, E e, F f, G g);
tuple!(A a, B b, C c, D d, E e, F f, G g, H h);

/// Tokens wrapped in a delimited group.
pub(crate) struct Group<T> {
    delimiter: Delimiter,
    inner: T,
}

impl<T> IntoTokens for Group<T>
where
    T: IntoTokens,
{
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        let mut inner = TokenStream::default();
        self.inner.into_tokens(&mut inner, span);
        let mut group = proc_macro::Group::new(self.delimiter, inner.into_token_stream());
        group.set_span(span);
        stream.push(TokenTree::Group(group));
    }
}

/// Wrap tokens in braces `{ .. }`.
pub(crate) fn braced<T>(inner: T) -> Group<T> {
    Group {
        delimiter: Delimiter::Brace,
        inner,
    }
}

/// Wrap tokens in parenthesis `( .. )`.
pub(crate) fn parens<T>(inner: T) -> Group<T> {
    Group {
        delimiter: Delimiter::Parenthesis,
        inner,
    }
}

/// Wrap tokens in an invisible group, which keeps them together as a single
/// expression without adding parenthesis.
pub(crate) fn invisible<T>(inner: T) -> Group<T> {
    Group {
        delimiter: Delimiter::None,
        inner,
    }
}

/// Write tokens through a closure.
pub(crate) fn from_fn<T>(f: T) -> FromFn<T>
where
    T: FnOnce(&mut Scope<'_>),
{
    FromFn(f)
}

pub(crate) struct FromFn<T>(T);

impl<T> IntoTokens for FromFn<T>
where
    T: FnOnce(&mut Scope<'_>),
{
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        (self.0)(&mut Scope { stream, span });
    }
}

/// A stream paired with the span of whatever is being written.
pub(crate) struct Scope<'a> {
    stream: &'a mut TokenStream,
    span: Span,
}

impl Scope<'_> {
    #[inline]
    pub(crate) fn write<T>(&mut self, tokens: T)
    where
        T: IntoTokens,
    {
        tokens.into_tokens(self.stream, self.span);
    }
}
