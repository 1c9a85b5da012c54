use proc_macro::{Delimiter, Group, Literal, Span, TokenTree};

use crate::error::Error;
use crate::into_tokens::{braced, from_fn, invisible, parens, IntoTokens};

const S: [char; 2] = [':', ':'];

#[derive(Default)]
pub(crate) struct Config {
    pub(crate) input_file: Option<Literal>,
    pub(crate) expect: Option<Vec<TokenTree>>,
}

impl Config {
    /// Validate the parsed configuration.
    pub(crate) fn validate(&self, errors: &mut Vec<Error>) {
        if self.input_file.is_none() {
            errors.push(Error::new(Span::call_site(), "missing `input` argument"));
        }
    }
}

/// The parsed item output.
pub(crate) struct ItemOutput {
    tokens: Vec<TokenTree>,
    fn_name: Option<usize>,
}

impl ItemOutput {
    pub(crate) fn new(tokens: Vec<TokenTree>, fn_name: Option<usize>) -> Self {
        Self { tokens, fn_name }
    }

    fn fn_name(&self) -> Option<&TokenTree> {
        self.tokens.get(self.fn_name?)
    }

    /// Span of the function name, used for generated code.
    pub(crate) fn name_span(&self) -> Option<Span> {
        Some(self.fn_name()?.span())
    }

    /// Validate the parsed item.
    pub(crate) fn validate(&self, errors: &mut Vec<Error>) {
        if self.fn_name().is_none() {
            errors.push(Error::new(
                Span::call_site(),
                "entry must be used on a function",
            ));
        }
    }

    /// Expand into a function item.
    ///
    /// If the item or configuration is incomplete the item is emitted
    /// unchanged, leaving the errors to explain why.
    pub(crate) fn expand_item(self, config: Config) -> impl IntoTokens {
        from_fn(move |s| {
            let fn_name = self.fn_name().cloned();
            let item = self.tokens.into_iter().collect::<proc_macro::TokenStream>();

            match (fn_name, config.input_file) {
                (Some(fn_name), Some(input_file)) => {
                    s.write(expand_main(fn_name, input_file, config.expect, item));
                }
                _ => {
                    s.write(TokenTree::Group(Group::new(Delimiter::None, item)));
                }
            }
        })
    }
}

/// Expands the main function wrapping the original item.
fn expand_main(
    fn_name: TokenTree,
    input_file: Literal,
    expect: Option<Vec<TokenTree>>,
    item: proc_macro::TokenStream,
) -> impl IntoTokens {
    let m = Mod;

    let parse_opts = (
        ("let", "opts"),
        '=',
        (m, "cli", S, "Opts", S, "parse", parens(()), '?'),
        ';',
    );

    let input_decl = (
        ("let", parens(("input", ',', "path"))),
        '=',
        (m, "input", '!', parens(TokenTree::Literal(input_file))),
        ';',
    );

    let args = ('&', "opts", ',', "path", ',', "input", ',');

    let run = match expect {
        Some(expect) => Run::Expect(args, expect, fn_name),
        None => Run::Plain(args, fn_name),
    };

    let anyhow_result = (m, "prelude", S, "Result", '<', parens(()), '>');
    let signature = ("fn", "main", parens(()), ['-', '>'], anyhow_result);

    let original = TokenTree::Group(Group::new(Delimiter::None, item));
    (signature, braced((original, parse_opts, input_decl, run)))
}

/// Absolute path to the support library.
#[derive(Debug, Clone, Copy)]
struct Mod;

impl IntoTokens for Mod {
    fn into_tokens(self, stream: &mut crate::token_stream::TokenStream, span: Span) {
        stream.write(span, (S, "lib", S));
    }
}

/// The call which runs the solution.
enum Run<A> {
    Plain(A, TokenTree),
    Expect(A, Vec<TokenTree>, TokenTree),
}

impl<A> IntoTokens for Run<A>
where
    A: IntoTokens,
{
    fn into_tokens(self, stream: &mut crate::token_stream::TokenStream, span: Span) {
        match self {
            Run::Plain(args, fn_name) => {
                stream.write(
                    span,
                    ((Mod, "cli", S, "run"), parens((args, fn_name))),
                );
            }
            Run::Expect(args, expect, fn_name) => {
                stream.write(
                    span,
                    (
                        (Mod, "cli", S, "run_expect"),
                        parens((args, invisible(expect), ',', fn_name)),
                    ),
                );
            }
        }
    }
}
