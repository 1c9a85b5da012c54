use proc_macro::{Literal, Span, TokenTree};

use crate::entry::output::{Config, ItemOutput};
use crate::error::Error;
use crate::parsing::{BaseParser, COMMA, EQ};

/// A parser for the arguments provided to an entry macro.
pub(crate) struct ConfigParser<'a> {
    base: BaseParser,
    errors: &'a mut Vec<Error>,
}

impl<'a> ConfigParser<'a> {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(stream: proc_macro::TokenStream, errors: &'a mut Vec<Error>) -> Self {
        Self {
            base: BaseParser::new(stream),
            errors,
        }
    }

    /// Parse and produce the corresponding configuration.
    pub(crate) fn parse(mut self) -> Config {
        let mut config = Config::default();

        while self.base.nth(0).is_some() {
            if self.parse_option(&mut config).is_none() {
                self.recover();
                continue;
            }

            if !self.base.skip_punct(COMMA) {
                break;
            }
        }

        if let Some(tt) = self.base.nth(0) {
            self.errors.push(Error::new(tt.span(), "trailing token"));
        }

        config
    }

    /// Recover by parsing either to the next comma `,`, or end of input.
    fn recover(&mut self) {
        loop {
            if self.base.skip_punct(COMMA) {
                break;
            }

            if self.base.bump().is_none() {
                break;
            }
        }
    }

    /// Parse a single option.
    fn parse_option(&mut self, config: &mut Config) -> Option<()> {
        match self.base.bump() {
            Some(TokenTree::Ident(ident)) => match ident.to_string().as_str() {
                "input" => {
                    self.parse_eq()?;
                    config.input_file = Some(self.parse_literal()?);
                    Some(())
                }
                "expect" => {
                    self.parse_eq()?;
                    config.expect = Some(self.parse_expr(ident.span())?);
                    Some(())
                }
                name => {
                    self.errors
                        .push(Error::new(ident.span(), format!("unknown option `{name}`")));
                    None
                }
            },
            tt => {
                let span = tt.map(|tt| tt.span()).unwrap_or_else(Span::call_site);
                self.errors.push(Error::new(span, "expected identifier"));
                None
            }
        }
    }

    /// Parse the next element as a literal value.
    fn parse_literal(&mut self) -> Option<Literal> {
        match self.base.bump() {
            Some(TokenTree::Literal(literal)) => Some(literal),
            tt => {
                let span = tt.map(|tt| tt.span()).unwrap_or_else(Span::call_site);
                self.errors.push(Error::new(span, "expected literal"));
                None
            }
        }
    }

    /// Collect an expression up until the next top-level comma.
    fn parse_expr(&mut self, span: Span) -> Option<Vec<TokenTree>> {
        let mut expr = Vec::new();

        loop {
            if matches!(self.base.peek_punct(), Some(p) if p.chars == COMMA) {
                break;
            }

            let Some(tt) = self.base.bump() else {
                break;
            };

            expr.push(tt);
        }

        if expr.is_empty() {
            self.errors.push(Error::new(span, "expected expression"));
            return None;
        }

        Some(expr)
    }

    /// Parse the next element as an `=` punctuation.
    fn parse_eq(&mut self) -> Option<()> {
        match self.base.peek_punct() {
            Some(p) if p.chars == EQ => {
                self.base.step(p.len());
                Some(())
            }
            Some(p) => {
                self.errors
                    .push(Error::new(p.span, "expected assignment `=`"));
                None
            }
            None => {
                let span = self.base.nth(0).map_or_else(Span::call_site, |tt| tt.span());
                self.errors.push(Error::new(span, "expected assignment `=`"));
                None
            }
        }
    }
}

/// A parser for the item annotated with an entry macro.
pub(crate) struct ItemParser {
    base: BaseParser,
}

impl ItemParser {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(stream: proc_macro::TokenStream) -> Self {
        Self {
            base: BaseParser::new(stream),
        }
    }

    /// Parse the item, remembering where the function name is.
    pub(crate) fn parse(mut self) -> ItemOutput {
        let mut fn_name = None;
        let mut next_is_name = false;

        while let Some(tt) = self.base.bump() {
            if let TokenTree::Ident(ident) = &tt {
                if std::mem::take(&mut next_is_name) {
                    fn_name = Some(self.base.len());
                } else if fn_name.is_none() && ident.to_string() == "fn" {
                    next_is_name = true;
                }
            }

            self.base.push(tt);
        }

        ItemOutput::new(self.base.into_tokens(), fn_name)
    }
}
