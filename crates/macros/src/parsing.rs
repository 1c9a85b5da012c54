use proc_macro::{Spacing, Span, TokenTree};

pub(crate) const COMMA: [char; 2] = [',', '\0'];
pub(crate) const EQ: [char; 2] = ['=', '\0'];

/// A peeked punctuation of up to two joint characters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Punct {
    pub(crate) chars: [char; 2],
    pub(crate) span: Span,
}

impl Punct {
    /// Number of token trees covered by the punctuation.
    pub(crate) fn len(&self) -> usize {
        self.chars.iter().take_while(|c| **c != '\0').count()
    }
}

/// Shared parser state over a buffered token stream.
pub(crate) struct BaseParser {
    input: Vec<TokenTree>,
    cursor: usize,
    output: Vec<TokenTree>,
}

impl BaseParser {
    pub(crate) fn new(stream: proc_macro::TokenStream) -> Self {
        Self {
            input: stream.into_iter().collect(),
            cursor: 0,
            output: Vec::new(),
        }
    }

    /// Peek the `n`th token tree from the cursor.
    pub(crate) fn nth(&self, n: usize) -> Option<&TokenTree> {
        self.input.get(self.cursor + n)
    }

    /// Take the next token tree.
    pub(crate) fn bump(&mut self) -> Option<TokenTree> {
        let tt = self.input.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(tt)
    }

    /// Step over `n` token trees.
    pub(crate) fn step(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n).min(self.input.len());
    }

    /// Peek punctuation at the cursor, combining it with the following
    /// punctuation if it is joint.
    pub(crate) fn peek_punct(&self) -> Option<Punct> {
        let Some(TokenTree::Punct(first)) = self.nth(0) else {
            return None;
        };

        let mut chars = [first.as_char(), '\0'];

        if first.spacing() == Spacing::Joint {
            if let Some(TokenTree::Punct(second)) = self.nth(1) {
                chars[1] = second.as_char();
            }
        }

        Some(Punct {
            chars,
            span: first.span(),
        })
    }

    /// Skip the given punctuation if it is next, returning `true` if it was.
    pub(crate) fn skip_punct(&mut self, chars: [char; 2]) -> bool {
        match self.peek_punct() {
            Some(p) if p.chars == chars => {
                self.step(p.len());
                true
            }
            _ => false,
        }
    }

    /// Push a token tree to the output.
    pub(crate) fn push(&mut self, tt: TokenTree) {
        self.output.push(tt);
    }

    /// Number of token trees in the output.
    pub(crate) fn len(&self) -> usize {
        self.output.len()
    }

    pub(crate) fn into_tokens(self) -> Vec<TokenTree> {
        self.output
    }
}
