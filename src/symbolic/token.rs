/// The kinds of lexemes the lexer can produce.
///
/// `Bad` carries the offending text and is surfaced to the parser, which
/// fails on it; the lexer itself never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    End,

    Plus,
    Minus,
    Star,
    Slash,
    Pow,

    LPar,
    RPar,

    Eq,

    Symbol,
    Number,

    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// Human-readable form for error messages.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::End {
            "end of input".to_string()
        } else {
            self.text.clone()
        }
    }
}
