use crate::symbolic::token::{Token, TokenKind};

/// Hand-written lexer over the expression source text.
///
/// Tokens can be pushed back onto an internal stack with [`Lexer::push_back`]
/// and are then handed out again before any new input is consumed. The parser
/// relies on this for its multi-token lookahead (implicit multiplication,
/// function-call detection).
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    reserved: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            reserved: Vec::new(),
        }
    }

    /// Consumes and returns the next token, or `End` once the input is
    /// exhausted. Pushed-back tokens are returned first, newest first.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.reserved.pop() {
            return token;
        }

        self.skip_whitespace();

        let Some(&c) = self.source.get(self.pos) else {
            return Token::new(TokenKind::End, "");
        };

        if c.is_ascii_alphabetic() {
            return self.symbol_token();
        }
        if c.is_ascii_digit() {
            return self.number_token();
        }

        self.pos += 1;
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Pow,
            '(' => TokenKind::LPar,
            ')' => TokenKind::RPar,
            '=' => TokenKind::Eq,
            _ => TokenKind::Bad,
        };
        Token::new(kind, c.to_string())
    }

    pub fn push_back(&mut self, token: Token) {
        self.reserved.push(token);
    }

    fn symbol_token(&mut self) -> Token {
        let start = self.pos;
        while self
            .source
            .get(self.pos)
            .is_some_and(|c| c.is_ascii_alphanumeric() || *c == '_')
        {
            self.pos += 1;
        }
        Token::new(TokenKind::Symbol, self.text_from(start))
    }

    fn number_token(&mut self) -> Token {
        let start = self.pos;
        while self.source.get(self.pos).is_some_and(char::is_ascii_digit) {
            self.pos += 1;
        }
        if self.source.get(self.pos) == Some(&'.') {
            self.pos += 1;
            while self.source.get(self.pos).is_some_and(char::is_ascii_digit) {
                self.pos += 1;
            }
        }

        // a trailing bare '.' makes the whole lexeme bad, e.g. "3."
        if self.source[self.pos - 1] == '.' {
            return Token::new(TokenKind::Bad, self.text_from(start));
        }
        Token::new(TokenKind::Number, self.text_from(start))
    }

    fn text_from(&self, start: usize) -> String {
        self.source[start..self.pos].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while self.source.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }
}
