use std::fmt;

/// An opaque lexical category. Scanner definitions declare their own types as constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenType(&'static str);

impl TokenType {
    /// Terminates every token stream.
    pub const EOF: TokenType = TokenType::new("EOF");

    pub const fn new(name: &'static str) -> TokenType {
        TokenType(name)
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A classified, positioned unit of lexical text.
///
/// `start_position` and `end_position` are 1-based rune columns on `line`, forming a half-open
/// span. A token whose text crosses a line break is spanned up to the end of its first line.
/// Tokens own their text and hold no reference back to the scanner that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of Token.
    pub kind: TokenType,

    // The matched text, without any runes the scanner skipped.
    pub literal: String,

    // The 1-based line position in the input string.
    pub line: i32,

    pub start_position: i32,
    pub end_position: i32,
}

impl Token {
    pub fn new(
        kind: TokenType,
        literal: impl Into<String>,
        line: i32,
        start_position: i32,
        end_position: i32,
    ) -> Token {
        Token { kind, literal: literal.into(), line, start_position, end_position }
    }

    pub fn eof(line: i32, column: i32) -> Token {
        Token::new(TokenType::EOF, "", line, column, column)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::EOF
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{} {} {:?}",
            self.line, self.start_position, self.end_position, self.kind, self.literal
        )
    }
}

assert_eq_size!(TokenType, &'static str);
assert_impl_all!(Token: Clone, Send, Sync);
assert_impl_all!(TokenType: Copy, Send, Sync, std::hash::Hash);
