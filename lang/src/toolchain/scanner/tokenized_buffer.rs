use std::io::Write;

use super::{ScanConfig, ScanFn, Scanner, Token, TokenType};
use crate::toolchain::diagnostics::{Cause, DiagnosticConsumer, Error, ErrorCode, Found};
use crate::toolchain::source::SourceBuffer;

pub type TokenIndex = usize;

/// The complete token stream of one source, plus every error reported while scanning it.
///
/// The stream always ends with a [TokenType::EOF] token, even when scanning halted early.
pub struct TokenizedBuffer<'s> {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    code: &'s str,
}

impl<'s> TokenizedBuffer<'s> {
    pub fn tokenize(
        source: &'s SourceBuffer<'_>,
        scan: ScanFn,
        config: &ScanConfig,
        diags: &mut impl DiagnosticConsumer,
    ) -> TokenizedBuffer<'s> {
        let code = source.code();
        let mut scanner = Scanner::new(code);
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            let before = scanner.position().offset;
            let result = match scanner.scan(scan) {
                Ok(token) if token.is_eof() => {
                    tokens.push(token);
                    break;
                }
                // A token that consumed no input would be produced forever.
                Ok(token) if scanner.position().offset == before => {
                    tokens.push(token);
                    Err(Error::new(
                        ErrorCode::ScannedTokenNotInSet,
                        Cause::RuneNotInSet { found: Found::from(scanner.peek()) },
                        scanner.current_line_text(),
                        scanner.position().line,
                        scanner.position().column,
                        scanner.position().column.saturating_add(1),
                    ))
                }
                other => other,
            };

            match result {
                Ok(token) => tokens.push(token),
                Err(error) => {
                    let (error_line, error_column) = (error.line, error.start_position);
                    diags.handle_error(&error);
                    errors.push(error);
                    if config.should_stop(errors.len()) {
                        let position = scanner.position();
                        tokens.push(Token::eof(position.line, position.column));
                        break;
                    }
                    // Discard the rune the error points at, or any rune at all if the failed
                    // scan consumed nothing. Nothing left to discard means the input is done.
                    let position = scanner.position();
                    let at_cursor =
                        error_line == position.line && error_column == position.column;
                    if at_cursor || position.offset == before {
                        if scanner.is_eof() {
                            tokens.push(Token::eof(position.line, position.column));
                            break;
                        }
                        scanner.skip_rune();
                    }
                }
            }
        }

        diags.flush();
        TokenizedBuffer { tokens, errors, code }
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<&Token> {
        self.tokens.get(i)
    }

    pub fn tokens(&self) -> &Vec<Token> {
        &self.tokens
    }

    pub fn errors(&self) -> &Vec<Error> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the token at `i` if its type is one of `expected`. Indices past the end refer to
    /// the final EOF token.
    pub fn expect_token(&self, i: TokenIndex, expected: &[TokenType]) -> Result<&Token, Error> {
        let token = self.tokens.get(i).or(self.tokens.last());
        let Some(token) = token else {
            return Err(Error::input(
                ErrorCode::ExpectedTokenNotInSet,
                Cause::TokenNotInSet { expected: expected.to_vec(), found: TokenType::EOF },
            ));
        };
        if expected.contains(&token.kind) {
            return Ok(token);
        }

        // Switch to zero-based line counting.
        let line_index = usize::try_from(token.line - 1).unwrap_or(0);
        let line_string = self.code.lines().nth(line_index).unwrap_or("");
        Err(Error::new(
            ErrorCode::ExpectedTokenNotInSet,
            Cause::TokenNotInSet { expected: expected.to_vec(), found: token.kind },
            line_string,
            token.line,
            token.start_position,
            token.end_position.max(token.start_position.saturating_add(1)),
        ))
    }

    pub fn print_tokens(&self) {
        for token in self.tokens.iter() {
            println!("{}", token);
        }
    }

    pub fn write_tokens(&self, out: &mut impl Write) -> std::io::Result<()> {
        for token in self.tokens.iter() {
            writeln!(out, "{}", token)?;
        }
        out.flush()
    }
}
