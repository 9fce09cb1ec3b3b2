use super::cursor::{Cursor, Position};
use super::rules::{ExpectRune, Match};
use super::token::Token;
use crate::toolchain::diagnostics::{Cause, Error, ErrorCode, Found};

/// A scanner definition: scans exactly one token per call and ends with [Scanner::exit].
pub type ScanFn = fn(&mut Scanner<'_>) -> Result<Token, Error>;

/// The scanning engine over one input.
///
/// A scanner definition drives the engine through [expect](Scanner::expect),
/// [skip_rune](Scanner::skip_rune), [match_token](Scanner::match_token) and finally
/// [exit](Scanner::exit). Runes consumed by `expect` accumulate into the text of the current
/// token, runes consumed by `skip_rune` do not. Handlers invoked by `expect` may call back into
/// any of these, so rule nesting is ordinary recursion on the same scanner.
pub struct Scanner<'s> {
    cursor: Cursor<'s>,
    // Text accepted since the last token boundary.
    literal: String,
    token_start: Position,
    token_end: Position,
    // Set by match_token, handed out by exit.
    pending: Option<Token>,
}

impl<'s> Scanner<'s> {
    pub fn new(input: &'s str) -> Scanner<'s> {
        let cursor = Cursor::new(input);
        let start = cursor.position();
        Scanner { cursor, literal: String::new(), token_start: start, token_end: start, pending: None }
    }

    /// Runs one invocation of `scan`, starting from fresh token state at the current position.
    pub fn scan(&mut self, scan: ScanFn) -> Result<Token, Error> {
        self.begin_token();
        self.pending = None;
        scan(self)
    }

    pub fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    pub fn current_line_text(&self) -> &'s str {
        self.cursor.current_line_text()
    }

    /// The text accumulated since the last token boundary.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Matches the current rune against `rule`, consuming it on a match.
    ///
    /// Returns whether anything matched. A required rule that matches nothing fails with
    /// [ErrorCode::RuneExpectedNotFound] when it names a single rune, and
    /// [ErrorCode::ScannedTokenNotInSet] otherwise.
    pub fn expect(&mut self, rule: &ExpectRune<'_>) -> Result<bool, Error> {
        let mut matched = false;
        loop {
            let selected = match self.cursor.peek() {
                Some(c) => rule.select(c),
                None => None,
            };
            let Some(handler) = selected else {
                break;
            };
            matched = true;

            let before = self.cursor.offset();
            match handler {
                Some(handler) => handler(self)?,
                None => {
                    self.accept_rune();
                }
            }

            // A handler that consumed nothing would match the same rune forever.
            if !rule.options.multiple || self.cursor.offset() == before {
                break;
            }
        }

        if !matched && !rule.options.optional {
            let found = Found::from(self.cursor.peek());
            return Err(match rule.single_rune() {
                Some(expected) => self.error_at_cursor(
                    ErrorCode::RuneExpectedNotFound,
                    Cause::RuneExpected { expected, found },
                ),
                None => self.error_at_cursor(
                    ErrorCode::ScannedTokenNotInSet,
                    Cause::RuneNotInSet { found },
                ),
            });
        }
        Ok(matched)
    }

    /// Consumes the current rune without adding it to the token text.
    pub fn skip_rune(&mut self) -> Option<char> {
        let c = self.cursor.bump()?;
        if self.literal.is_empty() {
            self.token_start = self.cursor.position();
            self.token_end = self.token_start;
        }
        Some(c)
    }

    /// Resolves the accumulated text against `candidates` and emits the token.
    ///
    /// Exact literals win over the catch-all. When no text has been accumulated yet, the longest
    /// literal that prefixes the remaining input is consumed first, so a table of fixed literals
    /// can match directly from the input. The emitted token is returned and also held for
    /// [exit](Scanner::exit); accumulation restarts after it.
    pub fn match_token(&mut self, candidates: &[Match]) -> Result<Token, Error> {
        if self.literal.is_empty() {
            let rest = self.cursor.rest();
            let longest = candidates
                .iter()
                .filter(|m| !m.is_catch_all() && rest.starts_with(m.literal))
                .map(|m| m.literal)
                .max_by_key(|literal| literal.len());
            if let Some(literal) = longest {
                for _ in literal.chars() {
                    self.accept_rune();
                }
            }
        }

        let resolved = candidates
            .iter()
            .find(|m| !m.is_catch_all() && m.literal == self.literal)
            .or_else(|| candidates.iter().find(|m| m.is_catch_all()));
        let Some(resolved) = resolved else {
            return Err(self.unmatched_literal_error());
        };

        let end_position = self.span_end();
        let token = Token::new(
            resolved.id,
            std::mem::take(&mut self.literal),
            self.token_start.line,
            self.token_start.column,
            end_position,
        );
        self.pending = Some(token.clone());
        self.begin_token();
        Ok(token)
    }

    /// Ends one scan invocation.
    ///
    /// Hands out the matched token, or an EOF token when the input is exhausted. Text accepted
    /// but never matched fails with [ErrorCode::TokenExpectedNotFound], and a current rune that
    /// no rule consumed fails with [ErrorCode::ScannedTokenNotInSet].
    pub fn exit(&mut self) -> Result<Token, Error> {
        if let Some(token) = self.pending.take() {
            self.begin_token();
            return Ok(token);
        }

        if !self.literal.is_empty() {
            return Err(self.unmatched_literal_error());
        }

        match self.cursor.peek() {
            None => {
                let position = self.cursor.position();
                self.begin_token();
                Ok(Token::eof(position.line, position.column))
            }
            Some(c) => Err(self.error_at_cursor(
                ErrorCode::ScannedTokenNotInSet,
                Cause::RuneNotInSet { found: Found::Rune(c) },
            )),
        }
    }

    fn accept_rune(&mut self) -> Option<char> {
        if self.literal.is_empty() {
            self.token_start = self.cursor.position();
        }
        let c = self.cursor.bump()?;
        self.literal.push(c);
        self.token_end = self.cursor.position();
        Some(c)
    }

    // End column of the accumulated text, clamped to the line the token starts on.
    fn span_end(&self) -> i32 {
        if self.literal.is_empty() {
            return self.token_start.column;
        }
        if self.token_end.line == self.token_start.line {
            return self.token_end.column;
        }
        let first_line = self.literal.split('\n').next().unwrap_or("");
        let runes = i32::try_from(first_line.chars().count()).unwrap_or(i32::MAX);
        self.token_start.column.saturating_add(runes)
    }

    fn begin_token(&mut self) {
        self.literal.clear();
        self.token_start = self.cursor.position();
        self.token_end = self.token_start;
    }

    fn unmatched_literal_error(&self) -> Error {
        let start = self.token_start;
        let end_position = self.span_end().max(start.column.saturating_add(1));
        let cause = Cause::NoMatchingLiteral { text: self.literal.clone() };
        self.fail(ErrorCode::TokenExpectedNotFound, cause, start, end_position)
    }

    fn error_at_cursor(&self, code: ErrorCode, cause: Cause) -> Error {
        let position = self.cursor.position();
        self.fail(code, cause, position, position.column.saturating_add(1))
    }

    // Token state is left as is, so a definition that handles the error can still match or exit
    // with the text consumed so far. The next scan invocation starts fresh regardless.
    fn fail(&self, code: ErrorCode, cause: Cause, at: Position, end_position: i32) -> Error {
        let line_string = self.cursor.line_text_at(at.offset);
        Error::new(code, cause, line_string, at.line, at.column, end_position)
    }
}
