#[cfg(test)]
mod tests {
    use crate::source;
    use crate::toolchain::diagnostics::{Cause, ErrorCode, Found, NullDiagnosticConsumer};
    use crate::toolchain::json::*;
    use crate::toolchain::scanner::{tokenize, ScanConfig, Token, TokenType, TokenizedBuffer};
    use crate::toolchain::source::SourceBuffer;

    // Scanning helper function to compare the complete token stream against `expect`.
    fn check_scanning(source: &SourceBuffer, expect: Vec<Token>) {
        let mut diags = NullDiagnosticConsumer {};
        let buffer = TokenizedBuffer::tokenize(source, scan, &ScanConfig::halting(), &mut diags);
        assert!(!buffer.has_errors(), "unexpected errors: {:?}", buffer.errors());
        assert_eq!(buffer.tokens(), &expect);
    }

    fn kinds(input: &str) -> Vec<TokenType> {
        tokenize(input, scan)
            .map(|result| result.expect("input should scan").kind)
            .collect()
    }

    #[test]
    fn smoke_test() {
        check_scanning(
            source!(r#"{"a":1}"#),
            vec![
                Token { kind: LBRACE, literal: "{".into(), line: 1, start_position: 1, end_position: 2 },
                Token { kind: STRING, literal: "a".into(), line: 1, start_position: 3, end_position: 4 },
                Token { kind: COLON, literal: ":".into(), line: 1, start_position: 5, end_position: 6 },
                Token { kind: NUMBER, literal: "1".into(), line: 1, start_position: 6, end_position: 7 },
                Token { kind: RBRACE, literal: "}".into(), line: 1, start_position: 7, end_position: 8 },
                Token { kind: EOF, literal: "".into(), line: 1, start_position: 8, end_position: 8 },
            ],
        );
    }

    #[test]
    fn whitespace_only() {
        check_scanning(
            source!("   \n  "),
            vec![Token { kind: EOF, literal: "".into(), line: 2, start_position: 3, end_position: 3 }],
        );
    }

    #[test]
    fn empty_input() {
        check_scanning(
            source!(""),
            vec![Token { kind: EOF, literal: "".into(), line: 1, start_position: 1, end_position: 1 }],
        );
    }

    #[test]
    fn all_punctuation() {
        assert_eq!(
            kinds("{ } [ ] : ,"),
            vec![LBRACE, RBRACE, LBRACKET, RBRACKET, COLON, COMMA, EOF]
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(kinds("[true, false, null]"), vec![
            LBRACKET, TRUE, COMMA, FALSE, COMMA, NULL, RBRACKET, EOF
        ]);
    }

    #[test]
    fn unknown_word_is_token_expected_not_found() {
        let results: Vec<_> = tokenize("[tru]", scan).collect();
        assert_eq!(results.len(), 2);
        let error = results[1].as_ref().expect_err("tru is not a keyword");
        assert_eq!(error.code, ErrorCode::TokenExpectedNotFound);
        assert!(matches!(&error.cause, Cause::NoMatchingLiteral { text } if text == "tru"));
        assert_eq!((error.start_position, error.end_position), (2, 5));
        assert_eq!(error.format(), "Error Line:1 no token matches \"tru\"\n[tru]\n ^--^\n");
    }

    #[test]
    fn numbers() {
        let tokens: Vec<Token> = tokenize("0 -12 3.25 6e10 7.5E-3", scan)
            .map(|result| result.expect("numbers should scan"))
            .collect();
        let literals: Vec<&str> = tokens.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(literals, vec!["0", "-12", "3.25", "6e10", "7.5E-3", ""]);
        assert!(tokens[..5].iter().all(|t| t.kind == NUMBER));
    }

    #[test]
    fn number_missing_fraction_digits() {
        let results: Vec<_> = tokenize("1.", scan).collect();
        let error = results[0].as_ref().expect_err("fraction needs digits");
        assert_eq!(error.code, ErrorCode::ScannedTokenNotInSet);
        assert!(matches!(error.cause, Cause::RuneNotInSet { found: Found::EndOfInput }));
        assert_eq!((error.start_position, error.end_position), (3, 4));
    }

    #[test]
    fn strings_drop_quotes_and_keep_escapes() {
        let tokens: Vec<Token> = tokenize(r#"["", "x\"y", "é"]"#, scan)
            .map(|result| result.expect("strings should scan"))
            .collect();
        assert_eq!(tokens[1], Token::new(STRING, "", 1, 3, 3));
        assert_eq!(tokens[3].literal, r#"x\"y"#);
        assert_eq!((tokens[3].start_position, tokens[3].end_position), (7, 11));
        assert_eq!(tokens[5].literal, r"é");
    }

    #[test]
    fn unterminated_string() {
        let results: Vec<_> = tokenize(r#"{"a"#, scan).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().map(|t| t.kind).ok(), Some(LBRACE));

        let error = results[1].as_ref().expect_err("string is not closed");
        assert_eq!(error.code, ErrorCode::RuneExpectedNotFound);
        assert!(matches!(
            error.cause,
            Cause::RuneExpected { expected: '"', found: Found::EndOfInput }
        ));
        assert_eq!(error.line_string, r#"{"a"#);
        assert_eq!(error.line, 1);
        assert_eq!((error.start_position, error.end_position), (4, 5));
        assert_eq!(
            error.format(),
            "Error Line:1 expected '\"', found end of input\n{\"a\n   ^\n"
        );
    }

    #[test]
    fn newline_inside_string() {
        let results: Vec<_> = tokenize("\"ab\ncd\"", scan).collect();
        let error = results[0].as_ref().expect_err("strings cannot span lines");
        assert_eq!(error.code, ErrorCode::RuneExpectedNotFound);
        assert!(matches!(error.cause, Cause::RuneExpected { found: Found::Rune('\n'), .. }));
        assert_eq!(error.line_string, "\"ab");
        assert_eq!(error.start_position, 4);
    }

    #[test]
    fn unknown_rune() {
        let results: Vec<_> = tokenize("[@]", scan).collect();
        let error = results[1].as_ref().expect_err("@ starts no token");
        assert_eq!(error.code, ErrorCode::ScannedTokenNotInSet);
        assert!(matches!(error.cause, Cause::RuneNotInSet { found: Found::Rune('@') }));
        assert_eq!(error.format(), "Error Line:1 unexpected '@'\n[@]\n ^\n");
    }

    #[test]
    fn positions_across_lines() {
        let tokens: Vec<Token> = tokenize("{\n\t\"k\": [1,\n  2]\n}", scan)
            .map(|result| result.expect("input should scan"))
            .collect();
        let spans: Vec<(i32, i32, i32)> =
            tokens.iter().map(|t| (t.line, t.start_position, t.end_position)).collect();
        assert_eq!(
            spans,
            vec![
                (1, 1, 2),
                (2, 3, 4),
                (2, 5, 6),
                (2, 7, 8),
                (2, 8, 9),
                (2, 9, 10),
                (3, 3, 4),
                (3, 4, 5),
                (4, 1, 2),
                (4, 2, 2),
            ]
        );
    }

    // Every rune is either part of a token or one of the runes the JSON scanner skips.
    #[test]
    fn literals_reconstruct_input() {
        let input = "{\"name\": \"runelex\", \"tags\": [\"a\", \"b\"], \"n\": -1.5e3, \"ok\": true}";
        let literals: String = tokenize(input, scan)
            .map(|result| result.expect("input should scan").literal)
            .collect();
        let without_skipped: String = input.chars().filter(|c| !matches!(c, ' ' | '"')).collect();
        assert_eq!(literals, without_skipped);
    }
}
