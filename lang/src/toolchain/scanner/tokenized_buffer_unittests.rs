#[cfg(test)]
mod tests {
    use crate::source;
    use crate::toolchain::diagnostics::{ErrorCode, NullDiagnosticConsumer, StreamDiagnosticConsumer};
    use crate::toolchain::json::{self, scan};
    use crate::toolchain::scanner::{ScanConfig, Token, TokenType, TokenizedBuffer};

    #[test]
    fn halting_stops_at_first_error() {
        let mut diags = NullDiagnosticConsumer {};
        let source = source!("[1, @, 2]");
        let buffer = TokenizedBuffer::tokenize(source, scan, &ScanConfig::halting(), &mut diags);
        assert_eq!(buffer.errors().len(), 1);
        assert_eq!(buffer.errors()[0].code, ErrorCode::ScannedTokenNotInSet);
        let kinds: Vec<TokenType> = buffer.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![json::LBRACKET, json::NUMBER, json::COMMA, json::EOF]);
        assert_eq!(buffer.tokens().last(), Some(&Token::eof(1, 5)));
    }

    #[test]
    fn recovery_skips_and_continues() {
        let mut diags = NullDiagnosticConsumer {};
        let source = source!("[1, @, 2, #]");
        let buffer = TokenizedBuffer::tokenize(
            source,
            scan,
            &ScanConfig::recovering(None),
            &mut diags,
        );
        assert_eq!(buffer.errors().len(), 2);
        assert_eq!(buffer.errors()[0].start_position, 5);
        assert_eq!(buffer.errors()[1].start_position, 11);
        let kinds: Vec<TokenType> = buffer.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                json::LBRACKET,
                json::NUMBER,
                json::COMMA,
                json::COMMA,
                json::NUMBER,
                json::COMMA,
                json::RBRACKET,
                json::EOF,
            ]
        );
    }

    #[test]
    fn recovery_respects_max_errors() {
        let mut diags = NullDiagnosticConsumer {};
        let source = source!("@ @ @ @");
        let buffer = TokenizedBuffer::tokenize(
            source,
            scan,
            &ScanConfig::recovering(Some(2)),
            &mut diags,
        );
        assert_eq!(buffer.errors().len(), 2);
        assert_eq!(buffer.tokens().len(), 1);
        assert!(buffer.tokens()[0].is_eof());
    }

    #[test]
    fn recovery_after_error_at_end_of_input() {
        let mut diags = NullDiagnosticConsumer {};
        let source = source!("[\"open");
        let buffer = TokenizedBuffer::tokenize(
            source,
            scan,
            &ScanConfig::recovering(None),
            &mut diags,
        );
        assert_eq!(buffer.errors().len(), 1);
        assert_eq!(buffer.errors()[0].code, ErrorCode::RuneExpectedNotFound);
        assert_eq!(buffer.tokens().len(), 2);
        assert!(buffer.tokens()[1].is_eof());
    }

    #[test]
    fn errors_reach_the_consumer() {
        let mut diags = StreamDiagnosticConsumer::new(Vec::new());
        let source = source!("{\"a\":\n  tru}");
        let buffer = TokenizedBuffer::tokenize(
            source,
            scan,
            &ScanConfig::halting(),
            &mut diags,
        );
        assert!(buffer.has_errors());
        let written = diags.into_inner().expect("consumer was flushed");
        assert_eq!(
            String::from_utf8(written).expect("diagnostics are utf-8"),
            "Error Line:2 no token matches \"tru\"\n  tru}\n  ^--^\n"
        );
    }

    #[test]
    fn expect_token_checks_membership() {
        let mut diags = NullDiagnosticConsumer {};
        let source = source!("{\n  \"key\" 1\n}");
        let buffer = TokenizedBuffer::tokenize(
            source,
            scan,
            &ScanConfig::halting(),
            &mut diags,
        );
        assert!(!buffer.has_errors());

        let key = buffer.expect_token(1, &[json::STRING]).expect("token 1 is the key");
        assert_eq!(key.literal, "key");

        let error = buffer
            .expect_token(2, &[json::COLON, json::COMMA])
            .expect_err("a number follows the key");
        assert_eq!(error.code, ErrorCode::ExpectedTokenNotInSet);
        assert_eq!(
            error.format(),
            "Error Line:2 expected one of [COLON, COMMA], found NUMBER\n  \"key\" 1\n        ^\n"
        );

        let past_end = buffer.expect_token(99, &[json::EOF]).expect("past the end is EOF");
        assert!(past_end.is_eof());
        assert_eq!(buffer.token_at(99), None);
    }

    #[test]
    fn write_tokens_lists_every_token() {
        let mut diags = NullDiagnosticConsumer {};
        let source = source!("[\"x\"]");
        let buffer = TokenizedBuffer::tokenize(source, scan, &ScanConfig::halting(), &mut diags);
        let mut out = Vec::new();
        buffer.write_tokens(&mut out).expect("writing to a Vec cannot fail");
        assert_eq!(
            String::from_utf8(out).expect("token dump is utf-8"),
            "1:1-2 LBRACKET \"[\"\n1:3-4 STRING \"x\"\n1:5-6 RBRACKET \"]\"\n1:6-6 EOF \"\"\n"
        );
    }
}
