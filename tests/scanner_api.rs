use arith_scan::scanner::{tokens::TokenKind, ScanError, Scanner};

#[test]
fn scan_is_callable_on_an_owned_scanner() {
    let mut scanner = Scanner::new("1 + 2".as_bytes());

    let mut kinds = vec![];
    while let Some(token) = scanner.scan().unwrap() {
        kinds.push(token.kind);
    }

    assert_eq!(
        kinds,
        vec![TokenKind::IntLiteral(1), TokenKind::Plus, TokenKind::IntLiteral(2)]
    );
    assert!(scanner.scan().unwrap().is_none());
}

#[test]
fn scan_reports_lexical_errors_to_the_caller() {
    let mut scanner = Scanner::new("4 *\n#".as_bytes());

    assert_eq!(scanner.scan().unwrap().unwrap().int_value(), Some(4));
    assert_eq!(scanner.scan().unwrap().unwrap().kind, TokenKind::Star);
    match scanner.scan() {
        Err(ScanError::Lex(err)) => assert_eq!(err.line, 2),
        other => panic!("Expected a lexical error, got {:?}", other),
    }
}

#[test]
fn tokens_can_be_mixed_with_scan() {
    let mut scanner = Scanner::new("7 - 3 / 1".as_bytes());

    let first = scanner.scan().unwrap().unwrap();
    assert_eq!(first.kind, TokenKind::IntLiteral(7));

    let rest: Vec<TokenKind> = scanner.tokens().map(|t| t.unwrap().kind).collect();
    assert_eq!(
        rest,
        vec![
            TokenKind::Minus,
            TokenKind::IntLiteral(3),
            TokenKind::Slash,
            TokenKind::IntLiteral(1),
        ]
    );
    assert_eq!(scanner.line(), 1);
}
