// tests/lexer_tests.rs

use basil_lang::ast::{Keyword, TokenKind};
use basil_lang::lexer::{Lexer, annotate_parity, first_illegal};

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new("<test>", input)
        .tokenize()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("%", TokenKind::Percent),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),
        ("=", TokenKind::Assign),
        ("<", TokenKind::Less),
        (">", TokenKind::Greater),
        ("&", TokenKind::Ampersand),
        ("|", TokenKind::Pipe),
        ("^", TokenKind::Caret),
        ("~", TokenKind::Tilde),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            kinds(input),
            vec![expected, TokenKind::End],
            "Failed for input: {}",
            input
        );
    }
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_shift_operators() {
    assert_eq!(kinds("<<"), vec![TokenKind::ShiftLeft, TokenKind::End]);
    assert_eq!(kinds(">>"), vec![TokenKind::ShiftRight, TokenKind::End]);
}

#[test]
fn test_shift_vs_single_char() {
    // Separated angle brackets stay single-char comparisons
    assert_eq!(
        kinds("< <"),
        vec![
            TokenKind::Less,
            TokenKind::Space(1),
            TokenKind::Less,
            TokenKind::End,
        ]
    );

    // Three in a row: the shift is matched first, then the leftover
    assert_eq!(
        kinds("<<<"),
        vec![TokenKind::ShiftLeft, TokenKind::Less, TokenKind::End]
    );
}

// ============================================================================
// Integers
// ============================================================================

#[test]
fn test_integers() {
    assert_eq!(kinds("0"), vec![TokenKind::Integer(0), TokenKind::End]);
    assert_eq!(kinds("42"), vec![TokenKind::Integer(42), TokenKind::End]);
    assert_eq!(kinds("007"), vec![TokenKind::Integer(7), TokenKind::End]);
}

#[test]
fn test_oversized_literal_saturates() {
    assert_eq!(
        kinds("99999999999999999999"),
        vec![TokenKind::Integer(i64::MAX), TokenKind::End]
    );
}

#[test]
fn test_arithmetic_expression() {
    assert_eq!(
        kinds("12+3*4"),
        vec![
            TokenKind::Integer(12),
            TokenKind::Plus,
            TokenKind::Integer(3),
            TokenKind::Star,
            TokenKind::Integer(4),
            TokenKind::End,
        ]
    );
}

// ============================================================================
// Whitespace Runs
// ============================================================================

#[test]
fn test_space_and_tab_runs() {
    // One pass over the run produces both counts
    assert_eq!(
        kinds(" \t \t "),
        vec![TokenKind::Space(3), TokenKind::Tab(2), TokenKind::End]
    );
    assert_eq!(kinds("   "), vec![TokenKind::Space(3), TokenKind::End]);
    assert_eq!(kinds("\t"), vec![TokenKind::Tab(1), TokenKind::End]);
}

#[test]
fn test_newline_runs() {
    assert_eq!(kinds("\n\n\n"), vec![TokenKind::Line(3), TokenKind::End]);
    assert_eq!(
        kinds("1\n2"),
        vec![
            TokenKind::Integer(1),
            TokenKind::Line(1),
            TokenKind::Integer(2),
            TokenKind::End,
        ]
    );
}

// ============================================================================
// Words and Keywords
// ============================================================================

#[test]
fn test_words() {
    assert_eq!(
        kinds("hello"),
        vec![TokenKind::Word("hello".to_string()), TokenKind::End]
    );
    assert_eq!(
        kinds("item42"),
        vec![TokenKind::Word("item42".to_string()), TokenKind::End]
    );
}

#[test]
fn test_word_with_embedded_space() {
    // A single space between alphanumerics is absorbed into the word run
    assert_eq!(
        kinds("hello world"),
        vec![TokenKind::Word("hello world".to_string()), TokenKind::End]
    );

    // A double space ends the run
    assert_eq!(
        kinds("hello  world"),
        vec![
            TokenKind::Word("hello".to_string()),
            TokenKind::Space(2),
            TokenKind::Word("world".to_string()),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_keywords() {
    let test_cases = vec![
        ("while", Keyword::While),
        ("else", Keyword::Else),
        ("for", Keyword::For),
        ("function", Keyword::Function),
        ("static", Keyword::Static),
        ("return", Keyword::Return),
        ("Public", Keyword::Public),
        ("Private", Keyword::Private),
        ("null", Keyword::Null),
        ("New", Keyword::New),
        ("Class", Keyword::Class),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            kinds(input),
            vec![TokenKind::Keyword(expected), TokenKind::End],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_keywords_vs_words() {
    // The whole run is classified, never a prefix of it
    assert_eq!(
        kinds("Classy"),
        vec![TokenKind::Word("Classy".to_string()), TokenKind::End]
    );
    assert_eq!(
        kinds("whileloop"),
        vec![TokenKind::Word("whileloop".to_string()), TokenKind::End]
    );
}

// ============================================================================
// Unknown Characters
// ============================================================================

#[test]
fn test_unknown_character_position() {
    let tokens = Lexer::new("<test>", "@").tokenize();
    assert_eq!(tokens[0].kind, TokenKind::Unknown('@'));
    assert_eq!(tokens[0].span.start.line, 0);
    assert_eq!(tokens[0].span.start.column, 0);
}

#[test]
fn test_unknown_character_on_second_line() {
    let tokens = Lexer::new("<test>", "1+\n  @").tokenize();
    let unknown = tokens
        .iter()
        .find(|t| matches!(t.kind, TokenKind::Unknown(_)))
        .unwrap();
    assert_eq!(unknown.kind, TokenKind::Unknown('@'));
    assert_eq!(unknown.span.start.line, 1);
    assert_eq!(unknown.span.start.column, 2);
}

#[test]
fn test_scanning_continues_past_unknown() {
    // One pass reports every bad character instead of aborting at the first
    assert_eq!(
        kinds("1@2#3"),
        vec![
            TokenKind::Integer(1),
            TokenKind::Unknown('@'),
            TokenKind::Integer(2),
            TokenKind::Unknown('#'),
            TokenKind::Integer(3),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_first_illegal() {
    let tokens = Lexer::new("<test>", "1@2#3").tokenize();
    let error = first_illegal(&tokens).unwrap();
    assert_eq!(error.message, "'@'");
    assert_eq!(error.span.start.column, 1);

    let clean = Lexer::new("<test>", "1+2").tokenize();
    assert!(first_illegal(&clean).is_none());
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn test_token_spans() {
    let tokens = Lexer::new("<test>", "12+3").tokenize();

    // 12: [0, 2), +: [2, 3), 3: [3, 4)
    assert_eq!(tokens[0].span.start.index, 0);
    assert_eq!(tokens[0].span.end.index, 2);
    assert_eq!(tokens[1].span.start.index, 2);
    assert_eq!(tokens[2].span.start.index, 3);
    assert_eq!(tokens[2].span.end.index, 4);
}

#[test]
fn test_empty_input() {
    assert_eq!(kinds(""), vec![TokenKind::End]);
}

// ============================================================================
// Parity Post-Pass
// ============================================================================

#[test]
fn test_parity_odd() {
    let tokens = annotate_parity(Lexer::new("<test>", "7").tokenize());
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Integer(7), TokenKind::Odd, TokenKind::End]
    );
}

#[test]
fn test_parity_even() {
    let tokens = annotate_parity(Lexer::new("<test>", "1+2").tokenize());
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer(1),
            TokenKind::Plus,
            TokenKind::Integer(2),
            TokenKind::Even,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_parity_skips_non_integer_endings() {
    let tokens = annotate_parity(Lexer::new("<test>", "1+").tokenize());
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Integer(1), TokenKind::Plus, TokenKind::End]
    );

    let empty = annotate_parity(Lexer::new("<test>", "").tokenize());
    assert_eq!(empty.len(), 1);
}

#[test]
fn test_parity_marker_carries_integer_span() {
    let tokens = annotate_parity(Lexer::new("<test>", "10+4").tokenize());
    let marker = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Even)
        .unwrap();
    assert_eq!(marker.span.start.index, 3);
    assert_eq!(marker.span.end.index, 4);
}
