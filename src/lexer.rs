use crate::ast::{Keyword, Token, TokenKind};
use crate::error::Error;
use crate::position::{Position, Span};

/// The scanner: turns source text into a vector of spanned tokens.
///
/// A lexer is a single-use value scoped to one run. Scanning never fails;
/// a character that matches no rule becomes an [`TokenKind::Unknown`] token
/// carrying its own position, and the pass continues so one scan reports
/// every bad character.
pub struct Lexer {
    chars: Vec<char>,
    pos: Position,
    current: Option<char>,
}

impl Lexer {
    pub fn new(source_name: &str, text: &str) -> Self {
        let mut lexer = Lexer {
            chars: text.chars().collect(),
            pos: Position::start(source_name, text),
            current: None,
        };
        lexer.advance();
        lexer
    }

    fn advance(&mut self) {
        self.pos.advance(self.current);
        self.current = self.chars.get(self.pos.index as usize).copied();
    }

    fn peek(&self, offset: i64) -> Option<char> {
        let index = self.pos.index + offset;
        if index < 0 {
            return None;
        }
        self.chars.get(index as usize).copied()
    }

    /// Scan the whole source, ending with a terminal [`TokenKind::End`].
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current {
            match ch {
                ' ' | '\t' => self.read_blank_run(&mut tokens),
                '\n' => tokens.push(self.read_line_run()),
                c if c.is_ascii_digit() => tokens.push(self.read_number()),
                c if c.is_ascii_alphanumeric() => tokens.push(self.read_word()),
                _ => tokens.push(self.read_operator()),
            }
        }

        let end = self.pos.clone();
        tokens.push(Token::new(TokenKind::End, Span::new(end.clone(), end)));
        tokens
    }

    /// One pass over a space/tab run, emitting a Space and/or Tab token for
    /// whichever counts came out non-zero.
    fn read_blank_run(&mut self, tokens: &mut Vec<Token>) {
        let start = self.pos.clone();
        let mut spaces = 0;
        let mut tabs = 0;

        while let Some(ch) = self.current {
            match ch {
                ' ' => spaces += 1,
                '\t' => tabs += 1,
                _ => break,
            }
            self.advance();
        }

        let span = Span::new(start, self.pos.clone());
        if spaces > 0 {
            tokens.push(Token::new(TokenKind::Space(spaces), span.clone()));
        }
        if tabs > 0 {
            tokens.push(Token::new(TokenKind::Tab(tabs), span));
        }
    }

    fn read_line_run(&mut self) -> Token {
        let start = self.pos.clone();
        let mut lines = 0;

        while self.current == Some('\n') {
            lines += 1;
            self.advance();
        }

        Token::new(TokenKind::Line(lines), Span::new(start, self.pos.clone()))
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos.clone();
        let mut digits = String::new();

        while let Some(ch) = self.current {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Saturates rather than panics on an absurdly long digit run
        let value = digits.parse::<i64>().unwrap_or(i64::MAX);
        Token::new(TokenKind::Integer(value), Span::new(start, self.pos.clone()))
    }

    /// Maximal word run: alphanumerics, absorbing a single embedded space
    /// when another alphanumeric follows immediately. The finished run is
    /// classified against the keyword table afterwards, never char by char.
    fn read_word(&mut self) -> Token {
        let start = self.pos.clone();
        let mut word = String::new();

        while let Some(ch) = self.current {
            if ch.is_ascii_alphanumeric() {
                word.push(ch);
                self.advance();
            } else if ch == ' ' && self.peek(1).is_some_and(|c| c.is_ascii_alphanumeric()) {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = match Keyword::lookup(&word) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Word(word),
        };
        Token::new(kind, Span::new(start, self.pos.clone()))
    }

    /// Single-character operators and punctuation, with `<<`/`>>` matched
    /// by peeking the second character.
    fn read_operator(&mut self) -> Token {
        let start = self.pos.clone();
        let ch = self.current.unwrap_or_default();

        let (kind, width) = match ch {
            '+' => (TokenKind::Plus, 1),
            '-' => (TokenKind::Minus, 1),
            '*' => (TokenKind::Star, 1),
            '/' => (TokenKind::Slash, 1),
            '%' => (TokenKind::Percent, 1),
            '(' => (TokenKind::LParen, 1),
            ')' => (TokenKind::RParen, 1),
            ',' => (TokenKind::Comma, 1),
            ';' => (TokenKind::Semicolon, 1),
            '=' => (TokenKind::Assign, 1),
            '&' => (TokenKind::Ampersand, 1),
            '|' => (TokenKind::Pipe, 1),
            '^' => (TokenKind::Caret, 1),
            '~' => (TokenKind::Tilde, 1),
            '<' => {
                if self.peek(1) == Some('<') {
                    (TokenKind::ShiftLeft, 2)
                } else {
                    (TokenKind::Less, 1)
                }
            }
            '>' => {
                if self.peek(1) == Some('>') {
                    (TokenKind::ShiftRight, 2)
                } else {
                    (TokenKind::Greater, 1)
                }
            }
            other => (TokenKind::Unknown(other), 1),
        };

        for _ in 0..width {
            self.advance();
        }
        Token::new(kind, Span::new(start, self.pos.clone()))
    }
}

/// Parity post-pass over a finished token sequence.
///
/// When the last token before the terminal End is an integer, an Even or
/// Odd marker with the integer's span is inserted ahead of End. This is a
/// cosmetic annotation; [`run`](crate::run) never applies it.
pub fn annotate_parity(mut tokens: Vec<Token>) -> Vec<Token> {
    let at = match tokens.last() {
        Some(t) if t.kind == TokenKind::End => tokens.len() - 1,
        Some(_) => tokens.len(),
        None => return tokens,
    };
    if at == 0 {
        return tokens;
    }

    if let TokenKind::Integer(n) = &tokens[at - 1].kind {
        let kind = if n % 2 == 0 {
            TokenKind::Even
        } else {
            TokenKind::Odd
        };
        let span = tokens[at - 1].span.clone();
        tokens.insert(at, Token::new(kind, span));
    }
    tokens
}

/// First character that matched no token rule, as a diagnostic.
///
/// Scanning deliberately keeps going past unknown characters; the run
/// boundary uses this to surface the first one once the pass is complete.
pub fn first_illegal(tokens: &[Token]) -> Option<Error> {
    tokens.iter().find_map(|token| match token.kind {
        TokenKind::Unknown(ch) => Some(Error::illegal_character(ch, token.span.clone())),
        _ => None,
    })
}

#[test]
fn test_arithmetic_tokens() {
    let kinds: Vec<TokenKind> = Lexer::new("<test>", "12+3*4")
        .tokenize()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
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

#[test]
fn test_keyword_classification() {
    let kinds: Vec<TokenKind> = Lexer::new("<test>", "Class")
        .tokenize()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Keyword(Keyword::Class), TokenKind::End]
    );

    let kinds: Vec<TokenKind> = Lexer::new("<test>", "Classy")
        .tokenize()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Word("Classy".to_string()), TokenKind::End]
    );
}
