use crate::ast::{BinOp, Expr, ExprKind, Token, TokenKind, UnaryOp};
use crate::error::Error;
use crate::position::Span;
use crate::value::Number;

/// Recursive-descent parser over a finished token sequence.
///
/// Grammar, lowest to highest precedence, all binary rules left-associative:
///
/// ```text
/// expr    := WORD '=' expr
///          | term (('+' | '-') term)*
/// term    := factor (('*' | '/') factor)*
/// factor  := ('+' | '-') factor | INTEGER | WORD | '(' expr ')'
/// ```
///
/// Whitespace-run tokens are skipped by the cursor; they exist for the
/// analytics consumers, not the grammar. There is no error recovery: the
/// first syntax error returns immediately and no partial AST survives.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token::new(TokenKind::End, Span::builtin()));
        }
        let mut parser = Parser {
            tokens,
            position: 0,
        };
        parser.skip_blanks();
        parser
    }

    fn current(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        self.skip_blanks();
    }

    fn skip_blanks(&mut self) {
        while self.position + 1 < self.tokens.len()
            && matches!(
                self.tokens[self.position].kind,
                TokenKind::Space(_) | TokenKind::Tab(_) | TokenKind::Line(_)
            )
        {
            self.position += 1;
        }
    }

    /// Next non-whitespace token after the current one, used for the
    /// one-token lookahead that selects the assignment alternative.
    fn peek_significant(&self) -> Option<&Token> {
        self.tokens[self.position + 1..].iter().find(|t| {
            !matches!(
                t.kind,
                TokenKind::Space(_) | TokenKind::Tab(_) | TokenKind::Line(_)
            )
        })
    }

    /// Parse one complete expression; the cursor must then sit on End.
    pub fn parse(&mut self) -> Result<Expr, Error> {
        let expr = self.expr()?;
        if self.current().kind != TokenKind::End {
            return Err(Error::unexpected_token(
                "Expected '+', '-', '*' or '/'",
                self.current().span.clone(),
            ));
        }
        Ok(expr)
    }

    /// The name under the cursor, when the cursor sits on `WORD '='`.
    fn assignment_lookahead(&self) -> Option<String> {
        if let TokenKind::Word(name) = &self.current().kind
            && self
                .peek_significant()
                .is_some_and(|t| t.kind == TokenKind::Assign)
        {
            return Some(name.clone());
        }
        None
    }

    fn expr(&mut self) -> Result<Expr, Error> {
        if let Some(name) = self.assignment_lookahead() {
            let start = self.current().span.clone();
            self.advance(); // name
            self.advance(); // '='
            let value = self.expr()?;
            let span = start.to(&value.span);
            return Ok(Expr::new(
                ExprKind::VariableAssign {
                    name,
                    value: Box::new(value),
                },
                span,
            ));
        }

        self.binary_op(
            Self::term,
            &[
                (TokenKind::Plus, BinOp::Add),
                (TokenKind::Minus, BinOp::Subtract),
            ],
        )
    }

    fn term(&mut self) -> Result<Expr, Error> {
        self.binary_op(
            Self::factor,
            &[
                (TokenKind::Star, BinOp::Multiply),
                (TokenKind::Slash, BinOp::Divide),
            ],
        )
    }

    /// Shared binary-operator combinator: left-folds successive
    /// `(operator, operand)` pairs into nested Binary nodes.
    fn binary_op(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, Error>,
        ops: &[(TokenKind, BinOp)],
    ) -> Result<Expr, Error> {
        let mut left = operand(self)?;

        loop {
            let Some(&(_, op)) = ops.iter().find(|(kind, _)| *kind == self.current().kind)
            else {
                break;
            };

            self.advance();
            let right = operand(self)?;
            let span = left.span.to(&right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Expr, Error> {
        let token = self.current().clone();

        match token.kind {
            // Unary sign wraps a recursively parsed factor, so `--5` applies
            // the operator twice
            TokenKind::Plus | TokenKind::Minus => {
                let op = if token.kind == TokenKind::Plus {
                    UnaryOp::Plus
                } else {
                    UnaryOp::Negate
                };
                self.advance();
                let operand = self.factor()?;
                let span = token.span.to(&operand.span);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }

            TokenKind::Integer(n) => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Number(Number::Integer(n)),
                    token.span,
                ))
            }

            TokenKind::Word(name) => {
                self.advance();
                Ok(Expr::new(ExprKind::VariableRef(name), token.span))
            }

            TokenKind::LParen => {
                self.advance();
                let inner = self.expr()?;
                if self.current().kind != TokenKind::RParen {
                    return Err(Error::missing_token(
                        "Expected ')'",
                        self.current().span.clone(),
                    ));
                }
                // The node's span widens to cover both parentheses
                let span = token.span.to(&self.current().span);
                self.advance();
                Ok(Expr::new(inner.kind, span))
            }

            _ => Err(Error::unexpected_token(
                "Expected number or expression",
                token.span,
            )),
        }
    }
}
