//! The parser.
//!
//! A recursive-descent parser with one level per precedence tier: equality, then sums, then
//! products, then powers, then primaries. Every tier is left-associative. Rather than returning
//! `Result`, the parser reports failure in-band as [`Expr::Error`] nodes; the first error
//! encountered wins and is handed back up unchanged.

use crate::ast::{BinOp, Expr, Node};
use crate::ctxt::Ctxt;
use crate::funcs::Func;
use crate::tokenizer::{tokenize, Token, TokenKind};
use std::ops::Range;

/// Parses a token stream into an expression tree.
pub struct Parser<'c> {
    tokens: Vec<Token>,
    cursor: usize,
    ctxt: &'c Ctxt,
}

impl<'c> Parser<'c> {
    /// Creates a parser over an already-tokenized stream.
    pub fn new(tokens: Vec<Token>, ctxt: &'c Ctxt) -> Parser<'c> {
        Parser {
            tokens,
            cursor: 0,
            ctxt,
        }
    }

    /// Tokenizes the source and creates a parser over the result.
    pub fn from_source(input: &str, ctxt: &'c Ctxt) -> Parser<'c> {
        Parser::new(tokenize(input, ctxt), ctxt)
    }

    /// Parses a single expression, leaving any trailing tokens unconsumed.
    pub fn parse_expression(&mut self) -> Node {
        self.parse_equals()
    }

    /// Parses an expression and requires it to consume the whole stream; trailing tokens become
    /// an error node.
    pub fn parse_full(&mut self) -> Node {
        let node = self.parse_expression();
        if node.is_error() {
            return node;
        }
        match self.peek() {
            Some(token) => Expr::error_at(
                format!("expected end of input, found `{}`", token.lexeme),
                token.span.clone(),
            ),
            None => node,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn consume(&mut self) {
        self.cursor += 1;
    }

    /// The span of the current token, or an empty span just past the last one.
    fn span(&self) -> Range<usize> {
        match self.peek() {
            Some(token) => token.span.clone(),
            None => self.eof_span(),
        }
    }

    fn eof_span(&self) -> Range<usize> {
        let end = self.tokens.last().map(|token| token.span.end).unwrap_or(0);
        end..end
    }

    /// Returns the upcoming operator if it is one of `allowed`, without consuming it.
    fn peek_operator(&self, allowed: &[BinOp]) -> Option<BinOp> {
        let token = self.peek()?;
        if token.kind != TokenKind::Operator {
            return None;
        }
        let op = BinOp::from_lexeme(&token.lexeme)?;
        allowed.contains(&op).then_some(op)
    }

    /// Whether the upcoming token has the given lexeme.
    fn next_is(&self, lexeme: &str) -> bool {
        self.peek().is_some_and(|token| token.lexeme == lexeme)
    }

    fn parse_equals(&mut self) -> Node {
        let mut lhs = self.parse_sum();
        if lhs.is_error() {
            return lhs;
        }
        while self
            .peek()
            .is_some_and(|token| token.kind == TokenKind::Equals)
        {
            self.consume();
            let rhs = self.parse_sum();
            if rhs.is_error() {
                return rhs;
            }
            lhs = Expr::equals(lhs, rhs);
        }
        lhs
    }

    fn parse_sum(&mut self) -> Node {
        self.parse_binary(&[BinOp::Add, BinOp::Sub], Parser::parse_product)
    }

    fn parse_product(&mut self) -> Node {
        self.parse_binary(&[BinOp::Mul, BinOp::Div], Parser::parse_power)
    }

    fn parse_power(&mut self) -> Node {
        self.parse_binary(&[BinOp::Exp], Parser::parse_primary)
    }

    /// Parses a left-associative run of binary operators over the next-tighter tier.
    fn parse_binary(&mut self, allowed: &[BinOp], next: fn(&mut Parser<'c>) -> Node) -> Node {
        let mut lhs = next(self);
        if lhs.is_error() {
            return lhs;
        }
        while let Some(op) = self.peek_operator(allowed) {
            self.consume();
            let rhs = next(self);
            if rhs.is_error() {
                return rhs;
            }
            lhs = Expr::binary(op, lhs, rhs);
        }
        lhs
    }

    fn parse_primary(&mut self) -> Node {
        let Some(token) = self.peek().cloned() else {
            return Expr::error_at("unexpected end of tokens", self.eof_span());
        };
        match token.kind {
            TokenKind::Number => {
                self.consume();
                match token.lexeme.parse::<f64>() {
                    Ok(value) => Expr::number(value),
                    Err(_) => Expr::error_at(
                        format!("invalid numeric literal `{}`", token.lexeme),
                        token.span,
                    ),
                }
            }
            TokenKind::Variable => {
                self.consume();
                Expr::variable(token.lexeme)
            }
            TokenKind::Constant => {
                self.consume();
                Expr::constant(token.lexeme, self.ctxt)
            }
            TokenKind::Function => {
                self.consume();
                self.parse_call(&token)
            }
            TokenKind::ModulusDelimiter => {
                self.consume();
                self.parse_modulus()
            }
            TokenKind::Parenthesis if token.lexeme == "(" => {
                self.consume();
                self.parse_paren()
            }
            _ => Expr::error_at(
                format!("unexpected token `{}` ({:?})", token.lexeme, token.kind),
                token.span,
            ),
        }
    }

    fn parse_call(&mut self, name: &Token) -> Node {
        let Some(func) = self.ctxt.get_func(&name.lexeme) else {
            let mut message = format!("could not find function `{}`", name.lexeme);
            if let Some(similar) = self.ctxt.get_similar_funcs(&name.lexeme).first() {
                message.push_str(&format!("; did you mean `{similar}`?"));
            }
            return Expr::error_at(message, name.span.clone());
        };
        if !self.next_is("(") {
            return Expr::error_at("expected `(` after function name", self.span());
        }
        self.consume();
        let arg = self.parse_expression();
        if arg.is_error() {
            return arg;
        }
        if !self.next_is(")") {
            return Expr::error_at("expected `)` after function argument", self.span());
        }
        self.consume();
        Expr::call(func, arg)
    }

    /// `|expr|` desugars to a call to `abs`.
    fn parse_modulus(&mut self) -> Node {
        let arg = self.parse_expression();
        if arg.is_error() {
            return arg;
        }
        if !self.next_is("|") {
            return Expr::error_at("expected `|` to close modulus expression", self.span());
        }
        self.consume();
        Expr::call(Func::Abs, arg)
    }

    fn parse_paren(&mut self) -> Node {
        let inner = self.parse_expression();
        if inner.is_error() {
            return inner;
        }
        if !self.next_is(")") {
            return Expr::error_at("expected `)`", self.span());
        }
        self.consume();
        inner
    }
}
