//! The tokenizer.
//!
//! Tokenizing is a two-layer affair. A [`logos`]-generated lexer splits the source into raw
//! lexemes, then [`tokenize`] classifies each one against the [`Ctxt`]: names become functions,
//! constants, or variables depending on what the context has registered, and a `-` in negating
//! position is merged with a following numeric literal into a single negative [`Token`].

pub mod token;

pub use token::{Token, TokenKind};

use crate::ctxt::Ctxt;
use logos::Logos;
use token::RawKind;

/// Tokenizes the source, consulting the context to classify names.
///
/// This never fails; unrecognized characters come out as [`TokenKind::Unknown`] tokens for the
/// parser to report.
pub fn tokenize(input: &str, ctxt: &Ctxt) -> Vec<Token> {
    let mut lexer = RawKind::lexer(input);
    let mut raw = Vec::new();
    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(RawKind::Symbol);
        if kind != RawKind::Whitespace {
            raw.push((kind, lexer.span(), lexer.slice()));
        }
    }

    let mut tokens = Vec::with_capacity(raw.len());
    let mut inside_modulus = false;
    let mut cursor = 0;
    while cursor < raw.len() {
        let (kind, span, slice) = &raw[cursor];
        match kind {
            RawKind::Sub if begins_negative(tokens.last(), inside_modulus) => {
                if let Some((RawKind::Number, num_span, num_slice)) = raw.get(cursor + 1) {
                    tokens.push(Token::new(
                        TokenKind::Number,
                        format!("-{num_slice}"),
                        span.start..num_span.end,
                    ));
                    cursor += 2;
                    continue;
                }

                // no literal follows; it is an ordinary subtraction after all
                tokens.push(Token::new(TokenKind::Operator, *slice, span.clone()));
            }
            RawKind::Add | RawKind::Sub | RawKind::Mul | RawKind::Div | RawKind::Caret => {
                tokens.push(Token::new(TokenKind::Operator, *slice, span.clone()));
            }
            RawKind::Equals => tokens.push(Token::new(TokenKind::Equals, *slice, span.clone())),
            RawKind::Number => tokens.push(Token::new(TokenKind::Number, *slice, span.clone())),
            RawKind::Name => {
                tokens.push(Token::new(classify_name(slice, ctxt), *slice, span.clone()));
            }
            RawKind::OpenParen | RawKind::CloseParen => {
                tokens.push(Token::new(TokenKind::Parenthesis, *slice, span.clone()));
            }
            RawKind::Pipe => {
                inside_modulus = !inside_modulus;
                tokens.push(Token::new(
                    TokenKind::ModulusDelimiter,
                    *slice,
                    span.clone(),
                ));
            }
            RawKind::Symbol => tokens.push(Token::new(TokenKind::Unknown, *slice, span.clone())),
            RawKind::Whitespace => {}
        }
        cursor += 1;
    }
    tokens
}

/// Whether a `-` at the current position begins a negative literal: at the start of the input,
/// after another operator, after an opening parenthesis, or after the opening delimiter of a
/// modulus region.
fn begins_negative(prev: Option<&Token>, inside_modulus: bool) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    prev.kind == TokenKind::Operator
        || (prev.kind == TokenKind::Parenthesis && prev.lexeme == "(")
        || (prev.kind == TokenKind::ModulusDelimiter && inside_modulus)
}

fn classify_name(name: &str, ctxt: &Ctxt) -> TokenKind {
    if ctxt.get_func(name).is_some() {
        TokenKind::Function
    } else if ctxt.get_constant(name).is_some() {
        TokenKind::Constant
    } else {
        TokenKind::Variable
    }
}
