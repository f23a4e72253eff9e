//! Expression parsing via Pratt (binding-power) parsing.
//!
//! `until` is threaded through every recursive call instead of living as
//! side-channel parser state: it names the token that must stop the
//! expression even though it might otherwise continue (the `{` opening a
//! block body after an `if`/`while`/`for` condition). Passing
//! `TokenKind::Semicolon` where a semicolon isn't actually meaningful
//! (e.g. inside a call's argument list) is harmless — it only suppresses
//! struct-literal parsing, which doesn't apply there either.
//!
//! # Precedence (lowest to highest)
//!
//! | Level | Operators |
//! |-------|-----------|
//! | 1 | `||` |
//! | 2 | `&&` |
//! | 3 | `==`, `!=` |
//! | 4 | `<`, `<=`, `>`, `>=` |
//! | 5 | `+`, `-` |
//! | 6 | `*`, `/`, `%` |

use crate::ast::*;
use crate::Parser;
use zenoc_lex::{strip_quotes, unescape, TokenKind};
use zenoc_util::{Span, Symbol};

#[doc(hidden)]
mod bp {
    pub const MIN: u8 = 0;
    pub const OR: u8 = 1;
    pub const AND: u8 = 3;
    pub const EQUALITY: u8 = 5;
    pub const RELATIONAL: u8 = 7;
    pub const ADDITIVE: u8 = 9;
    pub const MULTIPLICATIVE: u8 = 11;
}

fn infix_bp(kind: TokenKind) -> Option<(u8, u8, BinOp)> {
    use TokenKind::*;
    Some(match kind {
        OrOr => (bp::OR, bp::OR + 1, BinOp::Or),
        AndAnd => (bp::AND, bp::AND + 1, BinOp::And),
        EqEq => (bp::EQUALITY, bp::EQUALITY + 1, BinOp::Eq),
        NotEq => (bp::EQUALITY, bp::EQUALITY + 1, BinOp::Ne),
        Lt => (bp::RELATIONAL, bp::RELATIONAL + 1, BinOp::Lt),
        LtEq => (bp::RELATIONAL, bp::RELATIONAL + 1, BinOp::Le),
        Gt => (bp::RELATIONAL, bp::RELATIONAL + 1, BinOp::Gt),
        GtEq => (bp::RELATIONAL, bp::RELATIONAL + 1, BinOp::Ge),
        Plus => (bp::ADDITIVE, bp::ADDITIVE + 1, BinOp::Add),
        Minus => (bp::ADDITIVE, bp::ADDITIVE + 1, BinOp::Sub),
        Star => (bp::MULTIPLICATIVE, bp::MULTIPLICATIVE + 1, BinOp::Mul),
        Slash => (bp::MULTIPLICATIVE, bp::MULTIPLICATIVE + 1, BinOp::Div),
        Percent => (bp::MULTIPLICATIVE, bp::MULTIPLICATIVE + 1, BinOp::Mod),
        _ => return None,
    })
}

/// The primitive-literal class of an expression, used to check array
/// literal element consistency. `None` for anything non-primitive.
/// Named after the token literal classes (`INT`/`FLOAT`/`STRING`/`BOOL`)
/// so array-mismatch diagnostics quote the token model's own vocabulary.
fn primitive_kind(expr: &Expr) -> Option<&'static str> {
    match expr {
        Expr::Int(..) => Some("INT"),
        Expr::Float(..) => Some("FLOAT"),
        Expr::Str(..) => Some("STRING"),
        Expr::Bool(..) => Some("BOOL"),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    /// Entry point used by statement contexts. `until` names the token
    /// that must terminate the expression without being consumed.
    pub(crate) fn parse_expr_top(&mut self, until: TokenKind) -> Option<Expr> {
        self.parse_expr(bp::MIN, until)
    }

    fn parse_expr(&mut self, min_bp: u8, until: TokenKind) -> Option<Expr> {
        let mut lhs = self.parse_unary(until)?;

        loop {
            if self.kind() == until {
                break;
            }
            let Some((l_bp, r_bp, op)) = infix_bp(self.kind()) else { break };
            if l_bp < min_bp {
                break;
            }
            self.advance();
            let rhs = self.parse_expr(r_bp, until)?;
            let span = lhs.span().merge(rhs.span());
            lhs = Expr::Binary(Box::new(lhs), op, Box::new(rhs), span);
        }

        Some(lhs)
    }

    fn parse_unary(&mut self, until: TokenKind) -> Option<Expr> {
        let start = self.current().span;
        match self.kind() {
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_unary(until)?;
                let span = start.merge(operand.span());
                Some(Expr::Unary(UnOp::Neg, Box::new(operand), span))
            },
            TokenKind::Bang => {
                self.advance();
                let operand = self.parse_unary(until)?;
                let span = start.merge(operand.span());
                Some(Expr::Unary(UnOp::Not, Box::new(operand), span))
            },
            _ => self.parse_postfix(until),
        }
    }

    fn parse_postfix(&mut self, until: TokenKind) -> Option<Expr> {
        let mut expr = self.parse_atom(until)?;
        loop {
            match self.kind() {
                TokenKind::Dot => {
                    self.advance();
                    let field = self.expect_ident()?;
                    let span = expr.span().merge(self.tokens_last_consumed_span());
                    expr = Expr::Member(Box::new(expr), field, span);
                },
                TokenKind::LParen => match &expr {
                    Expr::Ident(name, name_span) => {
                        let name = *name;
                        let name_span = *name_span;
                        let (args, close) = self.parse_call_args()?;
                        let span = name_span.merge(close);
                        expr = Expr::Call(name, args, span);
                    },
                    _ => {
                        self.report("function calls require an identifier callee");
                        self.skip_parenthesized();
                    },
                },
                _ => break,
            }
        }
        Some(expr)
    }

    /// Returns the span of the token most recently consumed, for
    /// postfix productions (`.field`) whose span needs to include it.
    fn tokens_last_consumed_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1).min(self.tokens.len() - 1)].span
    }

    fn parse_atom(&mut self, until: TokenKind) -> Option<Expr> {
        let tok = self.current().clone();
        match tok.kind {
            TokenKind::Int => {
                self.advance();
                let value = tok.literal().parse::<i64>().unwrap_or(0);
                Some(Expr::Int(value, tok.span))
            },
            TokenKind::Float => {
                self.advance();
                let value = tok.literal().parse::<f64>().unwrap_or(0.0);
                Some(Expr::Float(value, tok.span))
            },
            TokenKind::String => {
                self.advance();
                let text = Symbol::intern(&unescape(strip_quotes(tok.literal())));
                Some(Expr::Str(text, tok.span))
            },
            TokenKind::True => {
                self.advance();
                Some(Expr::Bool(true, tok.span))
            },
            TokenKind::False => {
                self.advance();
                Some(Expr::Bool(false, tok.span))
            },
            TokenKind::Ident => {
                self.advance();
                // A `{` immediately following an identifier starts a
                // struct literal, unless the caller's terminator is
                // itself `{` (an `if`/`while`/`for` condition).
                if self.check(TokenKind::LBrace) && until != TokenKind::LBrace {
                    self.parse_struct_literal(tok.text, tok.span)
                } else {
                    Some(Expr::Ident(tok.text, tok.span))
                }
            },
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr(bp::MIN, TokenKind::RParen)?;
                self.expect(TokenKind::RParen)?;
                Some(inner)
            },
            TokenKind::LBracket => self.parse_array(),
            TokenKind::LBrace => self.parse_map(),
            _ => {
                self.report_expected("expression");
                None
            },
        }
    }

    fn parse_array(&mut self) -> Option<Expr> {
        let open = self.advance().span; // `[`
        let mut elems = Vec::new();
        let mut elem_kind: Option<&'static str> = None;

        if !self.check(TokenKind::RBracket) {
            loop {
                let elem = self.parse_expr(bp::MIN, TokenKind::Comma)?;
                let this_kind = primitive_kind(&elem);
                match (elem_kind, this_kind) {
                    (None, Some(k)) => elem_kind = Some(k),
                    (Some(expected), Some(got)) if expected != got => {
                        self.report(format!(
                            "mismatched types in array literal: expected {expected}, got {got} at index {}",
                            elems.len()
                        ));
                    },
                    (Some(_), None) => {
                        self.report(format!("element at index {} is not a primitive", elems.len()));
                    },
                    _ => {},
                }
                elems.push(elem);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RBracket) {
                    break;
                }
            }
        }

        let close = match self.expect(TokenKind::RBracket) {
            Some(tok) => tok.span,
            None => {
                self.report_unclosed(open, "array literal");
                open
            },
        };
        Some(Expr::Array(elems, open.merge(close)))
    }

    /// A `{ key: value, ... }` map literal. Keys are identifiers or
    /// string literals only.
    fn parse_map(&mut self) -> Option<Expr> {
        let open = self.advance().span; // `{`
        let mut entries = Vec::new();

        if !self.check(TokenKind::RBrace) {
            loop {
                let key = match self.kind() {
                    TokenKind::Ident => MapKey::Ident(self.advance().text),
                    TokenKind::String => {
                        let tok = self.advance();
                        MapKey::Str(Symbol::intern(&unescape(strip_quotes(tok.literal()))))
                    },
                    _ => {
                        self.report_expected("map key (identifier or string literal)");
                        return None;
                    },
                };
                self.expect(TokenKind::Colon)?;
                let value = self.parse_expr(bp::MIN, TokenKind::Comma)?;
                entries.push((key, value));
                if !self.eat(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RBrace) {
                    break;
                }
            }
        }

        let close = match self.expect(TokenKind::RBrace) {
            Some(tok) => tok.span,
            None => {
                self.report_unclosed(open, "map literal");
                open
            },
        };
        Some(Expr::Map(entries, open.merge(close)))
    }

    /// A `Name { field: value, ... }` struct literal, called after the
    /// leading identifier and the following `{` have both already been
    /// confirmed by the caller. Fields are identifier-keyed only.
    fn parse_struct_literal(&mut self, name: Symbol, name_span: Span) -> Option<Expr> {
        let open = self.advance().span; // `{`
        let mut fields = Vec::new();

        if !self.check(TokenKind::RBrace) {
            loop {
                let field = self.expect_ident()?;
                self.expect(TokenKind::Colon)?;
                let value = self.parse_expr(bp::MIN, TokenKind::Comma)?;
                fields.push((field, value));
                if !self.eat(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RBrace) {
                    break;
                }
            }
        }

        let close = match self.expect(TokenKind::RBrace) {
            Some(tok) => tok.span,
            None => {
                self.report_unclosed(open, "struct literal");
                open
            },
        };
        Some(Expr::Struct(name, fields, name_span.merge(close)))
    }

    fn parse_call_args(&mut self) -> Option<(Vec<Expr>, Span)> {
        let open = self.advance().span; // `(`
        let mut args = Vec::new();

        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr(bp::MIN, TokenKind::Comma)?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RParen) {
                    break;
                }
            }
        }

        let close = match self.expect(TokenKind::RParen) {
            Some(tok) => tok.span,
            None => {
                self.report_unclosed(open, "call argument list");
                open
            },
        };
        Some((args, close))
    }

    /// Recovery path for a call-shaped expression with a non-identifier
    /// callee: the `(...)` is consumed and discarded so parsing can
    /// continue past it without producing a `Call` node.
    fn skip_parenthesized(&mut self) {
        let open = self.current().span;
        if !self.eat(TokenKind::LParen) {
            return;
        }
        let mut depth = 1usize;
        while depth > 0 {
            match self.kind() {
                TokenKind::LParen => {
                    depth += 1;
                    self.advance();
                },
                TokenKind::RParen => {
                    depth -= 1;
                    self.advance();
                },
                TokenKind::Eof => {
                    self.report_unclosed(open, "call argument list");
                    return;
                },
                _ => {
                    self.advance();
                },
            }
        }
    }
}
