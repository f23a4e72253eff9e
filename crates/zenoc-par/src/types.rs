//! Type-annotation parsing.
//!
//! Zeno's type grammar is a closed set: a bare name (`int`, `MyStruct`),
//! a generic instantiation (`Map<string, int>`), or an array (`Array<T>`,
//! folded directly into `TypeExpr::ArrayOf` rather than kept as a
//! `Generic` with name `"Array"`).

use crate::ast::TypeExpr;
use crate::Parser;
use zenoc_lex::TokenKind;

impl<'a> Parser<'a> {
    pub(crate) fn parse_type_expr(&mut self) -> Option<TypeExpr> {
        let name = self.expect_ident()?;

        if !self.eat(TokenKind::Lt) {
            return Some(TypeExpr::Named(name));
        }

        let open = self.current().span;
        let mut args = Vec::new();
        if !self.check(TokenKind::Gt) {
            loop {
                args.push(self.parse_type_expr()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        if self.expect(TokenKind::Gt).is_none() {
            self.report_unclosed(open, "generic argument list");
            return None;
        }

        if name.as_str() == "Array" && args.len() == 1 {
            let mut args = args;
            return Some(TypeExpr::ArrayOf(Box::new(args.remove(0))));
        }
        Some(TypeExpr::Generic(name, args))
    }

    /// Parses an optional `: Type` annotation.
    pub(crate) fn parse_opt_type_annotation(&mut self) -> Option<TypeExpr> {
        if self.eat(TokenKind::Colon) {
            self.parse_type_expr()
        } else {
            None
        }
    }
}
