//! Parsing for `import`, `type`, and `fn`.

use crate::ast::*;
use crate::Parser;
use zenoc_lex::TokenKind;
use zenoc_util::Symbol;

impl<'a> Parser<'a> {
    /// `import { a, type B, c } from "path"`
    pub(crate) fn parse_import(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // `import`
        self.expect(TokenKind::LBrace)?;

        let mut items = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                let is_type = self.eat(TokenKind::Type);
                let name = self.expect_ident()?;
                items.push(ImportItem { name, is_type });
                if !self.eat(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RBrace) {
                    break;
                }
            }
        }
        if self.expect(TokenKind::RBrace).is_none() {
            self.report_unclosed(start, "import list");
        }

        self.expect(TokenKind::From)?;
        let module_tok = self.expect(TokenKind::String)?;
        let module = module_tok.text;
        let span = self.eat_trailing_semi(start, module_tok.span);

        Some(Stmt::Import(ImportStmt { module, items, span }))
    }

    /// `type Name<G, ...> = { ... }`. Field bodies are skipped over —
    /// struct shape is not part of the parser's output.
    pub(crate) fn parse_type_decl(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // `type`
        let name = self.expect_ident()?;
        let generics = self.parse_opt_generics()?;

        self.expect(TokenKind::Assign)?;
        let body_open = self.expect(TokenKind::LBrace)?.span;
        let end = self.skip_balanced_braces(body_open);

        Some(Stmt::TypeDecl(TypeDeclStmt { name, generics, span: start.merge(end) }))
    }

    /// Consumes the already-opened `{` of a type body up to and including
    /// its matching `}`, tolerating nested braces (map/struct literals in
    /// default values, if any).
    fn skip_balanced_braces(&mut self, open: zenoc_util::Span) -> zenoc_util::Span {
        let mut depth = 1usize;
        loop {
            match self.kind() {
                TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                },
                TokenKind::RBrace => {
                    let tok = self.advance();
                    depth -= 1;
                    if depth == 0 {
                        return open.merge(tok.span);
                    }
                },
                TokenKind::Eof => {
                    self.report_unclosed(open, "type body");
                    return open;
                },
                _ => {
                    self.advance();
                },
            }
        }
    }

    /// `fn name<G>(a: int, b: ...string) : ret { ... }`
    pub(crate) fn parse_fn(&mut self, is_public: bool, start: zenoc_util::Span) -> Option<Stmt> {
        self.advance(); // `fn`
        let name = self.expect_ident()?;
        self.push_context("function signature");
        let generics = self.parse_opt_generics()?;
        let params = self.parse_params()?;
        let ret_type = self.parse_opt_type_annotation();
        self.pop_context();

        let body = self.parse_block()?;
        let span = start.merge(body.span);

        Some(Stmt::FnDef(FnDef { name, generics, params, ret_type, body, is_public, span }))
    }

    fn parse_opt_generics(&mut self) -> Option<Vec<Symbol>> {
        if !self.eat(TokenKind::Lt) {
            return Some(Vec::new());
        }
        let open = self.current().span;
        let mut generics = Vec::new();
        if !self.check(TokenKind::Gt) {
            loop {
                generics.push(self.expect_ident()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        if self.expect(TokenKind::Gt).is_none() {
            self.report_unclosed(open, "generic parameter list");
        }
        Some(generics)
    }

    fn parse_params(&mut self) -> Option<Vec<Param>> {
        let open = self.expect(TokenKind::LParen)?.span;
        let mut params = Vec::new();
        let mut seen: Vec<Symbol> = Vec::new();

        if !self.check(TokenKind::RParen) {
            loop {
                let variadic = self.eat(TokenKind::Ellipsis);
                let name = match self.expect_ident() {
                    Some(n) => n,
                    None => break,
                };
                if seen.contains(&name) {
                    self.report(format!("duplicate parameter name '{}'", name.as_str()));
                } else {
                    seen.push(name);
                }
                self.expect(TokenKind::Colon)?;
                let ty = self.parse_type_expr()?;
                params.push(Param { name, ty, variadic });

                if variadic && !self.check(TokenKind::RParen) {
                    self.report("variadic parameter must be the last parameter");
                }
                if !self.eat(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RParen) {
                    break;
                }
            }
        }
        if self.expect(TokenKind::RParen).is_none() {
            self.report_unclosed(open, "parameter list");
        }
        Some(params)
    }

    /// Consumes an optional trailing `;` and folds it into the statement
    /// span; a missing semicolon after a complete import is tolerated
    /// rather than reported, matching how the parser treats statement
    /// terminators elsewhere.
    fn eat_trailing_semi(&mut self, start: zenoc_util::Span, fallback_end: zenoc_util::Span) -> zenoc_util::Span {
        if self.check(TokenKind::Semicolon) {
            let tok = self.advance();
            start.merge(tok.span)
        } else {
            start.merge(fallback_end)
        }
    }
}
