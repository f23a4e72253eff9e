//! Statement parsing: `let`, assignment, `if`/`while`/`for`, `return`,
//! `break`/`continue`, and bare expression statements.

use crate::ast::*;
use crate::Parser;
use zenoc_lex::TokenKind;

impl<'a> Parser<'a> {
    pub(crate) fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.kind() {
            TokenKind::Import => self.parse_import(),
            TokenKind::Type => self.parse_type_decl(),
            TokenKind::Pub => {
                let start = self.current().span;
                self.advance();
                self.parse_fn(true, start)
            },
            TokenKind::Fn => {
                let start = self.current().span;
                self.parse_fn(false, start)
            },
            TokenKind::Let => self.parse_let(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Break => {
                let span = self.advance().span;
                self.eat(TokenKind::Semicolon);
                Some(Stmt::Break(span))
            },
            TokenKind::Continue => {
                let span = self.advance().span;
                self.eat(TokenKind::Semicolon);
                Some(Stmt::Continue(span))
            },
            TokenKind::LBrace => self.parse_block().map(Stmt::Block),
            _ => self.parse_assign_or_expr_stmt(),
        }
    }

    /// `let name[: Type] = expr`
    pub(crate) fn parse_let(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // `let`
        let name = self.expect_ident()?;
        let ty = self.parse_opt_type_annotation();
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expr_top(TokenKind::Semicolon)?;
        let span = self.finish_stmt_span(start, value.span());
        Some(Stmt::Let(LetStmt { name, ty, value, span }))
    }

    /// Either `ident = expr` or a bare expression statement — the two
    /// share a prefix (an identifier-led expression) so both are parsed
    /// via one expression parse before deciding which shape applies.
    fn parse_assign_or_expr_stmt(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        if self.check(TokenKind::Ident) && self.peek().kind == TokenKind::Assign {
            let target = self.expect_ident()?;
            self.advance(); // `=`
            let value = self.parse_expr_top(TokenKind::Semicolon)?;
            let span = self.finish_stmt_span(start, value.span());
            return Some(Stmt::Assign(AssignStmt { target, value, span }));
        }

        let expr = self.parse_expr_top(TokenKind::Semicolon)?;
        let span = self.finish_stmt_span(start, expr.span());
        self.eat(TokenKind::Semicolon);
        Some(Stmt::Expr(expr))
    }

    pub(crate) fn parse_return(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // `return`
        let value = if self.check(TokenKind::Semicolon) || self.check(TokenKind::RBrace) {
            None
        } else {
            Some(self.parse_expr_top(TokenKind::Semicolon)?)
        };
        let span = match &value {
            Some(v) => self.finish_stmt_span(start, v.span()),
            None => {
                self.eat(TokenKind::Semicolon);
                start
            },
        };
        Some(Stmt::Return(value, span))
    }

    /// `if cond { ... } else if cond { ... } else { ... }`
    pub(crate) fn parse_if(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // `if`
        let cond = self.parse_expr_top(TokenKind::LBrace)?;
        let then_block = self.parse_block()?;

        let mut else_ifs = Vec::new();
        let mut else_block = None;
        let mut span = start.merge(then_block.span);

        while self.check(TokenKind::Else) {
            self.advance();
            if self.eat(TokenKind::If) {
                let cond = self.parse_expr_top(TokenKind::LBrace)?;
                let block = self.parse_block()?;
                span = span.merge(block.span);
                else_ifs.push((cond, block));
            } else {
                let block = self.parse_block()?;
                span = span.merge(block.span);
                else_block = Some(block);
                break;
            }
        }

        Some(Stmt::If(IfStmt { cond, then_block, else_ifs, else_block, span }))
    }

    pub(crate) fn parse_while(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // `while`
        let cond = self.parse_expr_top(TokenKind::LBrace)?;
        let body = self.parse_block()?;
        let span = start.merge(body.span);
        Some(Stmt::While(WhileStmt { cond, body, span }))
    }

    /// `for name in iter { ... }`
    pub(crate) fn parse_for(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // `for`
        let var = self.expect_ident()?;
        self.expect(TokenKind::In)?;
        let iter = self.parse_expr_top(TokenKind::LBrace)?;
        let body = self.parse_block()?;
        let span = start.merge(body.span);
        Some(Stmt::ForIn(ForInStmt { var, iter, body, span }))
    }

    pub(crate) fn parse_block(&mut self) -> Option<Block> {
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.at_end() {
            match self.parse_stmt() {
                Some(s) => stmts.push(s),
                None => self.synchronize_in_block(),
            }
        }
        let end = match self.expect(TokenKind::RBrace) {
            Some(tok) => tok.span,
            None => {
                self.report_unclosed(open, "block");
                open
            },
        };
        Some(Block { stmts, span: open.merge(end) })
    }

    /// Like the top-level `synchronize`, but also stops at a block's
    /// closing brace so recovery never escapes the enclosing block.
    fn synchronize_in_block(&mut self) {
        if self.check(TokenKind::Semicolon) {
            self.advance();
            return;
        }
        self.advance();
        while !self.at_end() && !self.check(TokenKind::RBrace) {
            match self.kind() {
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                },
                TokenKind::Fn
                | TokenKind::Let
                | TokenKind::Import
                | TokenKind::Type
                | TokenKind::If
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Return
                | TokenKind::Pub => return,
                _ => {
                    self.advance();
                },
            }
        }
    }

    fn finish_stmt_span(&mut self, start: zenoc_util::Span, expr_end: zenoc_util::Span) -> zenoc_util::Span {
        if self.check(TokenKind::Semicolon) {
            let tok = self.advance();
            start.merge(tok.span)
        } else {
            start.merge(expr_end)
        }
    }
}
