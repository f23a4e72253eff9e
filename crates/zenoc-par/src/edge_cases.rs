//! Edge case tests for zenoc-par.

#[cfg(test)]
mod tests {
    use zenoc_util::{FileId, Handler};

    use crate::ast::*;
    use crate::parse_source;

    fn parse(src: &str) -> (Program, Vec<String>) {
        let handler = Handler::new();
        let (program, errors, _) = parse_source(src, FileId::DUMMY, &handler);
        (program, errors)
    }

    #[test]
    fn empty_source_parses_to_empty_program() {
        let (program, errors) = parse("");
        assert!(program.stmts.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn let_with_inferred_type() {
        let (program, errors) = parse("let x = 1;");
        assert!(errors.is_empty());
        assert_eq!(program.stmts.len(), 1);
        assert!(matches!(&program.stmts[0], Stmt::Let(l) if l.ty.is_none()));
    }

    #[test]
    fn let_with_explicit_type() {
        let (program, errors) = parse("let x: int = 1;");
        assert!(errors.is_empty());
        match &program.stmts[0] {
            Stmt::Let(l) => assert_eq!(l.ty, Some(TypeExpr::Named(zenoc_util::Symbol::intern("int")))),
            other => panic!("expected let, got {other:?}"),
        }
    }

    #[test]
    fn array_type_is_not_a_generic() {
        let (program, errors) = parse("let xs: Array<int> = [1, 2, 3];");
        assert!(errors.is_empty());
        match &program.stmts[0] {
            Stmt::Let(l) => {
                let inner = TypeExpr::Named(zenoc_util::Symbol::intern("int"));
                assert_eq!(l.ty, Some(TypeExpr::ArrayOf(Box::new(inner))));
            },
            other => panic!("expected let, got {other:?}"),
        }
    }

    #[test]
    fn nested_generics_parse_without_depth_tracking() {
        let (_program, errors) = parse("let r: Result<Array<int>> = ok(xs);");
        assert!(errors.is_empty(), "errors: {errors:?}");
    }

    #[test]
    fn if_else_if_else_chain() {
        let (program, errors) = parse(
            "fn f(): int { if a { return 1 } else if b { return 2 } else { return 3 } }",
        );
        assert!(errors.is_empty(), "errors: {errors:?}");
        let Stmt::FnDef(f) = &program.stmts[0] else { panic!("expected fn") };
        let Stmt::If(ifs) = &f.body.stmts[0] else { panic!("expected if") };
        assert_eq!(ifs.else_ifs.len(), 1);
        assert!(ifs.else_block.is_some());
    }

    #[test]
    fn condition_stops_before_block_brace() {
        // Without the `until` terminator this would try to parse `a { ... }`
        // as a struct literal and swallow the block.
        let (program, errors) = parse("while a { b() }");
        assert!(errors.is_empty(), "errors: {errors:?}");
        let Stmt::While(w) = &program.stmts[0] else { panic!("expected while") };
        assert!(matches!(w.cond, Expr::Ident(..)));
        assert_eq!(w.body.stmts.len(), 1);
    }

    #[test]
    fn struct_literal_allowed_outside_condition_position() {
        let (program, errors) = parse("let p = Point { x: 1, y: 2 };");
        assert!(errors.is_empty(), "errors: {errors:?}");
        let Stmt::Let(l) = &program.stmts[0] else { panic!("expected let") };
        assert!(matches!(l.value, Expr::Struct(..)));
    }

    #[test]
    fn map_literal_requires_ident_or_string_keys() {
        let (program, errors) = parse("let m = { a: 1, \"b\": 2 };");
        assert!(errors.is_empty(), "errors: {errors:?}");
        let Stmt::Let(l) = &program.stmts[0] else { panic!("expected let") };
        let Expr::Map(entries, _) = &l.value else { panic!("expected map") };
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn array_literal_mismatch_reports_index_and_kinds() {
        let (_program, errors) = parse("let xs = [1, \"two\", 3];");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "mismatched types in array literal: expected INT, got STRING at index 1");
    }

    #[test]
    fn call_on_non_identifier_is_rejected_but_recovers() {
        let (program, errors) = parse("let x = a.b(1, 2);");
        assert!(!errors.is_empty());
        assert!(errors[0].contains("function calls require an identifier callee"));
        // Recovery continues: the `let` statement itself is still produced.
        assert_eq!(program.stmts.len(), 1);
    }

    #[test]
    fn unclosed_block_reports_once() {
        let (_program, errors) = parse("fn f() { let x = 1;");
        let unclosed: Vec<_> = errors.iter().filter(|e| e.contains("unclosed")).collect();
        assert_eq!(unclosed.len(), 1, "errors: {errors:?}");
    }

    #[test]
    fn variadic_parameter_must_be_last() {
        let (_program, errors) = parse("fn f(...a: int, b: int) { }");
        assert!(errors.iter().any(|e| e.contains("variadic parameter must be the last parameter")));
    }

    #[test]
    fn duplicate_parameter_name_reported() {
        let (_program, errors) = parse("fn f(a: int, a: int) { }");
        assert!(errors.iter().any(|e| e.contains("duplicate parameter name")));
    }

    #[test]
    fn for_in_loop() {
        let (program, errors) = parse("for item in xs { print(item) }");
        assert!(errors.is_empty(), "errors: {errors:?}");
        assert!(matches!(program.stmts[0], Stmt::ForIn(_)));
    }

    #[test]
    fn import_with_type_item() {
        let (program, errors) = parse("import { Result, type Error } from \"std/result\";");
        assert!(errors.is_empty(), "errors: {errors:?}");
        let Stmt::Import(i) = &program.stmts[0] else { panic!("expected import") };
        assert_eq!(i.items.len(), 2);
        assert!(i.items[1].is_type);
    }

    #[test]
    fn break_and_continue_in_loop() {
        let (program, errors) = parse("while true { break } while true { continue }");
        assert!(errors.is_empty(), "errors: {errors:?}");
        assert_eq!(program.stmts.len(), 2);
    }

    #[test]
    fn operator_precedence_matches_ladder() {
        let (program, errors) = parse("let x = 1 + 2 * 3 == 7 && true;");
        assert!(errors.is_empty(), "errors: {errors:?}");
        let Stmt::Let(l) = &program.stmts[0] else { panic!("expected let") };
        let Expr::Binary(_, top_op, _, _) = &l.value else { panic!("expected binary") };
        assert_eq!(*top_op, BinOp::And);
    }

    #[test]
    fn pub_fn_is_marked_public() {
        let (program, errors) = parse("pub fn f() { }");
        assert!(errors.is_empty(), "errors: {errors:?}");
        let Stmt::FnDef(f) = &program.stmts[0] else { panic!("expected fn") };
        assert!(f.is_public);
    }
}
