//! Expression emission: one function per [`Expr`] variant, each returning
//! the Go source fragment for that expression. Mirrors the dispatcher
//! shape of a direct-to-buffer emitter — see DESIGN.md for the example
//! this is grounded on.

use zenoc_par::{BinOp, Expr, MapKey, UnOp};

use crate::context::GenContext;

pub fn codegen_expr(expr: &Expr, ctx: &GenContext) -> String {
    match expr {
        Expr::Int(v, _) => v.to_string(),
        Expr::Float(v, _) => format_float(*v),
        Expr::Str(s, _) => format!("{:?}", s.as_str()),
        Expr::Bool(b, _) => b.to_string(),
        Expr::Ident(name, _) => name.as_str().to_string(),
        Expr::Unary(UnOp::Not, operand, _) => format!("(!{})", codegen_expr(operand, ctx)),
        Expr::Unary(UnOp::Neg, operand, _) => format!("(-{})", codegen_expr(operand, ctx)),
        Expr::Binary(lhs, op, rhs, _) => {
            let l = codegen_expr(lhs, ctx);
            let r = codegen_expr(rhs, ctx);
            format!("({} {} {})", l, binop_str(*op), r)
        },
        Expr::Array(elems, _) => {
            let parts: Vec<String> = elems.iter().map(|e| codegen_expr(e, ctx)).collect();
            format!("[]interface{{}}{{{}}}", parts.join(", "))
        },
        Expr::Map(entries, _) => {
            let parts: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{:?}: {}", map_key_str(key), codegen_expr(value, ctx)))
                .collect();
            format!("map[string]interface{{}}{{{}}}", parts.join(", "))
        },
        // Struct literals lower to the same dynamic map representation as
        // ordinary map literals, a deliberate simplification.
        Expr::Struct(_, fields, _) => {
            let parts: Vec<String> = fields
                .iter()
                .map(|(name, value)| format!("{:?}: {}", name.as_str(), codegen_expr(value, ctx)))
                .collect();
            format!("map[string]interface{{}}{{{}}}", parts.join(", "))
        },
        Expr::Member(obj, field, _) => {
            format!("{}[{:?}]", codegen_expr(obj, ctx), field.as_str())
        },
        Expr::Call(name, args, _) => {
            let callee = ctx.call_name(*name);
            let parts: Vec<String> = args.iter().map(|a| codegen_expr(a, ctx)).collect();
            format!("{}({})", callee, parts.join(", "))
        },
    }
}

fn map_key_str(key: &MapKey) -> &str {
    match key {
        MapKey::Ident(name) => name.as_str(),
        MapKey::Str(s) => s.as_str(),
    }
}

fn binop_str(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Mod => "%",
        BinOp::Eq => "==",
        BinOp::Ne => "!=",
        BinOp::Lt => "<",
        BinOp::Le => "<=",
        BinOp::Gt => ">",
        BinOp::Ge => ">=",
        BinOp::And => "&&",
        BinOp::Or => "||",
    }
}

/// Go requires a float literal to carry a decimal point; `5f64` prints
/// `5` from Rust's `Display` but must emit `5.0` to parse as `float64`.
fn format_float(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}
