//! Expression type inference, per the rules in the component design:
//! literals carry their own type, comparisons and logical ops produce
//! `bool`, arithmetic promotes to `float` if either side does, `!`
//! produces `bool`, `-` preserves its operand's type, and a call's type
//! comes from the callee's declared return type (local definition first,
//! then an imported module's public definition), defaulting to `int`
//! with a warning when neither is found.

use indexmap::IndexMap;
use zenoc_par::{BinOp, Expr, FnDef, Stmt, UnOp};
use zenoc_util::{DiagnosticBuilder, Handler, Symbol};

use crate::module::ResolvedModule;
use crate::scope::SymbolTable;
use crate::types::Type;

/// The declared signature of a function this program (or an imported
/// module) defines, as far as inference cares: its return type.
#[derive(Debug, Clone)]
pub struct FnSig {
    pub ret_type: Option<Type>,
    pub is_public: bool,
}

impl FnSig {
    pub fn from_def(def: &FnDef) -> Self {
        Self {
            ret_type: def.ret_type.as_ref().map(Type::from_type_expr),
            is_public: def.is_public,
        }
    }
}

/// Everything `infer_expr` needs to resolve a call's return type without
/// owning the whole compile context.
pub struct CallContext<'a> {
    pub local_fns: &'a IndexMap<Symbol, FnSig>,
    /// One entry per resolved import, holding the names imported as
    /// values and the resolved module to search for a public definition.
    pub imported_modules: &'a [(Vec<Symbol>, &'a ResolvedModule)],
}

impl<'a> CallContext<'a> {
    /// Returns the declared return type for a call to `name`, or `None`
    /// if no declaration could be found anywhere in scope.
    pub fn resolve_call(&self, name: Symbol) -> Option<Type> {
        if let Some(sig) = self.local_fns.get(&name) {
            return Some(sig.ret_type.clone().unwrap_or(Type::Void));
        }
        for (imported_names, module) in self.imported_modules {
            if !imported_names.contains(&name) {
                continue;
            }
            for stmt in &module.program.stmts {
                if let Stmt::FnDef(def) = stmt {
                    if def.name == name && def.is_public {
                        return Some(
                            def.ret_type.as_ref().map(Type::from_type_expr).unwrap_or(Type::Void),
                        );
                    }
                }
            }
        }
        None
    }
}

/// Infers the type of `expr`. `scope` resolves identifiers; `calls`
/// resolves function-call return types; `handler` receives a soft
/// warning when a call's return type can't be determined at all.
pub fn infer_expr(expr: &Expr, scope: &SymbolTable, calls: &CallContext<'_>, handler: &Handler) -> Type {
    match expr {
        Expr::Int(..) => Type::Int,
        Expr::Float(..) => Type::Float,
        Expr::Str(..) => Type::String,
        Expr::Bool(..) => Type::Bool,
        Expr::Ident(name, _) => scope.resolve(*name).cloned().unwrap_or(Type::Any),
        Expr::Unary(UnOp::Not, _, _) => Type::Bool,
        Expr::Unary(UnOp::Neg, operand, _) => infer_expr(operand, scope, calls, handler),
        Expr::Binary(lhs, op, rhs, _) => infer_binary(*op, lhs, rhs, scope, calls, handler),
        // Array literal element types are already checked for primitive
        // consistency at parse time; the array value itself is `any`.
        Expr::Array(..) => Type::Any,
        Expr::Map(..) => Type::Any,
        Expr::Struct(name, ..) => Type::Named(*name),
        Expr::Member(..) => Type::Any,
        Expr::Call(name, _, span) => match calls.resolve_call(*name) {
            Some(ty) => ty,
            None => {
                DiagnosticBuilder::warning(format!(
                    "cannot determine return type of '{}'; assuming int",
                    name.as_str()
                ))
                .span(*span)
                .emit(handler);
                Type::Int
            },
        },
    }
}

fn infer_binary(
    op: BinOp,
    lhs: &Expr,
    rhs: &Expr,
    scope: &SymbolTable,
    calls: &CallContext<'_>,
    handler: &Handler,
) -> Type {
    use BinOp::*;
    match op {
        Eq | Ne | Lt | Le | Gt | Ge | And | Or => Type::Bool,
        Add | Sub | Mul | Div | Mod => {
            let lhs_ty = infer_expr(lhs, scope, calls, handler);
            let rhs_ty = infer_expr(rhs, scope, calls, handler);
            if lhs_ty == Type::Float || rhs_ty == Type::Float {
                Type::Float
            } else {
                Type::Int
            }
        },
    }
}
