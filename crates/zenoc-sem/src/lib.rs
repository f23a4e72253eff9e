//! zenoc-sem - symbol/type/usage analysis and module resolution.
//!
//! Runs the "collect" pass: resolves `import` statements (recursively
//! parsing referenced modules), builds a scoped symbol table, infers
//! expression types, and validates usage (unused variables/functions,
//! calls to names no module actually exports, `for..in` over a
//! non-iterable). The result is a [`CompileContext`] threaded explicitly
//! into `zenoc-gen` rather than kept as hidden shared state.

pub mod analysis;
pub mod infer;
pub mod module;
pub mod scope;
pub mod types;

#[cfg(test)]
mod edge_cases;

pub use analysis::{analyze, emitted_fn_name, CompileContext, ImportRecord};
pub use infer::{infer_expr, CallContext, FnSig};
pub use module::{ModuleExports, ModuleResolver, ResolvedModule};
pub use scope::SymbolTable;
pub use types::Type;
