//! Name mapping: Zeno type names to Go type syntax, and the emitted-name
//! capitalization rule shared with the analyzer (`main` verbatim, a public
//! declaration's first letter uppercased, a private one's lowercased).

use zenoc_sem::Type;

pub use zenoc_sem::emitted_fn_name;

/// Maps an inferred/declared [`Type`] to the Go spelling used in a
/// signature or variable declaration. `void` maps to the empty string and
/// the caller omits it entirely rather than writing it out.
pub fn map_type_name(ty: &Type) -> String {
    match ty {
        Type::Int => "int".to_string(),
        Type::Float => "float64".to_string(),
        Type::Bool => "bool".to_string(),
        Type::String => "string".to_string(),
        Type::Any => "interface{}".to_string(),
        Type::Void => String::new(),
        Type::Result(inner) => format!("Result[{}]", map_type_name(inner)),
        Type::Array(elem) => format!("[]{}", map_type_name(elem)),
        Type::Named(name) => name.as_str().to_string(),
    }
}

/// Case-folds a variable or parameter name for emission. Zeno identifiers
/// pass through unchanged; only function names are visibility-folded.
pub fn emitted_var_name(name: &str) -> String {
    name.to_string()
}
