//! Domain layer constants
//!
//! Infrastructure-specific constants remain in the infrastructure crate.

/// Separator between a type's module path and its name in `std::any::type_name`
pub const TYPE_PATH_SEPARATOR: &str = "::";

/// Label used for the anonymous default scope
pub const DEFAULT_SCOPE_NAME: &str = "default";

/// Description given to bindings registered without one
pub const UNDESCRIBED_BINDING: &str = "(no description)";
