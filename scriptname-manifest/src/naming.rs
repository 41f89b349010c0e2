//! Naming configuration from the `[naming]` table.

use serde::Deserialize;

/// Tunable constants of the naming policies.
///
/// Every field is optional in the manifest; the defaults match the
/// conventions of the engine's own script bindings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct NamingConfig {
    /// Root namespace every package namespace is nested under
    pub namespace_prefix: String,

    /// Prefix for properties that shadow their owner or a keyword
    pub property_prefix: String,

    /// Legacy infix removed from function names
    pub legacy_infix: String,

    /// Engine name of the function-library marker class
    pub function_library: String,

    /// Engine name of the root interface marker type
    pub interface_root: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: "UnrealSharp".to_string(),
            property_prefix: "K2_".to_string(),
            legacy_infix: "K2_".to_string(),
            function_library: "UBlueprintFunctionLibrary".to_string(),
            interface_root: "UInterface".to_string(),
        }
    }
}
