//! Reserved words of the target language.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use scriptname_core::lower_first;
use serde::Serialize;

use super::strip_prefix;

/// Kind of identifier being produced, selecting the scriptify rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameKind {
    Parameter,
    Property,
    Struct,
    Function,
}

/// Raised when an empty name reaches [`NamingConvention::scriptify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot scriptify an empty name")]
pub struct EmptyNameError;

/// Target-language naming conventions.
///
/// Defines the reserved words and how a clashing identifier is escaped.
#[derive(Debug, Clone)]
pub struct NamingConvention {
    /// Reserved words, including root namespace symbols that must not be shadowed
    pub reserved_words: HashSet<&'static str>,
    /// Escape a reserved word (e.g., "object" -> "_object")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn new(reserved_words: &[&'static str], escape_reserved: fn(&str) -> String) -> Self {
        Self {
            reserved_words: reserved_words.iter().copied().collect(),
            escape_reserved,
        }
    }

    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Apply the prefix, case, and escape rules for one kind of name.
    ///
    /// Parameters are stripped and camel-cased, properties only stripped,
    /// structs and functions only escaped.
    pub fn scriptify(&self, name: &str, kind: NameKind) -> Result<String, EmptyNameError> {
        if name.is_empty() {
            return Err(EmptyNameError);
        }

        let transformed = match kind {
            NameKind::Parameter => lower_first(strip_prefix(name)),
            NameKind::Property => strip_prefix(name).to_string(),
            NameKind::Struct | NameKind::Function => name.to_string(),
        };

        Ok(self.safe_name(&transformed))
    }
}

fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

const CSHARP_RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
    // Root namespace of the base class library
    "System",
];

/// C# naming conventions.
pub static CSHARP_NAMING: Lazy<NamingConvention> =
    Lazy::new(|| NamingConvention::new(CSHARP_RESERVED_WORDS, escape_with_underscore));

/// Check if a name is a C# reserved word.
pub fn is_keyword(name: &str) -> bool {
    CSHARP_NAMING.is_reserved(name)
}

/// Prefix a C# reserved word with an underscore, leaving other names unchanged.
pub fn escape_keyword(name: &str) -> String {
    CSHARP_NAMING.safe_name(name)
}

/// [`NamingConvention::scriptify`] with the C# conventions.
pub fn scriptify(name: &str, kind: NameKind) -> Result<String, EmptyNameError> {
    CSHARP_NAMING.scriptify(name, kind)
}
