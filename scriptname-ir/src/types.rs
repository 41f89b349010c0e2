//! Node kind definitions.

use serde::{Deserialize, Serialize};

/// Kind of a reflected node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// A module of the reflected program; the only kind allowed at the root.
    Package,
    /// A header file grouping types; carries the package it belongs to.
    HeaderGroup,
    Class,
    Struct,
    Interface,
    /// An interface implemented natively only (never by script code).
    NativeInterface,
    Enum,
    /// A function, method, or delegate signature.
    Function,
    /// A member variable of a class or struct.
    Property,
    /// A parameter (or return value) of a function.
    Parameter,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 10] = [
        NodeKind::Package,
        NodeKind::HeaderGroup,
        NodeKind::Class,
        NodeKind::Struct,
        NodeKind::Interface,
        NodeKind::NativeInterface,
        NodeKind::Enum,
        NodeKind::Function,
        NodeKind::Property,
        NodeKind::Parameter,
    ];

    /// Get the kebab-case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Package => "package",
            NodeKind::HeaderGroup => "header-group",
            NodeKind::Class => "class",
            NodeKind::Struct => "struct",
            NodeKind::Interface => "interface",
            NodeKind::NativeInterface => "native-interface",
            NodeKind::Enum => "enum",
            NodeKind::Function => "function",
            NodeKind::Property => "property",
            NodeKind::Parameter => "parameter",
        }
    }

    /// Returns true for kinds that become a type in generated code.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            NodeKind::Class
                | NodeKind::Struct
                | NodeKind::Interface
                | NodeKind::NativeInterface
                | NodeKind::Enum
        )
    }

    /// Returns true for classes and interfaces, the kinds that own methods.
    pub fn is_class_like(&self) -> bool {
        matches!(
            self,
            NodeKind::Class | NodeKind::Interface | NodeKind::NativeInterface
        )
    }

    /// Returns true for either interface flavour.
    pub fn is_interface(&self) -> bool {
        matches!(self, NodeKind::Interface | NodeKind::NativeInterface)
    }

    /// Returns true for kinds that can declare a super type.
    pub fn has_super_type(&self) -> bool {
        matches!(
            self,
            NodeKind::Class | NodeKind::Struct | NodeKind::Interface | NodeKind::NativeInterface
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown node kind '{}'", s))
    }
}

/// Delegate flavour of a function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DelegateKind {
    SingleCast,
    MultiCast,
}

impl DelegateKind {
    /// Get the kebab-case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DelegateKind::SingleCast => "single-cast",
            DelegateKind::MultiCast => "multi-cast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_from_str() {
        for kind in NodeKind::ALL {
            assert_eq!(kind.as_str().parse::<NodeKind>(), Ok(kind));
        }
        assert_eq!(
            "header".parse::<NodeKind>(),
            Err("unknown node kind 'header'".to_string())
        );
    }

    #[test]
    fn test_node_kind_as_str() {
        assert_eq!(NodeKind::HeaderGroup.as_str(), "header-group");
        assert_eq!(NodeKind::NativeInterface.as_str(), "native-interface");
        assert_eq!(NodeKind::Parameter.to_string(), "parameter");
    }

    #[test]
    fn test_node_kind_classification() {
        assert!(NodeKind::Enum.is_type());
        assert!(!NodeKind::Function.is_type());
        assert!(NodeKind::Interface.is_class_like());
        assert!(!NodeKind::Struct.is_class_like());
        assert!(NodeKind::NativeInterface.is_interface());
        assert!(NodeKind::Struct.has_super_type());
        assert!(!NodeKind::Enum.has_super_type());
    }

    #[test]
    fn test_delegate_kind_as_str() {
        assert_eq!(DelegateKind::SingleCast.as_str(), "single-cast");
        assert_eq!(DelegateKind::MultiCast.as_str(), "multi-cast");
    }
}
