//! Step-by-step record of how a name was derived.

use scriptname_ir::NodeKind;
use serde::Serialize;

use super::{NameKind, ScriptNameSource};

/// One decision taken while resolving a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum Step {
    /// Script name picked from an annotation or the engine name.
    ScriptName {
        name: String,
        source: ScriptNameSource,
    },
    /// Prefix, case, and keyword rules applied.
    Scriptified { kind: NameKind, name: String },
    /// Interface types get the `I` marker.
    InterfacePrefix { name: String },
    /// Function-library classes keep their script name.
    FunctionLibrary { name: String },
    /// Ordinary types keep their engine name.
    EngineName { name: String },
    /// A delegate signature named by the delegate name provider.
    DelegateName { name: String },
    /// Legacy infix removed from a function name.
    LegacyInfixRemoved { infix: String, name: String },
    /// Property shadowing its owner or a keyword.
    PropertyPrefix { prefix: String, name: String },
    /// A sibling member has the same candidate.
    ConflictFallback { sibling: String, name: String },
    /// Another parameter of the same function has the same candidate.
    ParameterFallback { sibling: String, name: String },
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::ScriptName { name, source } => match source {
                ScriptNameSource::Metadata(key) => write!(f, "script name '{}' from {}", name, key),
                ScriptNameSource::EngineName => write!(f, "script name '{}' from engine name", name),
            },
            Step::Scriptified { kind, name } => {
                write!(f, "scriptified as {:?} -> '{}'", kind, name)
            }
            Step::InterfacePrefix { name } => write!(f, "interface marker -> '{}'", name),
            Step::FunctionLibrary { name } => {
                write!(f, "function library keeps script name '{}'", name)
            }
            Step::EngineName { name } => write!(f, "type keeps engine name '{}'", name),
            Step::DelegateName { name } => write!(f, "delegate named '{}'", name),
            Step::LegacyInfixRemoved { infix, name } => {
                write!(f, "removed '{}' -> '{}'", infix, name)
            }
            Step::PropertyPrefix { prefix, name } => {
                write!(f, "shadows owner or keyword, prefixed '{}' -> '{}'", prefix, name)
            }
            Step::ConflictFallback { sibling, name } => {
                write!(f, "conflicts with '{}', falls back to '{}'", sibling, name)
            }
            Step::ParameterFallback { sibling, name } => {
                write!(f, "same name as parameter '{}', falls back to '{}'", sibling, name)
            }
        }
    }
}

/// How one node's identifier was derived.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub path: String,
    pub kind: NodeKind,
    pub engine_name: String,
    pub steps: Vec<Step>,
    pub name: String,
}

/// Collects steps when explaining, and does nothing otherwise.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    steps: Option<Vec<Step>>,
}

impl Trace {
    pub(crate) fn disabled() -> Self {
        Self { steps: None }
    }

    pub(crate) fn enabled() -> Self {
        Self {
            steps: Some(Vec::new()),
        }
    }

    /// Record a step; the closure only runs when tracing is enabled.
    pub(crate) fn record(&mut self, step: impl FnOnce() -> Step) {
        if let Some(steps) = &mut self.steps {
            steps.push(step());
        }
    }

    pub(crate) fn into_steps(self) -> Vec<Step> {
        self.steps.unwrap_or_default()
    }
}
