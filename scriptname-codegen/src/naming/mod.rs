//! Naming policies for generated C# bindings.
//!
//! Each submodule owns one rule of the pipeline; [`NameMapper`] combines them
//! per node kind.

mod conflict;
mod convention;
mod delegate;
mod explain;
mod mapper;
mod metadata;
mod namespace;
mod prefix;

pub use conflict::{ConflictOutcome, check_conflict, find_conflict, resolve_conflict};
pub use convention::{
    CSHARP_NAMING, EmptyNameError, NameKind, NamingConvention, escape_keyword, is_keyword,
    scriptify,
};
pub use delegate::{DELEGATE_SIGNATURE_SUFFIX, DelegateNamer, SignatureDelegateNamer};
pub use explain::{Explanation, Step};
pub use mapper::NameMapper;
pub use metadata::{
    SCRIPT_NAME_KEYS, ScriptName, ScriptNameSource, accepts_annotation, rejected_annotations,
    resolve_script_name, script_name,
};
pub use namespace::{namespace, package_short_name};
pub use prefix::{BOOL_MARKER, INPUT_MARKER, strip_prefix};
