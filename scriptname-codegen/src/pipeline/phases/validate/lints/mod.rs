//! Built-in lints for hierarchy validation.

mod duplicate_member_name;
mod empty_engine_name;
mod missing_package;
mod rejected_metadata;

pub use duplicate_member_name::DuplicateMemberNameLint;
pub use empty_engine_name::EmptyEngineNameLint;
pub use missing_package::MissingPackageLint;
pub use rejected_metadata::RejectedMetadataLint;
