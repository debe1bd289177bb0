//! Catalog assembly and content validation.

pub mod assembler;
pub mod validation;

pub use assembler::{Catalog, GameSetup};
pub use validation::{validate_content, ContentIssue, IssueKind};
