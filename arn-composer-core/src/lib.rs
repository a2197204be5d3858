//! This crate provides the core logic for arn-composer:
//! - rule-driven ARN field requirements (which services carry region/account)
//! - literal ARN assembly, with optional profile-backed lookup of missing fields
//! - CloudFormation `Fn::Join` assembly with pseudo-parameter references
//! - ARN splitting
//!
//! The ARN format is `arn:{partition}:{service}:{region}:{account}:{resource}`.
//! Some services, and some resources within services, exclude either or both
//! of region and account; the rule table decides per service/resource pair.

mod arn;
mod assembler;
mod aws;
mod embedded;
mod error;
mod rules;

// Re-exports for a small, focused public API
pub use arn::{Arn, ARN_PREFIX, DEFAULT_PARTITION};
pub use assembler::{
    ArnAssembler, ArnRequest, FnJoin, ProfileCredentials, TemplatePart, TemplateParts,
};
pub use aws::{AwsError, AwsResult, SdkCredentials};
pub use error::{ArnComposerError, ArnComposerResult, RequiredField};
pub use rules::{Overrides, Requirements, Rule, RuleSet};
