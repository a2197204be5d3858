//! ARN assembly: literal ARN strings and CloudFormation `Fn::Join` expressions.

mod builder;
mod cloudformation;
mod literal;

pub use builder::{ArnAssembler, ArnRequest, ProfileCredentials};
pub use cloudformation::{FnJoin, TemplatePart, TemplateParts};
