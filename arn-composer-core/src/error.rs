//! Error types shared across the crate.

use std::fmt;

use thiserror::Error;

use crate::aws::AwsError;

/// An ARN field that the rule table can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Region,
    Account,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region => f.write_str("region"),
            Self::Account => f.write_str("account"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ArnComposerError {
    /// The service rule table could not be loaded or parsed. Fatal at startup.
    #[error("failed to load service rules: {0}")]
    Config(String),

    /// Region and/or account are required for the requested ARN but could not
    /// be resolved from any source.
    #[error("{} required", join_fields(.0))]
    MissingFields(Vec<RequiredField>),

    /// The credentials collaborator failed; the original cause is preserved.
    #[error("credentials error: {0}")]
    Credentials(#[from] AwsError),

    /// The input string does not carry enough `:` separators to be an ARN.
    #[error("malformed ARN: {0}")]
    MalformedArn(String),
}

impl ArnComposerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedArn(message.into())
    }
}

pub type ArnComposerResult<T> = Result<T, ArnComposerError>;

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}
