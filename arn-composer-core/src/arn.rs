//! ARN value type and splitting.

use std::fmt;
use std::str::FromStr;

use crate::error::{ArnComposerError, ArnComposerResult};

/// Fixed leading segment of every ARN.
pub const ARN_PREFIX: &str = "arn";

/// Partition used when the caller does not specify one.
pub const DEFAULT_PARTITION: &str = "aws";

/// The five fields of an ARN after the fixed prefix.
///
/// The resource field may itself contain colons; parsing caps the number of
/// splits so trailing colons stay inside the resource verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account: String,
    pub resource: String,
}

impl Arn {
    /// Split an ARN string into its parts.
    ///
    /// The leading segment is discarded without inspection, matching the
    /// colon-count-only contract: an input with fewer than five separators is
    /// malformed, anything else splits.
    pub fn parse(input: &str) -> ArnComposerResult<Self> {
        let parts: Vec<&str> = input.splitn(6, ':').collect();
        if parts.len() != 6 {
            return Err(ArnComposerError::malformed(format!(
                "expected at least 5 ':' separators in '{input}'"
            )));
        }

        Ok(Self {
            partition: parts[1].to_string(),
            service: parts[2].to_string(),
            region: parts[3].to_string(),
            account: parts[4].to_string(),
            resource: parts[5].to_string(),
        })
    }
}

impl FromStr for Arn {
    type Err = ArnComposerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ARN_PREFIX}:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account, self.resource
        )
    }
}
