//! Literal ARN assembly.

use crate::arn::ARN_PREFIX;
use crate::aws::AwsError;
use crate::error::{ArnComposerError, ArnComposerResult, RequiredField};
use crate::rules::Overrides;

use super::builder::{ArnAssembler, ArnRequest, ProfileCredentials};

const ACCOUNT_WILDCARD: &str = "*";
const ACCOUNT_WIDTH: usize = 12;

impl ArnAssembler {
    /// Assemble a finished ARN string.
    ///
    /// Fields the rule table marks as not needed become empty, leaving
    /// adjacent colons in the output. Needed fields come from the request,
    /// or from the credentials collaborator when a profile is given; a field
    /// resolvable from neither fails with an error naming every missing
    /// field. A directly supplied account is zero-padded to 12 digits
    /// (wildcard `*` collapses to an empty field); accounts obtained from the
    /// collaborator are used as-is.
    pub async fn assemble(&self, request: &ArnRequest) -> ArnComposerResult<String> {
        let needs = self.rules.requirements(
            &request.service,
            &request.resource,
            Overrides {
                region: request.force_region,
                account: request.force_account,
            },
        );
        log::debug!(
            "assembling {}:{} (region: {}, account: {})",
            request.service,
            request.resource,
            needs.region,
            needs.account
        );

        let mut missing = Vec::new();

        let region = if !needs.region {
            String::new()
        } else if let Some(region) = &request.region {
            region.clone()
        } else if let Some(profile) = &request.profile {
            self.credentials()?.region(profile).await?
        } else {
            missing.push(RequiredField::Region);
            String::new()
        };

        let account = if !needs.account {
            String::new()
        } else if let Some(account) = &request.account {
            normalize_account(account)
        } else if let Some(profile) = &request.profile {
            self.credentials()?.account_id(profile).await?
        } else {
            missing.push(RequiredField::Account);
            String::new()
        };

        if !missing.is_empty() {
            return Err(ArnComposerError::MissingFields(missing));
        }

        Ok(format!(
            "{ARN_PREFIX}:{}:{}:{region}:{account}:{}",
            request.partition, request.service, request.resource
        ))
    }

    fn credentials(&self) -> ArnComposerResult<&dyn ProfileCredentials> {
        self.credentials.as_deref().ok_or_else(|| {
            ArnComposerError::Credentials(AwsError::ConfigError(
                "no credentials provider configured".to_string(),
            ))
        })
    }
}

/// The wildcard account collapses to an empty field; anything else is
/// left-padded with zeros to the fixed account width.
fn normalize_account(account: &str) -> String {
    if account == ACCOUNT_WILDCARD {
        String::new()
    } else {
        format!("{account:0>width$}", width = ACCOUNT_WIDTH)
    }
}
