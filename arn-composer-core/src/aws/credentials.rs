//! Credentials collaborator backed by AWS shared config profiles.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sts::Client as StsClient;

use crate::assembler::ProfileCredentials;

use super::{sts, AwsError, AwsResult};

/// Resolves region and account through the AWS SDK: region from the named
/// profile's shared configuration, account via STS `GetCallerIdentity` with
/// that profile's credentials. One attempt per call, no retries beyond the
/// SDK's own behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct SdkCredentials;

impl SdkCredentials {
    async fn profile_config(profile: &str) -> aws_config::SdkConfig {
        log::debug!("loading AWS config for profile '{profile}'");
        aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .load()
            .await
    }
}

#[async_trait]
impl ProfileCredentials for SdkCredentials {
    async fn region(&self, profile: &str) -> AwsResult<String> {
        let config = Self::profile_config(profile).await;
        config
            .region()
            .map(|region| region.as_ref().to_string())
            .ok_or_else(|| {
                AwsError::ConfigError(format!("no region configured for profile '{profile}'"))
            })
    }

    async fn account_id(&self, profile: &str) -> AwsResult<String> {
        let config = Self::profile_config(profile).await;
        let client = StsClient::new(&config);
        sts::caller_account_id(&client).await
    }
}
