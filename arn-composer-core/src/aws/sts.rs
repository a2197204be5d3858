//! STS caller identity lookup.

use aws_sdk_sts::Client as StsClient;

use super::{AwsError, AwsResult};

/// Fetch the account id of the caller behind `client`.
pub(crate) async fn caller_account_id(client: &StsClient) -> AwsResult<String> {
    let identity = client
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| AwsError::StsError(format!("failed to get caller identity: {e}")))?;

    identity
        .account()
        .map(ToString::to_string)
        .ok_or_else(|| {
            AwsError::StsError("caller identity response did not include an account id".to_string())
        })
}
