//! AWS SDK integration: profile-backed credentials and STS identity lookup.

mod credentials;
pub(crate) mod sts;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("AWS configuration error: {0}")]
    ConfigError(String),
    #[error("STS error: {0}")]
    StsError(String),
}

pub type AwsResult<T> = Result<T, AwsError>;

pub use credentials::SdkCredentials;
