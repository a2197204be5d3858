//! Assembler construction and the credentials collaborator seam.

use async_trait::async_trait;

use crate::arn::DEFAULT_PARTITION;
use crate::aws::AwsResult;
use crate::rules::RuleSet;

/// Resolves region and account for a named profile.
///
/// Injected into [`ArnAssembler`] so the assembly logic carries no
/// compiled-in dependency on a particular SDK; tests supply fakes. A single
/// attempt per call, any failure propagates to the caller.
#[async_trait]
pub trait ProfileCredentials: Send + Sync {
    async fn region(&self, profile: &str) -> AwsResult<String>;
    async fn account_id(&self, profile: &str) -> AwsResult<String>;
}

/// Inputs for one literal assembly.
#[derive(Debug, Clone)]
pub struct ArnRequest {
    pub service: String,
    pub resource: String,
    pub partition: String,
    pub region: Option<String>,
    pub account: Option<String>,
    /// Profile to resolve region/account from when needed and not supplied.
    pub profile: Option<String>,
    pub force_region: Option<bool>,
    pub force_account: Option<bool>,
}

impl ArnRequest {
    /// A request for `service` and `resource` in the default partition, with
    /// no literal values and no overrides.
    pub fn new(service: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            resource: resource.into(),
            partition: DEFAULT_PARTITION.to_string(),
            region: None,
            account: None,
            profile: None,
            force_region: None,
            force_account: None,
        }
    }
}

/// Builds ARNs against an immutable rule table.
///
/// Construct once with the rule table (and, for profile-backed literal
/// assembly, a credentials collaborator) and reuse across calls.
pub struct ArnAssembler {
    pub(crate) rules: RuleSet,
    pub(crate) credentials: Option<Box<dyn ProfileCredentials>>,
}

impl ArnAssembler {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: impl ProfileCredentials + 'static) -> Self {
        self.credentials = Some(Box::new(credentials));
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
