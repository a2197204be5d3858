//! Command-line front end for arn-composer.
//!
//! Prints the assembled ARN on stdout; failures go to stderr as
//! `Error: <message>` with exit code 1.

use arn_composer_core::{
    ArnAssembler, ArnRequest, Overrides, RuleSet, SdkCredentials, TemplateParts,
};
use clap::{Parser, ValueEnum};

/// Placeholder account number substituted by `--fake-account`.
const FAKE_ACCOUNT: &str = "123456789012";

const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn as_bool(self) -> bool {
        matches!(self, Self::On)
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "arn-composer",
    version,
    about = "Construct an ARN for the given service and resource.",
    long_about = "Construct an ARN for the given service and resource.\n\
        The ARN format is arn:{partition}:{service}:{region}:{account-id}:{resource-id}.\n\
        Some services, and some resources within services, exclude either or both of\n\
        region and account; the built-in rules decide per service and resource, and\n\
        the force flags override them. The service is given as the service namespace,\n\
        which is most often the service name in all lowercase.\n\
        Given a profile name, region and account are resolved from that AWS profile\n\
        when they are required and not already specified."
)]
struct Cli {
    /// The service namespace
    service: String,

    /// The resource-specific part of the ARN
    resource: String,

    #[arg(short, long)]
    region: Option<String>,

    /// Override the built-in rules for the region field
    #[arg(long, value_enum)]
    force_region: Option<Toggle>,

    #[arg(short, long, conflicts_with = "fake_account")]
    account: Option<String>,

    /// Use a fake account number
    #[arg(long)]
    fake_account: bool,

    /// Override the built-in rules for the account field
    #[arg(long, value_enum)]
    force_account: Option<Toggle>,

    /// Retrieve region and/or account from an AWS profile, if needed
    #[arg(long, conflicts_with = "default_profile")]
    profile: Option<String>,

    /// Shortcut for --profile default
    #[arg(long)]
    default_profile: bool,

    #[arg(long, default_value = arn_composer_core::DEFAULT_PARTITION)]
    partition: String,

    /// Emit a CloudFormation Fn::Join expression instead of a literal ARN
    #[arg(
        long,
        conflicts_with_all = ["region", "account", "fake_account", "profile", "default_profile", "partition"]
    )]
    cloudformation: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let rules = RuleSet::built_in()?;

    let overrides = Overrides {
        region: cli.force_region.map(Toggle::as_bool),
        account: cli.force_account.map(Toggle::as_bool),
    };

    if cli.cloudformation {
        let assembler = ArnAssembler::new(rules);
        let expr =
            assembler.cloudformation(&cli.service, TemplateParts::from(cli.resource), overrides);
        return Ok(serde_json::to_string_pretty(&expr)?);
    }

    let mut request = ArnRequest::new(cli.service, cli.resource);
    request.partition = cli.partition;
    request.region = cli.region;
    request.account = if cli.fake_account {
        Some(FAKE_ACCOUNT.to_string())
    } else {
        cli.account
    };
    request.profile = if cli.default_profile {
        Some(DEFAULT_PROFILE.to_string())
    } else {
        cli.profile
    };
    request.force_region = overrides.region;
    request.force_account = overrides.account;
    log::debug!("assembling from request: {request:?}");

    let assembler = ArnAssembler::new(rules).with_credentials(SdkCredentials);
    Ok(assembler.assemble(&request).await?)
}
