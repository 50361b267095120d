use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "admin-probe")]
#[command(
    about = "Resolve the admin API endpoint from a CloudFormation stack and call it",
    long_about = None
)]
pub struct Args {
    /// Name of the CloudFormation stack
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub stack: String,

    /// AWS CLI profile to use
    #[arg(long, default_value = "default")]
    pub profile: String,
}
