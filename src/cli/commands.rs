// CLI command definitions

use super::handlers::{RenderCommand, VersionCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ionosctl",
    version,
    about = "Command line client for cloud provider REST APIs",
    long_about = "A command line client that calls cloud provider REST APIs and renders the responses as aligned text tables or JSON"
)]
pub struct CliArgs {
    /// Output format (text, json)
    #[arg(long, short = 'o', global = true, value_name = "FORMAT")]
    pub output: Option<String>,

    /// Suppress status messages; tables and JSON items are still printed
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Print diagnostic messages to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Omit the table header line
    #[arg(long, global = true)]
    pub no_headers: bool,

    /// Path to an output config file (TOML)
    /// If not specified, IONOSCTL_CONFIG is used when set
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Show the client version
    Version(VersionCommand),

    /// Render an API response read from a file or stdin
    Render(RenderCommand),
}
