//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{defaults, env};
use crate::ksc::ClientConfig;

/// KSC inventory CLI
#[derive(Parser, Debug)]
#[command(name = "ksc-inventory")]
#[command(version)]
#[command(
    about = "List hosts and administration groups from Kaspersky Security Center",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// KSC server address including scheme (e.g. https://ksc.corp.local)
    #[arg(short = 's', long, env = env::SERVER, global = true)]
    pub server: Option<String>,

    /// KSC Open API port [default: 13299]
    #[arg(short = 'p', long, env = env::PORT, global = true)]
    pub port: Option<u16>,

    /// Full API base URL (overrides server and port)
    #[arg(long, env = env::URL, global = true)]
    pub url: Option<String>,

    /// KSC user name
    #[arg(short = 'u', long, env = env::USER, global = true)]
    pub user: Option<String>,

    /// KSC password
    #[arg(long, env = env::PASSWORD, hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Accept invalid TLS certificates (self-signed KSC installs)
    #[arg(short = 'k', long, env = env::INSECURE, global = true)]
    pub insecure: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Batch mode - no progress spinner
    #[arg(long, global = true)]
    pub batch: bool,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true)]
    pub no_header: bool,
}

impl Cli {
    /// Client configuration from the connection arguments
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            server: self.server.clone(),
            port: self.port,
            url: self.url.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            accept_invalid_certs: self.insecure,
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List administration groups
    #[command(visible_alias = "group", visible_alias = "grp")]
    Groups(GroupArgs),

    /// List managed hosts
    #[command(visible_alias = "host")]
    Hosts(HostArgs),
}

/// Arguments for 'groups'
#[derive(Parser, Debug)]
pub struct GroupArgs {
    /// Filter groups by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'hosts'
#[derive(Parser, Debug)]
pub struct HostArgs {
    /// Only list hosts of this group ID (otherwise every group is searched)
    #[arg(short, long)]
    pub group: Option<i64>,

    /// Filter hosts by FQDN or host name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns (default)
    Table,
    /// Comma-separated values
    Csv,
    /// Raw records as a JSON array
    Json,
    /// Raw records as YAML
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}
