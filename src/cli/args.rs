use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cinder-rs")]
#[command(version = "0.1.0")]
#[command(about = "A command-line test harness for the Cinder volume API")]
#[command(long_about = None)]
pub struct Cli {
    /// Versioned Cinder endpoint URL
    #[arg(
        long,
        env = "CINDER_ENDPOINT",
        default_value = "https://cinder.openstack.svc/v2"
    )]
    pub endpoint: String,

    /// A pod's serviceaccount bearer token file
    #[arg(
        long,
        default_value = "/var/run/secrets/kubernetes.io/serviceaccount/token"
    )]
    pub token_file: PathBuf,

    /// A PEM encoded CA certificate file used to verify the server
    #[arg(
        long,
        default_value = "/var/run/secrets/kubernetes.io/serviceaccount/service-ca.crt"
    )]
    pub ca_file: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output raw tab-separated values (no formatting)
    #[arg(short, long)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request a new volume
    Create {
        /// Size of the volume in GiB
        #[arg(allow_negative_numbers = true)]
        size: i64,

        /// Volume type understood by the backing cloud
        #[arg(long, default_value = "iscsi")]
        volume_type: String,

        /// Display name for the volume
        #[arg(long)]
        name: Option<String>,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,

        /// Availability zone to schedule the volume into
        #[arg(long)]
        availability_zone: Option<String>,
    },
    /// Show a volume
    Get {
        /// Volume ID
        id: String,
    },
    /// Delete a volume
    Delete {
        /// Volume ID
        id: String,
    },
    /// Generate shell completion scripts
    Completion {
        #[command(subcommand)]
        command: CompletionCommands,
    },
}

#[derive(Subcommand)]
pub enum CompletionCommands {
    /// Generate bash completion script
    Bash,
    /// Generate zsh completion script
    Zsh,
    /// Generate fish completion script
    Fish,
    /// Generate PowerShell completion script
    PowerShell,
}

impl CompletionCommands {
    pub fn shell(&self) -> Shell {
        match self {
            CompletionCommands::Bash => Shell::Bash,
            CompletionCommands::Zsh => Shell::Zsh,
            CompletionCommands::Fish => Shell::Fish,
            CompletionCommands::PowerShell => Shell::PowerShell,
        }
    }
}
