//! CLI for the TPX proxy URL rewriter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tpx_core::config;
use tpx_core::rewrite::ResourceKind;
use tpx_core::store::FileStore;

use commands::{run_rewrite, run_status, run_uid};

/// Top-level CLI for the TPX proxy URL rewriter.
#[derive(Debug, Parser)]
#[command(name = "tpx")]
#[command(about = "tpx: route TMDB image/API URLs through a proxy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Resource kind for the rewrite command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Image,
    Api,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Image => ResourceKind::Image,
            KindArg::Api => ResourceKind::Api,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite a URL through the configured proxy.
    Rewrite {
        /// URL to rewrite (path-style API URLs like /movie/550 work too).
        url: String,

        /// Target kind: image or api.
        #[arg(long, value_enum, default_value = "api")]
        kind: KindArg,

        /// Account email to attach; overrides the stored one.
        #[arg(long)]
        email: Option<String>,
    },

    /// Print the per-installation identity token, generating it on first use.
    Uid,

    /// Show effective configuration and stored state.
    Status,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let mut store = FileStore::open_default()?;

        match cli.command {
            CliCommand::Rewrite { url, kind, email } => {
                run_rewrite(&cfg, &mut store, kind.into(), &url, email)?
            }
            CliCommand::Uid => run_uid(&mut store)?,
            CliCommand::Status => run_status(&cfg, &store)?,
        }

        Ok(())
    }
}
