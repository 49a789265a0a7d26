use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use rbac_assert::formatter::{Formatter, OutputFormat};
use rbac_assert::{cases, check, client, config};

/// Check RBAC decisions of the current cluster against the developer suite
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the kubeconfig, defaults to $HOME/.kube/config
    #[arg(long)]
    kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long)]
    context: Option<String>,

    /// Display the API group column
    #[arg(short = 'g', long)]
    display_group: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rbac_assert=info")),
        )
        .init();

    let args = Args::parse();
    let config = config::Config::new(args.kubeconfig, args.context, args.display_group)?;
    let client = client::connect(&config).await?;

    let checker = check::Checker::new(client);
    let result = checker.check_all(&cases::DEVELOPER_SUITE).await;
    let failed = result.failures().count();

    println!("{}", Formatter::new(args.output, &config, result));

    if failed > 0 {
        bail!("{} of {} access checks failed", failed, cases::DEVELOPER_SUITE.len());
    }
    Ok(())
}
