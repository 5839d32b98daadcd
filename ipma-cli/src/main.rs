//! IPMA CLI - Command line dashboard for Portuguese weather and
//! environmental data.

use clap::Parser;
use ipma_client::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Parser)]
#[command(
    name = "ipma-cli",
    version,
    about = "Portuguese weather and environmental data dashboard"
)]
struct Cli {
    /// Base URL of the IPMA API
    #[arg(long, global = true, env = "IPMA_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: ipma_cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ClientConfig::new(cli.base_url, cli.timeout_secs);
    log::debug!("[IPMA] config: {:?}", config);
    ipma_cmd::run(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ipma-cli",
            "marine",
            "--base-url",
            "http://api.example.pt",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.base_url, "http://api.example.pt");
        assert_eq!(cli.timeout_secs, 3);
    }
}
