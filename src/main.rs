//! ksc-inventory - main entry point

use clap::Parser;
use log::{debug, info};

use ksc_inventory::ui::{create_spinner, finish_spinner};
use ksc_inventory::{run_groups_command, run_hosts_command, Cli, Command, KscClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ksc-inventory v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> ksc_inventory::Result<()> {
    let config = cli.client_config();
    debug!("Client config: {:?}", config);

    let spinner = create_spinner("Connecting to Kaspersky Security Center...", cli.batch);
    let connected = KscClient::connect(config).await;
    finish_spinner(spinner);
    let client = connected?;

    match &cli.command {
        Command::Groups(args) => run_groups_command(&client, args, cli).await?,
        Command::Hosts(args) => run_hosts_command(&client, args, cli).await?,
    }

    info!("Completed successfully");
    Ok(())
}
