//! cfctl - Main entry point

use clap::Parser;
use log::{debug, info};

use cfctl::{
    run_count_command, run_get_command, run_permissions_command, run_roles_command, ApiResolver,
    CcClient, Cli, CloudController, Command, TokenResolver,
};

async fn run(cli: &Cli) -> cfctl::Result<()> {
    let api = ApiResolver::new().resolve(cli.api.as_deref())?;
    let token = TokenResolver::new().resolve(cli.token.as_deref())?;
    debug!("Using Cloud Controller at {}", api);

    let cc = CloudController::new(CcClient::new(&api, token));

    match &cli.command {
        Command::Get { resource } => run_get_command(&cc, resource, cli.no_header).await,
        Command::Count { resource } => run_count_command(&cc, *resource).await,
        Command::Permissions(args) => run_permissions_command(&cc, args, cli.no_header).await,
        Command::Roles(args) => run_roles_command(&cc, args, cli.no_header).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cfctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli.command);

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("Completed successfully");
}
