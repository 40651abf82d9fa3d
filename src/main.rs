// AppWash Location Export - Main Entry Point
use appwash_locations::{AppWashClient, ExporterConfig, LocationExporter, verbosity};
use appwash_locations::{v_info, v_summary};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "appwash-locations",
    version,
    about = "Enumerates AppWash location ids and exports the ones that resolve"
)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = appwash_locations::CONFIG_FILE)]
    config: String,

    /// Increase verbosity (-v basic, -vv full)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append raw API responses to the API log file
    #[arg(long)]
    api_log: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the configured id range and export resolving locations to CSV
    Export {
        /// Output CSV path (overrides the configured one)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show the prepaid account balance
    Balance,
    /// List the machines at a location
    Machines {
        /// Location id (overrides the configured one)
        #[arg(short, long)]
        location: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    verbosity::set_verbosity_level(cli.verbose);

    let mut config = ExporterConfig::load_or_create(&cli.config)?;
    config.apply_env_overrides();
    config.validate()?;
    config.print_summary();

    let mut client = match AppWashClient::login(&config.account.email, &config.account.password).await {
        Ok(client) => {
            v_info!("Authenticated as {}", config.account.email);
            client
        }
        Err(e) => {
            eprintln!("Authentication failed: {}", e);
            return Err(e);
        }
    };
    client.set_api_logging(cli.api_log);

    match cli.command.unwrap_or(Command::Export { output: None }) {
        Command::Export { output } => {
            let output_path = output.unwrap_or_else(|| config.output.path.clone());
            let exporter = LocationExporter::new(
                config.scan.first_location_id,
                config.scan.location_id_limit,
            );

            v_info!("Scanning locations into {}", output_path);
            let summary = exporter.run(&client, Path::new(&output_path)).await?;
            v_summary!(
                "Export complete: {} rows written, {} misses",
                summary.rows_written,
                summary.misses
            );
        }
        Command::Balance => {
            let (balance, currency) = client.get_balance().await?;
            println!("Balance: {} {}", balance, currency);
        }
        Command::Machines { location } => {
            let location_id = location.unwrap_or(config.account.location);
            let machines = client.get_machines(location_id).await?;
            println!("Machines at location {}:", location_id);
            for machine in &machines {
                println!(
                    "  {} {} ({}) - {}",
                    machine.external_id, machine.service_name, machine.unit, machine.state
                );
            }
        }
    }

    Ok(())
}
