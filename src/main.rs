use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use fusionview::config::Config;
use fusionview::scorer::Scorer;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Alternate score table (CSV `symbol,score` or JSON)
    #[arg(global = true, short, long)]
    table: Option<PathBuf>,

    /// JSON config; explicit CLI flags take precedence
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// P-value chart for a single sequence
    Chart(cmd::chart::ChartArgs),
    /// Fusion cards from a JSON file of gene pairs
    Cards(cmd::cards::CardsArgs),
    /// Print the active score table
    Legend(cmd::legend::LegendArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Config args live inside the subcommand's matches, not the root.
    let (cli_config, sub_matches) = match &cli.command {
        Commands::Chart(args) => (&args.config, matches.subcommand_matches("chart")),
        Commands::Cards(args) => (&args.config, matches.subcommand_matches("cards")),
        Commands::Legend(args) => (&args.config, matches.subcommand_matches("legend")),
    };

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading Config from: {}", path.display());
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            if let Some(sub) = sub_matches {
                file_config.merge_from_cli(cli_config, sub);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let scorer = match Scorer::new(cli.table.as_deref(), &config) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING SCORER: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Chart(args) => cmd::chart::run(args, scorer),
        Commands::Cards(args) => cmd::cards::run(args, scorer),
        Commands::Legend(_) => {
            cmd::legend::run(&scorer);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
