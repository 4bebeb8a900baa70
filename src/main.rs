mod config;

use config::*;

use std::path::Path;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use regdesk::App;

#[derive(Debug, Parser)]
#[clap(author, version)]
struct Arguments {
    #[clap(short = 'f', long = "filename")]
    config: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate and submit a team registration from a YAML file
    Register {
        #[clap(short, long)]
        submission: String,
    },
    /// Print a team name suggestion for a game
    SuggestName {
        #[clap(long)]
        game: String,
    },
    /// Show all registrations (admin)
    List {
        #[clap(long)]
        search: Option<String>,
        #[clap(short, long)]
        passphrase: String,
    },
    /// Write the CSV export file (admin)
    Export {
        #[clap(long)]
        search: Option<String>,
        #[clap(long)]
        out_dir: Option<PathBuf>,
        #[clap(short, long)]
        passphrase: String,
    },
    /// Copy all registrations to the clipboard as TSV (admin)
    Copy {
        #[clap(short, long)]
        passphrase: String,
    },
    /// Delete a single registration (admin)
    Delete {
        #[clap(long)]
        id: String,
        #[clap(short, long)]
        passphrase: String,
    },
    /// Delete every registration (admin)
    Clear {
        #[clap(long)]
        yes: bool,
        #[clap(short, long)]
        passphrase: String,
    },
}

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Arguments = Arguments::parse();
    let config = match Configuration::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("couldn't read config file: {:?}", err);
            std::process::exit(1);
        }
    };

    let app = match App::new(config.into()) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("couldn't initialize: {:?}", err);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Commands::Register { submission } => app.register(Path::new(&submission)).await,
        Commands::SuggestName { game } => app.suggest_name(&game),
        Commands::List { search, passphrase } => app.list(&passphrase, search.as_deref()).await,
        Commands::Export {
            search,
            out_dir,
            passphrase,
        } => {
            app.export(&passphrase, search.as_deref(), out_dir.as_deref())
                .await
        }
        Commands::Copy { passphrase } => app.copy(&passphrase).await,
        Commands::Delete { id, passphrase } => app.delete(&passphrase, &id).await,
        Commands::Clear { yes, passphrase } => app.clear(&passphrase, yes).await,
    };

    if let Err(reason) = result {
        tracing::error!("finished unsuccessfully: {}", reason);
        std::process::exit(1);
    }
}
