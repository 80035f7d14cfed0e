use clap::Parser;
use collate::application::{build::BuildService, init::init, list_collections, list_items};
use collate::cli::{format_build_report, format_collection_list, format_item_list, Cli, Commands};
use collate::error::CollateError;
use collate::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), CollateError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized site at {}", path.display());
            Ok(())
        }
        Commands::Build => {
            let repo = FileSystemRepository::discover()?;
            let report = BuildService::new(repo).execute()?;
            print!("{}", format_build_report(&report));
            Ok(())
        }
        Commands::List { collection, limit } => {
            let repo = FileSystemRepository::discover()?;
            let items = list_items(&repo, &collection, limit)?;
            let output = format_item_list(&items);
            if items.is_empty() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
        Commands::Collections => {
            let repo = FileSystemRepository::discover()?;
            let collections = list_collections(&repo)?;
            let output = format_collection_list(&collections);
            if collections.is_empty() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
    }
}
