use avstat_cli::cli::main_types::Cli;
use avstat_cli::cli::session::Session;
use avstat_cli::db::DbClient;
use avstat_cli::display::pagination::DEFAULT_PAGE_SIZE;
use avstat_cli::storage::config::Config;
use avstat_cli::storage::credentials;
use avstat_cli::utils::input::EnvConfigReader;
use clap::Parser;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    // Determine the profile to use
    let profile_name = cli
        .profile
        .or(config.default_profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let profile = match config.get_profile(&profile_name) {
        Some(profile) => profile.clone(),
        None => {
            eprintln!("Error: profile '{}' not found in config.toml", profile_name);
            eprintln!(
                "Hint: add a [profiles.{}] section with host, database and user",
                profile_name
            );
            std::process::exit(1);
        }
    };

    if let Err(err) = profile.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    if cli.verbose {
        println!("Using profile: {}", profile_name);
        println!(
            "Connecting to {}:{}/{} as {}",
            profile.host, profile.port, profile.database, profile.user
        );
    }

    let password = match credentials::resolve_password(&profile) {
        Ok(password) => password,
        Err(err) => {
            eprintln!("Error reading password: {}", err);
            std::process::exit(1);
        }
    };

    let db = match DbClient::connect(&profile, &password).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("Error connecting to the database: {}", err);
            eprintln!("Hint: check the profile's host and port and that the server is reachable");
            std::process::exit(1);
        }
    };

    let page_size = cli
        .page_size
        .or_else(EnvConfigReader::read_page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let rebuild_script = profile
        .rebuild_script
        .clone()
        .unwrap_or_else(|| PathBuf::from("populate.sql"));

    let session = Session::new(db, page_size, rebuild_script);
    if let Err(err) = session.run().await {
        eprintln!("{} Error: {}", err.severity().emoji(), err);
        if let Some(hint) = err.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
