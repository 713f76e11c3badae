use clap::Parser;

#[derive(Parser)]
#[command(name = "avstat-cli")]
#[command(about = "Interactive terminal report console for the aviation statistics database")]
#[command(version)]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    /// Connection profile from config.toml
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Directory containing config.toml
    #[arg(long)]
    pub config_dir: Option<String>,

    /// Rows per page in the browse loop
    #[arg(long)]
    pub page_size: Option<usize>,
}
