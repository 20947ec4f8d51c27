use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file, defaults to $SWARM_TRACKER_CONFIG or config.toml.
    #[arg(long)]
    pub config: Option<String>,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
}
