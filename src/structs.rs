use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Create the database tables and exit.
    #[arg(long)]
    pub create_database: bool,
    /// Register FILE as a torrent and write its .torrent file, then exit.
    #[arg(long, value_name = "FILE")]
    pub create_torrent: Option<PathBuf>,
    /// Where to write the .torrent file. Defaults to `<name>.torrent`.
    #[arg(long, value_name = "FILE", requires = "create_torrent")]
    pub torrent_output: Option<PathBuf>,
    /// Name stored in the torrent instead of the file's basename.
    #[arg(long, requires = "create_torrent")]
    pub name: Option<String>,
}
