use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rental-pager")]
#[command(about = "Inspect pagination and listing data of a saved search-result page")]
#[command(version)]
pub struct Args {
    /// Saved HTML of a search-result page
    pub html_file: PathBuf,

    /// Address the page was loaded from
    #[arg(short, long)]
    pub url: String,

    /// JSON configuration file (page cap, default category, keys)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to report
    #[arg(short, long, value_enum, default_value_t = Mode::Status)]
    pub mode: Mode,

    /// Key to simulate in `key` mode
    #[arg(short, long, default_value = "d")]
    pub key: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Navigation status of the page
    Status,
    /// Listing facts of every item on the page
    Extract,
    /// Feed one key press to the keyboard navigation
    Key,
}
