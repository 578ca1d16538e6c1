use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Maze file to analyze; reads stdin when omitted.
    pub input: Option<PathBuf>,

    #[arg(long, default_value_t = 2)]
    pub short_jump: u32,

    #[arg(long, default_value_t = 20)]
    pub long_jump: u32,

    #[arg(long, default_value_t = 100)]
    pub min_saving: u32,

    #[arg(long, default_value_t = false)]
    pub show_grid: bool,
}
