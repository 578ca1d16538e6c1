use std::fs;
use std::io::Read;

use anyhow::Context;
use clap::Parser;

use maze_shortcuts::config::Config;
use maze_shortcuts::grid::Maze;
use maze_shortcuts::report::Report;
use maze_shortcuts::search::distance_map;
use maze_shortcuts::shortcuts::count_shortcuts;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let text = match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let maze = Maze::parse(&text).context("parsing maze")?;
    if config.show_grid {
        println!("{}", maze);
    }

    let distances = distance_map(&maze.neighbors, maze.start);

    let report = Report {
        cells_reached: distances.len(),
        distance_to_end: distances.get(&maze.end).copied(),
        short_jump: config.short_jump,
        long_jump: config.long_jump,
        min_saving: config.min_saving,
        short_count: count_shortcuts(&distances, config.short_jump, config.min_saving),
        long_count: count_shortcuts(&distances, config.long_jump, config.min_saving),
    };

    println!("{}", report);
    Ok(())
}
