use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use battleships::prelude::*;
use battleships::{Cell, Coordinate, Grid, SETTINGS_FILE_NAME};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Single-player Battleships on the console", long_about = None)]
struct Cli {
    /// Path of the JSON settings file.
    #[arg(long, default_value = SETTINGS_FILE_NAME)]
    settings: PathBuf,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let level = init_logging();
    log::debug!("logging at {}", level);
    let cli = Cli::parse();

    let settings = AppSettings::load(&cli.settings)?;
    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut game = GameLogic::from_settings(settings, RngSource(rng));

    let size = match game.start_new_game() {
        Ok(size) => size,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    println!("New game on a {} grid. Enter a coordinate such as A5.", size);
    if let Some(grid) = game.grid() {
        print_grid(grid);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        let result = game
            .make_new_move(&line)
            .unwrap_or_else(|e| ShotResult::exception(e.to_string()));
        if let Some(grid) = game.grid() {
            print_grid(grid);
        }
        match result.coordinate {
            Some(coordinate) => println!("> {} -> {}", coordinate, result.description),
            None => println!("> {}", result.description),
        }
        if result.kind == ShotKind::GameEnd {
            println!("Game End");
            break;
        }
    }
    Ok(())
}

/// Print the grid as the player sees it: ships stay hidden until hit.
fn print_grid(grid: &Grid) {
    let size = grid.size();
    print!("    ");
    for c in 0..size.column_count {
        print!(" {}", Coordinate::new(c as i32, 0).column_char());
    }
    println!();
    for r in 0..size.row_count {
        print!("  {:2}", r + 1);
        for c in 0..size.column_count {
            let ch = match grid.cell(&Coordinate::new(c as i32, r as i32)) {
                Some(Cell::Shot(None)) => 'o',
                Some(Cell::Shot(Some(i))) if grid.ships()[i].is_sunk() => 'X',
                Some(Cell::Shot(Some(_))) => 'x',
                _ => '~',
            };
            print!(" {}", ch);
        }
        println!();
    }
}
