//! Interactive console for building a Container of Points and Vectors.
//!
//! The Container is loaded from a JSON file at startup and written back on
//! the export command; everything in between is a small state machine over
//! stdin.
//!
//! Usage:
//!     punctum
//!     punctum --file scene.json

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use punctum::{Container, Point, Vector};

/// Interactive 3D Point/Vector container over a JSON file
#[derive(Parser)]
#[command(name = "punctum")]
#[command(version)]
#[command(about = "Interactive 3D Point/Vector container", long_about = None)]
struct Cli {
    /// JSON file the Container is loaded from and exported to
    #[arg(long, default_value = "output.json")]
    file: PathBuf,
}

/// Program states of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Input,
    PointInput,
    VectorInput,
    Output,
    FileOutput,
    Clear,
    Exit,
}

impl MenuState {
    fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(MenuState::PointInput),
            "2" => Some(MenuState::VectorInput),
            "3" => Some(MenuState::Output),
            "4" => Some(MenuState::FileOutput),
            "5" => Some(MenuState::Clear),
            "6" => Some(MenuState::Exit),
            _ => None,
        }
    }
}

/// Load the stored Container; a missing or malformed file starts an empty
/// session instead of aborting it.
fn load_container(path: &Path) -> Container {
    match fs::read_to_string(path) {
        Ok(text) => match Container::from_json_str(&text) {
            Ok(container) => {
                info!(path = %path.display(), elements = container.len(), "container loaded");
                container
            }
            Err(error) => {
                warn!(%error, path = %path.display(), "stored container is malformed, starting empty");
                Container::new()
            }
        },
        Err(error) => {
            warn!(%error, path = %path.display(), "no stored container, starting empty");
            Container::new()
        }
    }
}

/// Serialize the Container over the storage file, replacing its contents.
fn export_container(path: &Path, container: &Container) -> anyhow::Result<()> {
    fs::write(path, container.to_json_string())
        .with_context(|| format!("can't export container to {}", path.display()))?;
    info!(path = %path.display(), elements = container.len(), "container exported");
    Ok(())
}

/// Prompt and read one trimmed line; `None` means stdin is closed.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();

    let mut container = load_container(&cli.file);

    println!("Select one of the following options:");
    println!("1: Add Point to Container");
    println!("2: Add Vector to Container");
    println!("3: Print out a Container");
    println!("4: Export Container to JSON");
    println!("5: Clear a Container");
    println!("6: Exit");

    let mut state = MenuState::Input;
    loop {
        match state {
            MenuState::Input => {
                let Some(choice) = read_line("> ")? else { break };
                match MenuState::from_choice(&choice) {
                    Some(next) => state = next,
                    None => println!("Illegal input"),
                }
            }
            MenuState::PointInput => {
                println!("Input a point: (x;y;z)");
                let Some(line) = read_line("> ")? else { break };
                match line.parse::<Point>() {
                    Ok(point) => {
                        container.append(point);
                        state = MenuState::Input;
                    }
                    // parse failures re-prompt in the same state
                    Err(error) => println!("{}", error),
                }
            }
            MenuState::VectorInput => {
                println!("Input a vector: (x1;y1;z1):(x2;y2;z2)");
                let Some(line) = read_line("> ")? else { break };
                match line.parse::<Vector>() {
                    Ok(vector) => {
                        container.append(vector);
                        state = MenuState::Input;
                    }
                    Err(error) => println!("{}", error),
                }
            }
            MenuState::Output => {
                println!("{}", container);
                state = MenuState::Input;
            }
            MenuState::FileOutput => {
                export_container(&cli.file, &container)?;
                state = MenuState::Input;
            }
            MenuState::Clear => {
                container.clear();
                state = MenuState::Input;
            }
            MenuState::Exit => break,
        }
    }

    Ok(())
}
