use crossterm::style::Stylize;
use grocer_core::config::{GrocerConfig, DEFAULT_CONFIG_PATH};
use grocer_core::core::normalize::normalize_item;
use grocer_core::core::render::{render_histogram, render_list};
use grocer_core::persistence::{save_snapshot, save_to_sink};
use grocer_core::session::{load_interactively, FilenamePrompt};
use grocer_core::{FrequencyTable, GrocerError};
use log::{info, warn};
use std::io::{self, stdin, stdout, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Asks for filenames on the terminal.
struct TerminalPrompt;

impl FilenamePrompt for TerminalPrompt {
    fn prompt_for_filename(&mut self, last_error: Option<&GrocerError>) -> Option<String> {
        match last_error {
            None => print!("Enter the input file name: "),
            Some(err) => {
                println!("{}", err.to_string().red());
                print!("Please enter a valid input file name: ");
            }
        }
        read_input()
    }
}

enum MenuChoice {
    Search,
    List,
    Histogram,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Search),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Histogram),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn main() -> io::Result<()> {
    pretty_env_logger::init();
    info!("--- Corner Grocer frequency tracker starting ---");

    let config = GrocerConfig::load(Path::new(DEFAULT_CONFIG_PATH))
        .unwrap_or_else(|e| {
            warn!("{}; using default configuration", e);
            GrocerConfig::default()
        })
        .with_input_override(std::env::args().nth(1).map(PathBuf::from));

    let Some((input_path, table)) = load_interactively(config.input_path.clone(), &mut TerminalPrompt)
    else {
        println!("\nNo input file loaded. Exiting program.");
        process::exit(1);
    };
    info!(
        "loaded {} items ({} distinct) from {}",
        table.total_count(),
        table.len(),
        input_path.display()
    );

    // Without a backup there is nothing to fall back on, so stop here.
    if let Err(e) = save_to_sink(&table, &config.backup_path) {
        println!("{}", e.to_string().red());
        println!("No backup file created. Exiting program.");
        process::exit(1);
    }

    main_menu(&table)?;

    if let Some(snapshot_path) = &config.snapshot_path {
        match save_snapshot(&table, snapshot_path) {
            Ok(()) => info!("snapshot saved to {}", snapshot_path.display()),
            Err(e) => warn!("{}", e),
        }
    }

    println!("Goodbye!");
    info!("shutting down");
    Ok(())
}

fn main_menu(table: &FrequencyTable) -> io::Result<()> {
    loop {
        print_menu()?;
        // End of input behaves like choosing Exit.
        let Some(input) = read_input() else {
            println!();
            return Ok(());
        };
        println!();

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Search) => {
                print!("Enter the item name to search for its frequency: ");
                stdout().flush()?;
                let name = read_input().unwrap_or_default();
                let name = normalize_item(&name).unwrap_or("");
                println!(
                    "Frequency of '{}': {}",
                    name,
                    table.item_frequency(name)
                );
            }
            Some(MenuChoice::List) => {
                println!("{}", "Item List:".bold());
                print!("{}", render_list(table));
            }
            Some(MenuChoice::Histogram) => {
                println!("{}", "Item Frequency Histogram:".bold());
                print!("{}", render_histogram(table));
            }
            Some(MenuChoice::Exit) => return Ok(()),
            None => println!(
                "{}",
                "Invalid choice. Please enter a number between 1 and 4.".yellow()
            ),
        }
    }
}

fn print_menu() -> io::Result<()> {
    println!("\n{}", "Main Menu:".bold());
    println!("1. Search for Frequency of Item");
    println!("2. Display Item List");
    println!("3. Display Item Frequency Histogram");
    println!("4. Exit");
    print!("Enter your choice (1-4): ");
    stdout().flush()
}

/// One line from stdin, or `None` at end of input or on a read error.
fn read_input() -> Option<String> {
    let _ = stdout().flush();
    let mut input = String::new();
    match stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input),
        Err(e) => {
            warn!("could not read from stdin: {}", e);
            None
        }
    }
}
