// Game Boy Frontend - Main Entry Point
//
// Loads a ROM into the linked emulation core and runs it in a window.

use clap::Parser;
use gb_frontend::display::{run_emulator, WindowConfig};
use gb_frontend::emulator::{Emulator, EmulatorConfig, CONFIG_FILE};
use gb_frontend::LinkedCore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gb-frontend")]
#[command(about = "Run a Game Boy ROM on the linked emulation core")]
struct Cli {
    /// Path to the ROM file (.gb)
    rom_path: PathBuf,

    /// Configuration file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Window scale, overriding the configuration (1-8)
    #[arg(long)]
    scale: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    println!("Game Boy Frontend (gb-frontend) v{}", env!("CARGO_PKG_VERSION"));
    println!("==============================");
    println!();

    let config = EmulatorConfig::load_or_default_from(&cli.config);
    println!("Configuration file: '{}'", cli.config.display());

    let mut window_config = WindowConfig::from(&config.video);
    if let Some(scale) = cli.scale {
        window_config = window_config.with_scale(scale);
    }

    // Allocation failure is fatal: the core offers no recovery path
    let mut emulator = Emulator::new(LinkedCore, config)?;

    println!("Loading ROM: {}", cli.rom_path.display());
    let title = emulator.load_rom(&cli.rom_path)?;
    println!("✓ Cartridge title: {}", title);
    println!();

    println!("Press F12 for a screenshot, close the window to exit.");
    println!();

    run_emulator(window_config, emulator)?;

    println!("Emulator closed.");
    Ok(())
}
