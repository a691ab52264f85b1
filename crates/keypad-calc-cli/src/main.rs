//! keypad-calc: button-driven calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc press 5 + 3 =          # prints 8
//! keypad-calc press --steps 7 ← ←    # display after every press
//! keypad-calc --format json press 9 ÷ 0 =
//! echo "6 × 7 =" | keypad-calc repl
//! keypad-calc keypad                 # show the layout
//! ```

use clap::Parser;
use keypad_calc_cli::{
    handlers::{config::execute_config, keypad::execute_keypad, press::execute_press, repl::run_repl},
    init_logging, Cli, CliConfig, CliResult, Commands,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);

    init_logging(&config)?;
    console::set_colors_enabled(config.color.should_color());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Press(args) => execute_press(&config, &args, &mut out),
        Commands::Repl(args) => {
            run_repl(&config, &args, io::stdin().lock(), &mut out)?;
            Ok(())
        }
        Commands::Keypad => execute_keypad(&config, &mut out),
        Commands::Config => execute_config(&config, &mut out),
    }
}
