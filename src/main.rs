use std::error::Error;
use colored::Colorize;

mod cli;
mod config;
mod error;
mod llm;
mod message;
mod roles;

fn main() -> Result<(), Box<dyn Error>> {
    let config = config::load_config();
    if let Err(e) = config.validate() {
        println!("{}", e.to_string().red());
        std::process::exit(1);
    }

    println!(
        "{}",
        format!(
            "{}\n{}\n{}\n{}\nv{}",
            "   _    ___   ___  ___  _  _ ",
            "  /_\\  |_ _| / __|| __|| \\| |",
            " / _ \\  | | | (_ || _| | .` |",
            "/_/ \\_\\|___| \\___||___||_|\\_|",
            env!("CARGO_PKG_VERSION")
        )
        .blue()
    );

    cli::run_cli(config)
}
