use clap::Parser;
use rhyme_chat::core::config::{self, Config};
use rhyme_chat::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rhyme-chat", about = "Ask a model what rhymes with a word")]
struct Args {}

#[tokio::main]
async fn main() -> ExitCode {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to rhyme-chat.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("rhyme-chat.log") {
        let level = config::log_level(|name| std::env::var(name).ok());
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Rhyme Chat starting up");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            println!("{e}");
            return ExitCode::from(1);
        }
    };

    match tui::run(config) {
        Ok(final_input) => {
            log::info!("Rhyme Chat exiting");
            println!("{final_input}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Session ended with error: {}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
