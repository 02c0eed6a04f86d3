use std::process;
use log::{debug, error, LevelFilter};

use geokit::cli::build_cli;
use geokit::commands::{CommandFactory, GeokitCommandFactory};
use geokit::config::Settings;
use geokit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let mut settings = match matches.get_one::<String>("config") {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings from {}: {}", path, e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };

    if matches.get_flag("verbose") {
        settings.log_level = LevelFilter::Debug;
    }

    match &settings.log_file {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, settings.log_level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => Logger::init_console_logger(settings.log_level),
    }
    debug!("Settings: {:?}", settings);

    let factory = GeokitCommandFactory::new();

    let command_result = factory.create_command(&matches, &settings);
    match command_result {
        Ok(command) => match command.execute() {
            Ok(report) => println!("{}", report),
            Err(e) => {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
