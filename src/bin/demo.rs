//! Search demo
//!
//! Usage: `string-search-demo [config.json]`
//!
//! Prints the start index of the first match, or -1 when there is none.
//! Without a config file the built-in periodic example prints 3.

use std::process::ExitCode;

use log::{error, info};
use string_search::{SearchConfig, SearchEvent};

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => match SearchConfig::from_file(&path) {
            Ok(config) => {
                info!("Loaded search configuration from {}", path.to_string_lossy());
                config
            }
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SearchConfig::default(),
    };

    let result = config.run();

    if config.log_results {
        SearchEvent::from_result(
            config.matcher,
            config.pattern.as_bytes(),
            config.text.as_bytes(),
            &result,
        )
        .emit();
    }

    match result {
        Ok(Some(position)) => println!("{}", position),
        Ok(None) => println!("-1"),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
