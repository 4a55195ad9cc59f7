use mipgen::config::read_config;
use mipgen::generate::{generate_icons, GenError};
use mipgen::logger::{log_error, log_line};
use mipgen::storage::{load_last_run, save_last_run};

fn main() {
    let cfg = read_config();
    if let Some(prev) = load_last_run() {
        log_line(&format!(
            "previous run: {} files from {}",
            prev.outputs.len(),
            prev.source
        ));
    }

    match generate_icons(&cfg) {
        Ok(summary) => {
            save_last_run(&summary);
            println!("All icons updated successfully!");
        }
        Err(GenError::MissingSource(path)) => {
            println!("Error: {} not found.", path.display());
        }
        Err(e) => {
            log_error("icon generation failed", &e);
            println!("An error occurred: {}", e);
        }
    }
}
