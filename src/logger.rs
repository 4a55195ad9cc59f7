use chrono::Local;
use once_cell::sync::OnceCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

static LOG_PATH: OnceCell<PathBuf> = OnceCell::new();

fn data_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(format!("{}/.local/share/mipgen", home))
}

pub fn log_path() -> PathBuf {
    LOG_PATH
        .get_or_init(|| {
            let dir = data_dir();
            let _ = fs::create_dir_all(&dir);
            dir.join("mipgen.log")
        })
        .clone()
}

pub fn log_line(line: &str) {
    let path = log_path();
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(f, "[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), line);
    }
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}
