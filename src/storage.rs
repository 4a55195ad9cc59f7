use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::models::RunSummary;

fn data_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(format!("{}/.local/share/mipgen", home))
}

fn last_run_file() -> PathBuf {
    let d = data_dir();
    let _ = fs::create_dir_all(&d);
    d.join("last_run.json")
}

pub fn load_last_run() -> Option<RunSummary> {
    let p = last_run_file();
    if let Ok(mut f) = fs::File::open(&p) {
        let mut s = String::new();
        if f.read_to_string(&mut s).is_ok() {
            if let Ok(v) = serde_json::from_str::<RunSummary>(&s) {
                return Some(v);
            }
        }
    }
    None
}

pub fn save_last_run(summary: &RunSummary) {
    let _ = fs::write(
        last_run_file(),
        serde_json::to_string_pretty(summary).unwrap_or("{}".into()),
    );
}
