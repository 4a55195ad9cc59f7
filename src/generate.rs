use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::RgbaImage;
use rayon::prelude::*;

use crate::icon;
use crate::logger::log_line;
use crate::models::{Config, Density, GeneratedIcon, RunSummary};

/// Failure modes of a generation run.
#[derive(Debug)]
pub enum GenError {
    /// Source bitmap is not on disk; nothing was written.
    MissingSource(PathBuf),
    /// Decode or encode failure.
    Image(String),
    /// Folder creation or file write failure.
    Io(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::MissingSource(p) => write!(f, "{} not found", p.display()),
            GenError::Image(e) => write!(f, "image error: {}", e),
            GenError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for GenError {}

impl From<image::ImageError> for GenError {
    fn from(e: image::ImageError) -> Self {
        GenError::Image(e.to_string())
    }
}

impl From<std::io::Error> for GenError {
    fn from(e: std::io::Error) -> Self {
        GenError::Io(e.to_string())
    }
}

/// Regenerate every launcher icon in the config's density table.
///
/// The source must exist before anything is written; a failure partway
/// through leaves earlier densities on disk and skips the rest.
pub fn generate_icons(cfg: &Config) -> Result<RunSummary, GenError> {
    let src_path = Path::new(&cfg.source_image);
    if !src_path.exists() {
        return Err(GenError::MissingSource(src_path.to_path_buf()));
    }

    // RGBA8 throughout; sources without an alpha channel come out opaque
    let img = image::open(src_path)?.to_rgba8();
    println!("Loaded {}", cfg.source_image);
    log_line(&format!(
        "loaded {} ({}x{})",
        cfg.source_image,
        img.width(),
        img.height()
    ));

    let res_root = Path::new(&cfg.res_dir);
    let outputs = if cfg.parallel {
        let per_density: Vec<Vec<GeneratedIcon>> = cfg
            .densities
            .par_iter()
            .map(|d| write_density(&img, res_root, d))
            .collect::<Result<_, _>>()?;
        per_density.into_iter().flatten().collect()
    } else {
        let mut all = Vec::new();
        for d in &cfg.densities {
            all.extend(write_density(&img, res_root, d)?);
        }
        all
    };

    log_line(&format!("wrote {} icons under {}", outputs.len(), cfg.res_dir));
    Ok(RunSummary {
        source: cfg.source_image.clone(),
        generated_at: epoch_secs(),
        outputs,
    })
}

/// Square and round icon for one density folder.
fn write_density(
    img: &RgbaImage,
    res_root: &Path,
    d: &Density,
) -> Result<Vec<GeneratedIcon>, GenError> {
    let folder = res_root.join(&d.folder);
    fs::create_dir_all(&folder)?;

    let square = icon::fit_square(img, d.size);
    let square_path = folder.join("ic_launcher.png");
    square.save(&square_path)?;
    println!("Saved {} ({}x{})", square_path.display(), d.size, d.size);

    let round = icon::make_round_icon(img, d.size);
    let round_path = folder.join("ic_launcher_round.png");
    round.save(&round_path)?;
    println!("Saved {} ({}x{})", round_path.display(), d.size, d.size);

    Ok(vec![
        GeneratedIcon { path: square_path.to_string_lossy().to_string(), size: d.size },
        GeneratedIcon { path: round_path.to_string_lossy().to_string(), size: d.size },
    ])
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
