use std::fs;

use crate::models::{Config, Density};

const CONFIG_FILE: &str = "mipgen.cfg";

/// Read the optional override file from the working directory.
/// A missing file means defaults.
pub fn read_config() -> Config {
    match fs::read_to_string(CONFIG_FILE) {
        Ok(content) => parse_config(&content),
        Err(_) => Config::default(),
    }
}

/// key=value lines; unknown keys and malformed values are ignored.
pub fn parse_config(content: &str) -> Config {
    let mut cfg = Config::default();
    let mut densities: Vec<Density> = Vec::new();
    for line in content.lines() {
        if let Some((k, v)) = line.split_once('=') {
            match k.trim() {
                "source_image" => cfg.source_image = v.trim().to_string(),
                "res_dir" => cfg.res_dir = v.trim().to_string(),
                "parallel" => cfg.parallel = v.trim().parse::<u8>().map(|n| n != 0).unwrap_or(false),
                "density" => {
                    // Format: folder|size
                    let parts: Vec<&str> = v.split('|').collect();
                    if parts.len() == 2 {
                        if let Ok(size) = parts[1].trim().parse::<u32>() {
                            densities.push(Density::new(parts[0].trim(), size));
                        }
                    }
                }
                _ => {}
            }
        }
    }
    // density lines, when present, replace the built-in table as a whole
    if !densities.is_empty() {
        cfg.densities = densities;
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_densities;

    #[test]
    fn empty_input_yields_defaults() {
        let cfg = parse_config("");
        assert_eq!(cfg.source_image, "icon_source.png");
        assert_eq!(cfg.res_dir, "android/app/src/main/res");
        assert!(!cfg.parallel);
        assert_eq!(cfg.densities, default_densities());
        assert_eq!(cfg.densities[0], Density::new("mipmap-mdpi", 48));
        assert_eq!(cfg.densities[4], Density::new("mipmap-xxxhdpi", 192));
    }

    #[test]
    fn overrides_apply_and_garbage_is_ignored() {
        let cfg = parse_config(
            "source_image=logo.png\nnot a key value line\nres_dir = out/res\nparallel=1\nunknown=x\n",
        );
        assert_eq!(cfg.source_image, "logo.png");
        assert_eq!(cfg.res_dir, "out/res");
        assert!(cfg.parallel);
        assert_eq!(cfg.densities.len(), 5);
    }

    #[test]
    fn density_lines_replace_the_table() {
        let cfg = parse_config(
            "density=mipmap-mdpi|48\ndensity=mipmap-xhdpi|96\ndensity=bad\ndensity=alsobad|x\n",
        );
        assert_eq!(cfg.densities.len(), 2);
        assert_eq!(cfg.densities[0], Density::new("mipmap-mdpi", 48));
        assert_eq!(cfg.densities[1], Density::new("mipmap-xhdpi", 96));
    }

    #[test]
    fn parallel_parses_zero_and_nonsense_as_off() {
        assert!(!parse_config("parallel=0").parallel);
        assert!(!parse_config("parallel=yes").parallel);
    }
}
