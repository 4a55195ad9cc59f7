use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Density {
    pub folder: String,
    pub size: u32,
}

impl Density {
    pub fn new(folder: &str, size: u32) -> Self {
        Self { folder: folder.to_string(), size }
    }
}

/// The five standard launcher densities, in generation order.
pub fn default_densities() -> Vec<Density> {
    vec![
        Density::new("mipmap-mdpi", 48),
        Density::new("mipmap-hdpi", 72),
        Density::new("mipmap-xhdpi", 96),
        Density::new("mipmap-xxhdpi", 144),
        Density::new("mipmap-xxxhdpi", 192),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source_image: String,     // source bitmap, relative to the working dir
    pub res_dir: String,          // Android resource root
    #[serde(default)]
    pub parallel: bool,           // process densities on the rayon pool
    #[serde(default = "default_densities")]
    pub densities: Vec<Density>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_image: "icon_source.png".to_string(),
            res_dir: "android/app/src/main/res".to_string(),
            parallel: false,
            densities: default_densities(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedIcon {
    pub path: String,
    pub size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub source: String,
    pub generated_at: u64, // epoch seconds
    pub outputs: Vec<GeneratedIcon>,
}
