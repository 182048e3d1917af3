use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use gazarch_catalog::ExclusionEntry;
use gazarch_core::Locale;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// `(kind, number)` pairs treated as nonexistent, constant for the
    /// process lifetime.
    #[serde(default)]
    pub exclusions: Vec<ExclusionEntry>,
    #[serde(default)]
    pub language: LanguageConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogConfig {
    /// Path to the YAML place catalog. Defaults to
    /// `~/gazarch/locations.yml`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// The configured path, or the default next to the config file.
    pub fn resolved_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        Ok(Config::config_dir()?.join("locations.yml"))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LanguageConfig {
    /// Locale used until a message reveals the user's language.
    #[serde(default)]
    pub default: Locale,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'gazarch init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("gazarch"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write the config template and a starter catalog.
    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "catalog": {},
  "exclusions": [
    { "kind": "dorm", "number": 4 },
    { "kind": "class", "number": 6 }
  ],
  "language": {
    "default": "mongolian"
  }
}
"#;
        std::fs::write(&config_path, config_template)?;
        println!("Created config at: {}", config_path.display());

        let catalog_path = config_dir.join("locations.yml");
        if !catalog_path.exists() {
            std::fs::write(&catalog_path, CATALOG_TEMPLATE)?;
            println!("Created starter catalog at: {}", catalog_path.display());
        }

        Ok(())
    }
}

const CATALOG_TEMPLATE: &str = r#"places:
  - title: "Номын сан"
    aliases: ["номын сан", "library"]
    url: ""
  - title: "4-р хичээлийн байр"
    kind: class
    number: 4
    aliases: ["4-р хичээлийн байр"]
    url: ""
  - title: "7-р дотуур байр"
    kind: dorm
    number: 7
    aliases: ["7-р дотуур байр"]
    url: ""
"#;
