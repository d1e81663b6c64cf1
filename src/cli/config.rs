//! Options shared by every command that needs game data.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    app::{App, GameConfig},
    catalog::Catalog,
    colors::Language,
};

/// Where the catalog and game configuration come from.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// JSON catalog to use instead of the built-in data
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// JSON game configuration (missing fields take defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Show names in Arabic
    #[arg(long, global = true)]
    pub arabic: bool,
}

impl DataArgs {
    pub fn language(&self) -> Language {
        if self.arabic { Language::Ar } else { Language::En }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_json_file(path)
                .with_context(|| format!("loading catalog {}", path.display())),
            None => Ok(Catalog::standard()),
        }
    }

    pub fn load_config(&self) -> Result<GameConfig> {
        let config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GameConfig::default(),
        };
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }

    /// Build the application container from these options.
    pub fn app(&self) -> Result<App> {
        let app = App::for_testing()
            .with_catalog(self.load_catalog()?)
            .with_config(self.load_config()?)
            .build()?;
        Ok(app)
    }
}
