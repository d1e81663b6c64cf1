//! Dependency injection container.

use std::{path::Path, sync::Arc};

use rand::{SeedableRng, random, rngs::StdRng};

use super::config::GameConfig;
use crate::{
    Result,
    adapters::MsgPackRepository,
    catalog::Catalog,
    ports::{RandomSource, SnapshotRepository},
    progress::UserProgress,
    store::Store,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ```
/// use mira_colors::app::{App, GameConfig};
///
/// let app = App::for_testing()
///     .with_config(GameConfig::default().with_max_attempts(3))
///     .build()?;
///
/// let store = app.create_store();
/// assert_eq!(store.state().game.attempts_left, 3);
/// # Ok::<(), mira_colors::Error>(())
/// ```
pub struct App {
    catalog: Arc<Catalog>,
    config: GameConfig,
    /// Repository for snapshot persistence
    repository: Arc<dyn SnapshotRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create an app with production defaults: the standard catalog, the
    /// default configuration and `MsgPackRepository`.
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(Catalog::standard()),
            config: GameConfig::default(),
            repository: Arc::new(MsgPackRepository::new()),
            default_seed: None,
        }
    }

    /// Create a builder for an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn repository(&self) -> Arc<dyn SnapshotRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    /// Seed used for new stores: the configured one, else the app default.
    pub fn seed(&self) -> Option<u64> {
        self.config.seed.or(self.default_seed)
    }

    /// Generator for a new store, seeded from OS entropy when no seed is set.
    fn rng(&self) -> Box<dyn RandomSource> {
        Box::new(StdRng::seed_from_u64(self.seed().unwrap_or_else(random)))
    }

    /// Create a store with a fresh initial state.
    pub fn create_store(&self) -> Store {
        self.create_store_with_random(self.rng())
    }

    /// Create a store drawing from `rng` instead of the seeded generator.
    pub fn create_store_with_random(&self, rng: Box<dyn RandomSource>) -> Store {
        Store::new(self.catalog(), self.config.clone(), rng)
    }

    /// Create a store for saved progress with a fresh round.
    pub fn resume_store(&self, progress: UserProgress) -> Store {
        Store::resume(
            self.catalog(),
            self.config.clone(),
            self.rng(),
            progress,
        )
    }

    /// Save the store's current snapshot.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mira_colors::app::App;
    /// use std::path::Path;
    ///
    /// let app = App::new();
    /// let store = app.create_store();
    /// app.save_store(&store, Path::new("progress.msgpack"))?;
    /// # Ok::<(), mira_colors::Error>(())
    /// ```
    pub fn save_store(&self, store: &Store, path: &Path) -> Result<()> {
        self.repository.save(store.state(), path)
    }

    /// Load a snapshot and wrap it in a store. Pending follow-ups are not
    /// part of a snapshot, so none are scheduled.
    pub fn load_store(&self, path: &Path) -> Result<Store> {
        let state = self.repository.load(path)?;
        if !state.progress.is_unlocked(state.current_palette()) {
            tracing::warn!(
                palette = %state.current_palette(),
                "loaded snapshot focuses a locked palette, starting a fresh round"
            );
            return Ok(self.resume_store(state.progress));
        }
        Ok(Store::from_snapshot(
            self.catalog(),
            self.config.clone(),
            self.rng(),
            state,
        ))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for an app with custom dependencies.
///
/// # Examples
///
/// ```
/// use mira_colors::app::AppBuilder;
/// use mira_colors::adapters::InMemoryRepository;
///
/// let app = AppBuilder::new()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build()?;
/// # Ok::<(), mira_colors::Error>(())
/// ```
#[derive(Default)]
pub struct AppBuilder {
    catalog: Option<Catalog>,
    config: Option<GameConfig>,
    repository: Option<Arc<dyn SnapshotRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_repository<R: SnapshotRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.repository = Some(Arc::new(repo));
        self
    }

    /// Seed for every store this app creates, unless the configuration sets
    /// its own.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app, validating the catalog and configuration.
    ///
    /// Unset dependencies fall back to the production defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`](crate::Error::InvalidCatalog) or
    /// [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration).
    pub fn build(self) -> Result<App> {
        let catalog = self.catalog.unwrap_or_else(Catalog::standard);
        catalog.validate()?;
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(App {
            catalog: Arc::new(catalog),
            config,
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(MsgPackRepository::new())),
            default_seed: self.default_seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, adapters::ScriptedRandom, colors::ColorId, palette::PaletteId};

    #[test]
    fn test_app_creates_store_on_first_palette() {
        let app = App::new();
        let store = app.create_store();
        assert_eq!(store.state().current_palette(), PaletteId::Warm);
        assert!(store.state().current_challenge().is_some());
    }

    #[test]
    fn test_default_seed_makes_stores_reproducible() {
        let app = App::for_testing().with_default_seed(42).build().unwrap();
        let first = app.create_store();
        let second = app.create_store();
        assert_eq!(first.state(), second.state());
    }

    #[test]
    fn test_config_seed_overrides_app_default() {
        let app = App::for_testing()
            .with_config(GameConfig::default().with_seed(7))
            .with_default_seed(42)
            .build()
            .unwrap();
        assert_eq!(app.seed(), Some(7));
    }

    #[test]
    fn test_scripted_random_is_honoured() {
        let app = App::new();
        let store = app.create_store_with_random(Box::new(ScriptedRandom::new([(1, 8)])));
        let challenge = store.state().current_challenge().unwrap();
        assert_eq!(challenge.target_color_id, ColorId::Vermilion);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = App::for_testing()
            .with_config(GameConfig::default().with_max_attempts(0))
            .build();
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let mut catalog = Catalog::standard();
        catalog.palettes.retain(|p| p.id != PaletteId::Cool);
        let result = App::for_testing().with_catalog(catalog).build();
        assert!(matches!(result, Err(Error::InvalidCatalog { .. })));
    }
}
