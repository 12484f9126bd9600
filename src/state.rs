use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::{AppConfig, SourceConfig};
use crate::error::ReferenceError;
use crate::profiles::ProfileStore;
use crate::reference::loader::load_reference_data;
use crate::reference::repo::ReferenceSlot;
use crate::reference::store::TableSizes;
use crate::storage::{source_from_config, ReferenceSource};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub source: Arc<dyn ReferenceSource>,
    pub reference: ReferenceSlot,
    pub profiles: ProfileStore,
    rng: Arc<Mutex<StdRng>>,
    reload_lock: Arc<tokio::sync::Mutex<()>>,
}

impl AppState {
    /// Reads config, builds the reference source and runs the first load. A
    /// failed load is logged and the service keeps answering with 503s until a
    /// reload succeeds.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let source: Arc<dyn ReferenceSource> = Arc::from(source_from_config(&config.source).await?);

        let state = Self::from_parts(config, source);
        if let Err(e) = state.reload().await {
            warn!(error = %e, "starting without reference data");
        }
        Ok(state)
    }

    pub fn from_parts(config: Arc<AppConfig>, source: Arc<dyn ReferenceSource>) -> Self {
        let rng = match config.menu_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            source,
            reference: ReferenceSlot::default(),
            profiles: ProfileStore::default(),
            rng: Arc::new(Mutex::new(rng)),
            reload_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Full fetch-and-replace of the reference store. Reloads run one at a
    /// time, so the store always reflects the last reload to start.
    pub async fn reload(&self) -> Result<TableSizes, ReferenceError> {
        let _running = self.reload_lock.lock().await;
        match load_reference_data(&*self.source).await {
            Ok(data) => {
                let sizes = data.sizes();
                self.reference.replace(Ok(data));
                info!(source = %self.source.describe(), "reference store swapped in");
                Ok(sizes)
            }
            Err(e) => {
                let message = e.to_string();
                self.reference.replace(Err(e));
                Err(ReferenceError::Unavailable(message))
            }
        }
    }

    /// Runs `f` with exclusive use of the shared random source.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    /// Config pointing at a local directory, for tests and tooling.
    pub fn dir_config(path: impl Into<PathBuf>, menu_seed: Option<u64>) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            source: SourceConfig::Dir { path: path.into() },
            menu_seed,
        }
    }

    #[cfg(test)]
    pub fn fake(data: Option<crate::reference::store::ReferenceData>) -> Self {
        use crate::storage::DirSource;

        let config = Arc::new(Self::dir_config("./missing", Some(7)));
        let source = Arc::new(DirSource::new("./missing")) as Arc<dyn ReferenceSource>;
        let state = Self::from_parts(config, source);
        if let Some(data) = data {
            state.reference.replace(Ok(data));
        }
        state
    }
}
