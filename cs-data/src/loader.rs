//! Dataset loader with fallback paths and an optional parse cache.
//!
//! The loader resolves the first existing candidate (primary path, then each
//! fallback in order) and parses it. With caching on, the parsed table is
//! kept per resolved path so repeated renders do not re-read the file.

use crate::dataset::Dataset;
use crate::error::{DataError, Result};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Configurable CSV dataset loader.
///
/// Cheap to clone; clones share the cache.
#[derive(Clone, Debug)]
pub struct DatasetLoader {
    primary: PathBuf,
    fallbacks: Vec<PathBuf>,
    cache_enabled: bool,
    cache: Rc<RefCell<Option<(PathBuf, Rc<Dataset>)>>>,
}

impl DatasetLoader {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallbacks: Vec::new(),
            cache_enabled: true,
            cache: Rc::new(RefCell::new(None)),
        }
    }

    pub fn with_fallbacks<I, P>(mut self, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.fallbacks = fallbacks.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub fn primary(&self) -> &Path {
        &self.primary
    }

    /// First candidate path that exists on disk.
    pub fn resolve(&self) -> Result<PathBuf> {
        std::iter::once(&self.primary)
            .chain(self.fallbacks.iter())
            .find(|p| p.is_file())
            .cloned()
            .ok_or_else(|| DataError::FileNotFound(self.primary.clone()))
    }

    /// Resolve and parse the dataset, reusing the cached parse when allowed.
    pub fn load(&self) -> Result<Rc<Dataset>> {
        let path = self.resolve()?;

        if self.cache_enabled {
            if let Some((cached_path, dataset)) = self.cache.borrow().as_ref() {
                if *cached_path == path {
                    log::debug!("[ClimateScope] loader: Cache hit for {}", path.display());
                    return Ok(Rc::clone(dataset));
                }
            }
        }

        if path != self.primary {
            log::warn!(
                "[ClimateScope] loader: {} missing, using fallback {}",
                self.primary.display(),
                path.display()
            );
        }

        let dataset = Rc::new(Dataset::from_path(&path)?);
        log::info!(
            "[ClimateScope] loader: Loaded {} ({} rows)",
            path.display(),
            dataset.row_count()
        );
        if self.cache_enabled {
            *self.cache.borrow_mut() = Some((path, Rc::clone(&dataset)));
        }
        Ok(dataset)
    }

    /// Drop any cached parse.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().take();
    }
}
