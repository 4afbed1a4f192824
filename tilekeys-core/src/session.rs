use std::fmt::Display;
use std::sync::Arc;

use crate::config::Snapshot;

/// What a reload did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The new snapshot replaced the previous one.
    Loaded(Arc<Snapshot>),
    /// Loading failed and the previous snapshot stays active.
    Kept(Arc<Snapshot>),
}

impl Outcome {
    #[must_use]
    pub fn snapshot(&self) -> &Arc<Snapshot> {
        match self {
            Self::Loaded(snapshot) | Self::Kept(snapshot) => snapshot,
        }
    }
}

/// Holds the active snapshot between reloads.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Arc<Snapshot>>,
    generation: u64,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.current.clone()
    }

    /// How many snapshots have been loaded so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Swaps in `loaded`, or keeps the active snapshot if loading failed.
    ///
    /// # Errors
    ///
    /// Returns the load error when there is no snapshot to fall back to.
    pub fn reload<E: Display>(&mut self, loaded: Result<Snapshot, E>) -> Result<Outcome, E> {
        let err = match loaded {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.current = Some(snapshot.clone());
                self.generation += 1;
                tracing::info!("Loaded configuration generation {}", self.generation);
                return Ok(Outcome::Loaded(snapshot));
            }
            Err(err) => err,
        };
        match &self.current {
            Some(previous) => {
                tracing::error!(
                    "Unable to load new config due to error: {}. Keeping generation {}",
                    err,
                    self.generation
                );
                Ok(Outcome::Kept(previous.clone()))
            }
            None => Err(err),
        }
    }
}
