use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

use crate::application::errors::ApplicationError;
use crate::domain::models::character::CharacterKey;
use crate::domain::models::reputation::ReputationEntry;
use crate::domain::repositories::armory_repository::ArmoryRepository;
use crate::domain::repositories::character_repository::CharacterRepository;
use crate::infrastructure::logging::logger;

/// Fresh reputation data on its way from a fetch task to the store.
#[derive(Debug)]
struct ReputationUpdate {
    key: CharacterKey,
    last_modified: i64,
    reputation: Vec<ReputationEntry>,
}

/// Outcome of one pass over the tracked characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub checked: usize,
    pub stale: usize,
    pub refreshed: usize,
    pub failed: usize,
}

/// Handle to a running refresh pass. Dropping it detaches the pass.
pub struct RefreshHandle {
    handle: JoinHandle<RefreshReport>,
}

impl RefreshHandle {
    /// Wait until every fetched update has been written to the store
    pub async fn wait(self) -> Result<RefreshReport, ApplicationError> {
        self.handle.await.map_err(|error| {
            ApplicationError::InternalError(format!("Refresh task failed: {}", error))
        })
    }
}

/// Refetches reputation for characters whose armory data moved on.
///
/// Summaries are checked one character at a time; every stale character gets its
/// own fetch task. Fetch tasks never touch the store directly: results go over a
/// channel to a single applier task that writes through the repository.
pub struct RefreshService {
    character_repository: Arc<dyn CharacterRepository>,
    armory_repository: Arc<dyn ArmoryRepository>,
}

impl RefreshService {
    pub fn new(
        character_repository: Arc<dyn CharacterRepository>,
        armory_repository: Arc<dyn ArmoryRepository>,
    ) -> Self {
        Self {
            character_repository,
            armory_repository,
        }
    }

    /// Run a refresh pass in the background
    pub fn start(self: &Arc<Self>) -> RefreshHandle {
        let service = Arc::clone(self);
        RefreshHandle {
            handle: tokio::spawn(async move { service.refresh_stale().await }),
        }
    }

    pub async fn refresh_stale(&self) -> RefreshReport {
        let mut report = RefreshReport::default();

        let characters = match self.character_repository.find_all().await {
            Ok(characters) => characters,
            Err(error) => {
                logger::error(&format!("Refresh aborted, cannot read characters: {}", error));
                return report;
            }
        };

        let (sender, receiver) = mpsc::channel(characters.len().max(1));
        let applier = tokio::spawn(apply_updates(
            Arc::clone(&self.character_repository),
            receiver,
        ));
        let mut fetches = JoinSet::new();

        for character in characters {
            report.checked += 1;
            let key = character.key();

            let summary = match self.armory_repository.fetch_summary(&key).await {
                Ok(summary) => summary,
                Err(error) => {
                    logger::warn(&format!("Failed to fetch summary for {}: {}", key, error));
                    report.failed += 1;
                    continue;
                }
            };

            if !character.is_stale(summary.last_modified) {
                tracing::debug!("{} is up to date", key);
                continue;
            }

            report.stale += 1;
            tracing::info!(
                "{} is stale (cached {}, armory {}), refreshing reputation",
                key,
                character.last_modified,
                summary.last_modified
            );
            fetches.spawn(fetch_reputation(
                Arc::clone(&self.armory_repository),
                key,
                sender.clone(),
            ));
        }
        drop(sender);

        while let Some(result) = fetches.join_next().await {
            match result {
                Ok(true) => {}
                Ok(false) => report.failed += 1,
                Err(error) => {
                    logger::error(&format!("Reputation fetch task failed: {}", error));
                    report.failed += 1;
                }
            }
        }

        match applier.await {
            Ok((applied, rejected)) => {
                report.refreshed = applied;
                report.failed += rejected;
            }
            Err(error) => logger::error(&format!("Reputation applier task failed: {}", error)),
        }

        tracing::info!(
            "Refresh finished: {} checked, {} stale, {} refreshed, {} failed",
            report.checked,
            report.stale,
            report.refreshed,
            report.failed
        );
        report
    }
}

async fn fetch_reputation(
    armory_repository: Arc<dyn ArmoryRepository>,
    key: CharacterKey,
    sender: mpsc::Sender<ReputationUpdate>,
) -> bool {
    let profile = match armory_repository.fetch_reputation(&key).await {
        Ok(profile) => profile,
        Err(error) => {
            logger::warn(&format!("Failed to fetch reputation for {}: {}", key, error));
            return false;
        }
    };

    let update = ReputationUpdate {
        key,
        last_modified: profile.last_modified,
        reputation: profile.reputation,
    };

    if let Err(error) = sender.send(update).await {
        logger::warn(&format!(
            "Dropping reputation for {}: applier is gone",
            error.0.key
        ));
        return false;
    }

    true
}

/// Returns (applied, rejected) update counts.
async fn apply_updates(
    repository: Arc<dyn CharacterRepository>,
    mut receiver: mpsc::Receiver<ReputationUpdate>,
) -> (usize, usize) {
    let mut applied = 0;
    let mut rejected = 0;

    while let Some(update) = receiver.recv().await {
        match repository
            .apply_reputation(&update.key, update.last_modified, update.reputation)
            .await
        {
            Ok(()) => {
                tracing::info!("Stored refreshed reputation for {}", update.key);
                applied += 1;
            }
            Err(error) => {
                logger::warn(&format!(
                    "Discarding refreshed reputation for {}: {}",
                    update.key, error
                ));
                rejected += 1;
            }
        }
    }

    (applied, rejected)
}
