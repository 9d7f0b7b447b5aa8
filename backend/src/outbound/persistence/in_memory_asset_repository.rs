//! Process-local `AssetRepository` backing the HTTP-level tests.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{AssetRepository, AssetRepositoryError};
use crate::domain::{Asset, AssetId, NewAsset};

/// Mutex-guarded asset list with clock-assigned creation timestamps.
pub struct InMemoryAssetRepository {
    assets: Mutex<Vec<Asset>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryAssetRepository {
    fn default() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl InMemoryAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `clock` for `created_at`, so tests can control ordering.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            assets: Mutex::new(Vec::new()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Asset>>, AssetRepositoryError> {
        self.assets
            .lock()
            .map_err(|_| AssetRepositoryError::connection("in-memory asset store poisoned"))
    }
}

#[async_trait]
impl AssetRepository for InMemoryAssetRepository {
    async fn create(&self, asset: &NewAsset) -> Result<Asset, AssetRepositoryError> {
        let stored = Asset::from_new(AssetId::random(), asset.clone(), self.clock.utc());
        self.lock()?.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Asset>, AssetRepositoryError> {
        // Same order as the PostgreSQL adapter: created_at, then id, descending.
        let mut assets = self.lock()?.clone();
        assets.sort_by_key(|asset| std::cmp::Reverse((asset.created_at(), asset.id())));
        Ok(assets)
    }

    async fn find_by_id(&self, id: &AssetId) -> Result<Option<Asset>, AssetRepositoryError> {
        Ok(self.lock()?.iter().find(|asset| asset.id() == *id).cloned())
    }

    async fn delete_by_id(&self, id: &AssetId) -> Result<bool, AssetRepositoryError> {
        let mut assets = self.lock()?;
        let before = assets.len();
        assets.retain(|asset| asset.id() != *id);
        Ok(assets.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};

    use super::*;
    use crate::domain::{AssetDescription, ImageUrl};

    /// Clock that moves forward by a fixed step on every read.
    struct SteppingClock {
        now: Mutex<DateTime<Utc>>,
        step: TimeDelta,
    }

    impl Clock for SteppingClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            let mut now = self.now.lock().expect("clock lock");
            let current = *now;
            *now += self.step;
            current
        }
    }

    fn repo_with_step(step: TimeDelta) -> InMemoryAssetRepository {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid time");
        InMemoryAssetRepository::with_clock(Arc::new(SteppingClock {
            now: Mutex::new(start),
            step,
        }))
    }

    fn draft(description: &str) -> NewAsset {
        NewAsset {
            description: AssetDescription::new(description).expect("description"),
            image_url: ImageUrl::new(format!("https://img.example/{description}.png"))
                .expect("url"),
        }
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let repo = repo_with_step(TimeDelta::seconds(1));
        for name in ["first", "second", "third"] {
            repo.create(&draft(name)).await.expect("create");
        }

        let listed = repo.list_all().await.expect("list");
        let names: Vec<&str> = listed.iter().map(|a| a.description().as_str()).collect();

        assert_eq!(names, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn equal_timestamps_are_ordered_by_id_descending() {
        let repo = repo_with_step(TimeDelta::zero());
        for index in 0..8 {
            repo.create(&draft(&format!("asset-{index}")))
                .await
                .expect("create");
        }

        let ids: Vec<AssetId> = repo
            .list_all()
            .await
            .expect("list")
            .iter()
            .map(Asset::id)
            .collect();
        let mut expected = ids.clone();
        expected.sort_by(|left, right| right.cmp(left));

        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_was_removed() {
        let repo = InMemoryAssetRepository::new();
        let stored = repo.create(&draft("doomed")).await.expect("create");

        assert!(repo.delete_by_id(&stored.id()).await.expect("delete"));
        assert!(!repo.delete_by_id(&stored.id()).await.expect("second delete"));
        assert_eq!(repo.find_by_id(&stored.id()).await.expect("find"), None);
    }
}
