//! Durable roll statistics: an append-only JSON array of roll records.

use std::path::{Path, PathBuf};

use od6_mechanics::{RollLog, RollRecord};
use tokio::fs;

use crate::error::{StoreError, StoreResult};

/// Append-only log backed by `<root>/statistics.json`.
///
/// Methods that write take `&mut self`, so one owner serializes all
/// mutation and append order matches invocation order.
#[derive(Debug)]
pub struct StatsLog {
    path: PathBuf,
}

impl StatsLog {
    /// Create a log rooted at `root`. No I/O happens until first use.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join("statistics.json"),
        }
    }

    /// Create an empty log file when none exists. Idempotent: an existing
    /// file, and the records in it, are left untouched.
    pub async fn init(&mut self) -> StoreResult<()> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, "[]").await?;
        Ok(())
    }

    /// Append one record, creating the file if needed.
    pub async fn add(&mut self, record: RollRecord) -> StoreResult<()> {
        self.init().await?;
        let mut records = self.read_records().await?;
        records.push(record);
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Materialize the log for aggregate queries. A missing file is an
    /// empty log, not an error.
    pub async fn load(&self) -> StoreResult<RollLog> {
        let mut log = RollLog::new();
        for record in self.read_records().await? {
            log.append(record);
        }
        Ok(log)
    }

    async fn read_records(&self) -> StoreResult<Vec<RollRecord>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).await?;
        serde_json::from_str(&json).map_err(StoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use od6_mechanics::{RollStatus, WildRoll, roll};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_roll(seed: u64) -> WildRoll {
        let mut rng = StdRng::seed_from_u64(seed);
        roll(3, &mut rng).unwrap()
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = StatsLog::new(dir.path());
        log.init().await.unwrap();
        log.add(RollRecord::capture(&sample_roll(1))).await.unwrap();
        log.init().await.unwrap();
        assert_eq!(log.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = StatsLog::new(dir.path());
        for seed in 0..5 {
            log.add(RollRecord::capture(&sample_roll(seed))).await.unwrap();
        }
        let loaded = log.load().await.unwrap();
        assert_eq!(loaded.len(), 5);
        let expected: Vec<_> = (0..5).map(|seed| sample_roll(seed).rolls).collect();
        let got: Vec<_> = loaded.records().iter().map(|r| r.rolls.clone()).collect();
        assert_eq!(got, expected);
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = StatsLog::new(dir.path());
        assert!(log.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut log = StatsLog::new(dir.path());
            log.add(RollRecord::capture(&sample_roll(7))).await.unwrap();
        }
        let log = StatsLog::new(dir.path());
        let loaded = log.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(matches!(
            loaded.records()[0].status,
            RollStatus::Normal | RollStatus::CriticalSuccess | RollStatus::CriticalFailure
        ));
    }
}
