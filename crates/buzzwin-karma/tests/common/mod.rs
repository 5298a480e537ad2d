//! In-memory karma storage for engine tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use buzzwin_core::errors::{BuzzwinError, BuzzwinResult};
use buzzwin_core::models::{KarmaAction, KarmaBucket, KarmaEvent, UserKarmaState};
use buzzwin_core::traits::IKarmaStorage;
use chrono::Utc;

#[derive(Default)]
pub struct MemoryKarmaStore {
    users: Mutex<HashMap<String, UserKarmaState>>,
    ledger: Mutex<Vec<KarmaEvent>>,
    /// Number of `apply_award` calls that reached storage.
    pub writes: AtomicUsize,
}

impl MemoryKarmaStore {
    pub fn with_users(ids: &[&str]) -> Self {
        let store = Self::default();
        {
            let mut users = store.users.lock().unwrap();
            for id in ids {
                users.insert(id.to_string(), UserKarmaState::default());
            }
        }
        store
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn ledger_len(&self) -> usize {
        self.ledger.lock().unwrap().len()
    }
}

impl IKarmaStorage for MemoryKarmaStore {
    fn apply_award(
        &self,
        user_id: &str,
        action: KarmaAction,
        bucket: KarmaBucket,
        points: i64,
    ) -> BuzzwinResult<UserKarmaState> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        let state = users
            .get_mut(user_id)
            .ok_or_else(|| BuzzwinError::UserNotFound {
                id: user_id.to_string(),
            })?;
        state.karma_points += points;
        state.karma_breakdown.add(bucket, points);

        let mut ledger = self.ledger.lock().unwrap();
        let id = ledger.len() as i64 + 1;
        ledger.push(KarmaEvent {
            id,
            user_id: user_id.to_string(),
            action,
            bucket,
            points,
            awarded_at: Utc::now(),
        });
        Ok(*state)
    }

    fn get_karma(&self, user_id: &str) -> BuzzwinResult<Option<UserKarmaState>> {
        Ok(self.users.lock().unwrap().get(user_id).copied())
    }

    fn karma_history(&self, user_id: &str, limit: usize) -> BuzzwinResult<Vec<KarmaEvent>> {
        let ledger = self.ledger.lock().unwrap();
        Ok(ledger
            .iter()
            .rev()
            .filter(|e| e.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }
}
