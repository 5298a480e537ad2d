//! KarmaEngine: validates and applies awards against a storage backend.

use std::sync::Arc;

use buzzwin_core::award_span;
use buzzwin_core::constants::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};
use buzzwin_core::errors::{BuzzwinError, BuzzwinResult};
use buzzwin_core::models::{KarmaAction, KarmaEvent, UserKarmaState};
use buzzwin_core::traits::IKarmaStorage;
use tracing::{info, warn};

use crate::actions::{bucket_for, points_for};

/// Karma accumulator over a shared storage backend.
pub struct KarmaEngine {
    storage: Arc<dyn IKarmaStorage>,
}

impl KarmaEngine {
    pub fn new(storage: Arc<dyn IKarmaStorage>) -> Self {
        Self { storage }
    }

    /// Award `action` to `user_id` and return the post-update state.
    ///
    /// The total and the action's bucket move together; storage applies
    /// both increments and the ledger row in one transaction.
    pub fn award(&self, user_id: &str, action: KarmaAction) -> BuzzwinResult<UserKarmaState> {
        let user_id = require_user_id(user_id)?;
        let _span = award_span!(user_id, action).entered();

        let points = points_for(action);
        let bucket = bucket_for(action);
        let state = self.storage.apply_award(user_id, action, bucket, points)?;

        info!(
            user_id,
            action = action.as_str(),
            points,
            karma_points = state.karma_points,
            "karma awarded"
        );
        Ok(state)
    }

    /// Award an action given by its wire name.
    ///
    /// An unrecognized name fails with `InvalidAction` before storage is touched.
    pub fn award_named(&self, user_id: &str, action: &str) -> BuzzwinResult<UserKarmaState> {
        let action: KarmaAction = action.trim().parse()?;
        self.award(user_id, action)
    }

    /// Award without propagating failure. Errors are logged at `warn`.
    pub fn award_best_effort(&self, user_id: &str, action: KarmaAction) -> Option<UserKarmaState> {
        match self.award(user_id, action) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(
                    user_id,
                    action = action.as_str(),
                    error = %e,
                    "best-effort karma award failed"
                );
                None
            }
        }
    }

    /// Current karma state. `UserNotFound` when the user does not exist.
    pub fn karma(&self, user_id: &str) -> BuzzwinResult<UserKarmaState> {
        let user_id = require_user_id(user_id)?;
        self.storage
            .get_karma(user_id)?
            .ok_or_else(|| BuzzwinError::UserNotFound {
                id: user_id.to_string(),
            })
    }

    /// Recent ledger events, newest first. `limit` defaults to
    /// `DEFAULT_HISTORY_LIMIT` and is capped at `MAX_HISTORY_LIMIT`.
    pub fn history(&self, user_id: &str, limit: Option<usize>) -> BuzzwinResult<Vec<KarmaEvent>> {
        let user_id = require_user_id(user_id)?;
        let limit = clamp_limit(limit);
        if self.storage.get_karma(user_id)?.is_none() {
            return Err(BuzzwinError::UserNotFound {
                id: user_id.to_string(),
            });
        }
        self.storage.karma_history(user_id, limit)
    }
}

fn require_user_id(user_id: &str) -> BuzzwinResult<&str> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(BuzzwinError::ValidationError(
            "userId must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

pub(crate) fn clamp_limit(limit: Option<usize>) -> usize {
    limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}
