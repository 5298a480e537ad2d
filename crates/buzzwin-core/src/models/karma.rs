use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::BuzzwinError;

/// The closed set of user actions that earn karma.
///
/// Each action has a fixed point value and a fixed [`KarmaBucket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum KarmaAction {
    ImpactMomentCreated,
    ImpactMomentJoined,
    RitualCompletedQuietly,
    RitualCompletedShared,
    RitualCreated,
    CommentPosted,
    CommentReceived,
    ReactionReceived,
    ChainStarted,
    ChainExtended,
    StreakMilestoneReached,
}

impl KarmaAction {
    /// Every action, in declaration order.
    pub const ALL: [KarmaAction; 11] = [
        Self::ImpactMomentCreated,
        Self::ImpactMomentJoined,
        Self::RitualCompletedQuietly,
        Self::RitualCompletedShared,
        Self::RitualCreated,
        Self::CommentPosted,
        Self::CommentReceived,
        Self::ReactionReceived,
        Self::ChainStarted,
        Self::ChainExtended,
        Self::StreakMilestoneReached,
    ];

    /// Wire name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ImpactMomentCreated => "impact_moment_created",
            Self::ImpactMomentJoined => "impact_moment_joined",
            Self::RitualCompletedQuietly => "ritual_completed_quietly",
            Self::RitualCompletedShared => "ritual_completed_shared",
            Self::RitualCreated => "ritual_created",
            Self::CommentPosted => "comment_posted",
            Self::CommentReceived => "comment_received",
            Self::ReactionReceived => "reaction_received",
            Self::ChainStarted => "chain_started",
            Self::ChainExtended => "chain_extended",
            Self::StreakMilestoneReached => "streak_milestone_reached",
        }
    }
}

impl fmt::Display for KarmaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KarmaAction {
    type Err = BuzzwinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| BuzzwinError::InvalidAction {
                action: s.to_string(),
            })
    }
}

/// Category a karma award is accounted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum KarmaBucket {
    ImpactMoments,
    Rituals,
    Engagement,
    Chains,
    Milestones,
}

impl KarmaBucket {
    pub const ALL: [KarmaBucket; 5] = [
        Self::ImpactMoments,
        Self::Rituals,
        Self::Engagement,
        Self::Chains,
        Self::Milestones,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ImpactMoments => "impact_moments",
            Self::Rituals => "rituals",
            Self::Engagement => "engagement",
            Self::Chains => "chains",
            Self::Milestones => "milestones",
        }
    }
}

impl FromStr for KarmaBucket {
    type Err = BuzzwinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| BuzzwinError::ValidationError(format!("unknown karma bucket: {s}")))
    }
}

/// Karma split across the five buckets. Additive only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct KarmaBreakdown {
    pub impact_moments: i64,
    pub rituals: i64,
    pub engagement: i64,
    pub chains: i64,
    pub milestones: i64,
}

impl KarmaBreakdown {
    /// Points recorded under one bucket.
    pub fn get(&self, bucket: KarmaBucket) -> i64 {
        match bucket {
            KarmaBucket::ImpactMoments => self.impact_moments,
            KarmaBucket::Rituals => self.rituals,
            KarmaBucket::Engagement => self.engagement,
            KarmaBucket::Chains => self.chains,
            KarmaBucket::Milestones => self.milestones,
        }
    }

    /// Add points to one bucket.
    pub fn add(&mut self, bucket: KarmaBucket, points: i64) {
        let slot = match bucket {
            KarmaBucket::ImpactMoments => &mut self.impact_moments,
            KarmaBucket::Rituals => &mut self.rituals,
            KarmaBucket::Engagement => &mut self.engagement,
            KarmaBucket::Chains => &mut self.chains,
            KarmaBucket::Milestones => &mut self.milestones,
        };
        *slot += points;
    }

    /// Sum of all buckets.
    pub fn total(&self) -> i64 {
        KarmaBucket::ALL.iter().map(|b| self.get(*b)).sum()
    }
}

/// A user's karma total and its breakdown.
///
/// `karma_breakdown.total() == karma_points` holds after every award.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserKarmaState {
    pub karma_points: i64,
    pub karma_breakdown: KarmaBreakdown,
}

impl UserKarmaState {
    /// Whether the total agrees with the sum of the buckets.
    pub fn is_consistent(&self) -> bool {
        self.karma_breakdown.total() == self.karma_points
    }
}

/// One row of the append-only karma ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct KarmaEvent {
    pub id: i64,
    pub user_id: String,
    pub action: KarmaAction,
    pub bucket: KarmaBucket,
    pub points: i64,
    pub awarded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_round_trip_through_from_str() {
        for action in KarmaAction::ALL {
            assert_eq!(action.as_str().parse::<KarmaAction>().unwrap(), action);
        }
    }

    #[test]
    fn unknown_action_is_invalid() {
        let err = "posted_review_twice".parse::<KarmaAction>().unwrap_err();
        assert!(matches!(err, BuzzwinError::InvalidAction { ref action } if action == "posted_review_twice"));
    }

    #[test]
    fn serde_name_matches_wire_name() {
        let json = serde_json::to_string(&KarmaAction::RitualCompletedQuietly).unwrap();
        assert_eq!(json, "\"ritual_completed_quietly\"");
    }

    #[test]
    fn breakdown_add_and_total() {
        let mut b = KarmaBreakdown::default();
        b.add(KarmaBucket::Rituals, 5);
        b.add(KarmaBucket::Milestones, 50);
        b.add(KarmaBucket::Rituals, 8);
        assert_eq!(b.rituals, 13);
        assert_eq!(b.total(), 63);
    }

    #[test]
    fn breakdown_serializes_camel_case() {
        let value = serde_json::to_value(KarmaBreakdown::default()).unwrap();
        assert!(value.get("impactMoments").is_some());
        assert!(value.get("milestones").is_some());
    }
}
