//! Fixed point values and buckets per karma action.

use buzzwin_core::models::{KarmaAction, KarmaBucket};

/// Points and bucket granted by one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRule {
    pub action: KarmaAction,
    pub points: i64,
    pub bucket: KarmaBucket,
}

/// The rule for one action. Every other lookup derives from this.
pub const fn rule_for(action: KarmaAction) -> ActionRule {
    use KarmaAction::*;
    use KarmaBucket::*;

    let (points, bucket) = match action {
        ImpactMomentCreated => (10, ImpactMoments),
        ImpactMomentJoined => (5, ImpactMoments),
        RitualCompletedQuietly => (5, Rituals),
        RitualCompletedShared => (8, Rituals),
        RitualCreated => (15, Rituals),
        CommentPosted => (2, Engagement),
        CommentReceived => (2, Engagement),
        ReactionReceived => (1, Engagement),
        ChainStarted => (15, Chains),
        ChainExtended => (5, Chains),
        StreakMilestoneReached => (50, Milestones),
    };
    ActionRule {
        action,
        points,
        bucket,
    }
}

/// Every rule, in `KarmaAction::ALL` order.
pub fn action_table() -> [ActionRule; KarmaAction::ALL.len()] {
    KarmaAction::ALL.map(rule_for)
}

/// Points awarded for `action`.
pub const fn points_for(action: KarmaAction) -> i64 {
    rule_for(action).points
}

/// Bucket that `action` is accounted under.
pub const fn bucket_for(action: KarmaAction) -> KarmaBucket {
    rule_for(action).bucket
}
