use crate::errors::BuzzwinResult;
use crate::models::{
    Comment, ImpactMoment, KarmaAction, KarmaBucket, KarmaEvent, NewComment, NewImpactMoment,
    NewRitualCompletion, NewRitualDefinition, RecordedCompletion, RitualCompletion,
    RitualDefinition, User, UserKarmaState,
};

/// User records.
pub trait IUserStorage: Send + Sync {
    /// Create a user with zeroed karma. Fails with `AlreadyExists` on a duplicate id.
    fn create_user(&self, id: &str, display_name: &str) -> BuzzwinResult<User>;
    fn get_user(&self, id: &str) -> BuzzwinResult<Option<User>>;
    fn user_exists(&self, id: &str) -> BuzzwinResult<bool>;
}

/// Karma totals and the award ledger.
pub trait IKarmaStorage: Send + Sync {
    /// Atomically add `points` to the user's total and to `bucket`, append a
    /// ledger row, and return the post-update state.
    ///
    /// Fails with `UserNotFound` without writing anything if the user is absent.
    fn apply_award(
        &self,
        user_id: &str,
        action: KarmaAction,
        bucket: KarmaBucket,
        points: i64,
    ) -> BuzzwinResult<UserKarmaState>;

    fn get_karma(&self, user_id: &str) -> BuzzwinResult<Option<UserKarmaState>>;

    /// Most recent ledger events first.
    fn karma_history(&self, user_id: &str, limit: usize) -> BuzzwinResult<Vec<KarmaEvent>>;
}

/// Ritual definitions and completions.
pub trait IRitualStorage: Send + Sync {
    fn create_ritual(&self, ritual: &NewRitualDefinition) -> BuzzwinResult<RitualDefinition>;
    fn get_ritual(&self, id: &str) -> BuzzwinResult<Option<RitualDefinition>>;
    fn list_rituals(&self) -> BuzzwinResult<Vec<RitualDefinition>>;

    /// Record a completion. Fails with `UserNotFound`/`RitualNotFound` on dangling references.
    ///
    /// `first_of_day` must be decided atomically with the insert so that
    /// concurrent recordings for the same day see exactly one first.
    fn record_completion(&self, completion: &NewRitualCompletion)
        -> BuzzwinResult<RecordedCompletion>;

    /// Every completion of one user, oldest day first.
    fn completions_for_user(&self, user_id: &str) -> BuzzwinResult<Vec<RitualCompletion>>;

    /// Number of completions the user recorded on one day key.
    fn completions_on_day(&self, user_id: &str, day_key: &str) -> BuzzwinResult<u32>;
}

/// Impact moments and their comments.
pub trait IMomentStorage: Send + Sync {
    fn create_moment(&self, moment: &NewImpactMoment) -> BuzzwinResult<ImpactMoment>;
    fn get_moment(&self, id: &str) -> BuzzwinResult<Option<ImpactMoment>>;
    fn add_comment(&self, moment_id: &str, comment: &NewComment) -> BuzzwinResult<Comment>;
}
