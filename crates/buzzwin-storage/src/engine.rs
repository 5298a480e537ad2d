//! StorageEngine: owns the connection pool and implements the storage
//! traits from `buzzwin-core`.

use std::path::Path;

use rusqlite::Connection;
use uuid::Uuid;

use buzzwin_core::config::StorageConfig;
use buzzwin_core::errors::{BuzzwinError, BuzzwinResult};
use buzzwin_core::models::{
    day_key, Comment, ImpactMoment, KarmaAction, KarmaBucket, KarmaEvent, NewComment,
    NewImpactMoment, NewRitualCompletion, NewRitualDefinition, RecordedCompletion,
    RitualCompletion, RitualDefinition, User, UserKarmaState,
};
use buzzwin_core::traits::{IKarmaStorage, IMomentStorage, IRitualStorage, IUserStorage};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{self, completions, karma, moments, rituals, users};

pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a file-backed database with `read_pool_size` readers.
    pub fn open(path: &Path, read_pool_size: usize) -> BuzzwinResult<Self> {
        let mut pool = ConnectionPool::open(path)?;
        pool.writer.with_conn(migrations::run_migrations)?;
        pool.attach_readers(read_pool_size)?;
        tracing::info!(path = %path.display(), readers = read_pool_size, "storage opened");
        Ok(Self { pool })
    }

    /// Open an in-memory database. All reads go through the writer.
    pub fn open_in_memory() -> BuzzwinResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        pool.writer.with_conn(migrations::run_migrations)?;
        Ok(Self { pool })
    }

    /// Open according to config: `db_path = None` means in-memory.
    pub fn from_config(config: &StorageConfig) -> BuzzwinResult<Self> {
        match &config.db_path {
            Some(path) => Self::open(path, config.read_pool_size),
            None => Self::open_in_memory(),
        }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> BuzzwinResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    /// Run a read on the read pool when one exists, else on the writer.
    fn with_reader<F, T>(&self, f: F) -> BuzzwinResult<T>
    where
        F: FnOnce(&Connection) -> BuzzwinResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

fn require_user(conn: &Connection, user_id: &str) -> BuzzwinResult<()> {
    if users::user_exists(conn, user_id)? {
        Ok(())
    } else {
        Err(BuzzwinError::UserNotFound {
            id: user_id.to_string(),
        })
    }
}

impl IUserStorage for StorageEngine {
    fn create_user(&self, id: &str, display_name: &str) -> BuzzwinResult<User> {
        self.pool.writer.with_immediate_transaction(|tx| {
            if users::user_exists(tx, id)? {
                return Err(BuzzwinError::AlreadyExists {
                    entity: "user",
                    id: id.to_string(),
                });
            }
            let (created_at, ms) = queries::now_millis();
            users::insert_user(tx, id, display_name, ms)?;
            Ok(User {
                id: id.to_string(),
                display_name: display_name.to_string(),
                created_at,
                karma: UserKarmaState::default(),
            })
        })
    }

    fn get_user(&self, id: &str) -> BuzzwinResult<Option<User>> {
        self.with_reader(|conn| users::get_user(conn, id))
    }

    fn user_exists(&self, id: &str) -> BuzzwinResult<bool> {
        self.with_reader(|conn| users::user_exists(conn, id))
    }
}

impl IKarmaStorage for StorageEngine {
    fn apply_award(
        &self,
        user_id: &str,
        action: KarmaAction,
        bucket: KarmaBucket,
        points: i64,
    ) -> BuzzwinResult<UserKarmaState> {
        self.pool.writer.with_immediate_transaction(|tx| {
            if karma::increment_karma(tx, user_id, bucket, points)? == 0 {
                return Err(BuzzwinError::UserNotFound {
                    id: user_id.to_string(),
                });
            }
            let (_, ms) = queries::now_millis();
            karma::insert_event(tx, user_id, action, bucket, points, ms)?;
            karma::get_karma(tx, user_id)?.ok_or_else(|| BuzzwinError::UserNotFound {
                id: user_id.to_string(),
            })
        })
    }

    fn get_karma(&self, user_id: &str) -> BuzzwinResult<Option<UserKarmaState>> {
        self.with_reader(|conn| karma::get_karma(conn, user_id))
    }

    fn karma_history(&self, user_id: &str, limit: usize) -> BuzzwinResult<Vec<KarmaEvent>> {
        self.with_reader(|conn| karma::recent_events(conn, user_id, limit))
    }
}

impl IRitualStorage for StorageEngine {
    fn create_ritual(&self, ritual: &NewRitualDefinition) -> BuzzwinResult<RitualDefinition> {
        self.pool.writer.with_immediate_transaction(|tx| {
            if rituals::ritual_exists(tx, &ritual.id)? {
                return Err(BuzzwinError::AlreadyExists {
                    entity: "ritual",
                    id: ritual.id.clone(),
                });
            }
            if let Some(creator) = &ritual.created_by {
                require_user(tx, creator)?;
            }
            let (created_at, _) = queries::now_millis();
            rituals::insert_ritual(tx, ritual, created_at)
        })
    }

    fn get_ritual(&self, id: &str) -> BuzzwinResult<Option<RitualDefinition>> {
        self.with_reader(|conn| rituals::get_ritual(conn, id))
    }

    fn list_rituals(&self) -> BuzzwinResult<Vec<RitualDefinition>> {
        self.with_reader(rituals::list_rituals)
    }

    fn record_completion(
        &self,
        completion: &NewRitualCompletion,
    ) -> BuzzwinResult<RecordedCompletion> {
        self.pool.writer.with_immediate_transaction(|tx| {
            require_user(tx, &completion.user_id)?;
            if !rituals::ritual_exists(tx, &completion.ritual_id)? {
                return Err(BuzzwinError::RitualNotFound {
                    id: completion.ritual_id.clone(),
                });
            }
            let day = day_key(completion.date);
            let first_of_day = completions::count_on_day(tx, &completion.user_id, &day)? == 0;
            let id = Uuid::new_v4().to_string();
            let (created_at, _) = queries::now_millis();
            let stored = completions::insert_completion(tx, &id, completion, created_at)?;
            rituals::increment_completion_count(tx, &completion.ritual_id)?;
            Ok(RecordedCompletion {
                completion: stored,
                first_of_day,
            })
        })
    }

    fn completions_for_user(&self, user_id: &str) -> BuzzwinResult<Vec<RitualCompletion>> {
        self.with_reader(|conn| completions::completions_for_user(conn, user_id))
    }

    fn completions_on_day(&self, user_id: &str, day_key: &str) -> BuzzwinResult<u32> {
        self.with_reader(|conn| completions::count_on_day(conn, user_id, day_key))
    }
}

impl IMomentStorage for StorageEngine {
    fn create_moment(&self, moment: &NewImpactMoment) -> BuzzwinResult<ImpactMoment> {
        self.pool.writer.with_immediate_transaction(|tx| {
            require_user(tx, &moment.user_id)?;
            if let Some(parent) = &moment.parent_moment_id {
                if moments::get_moment(tx, parent)?.is_none() {
                    return Err(BuzzwinError::MomentNotFound { id: parent.clone() });
                }
            }
            let id = Uuid::new_v4().to_string();
            let (created_at, _) = queries::now_millis();
            moments::insert_moment(tx, &id, moment, created_at)
        })
    }

    fn get_moment(&self, id: &str) -> BuzzwinResult<Option<ImpactMoment>> {
        self.with_reader(|conn| moments::get_moment(conn, id))
    }

    fn add_comment(&self, moment_id: &str, comment: &NewComment) -> BuzzwinResult<Comment> {
        self.pool.writer.with_immediate_transaction(|tx| {
            if moments::get_moment(tx, moment_id)?.is_none() {
                return Err(BuzzwinError::MomentNotFound {
                    id: moment_id.to_string(),
                });
            }
            require_user(tx, &comment.user_id)?;
            let id = Uuid::new_v4().to_string();
            let (created_at, _) = queries::now_millis();
            moments::insert_comment(tx, &id, moment_id, comment, created_at)
        })
    }
}
