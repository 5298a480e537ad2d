/// Buzzwin engagement service version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Day key format used for ritual completions (`YYYY-MM-DD`).
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Streak lengths (in days) that earn a milestone award.
pub const STREAK_MILESTONES: [u32; 4] = [7, 30, 100, 365];

/// Maximum number of karma ledger events returned in one history query.
pub const MAX_HISTORY_LIMIT: usize = 200;

/// Default number of karma ledger events returned when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Maximum accepted length for free-text fields (titles, comments).
pub const MAX_TEXT_LENGTH: usize = 4000;
