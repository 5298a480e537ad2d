//! Storage seams implemented by `buzzwin-storage`.

pub mod storage;

pub use storage::{IKarmaStorage, IMomentStorage, IRitualStorage, IUserStorage};
