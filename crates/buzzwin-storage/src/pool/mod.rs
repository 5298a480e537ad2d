//! Connection management: one serialized writer plus pooled readers.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use buzzwin_core::errors::BuzzwinResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Owns the write connection and, for file-backed databases, the read pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory databases, whose separate connections would
    /// each see an empty database.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer for `path`. Readers are attached separately with
    /// [`attach_readers`](Self::attach_readers) once the schema exists.
    pub fn open(path: &Path) -> BuzzwinResult<Self> {
        Ok(Self {
            writer: WriteConnection::open(path)?,
            readers: None,
            db_path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> BuzzwinResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
            db_path: None,
        })
    }

    /// Open `size` read connections to the database file. No-op in memory.
    pub fn attach_readers(&mut self, size: usize) -> BuzzwinResult<()> {
        if let Some(path) = &self.db_path {
            self.readers = Some(ReadPool::open(path, size)?);
        }
        Ok(())
    }
}
