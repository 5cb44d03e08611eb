use std::path::Path;

use overlap::Rect;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rectangle that was found to overlap the reference rectangle of some
/// check request, stamped with the time of the check.
///
/// Serializes flat, so the JSON shape is `{x, y, width, height, time}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    #[serde(flatten)]
    pub rect: Rect,
    pub time: String,
}

/// Append-only storage for recorded intersections.
pub trait IntersectionStore {
    fn record(&mut self, intersection: &Intersection) -> Result<(), StoreError>;
    fn list_all(&mut self) -> Result<Vec<Intersection>, StoreError>;
}

/// `IntersectionStore` backed by a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens the database at the given path, creating it and the backing
    /// table if either does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;

        Self::from_connection(conn)
    }

    /// Opens a store that lives entirely in memory and is dropped with the
    /// connection.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;

        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        initialize(&conn)?;

        Ok(Self { conn })
    }
}

/// Creates the intersections table if it is absent. Safe to run more than
/// once.
fn initialize(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS intersections (
            x INTEGER,
            y INTEGER,
            width INTEGER,
            height INTEGER,
            time TEXT
        )",
        [],
    )?;

    Ok(())
}

impl IntersectionStore for SqliteStore {
    fn record(&mut self, intersection: &Intersection) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO intersections (x, y, width, height, time)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                intersection.rect.x,
                intersection.rect.y,
                intersection.rect.width,
                intersection.rect.height,
                intersection.time,
            ],
        )?;

        Ok(())
    }

    /// Returns every recorded intersection. Rows come back in the order
    /// SQLite scans this table, which is insertion order; callers should not
    /// treat that as a contract.
    fn list_all(&mut self) -> Result<Vec<Intersection>, StoreError> {
        let mut statement = self
            .conn
            .prepare("SELECT x, y, width, height, time FROM intersections")?;

        let rows = statement.query_map([], |row| {
            Ok(Intersection {
                rect: Rect {
                    x: row.get(0)?,
                    y: row.get(1)?,
                    width: row.get(2)?,
                    height: row.get(3)?,
                },
                time: row.get(4)?,
            })
        })?;

        let mut intersections = Vec::new();
        for row in rows {
            intersections.push(row?);
        }

        Ok(intersections)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },
}
