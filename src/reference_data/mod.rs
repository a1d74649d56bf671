//! Stadium and region reference data stored in SQLite.
//!
//! Read once per page request. The stadium list is joined to its region on
//! `region_id` and turned into a [`StadiumMap`] for the match normalizer; the
//! region list feeds the filter drop-down.

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, info};

use crate::data_fetcher::models::{Region, StadiumMap, StadiumRegion, build_stadium_map};
use crate::error::AppError;

pub mod seed;

pub use seed::seed_kbo_reference_data;

/// Everything the page needs from the reference tables.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub stadiums: StadiumMap,
    pub regions: Vec<Region>,
}

/// Opens (creating if needed) the reference database and ensures the schema.
pub fn open_db(path: &Path) -> Result<Connection, AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS regions (
            region_id INTEGER PRIMARY KEY,
            region_name TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS stadiums (
            stadium_id INTEGER PRIMARY KEY,
            stadium_name TEXT NOT NULL UNIQUE,
            region_id INTEGER NOT NULL REFERENCES regions(region_id)
        );
        CREATE INDEX IF NOT EXISTS idx_stadiums_region ON stadiums(region_id);
        "#,
    )?;
    Ok(())
}

/// Every stadium with the name and id of its region.
pub fn load_stadium_regions(conn: &Connection) -> Result<Vec<StadiumRegion>, AppError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT s.stadium_name, r.region_name, r.region_id
        FROM stadiums s
        JOIN regions r ON r.region_id = s.region_id
        ORDER BY s.stadium_name ASC
        "#,
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(StadiumRegion {
                stadium_name: row.get(0)?,
                region_name: row.get(1)?,
                region_id: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

pub fn load_regions(conn: &Connection) -> Result<Vec<Region>, AppError> {
    let mut stmt =
        conn.prepare("SELECT region_id, region_name FROM regions ORDER BY region_id ASC")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Region {
                region_id: row.get(0)?,
                region_name: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

pub fn load_reference_data(conn: &Connection) -> Result<ReferenceData, AppError> {
    let stadium_rows = load_stadium_regions(conn)?;
    let regions = load_regions(conn)?;
    debug!(
        "Loaded {} stadiums across {} regions",
        stadium_rows.len(),
        regions.len()
    );

    Ok(ReferenceData {
        stadiums: build_stadium_map(stadium_rows),
        regions,
    })
}

/// Opens the database at `path` on the blocking pool and loads the reference
/// tables.
pub async fn load_reference_data_from_path(path: String) -> Result<ReferenceData, AppError> {
    tokio::task::spawn_blocking(move || {
        let conn = open_db(Path::new(&path))?;
        load_reference_data(&conn)
    })
    .await
    .map_err(|e| AppError::server_error(format!("Reference data task failed: {e}")))?
}

/// Creates the schema and inserts the KBO stadium list at `path`.
pub fn seed_database(path: &Path) -> Result<usize, AppError> {
    let mut conn = open_db(path)?;
    let inserted = seed_kbo_reference_data(&mut conn)?;
    info!("Seeded {} reference rows into {}", inserted, path.display());
    Ok(inserted)
}
