use rusqlite::{Connection, params};

use crate::error::AppError;

/// Regions used by the bundled stadium list: (region_id, region_name).
pub const KBO_REGIONS: &[(i64, &str)] = &[
    (1, "서울"),
    (2, "인천"),
    (3, "경기"),
    (4, "대전"),
    (5, "대구"),
    (6, "광주"),
    (7, "부산"),
    (8, "경남"),
    (9, "경북"),
    (10, "울산"),
    (11, "충북"),
];

/// Home and secondary KBO stadiums as the match API names them: (stadium_name, region_id).
pub const KBO_STADIUMS: &[(&str, i64)] = &[
    ("잠실", 1),
    ("고척", 1),
    ("문학", 2),
    ("수원", 3),
    ("대전", 4),
    ("대구", 5),
    ("광주", 6),
    ("사직", 7),
    ("창원", 8),
    ("포항", 9),
    ("울산", 10),
    ("청주", 11),
];

/// Inserts the bundled regions and stadiums. Existing rows are left alone, so
/// seeding twice is harmless. Returns the number of rows inserted.
pub fn seed_kbo_reference_data(conn: &mut Connection) -> Result<usize, AppError> {
    let tx = conn.transaction()?;
    let mut inserted = 0usize;
    {
        let mut insert_region = tx.prepare(
            "INSERT OR IGNORE INTO regions (region_id, region_name) VALUES (?1, ?2)",
        )?;
        for (region_id, region_name) in KBO_REGIONS {
            inserted += insert_region.execute(params![region_id, region_name])?;
        }

        let mut insert_stadium = tx.prepare(
            "INSERT OR IGNORE INTO stadiums (stadium_name, region_id) VALUES (?1, ?2)",
        )?;
        for (stadium_name, region_id) in KBO_STADIUMS {
            inserted += insert_stadium.execute(params![stadium_name, region_id])?;
        }
    }
    tx.commit()?;
    Ok(inserted)
}
