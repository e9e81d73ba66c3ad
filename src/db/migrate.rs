use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS daily_records (
            date            TEXT PRIMARY KEY,
            steps           INTEGER NOT NULL DEFAULT 0,
            distance_km     REAL NOT NULL DEFAULT 0,
            calories        INTEGER NOT NULL DEFAULT 0,
            active_minutes  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS profile (
            id                   INTEGER PRIMARY KEY CHECK (id = 1),
            age                  INTEGER NOT NULL,
            height_cm            REAL NOT NULL,
            weight_kg            REAL NOT NULL,
            gender               TEXT NOT NULL,
            step_goal            INTEGER NOT NULL,
            distance_goal_km     REAL NOT NULL,
            calorie_goal         INTEGER NOT NULL,
            active_minutes_goal  INTEGER NOT NULL
        );",
    )?;
    Ok(())
}
