use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::params;

use crate::models::DailyRecord;

use super::Database;

struct RecordRow {
    date: String,
    steps: i64,
    distance_km: f64,
    calories: i64,
    active_minutes: i64,
}

fn row_to_record(r: RecordRow) -> Result<DailyRecord> {
    let date: NaiveDate = r.date.parse()?;
    Ok(DailyRecord {
        date,
        steps: r.steps,
        distance_km: r.distance_km,
        calories: r.calories,
        active_minutes: r.active_minutes,
    })
}

const SELECT_COLUMNS: &str = "date, steps, distance_km, calories, active_minutes";

impl Database {
    pub fn get_record(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM daily_records WHERE date = ?1"
        ))?;
        let mut rows = stmt.query_map(params![date.to_string()], |row| {
            Ok(RecordRow {
                date: row.get(0)?,
                steps: row.get(1)?,
                distance_km: row.get(2)?,
                calories: row.get(3)?,
                active_minutes: row.get(4)?,
            })
        })?;
        match rows.next() {
            Some(row) => Ok(Some(row_to_record(row?)?)),
            None => Ok(None),
        }
    }

    /// Records in the closed range [start, end], ordered by date.
    pub fn get_records_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM daily_records
             WHERE date >= ?1 AND date <= ?2 ORDER BY date"
        ))?;
        let rows = stmt.query_map(params![start.to_string(), end.to_string()], |row| {
            Ok(RecordRow {
                date: row.get(0)?,
                steps: row.get(1)?,
                distance_km: row.get(2)?,
                calories: row.get(3)?,
                active_minutes: row.get(4)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            let r = row?;
            records.push(row_to_record(r)?);
        }
        Ok(records)
    }

    pub fn upsert_record(&self, r: &DailyRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO daily_records (date, steps, distance_km, calories, active_minutes)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(date) DO UPDATE SET
                 steps = excluded.steps,
                 distance_km = excluded.distance_km,
                 calories = excluded.calories,
                 active_minutes = excluded.active_minutes",
            params![
                r.date.to_string(),
                r.steps,
                r.distance_km,
                r.calories,
                r.active_minutes,
            ],
        )?;
        Ok(())
    }

    // Field-level upserts for the reconciler. Each touches only its own
    // column so a failure in one write cannot corrupt the others.

    pub fn upsert_steps(&self, date: NaiveDate, steps: i64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO daily_records (date, steps) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET steps = excluded.steps",
            params![date.to_string(), steps],
        )?;
        Ok(())
    }

    pub fn upsert_distance(&self, date: NaiveDate, distance_km: f64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO daily_records (date, distance_km) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET distance_km = excluded.distance_km",
            params![date.to_string(), distance_km],
        )?;
        Ok(())
    }

    pub fn upsert_calories(&self, date: NaiveDate, calories: i64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO daily_records (date, calories) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET calories = excluded.calories",
            params![date.to_string(), calories],
        )?;
        Ok(())
    }

    pub fn upsert_active_minutes(&self, date: NaiveDate, active_minutes: i64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO daily_records (date, active_minutes) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET active_minutes = excluded.active_minutes",
            params![date.to_string(), active_minutes],
        )?;
        Ok(())
    }

    /// Retention cleanup. Returns the number of purged records.
    pub fn delete_records_older_than(&self, cutoff: NaiveDate) -> Result<usize> {
        let count = self.conn.execute(
            "DELETE FROM daily_records WHERE date < ?1",
            params![cutoff.to_string()],
        )?;
        Ok(count)
    }
}
