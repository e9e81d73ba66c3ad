use anyhow::Result;
use rusqlite::params;

use crate::models::UserProfile;

use super::Database;

struct ProfileRow {
    age: i64,
    height_cm: f64,
    weight_kg: f64,
    gender: String,
    step_goal: i64,
    distance_goal_km: f64,
    calorie_goal: i64,
    active_minutes_goal: i64,
}

fn row_to_profile(r: ProfileRow) -> Result<UserProfile> {
    Ok(UserProfile {
        age: r.age as u32,
        height_cm: r.height_cm,
        weight_kg: r.weight_kg,
        gender: r.gender.parse()?,
        daily_step_goal: r.step_goal,
        daily_distance_goal_km: r.distance_goal_km,
        daily_calorie_goal: r.calorie_goal,
        daily_active_minutes_goal: r.active_minutes_goal,
    })
}

impl Database {
    /// The singleton profile, or None before onboarding completes.
    pub fn get_profile(&self) -> Result<Option<UserProfile>> {
        let mut stmt = self.conn.prepare(
            "SELECT age, height_cm, weight_kg, gender, step_goal, distance_goal_km,
                    calorie_goal, active_minutes_goal
             FROM profile WHERE id = 1",
        )?;
        let mut rows = stmt.query_map([], |row| {
            Ok(ProfileRow {
                age: row.get(0)?,
                height_cm: row.get(1)?,
                weight_kg: row.get(2)?,
                gender: row.get(3)?,
                step_goal: row.get(4)?,
                distance_goal_km: row.get(5)?,
                calorie_goal: row.get(6)?,
                active_minutes_goal: row.get(7)?,
            })
        })?;
        match rows.next() {
            Some(row) => Ok(Some(row_to_profile(row?)?)),
            None => Ok(None),
        }
    }

    pub fn upsert_profile(&self, p: &UserProfile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO profile (id, age, height_cm, weight_kg, gender, step_goal,
                                  distance_goal_km, calorie_goal, active_minutes_goal)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                 age = excluded.age,
                 height_cm = excluded.height_cm,
                 weight_kg = excluded.weight_kg,
                 gender = excluded.gender,
                 step_goal = excluded.step_goal,
                 distance_goal_km = excluded.distance_goal_km,
                 calorie_goal = excluded.calorie_goal,
                 active_minutes_goal = excluded.active_minutes_goal",
            params![
                p.age,
                p.height_cm,
                p.weight_kg,
                p.gender.to_string(),
                p.daily_step_goal,
                p.daily_distance_goal_km,
                p.daily_calorie_goal,
                p.daily_active_minutes_goal,
            ],
        )?;
        Ok(())
    }

    // Field-level goal updaters. Each returns false when no profile row
    // exists yet (goals cannot precede onboarding).

    pub fn set_step_goal(&self, goal: i64) -> Result<bool> {
        let count = self
            .conn
            .execute("UPDATE profile SET step_goal = ?1 WHERE id = 1", params![goal])?;
        Ok(count > 0)
    }

    pub fn set_distance_goal(&self, goal_km: f64) -> Result<bool> {
        let count = self.conn.execute(
            "UPDATE profile SET distance_goal_km = ?1 WHERE id = 1",
            params![goal_km],
        )?;
        Ok(count > 0)
    }

    pub fn set_calorie_goal(&self, goal: i64) -> Result<bool> {
        let count = self.conn.execute(
            "UPDATE profile SET calorie_goal = ?1 WHERE id = 1",
            params![goal],
        )?;
        Ok(count > 0)
    }

    pub fn set_active_minutes_goal(&self, goal: i64) -> Result<bool> {
        let count = self.conn.execute(
            "UPDATE profile SET active_minutes_goal = ?1 WHERE id = 1",
            params![goal],
        )?;
        Ok(count > 0)
    }
}
