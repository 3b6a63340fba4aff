use crate::modules::course::domain::Difficulty;
use crate::schema::courses;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// ================== COURSE MODELS ==================

/// Row as read from the `courses` table
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CourseModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub currency: String,
    pub instructor: String,
    pub published: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full row for inserts; the upsert writes every column
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = courses)]
pub struct NewCourseModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub currency: String,
    pub instructor: String,
    pub published: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Replacement of an existing row (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = courses)]
pub struct CourseChangeset {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub currency: String,
    pub instructor: String,
    pub published: bool,
    pub featured: bool,
    pub updated_at: DateTime<Utc>,
}
