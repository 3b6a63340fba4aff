//! Boundary schemas for course endpoints.

use crate::modules::course::domain::repositories::{CourseQuery, MAX_QUERY_LIMIT};
use crate::modules::course::domain::value_objects::{Difficulty, Slug};
use crate::shared::validation::{FieldKind, FieldSpec, RawParams, Schema, ValidationErrors};

const DIFFICULTIES: &[&str] = &["BEGINNER", "INTERMEDIATE", "ADVANCED", "EXPERT"];

pub const COURSE_QUERY_SCHEMA: Schema = Schema {
    name: "course_query",
    error: "Invalid query parameters",
    fields: &[
        FieldSpec::optional("published", FieldKind::Boolean),
        FieldSpec::optional("featured", FieldKind::Boolean),
        FieldSpec::optional("difficulty", FieldKind::OneOf(DIFFICULTIES)),
        FieldSpec::optional(
            "limit",
            FieldKind::Integer {
                min: 1,
                max: Some(MAX_QUERY_LIMIT as i64),
            },
        ),
        FieldSpec::optional(
            "offset",
            FieldKind::Integer {
                min: 0,
                max: Some(u32::MAX as i64),
            },
        ),
    ],
};

pub const SLUG_SCHEMA: Schema = Schema {
    name: "course_slug",
    error: "Invalid slug",
    fields: &[FieldSpec::required(
        "slug",
        FieldKind::Matches {
            check: Slug::is_valid,
            message: "Slug must contain only lowercase letters, numbers, and hyphens",
        },
    )],
};

/// Validate and coerce raw course listing parameters
pub fn parse_query_params(raw: &RawParams) -> Result<CourseQuery, ValidationErrors> {
    let parsed = COURSE_QUERY_SCHEMA.parse(raw)?;

    let difficulty = match parsed.text("difficulty") {
        Some(value) => Some(value.parse::<Difficulty>().map_err(|e| {
            ValidationErrors::new(COURSE_QUERY_SCHEMA.error).with_field("difficulty", e.to_string())
        })?),
        None => None,
    };

    // Range already enforced by the schema
    Ok(CourseQuery {
        published: parsed.bool("published"),
        featured: parsed.bool("featured"),
        difficulty,
        limit: parsed.int("limit").map(|n| n as u32),
        offset: parsed.int("offset").map(|n| n as u32),
    })
}

pub fn parse_slug(raw: &str) -> Result<Slug, ValidationErrors> {
    SLUG_SCHEMA.parse_single("slug", raw)?;
    Slug::new(raw)
        .map_err(|e| ValidationErrors::new(SLUG_SCHEMA.error).with_field("slug", e.to_string()))
}
