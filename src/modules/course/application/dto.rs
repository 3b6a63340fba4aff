use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::course::domain::{
    Course, CourseChanges, Difficulty, DomainError, Duration, DurationUnit, Money, NewCourse, Slug,
};

/// View-friendly course for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub duration_label: String,
    pub price_cents: i64,
    pub currency: String,
    pub price_label: String,
    pub is_free: bool,
    pub instructor: String,
    pub published: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            title: course.title().to_string(),
            slug: course.slug().to_string(),
            description: course.description().to_string(),
            difficulty: course.difficulty(),
            duration_minutes: course.duration().minutes(),
            duration_label: course.duration().format_human_readable(),
            price_cents: course.price().amount(),
            currency: course.price().currency().to_string(),
            price_label: if course.is_free() {
                "Free".to_string()
            } else {
                course.price().format()
            },
            is_free: course.is_free(),
            instructor: course.instructor().to_string(),
            published: course.is_published(),
            featured: course.is_featured(),
            created_at: course.created_at(),
            updated_at: course.updated_at(),
        }
    }
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self::from(&course)
    }
}

/// Course creation payload with primitive fields, as posted by the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    /// Derived from the title when absent
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: f64,
    #[serde(default)]
    pub duration_unit: Option<String>,
    /// Minor units (cents)
    pub price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    pub instructor: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
}

impl TryFrom<CreateCourseRequest> for NewCourse {
    type Error = DomainError;

    fn try_from(request: CreateCourseRequest) -> Result<Self, Self::Error> {
        let slug = match request.slug.as_deref() {
            Some(slug) => Slug::new(slug)?,
            None => Slug::from_title(&request.title)?,
        };

        Ok(NewCourse {
            title: request.title,
            slug,
            description: request.description,
            difficulty: request.difficulty,
            duration: parse_duration(request.duration, request.duration_unit.as_deref())?,
            price: parse_price(request.price, request.currency.as_deref())?,
            instructor: request.instructor,
            published: request.published,
            featured: request.featured,
        })
    }
}

/// Partial update payload; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub duration: Option<f64>,
    pub duration_unit: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub instructor: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

impl TryFrom<UpdateCourseRequest> for CourseChanges {
    type Error = DomainError;

    fn try_from(request: UpdateCourseRequest) -> Result<Self, Self::Error> {
        let duration = request
            .duration
            .map(|value| parse_duration(value, request.duration_unit.as_deref()))
            .transpose()?;
        let price = request
            .price
            .map(|value| parse_price(value, request.currency.as_deref()))
            .transpose()?;

        Ok(CourseChanges {
            title: request.title,
            slug: request.slug.as_deref().map(Slug::new).transpose()?,
            description: request.description,
            difficulty: request.difficulty,
            duration,
            price,
            instructor: request.instructor,
            published: request.published,
            featured: request.featured,
        })
    }
}

fn parse_duration(value: f64, unit: Option<&str>) -> Result<Duration, DomainError> {
    match unit {
        Some(unit) => Duration::parse(value, unit),
        None => Duration::new(value, DurationUnit::default()),
    }
}

fn parse_price(amount: f64, currency: Option<&str>) -> Result<Money, DomainError> {
    match currency {
        Some(currency) => Money::new(amount, currency),
        None => Money::usd(amount),
    }
}

/// Catalogue figures for the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub total: u64,
    pub published: u64,
    pub drafts: u64,
    pub featured: u64,
    pub by_difficulty: BTreeMap<Difficulty, u64>,
    pub published_minutes: u32,
    pub published_duration_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateCourseRequest {
        CreateCourseRequest {
            title: "Async Rust".to_string(),
            slug: None,
            description: "Futures and executors".to_string(),
            difficulty: Difficulty::Advanced,
            duration: 3.0,
            duration_unit: Some("hours".to_string()),
            price: 0.0,
            currency: None,
            instructor: "Grace Hopper".to_string(),
            published: true,
            featured: false,
        }
    }

    #[test]
    fn test_create_request_into_new_course() {
        let new_course = NewCourse::try_from(request()).unwrap();
        assert_eq!(new_course.slug.as_str(), "async-rust");
        assert_eq!(new_course.duration.minutes(), 180);
        assert_eq!(new_course.price.currency(), "USD");
    }

    #[test]
    fn test_create_request_rejects_bad_unit() {
        let bad = CreateCourseRequest {
            duration_unit: Some("fortnights".to_string()),
            ..request()
        };
        assert!(matches!(
            NewCourse::try_from(bad),
            Err(DomainError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_create_request_from_json() {
        let json = r#"{
            "title": "Rust for Web",
            "difficulty": "INTERMEDIATE",
            "duration": 90,
            "price": 2500,
            "currency": "eur",
            "instructor": "Linus"
        }"#;
        let request: CreateCourseRequest = serde_json::from_str(json).unwrap();
        let new_course = NewCourse::try_from(request).unwrap();
        assert_eq!(new_course.price.currency(), "EUR");
        assert!(!new_course.published);
    }

    #[test]
    fn test_update_request_into_changes() {
        let changes = CourseChanges::try_from(UpdateCourseRequest {
            price: Some(1000.0),
            slug: Some("new-slug".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(changes.price.unwrap().amount(), 1000);
        assert_eq!(changes.slug.unwrap().as_str(), "new-slug");
        assert!(changes.title.is_none());
    }

    #[test]
    fn test_dto_labels() {
        let course = Course::new(NewCourse::try_from(request()).unwrap()).unwrap();
        let dto = CourseDto::from(&course);
        assert_eq!(dto.duration_label, "3 hours");
        assert_eq!(dto.price_label, "Free");
        assert!(dto.is_free);
        assert_eq!(dto.id, course.id().to_string());
    }
}
