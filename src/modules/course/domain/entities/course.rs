use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::course::domain::errors::DomainError;
use crate::modules::course::domain::value_objects::{CourseId, Difficulty, Duration, Money, Slug};

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_INSTRUCTOR_LENGTH: usize = 255;

/// Everything needed to create a course; identity and timestamps are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub slug: Slug,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: Duration,
    pub price: Money,
    pub instructor: String,
    pub published: bool,
    pub featured: bool,
}

/// Field replacements applied by `Course::revise`; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub duration: Option<Duration>,
    pub price: Option<Money>,
    pub instructor: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

impl CourseChanges {
    pub fn is_empty(&self) -> bool {
        *self == CourseChanges::default()
    }
}

/// Course aggregate.
///
/// Fields are private; a course is only ever replaced as a whole. `revise`,
/// `with_published` and `with_featured` consume the value and hand back a new
/// one with `updated_at` bumped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    id: CourseId,
    title: String,
    slug: Slug,
    description: String,
    difficulty: Difficulty,
    duration: Duration,
    price: Money,
    instructor: String,
    published: bool,
    featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Course {
    pub fn new(input: NewCourse) -> Result<Self, DomainError> {
        let now = Utc::now();
        Self::restore(CourseId::new(), input, now, now)
    }

    /// Rebuild a course that already has an identity, e.g. loaded from storage
    pub fn restore(
        id: CourseId,
        input: NewCourse,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let title = validate_title(&input.title)?;
        let instructor = validate_instructor(&input.instructor)?;

        Ok(Self {
            id,
            title,
            slug: input.slug,
            description: input.description,
            difficulty: input.difficulty,
            duration: input.duration,
            price: input.price,
            instructor,
            published: input.published,
            featured: input.featured,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Attributes as creation input, for building a replacement aggregate
    pub fn to_new_course(&self) -> NewCourse {
        NewCourse {
            title: self.title.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            difficulty: self.difficulty,
            duration: self.duration,
            price: self.price.clone(),
            instructor: self.instructor.clone(),
            published: self.published,
            featured: self.featured,
        }
    }

    /// Apply `changes` and return the replacement aggregate
    pub fn revise(self, changes: CourseChanges) -> Result<Self, DomainError> {
        let current = self.to_new_course();
        let next = NewCourse {
            title: changes.title.unwrap_or(current.title),
            slug: changes.slug.unwrap_or(current.slug),
            description: changes.description.unwrap_or(current.description),
            difficulty: changes.difficulty.unwrap_or(current.difficulty),
            duration: changes.duration.unwrap_or(current.duration),
            price: changes.price.unwrap_or(current.price),
            instructor: changes.instructor.unwrap_or(current.instructor),
            published: changes.published.unwrap_or(current.published),
            featured: changes.featured.unwrap_or(current.featured),
        };

        Self::restore(self.id, next, self.created_at, touched(self.updated_at))
    }

    pub fn with_published(self, published: bool) -> Self {
        Self {
            published,
            updated_at: touched(self.updated_at),
            ..self
        }
    }

    pub fn with_featured(self, featured: bool) -> Self {
        Self {
            featured,
            updated_at: touched(self.updated_at),
            ..self
        }
    }
}

// Never move backwards, even if the wall clock does
fn touched(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}

fn validate_title(title: &str) -> Result<String, DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(
            "Title cannot be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(DomainError::InvalidTitle(format!(
            "Title too long (max {} characters)",
            MAX_TITLE_LENGTH
        )));
    }
    // Stored exactly as given; only blank input is rejected
    Ok(title.to_string())
}

fn validate_instructor(instructor: &str) -> Result<String, DomainError> {
    if instructor.trim().is_empty() {
        return Err(DomainError::InvalidInstructor(
            "Instructor cannot be empty".to_string(),
        ));
    }
    if instructor.chars().count() > MAX_INSTRUCTOR_LENGTH {
        return Err(DomainError::InvalidInstructor(format!(
            "Instructor too long (max {} characters)",
            MAX_INSTRUCTOR_LENGTH
        )));
    }
    Ok(instructor.to_string())
}
