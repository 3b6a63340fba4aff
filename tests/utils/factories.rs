/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use academy_lib::modules::course::domain::{
    Course, CourseId, Difficulty, Duration, Money, NewCourse, Slug,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct CourseFactory {
    title: String,
    slug: Option<String>,
    description: String,
    difficulty: Difficulty,
    duration_minutes: u32,
    price_cents: i64,
    currency: String,
    instructor: String,
    published: bool,
    featured: bool,
}

impl Default for CourseFactory {
    fn default() -> Self {
        Self {
            title: "Test Course".to_string(),
            slug: None,
            description: "A course used in tests".to_string(),
            difficulty: Difficulty::Beginner,
            duration_minutes: 90,
            price_cents: 4999,
            currency: "USD".to_string(),
            instructor: "Test Instructor".to_string(),
            published: false,
            featured: false,
        }
    }
}

impl CourseFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn price_cents(mut self, cents: i64, currency: &str) -> Self {
        self.price_cents = cents;
        self.currency = currency.to_string();
        self
    }

    pub fn free(self) -> Self {
        self.price_cents(0, "USD")
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn build_new(self) -> NewCourse {
        // Unique by default so tests sharing a store do not collide
        let slug = self
            .slug
            .unwrap_or_else(|| format!("test-course-{}", Uuid::new_v4().simple()));

        NewCourse {
            title: self.title,
            slug: Slug::new(&slug).expect("factory slug must be valid"),
            description: self.description,
            difficulty: self.difficulty,
            duration: Duration::from_minutes(self.duration_minutes),
            price: Money::from_cents(self.price_cents, &self.currency)
                .expect("factory price must be valid"),
            instructor: self.instructor,
            published: self.published,
            featured: self.featured,
        }
    }

    pub fn build(self) -> Course {
        Course::new(self.build_new()).expect("factory course must be valid")
    }

    /// Build with a fixed identity and creation time, as if loaded from storage
    pub fn build_restored(self, id: Uuid, created_at: DateTime<Utc>) -> Course {
        Course::restore(CourseId::from_uuid(id), self.build_new(), created_at, created_at)
            .expect("factory course must be valid")
    }
}
