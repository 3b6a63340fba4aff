use async_trait::async_trait;
use serde::Serialize;

use crate::modules::course::domain::entities::Course;
use crate::modules::course::domain::errors::RepositoryResult;
use crate::modules::course::domain::value_objects::{CourseId, Difficulty};

pub const MAX_QUERY_LIMIT: u32 = 100;

/// Listing criteria accepted by `CourseRepository::find_all`.
///
/// Every filter is optional; results are ordered newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CourseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl CourseQuery {
    pub fn published() -> Self {
        Self {
            published: Some(true),
            ..Default::default()
        }
    }

    /// Whether `course` passes the filters (pagination is not considered)
    pub fn matches(&self, course: &Course) -> bool {
        self.published.map_or(true, |p| course.is_published() == p)
            && self.featured.map_or(true, |f| course.is_featured() == f)
            && self.difficulty.map_or(true, |d| course.difficulty() == d)
    }
}

/// Persistence contract for the `Course` aggregate.
///
/// Absence is reported as `None`, an empty list or `false`, never as an
/// error. `RepositoryError` is reserved for storage and transport faults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: &CourseId) -> RepositoryResult<Option<Course>>;

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Course>>;

    async fn find_all(&self, query: &CourseQuery) -> RepositoryResult<Vec<Course>>;

    async fn find_published(&self) -> RepositoryResult<Vec<Course>>;

    async fn find_featured(&self) -> RepositoryResult<Vec<Course>>;

    async fn find_by_difficulty(&self, difficulty: Difficulty) -> RepositoryResult<Vec<Course>>;

    /// Insert or replace by identity. Fails with `DuplicateSlug` when another
    /// course already owns the slug.
    async fn save(&self, course: &Course) -> RepositoryResult<Course>;

    /// Returns whether a course was removed
    async fn delete(&self, id: &CourseId) -> RepositoryResult<bool>;

    async fn exists_by_slug(&self, slug: &str) -> RepositoryResult<bool>;

    async fn count(&self) -> RepositoryResult<u64>;

    async fn count_published(&self) -> RepositoryResult<u64>;
}
