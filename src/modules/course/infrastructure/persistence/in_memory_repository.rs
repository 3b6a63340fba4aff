use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Mutex;

use crate::modules::course::domain::{
    Course, CourseId, CourseQuery, CourseRepository, Difficulty, RepositoryError,
    RepositoryResult,
};

/// Process-local `CourseRepository`, used for tests, demos and previews.
///
/// Same contract as the Postgres adapter: upsert by id, slug uniqueness,
/// newest-first listing.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: DashMap<CourseId, Course>,
    // Serialises the slug check with the insert so two saves cannot both claim a slug
    write_lock: Mutex<()>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store. Fails like `save` when two courses share a slug.
    pub fn with_courses(courses: impl IntoIterator<Item = Course>) -> RepositoryResult<Self> {
        let repo = Self::new();
        for course in courses {
            repo.insert_checked(course)?;
        }
        Ok(repo)
    }

    fn insert_checked(&self, course: Course) -> RepositoryResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| RepositoryError::Query(format!("write lock poisoned: {}", e)))?;

        let slug_taken = self
            .courses
            .iter()
            .any(|entry| entry.key() != course.id() && entry.value().slug() == course.slug());
        if slug_taken {
            return Err(RepositoryError::DuplicateSlug(course.slug().to_string()));
        }

        self.courses.insert(*course.id(), course);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    fn collect(&self, query: &CourseQuery) -> Vec<Course> {
        let mut matching: Vec<Course> = self
            .courses
            .iter()
            .filter(|entry| query.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        matching.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });

        let offset = query.offset.unwrap_or(0) as usize;
        let limit = query.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        matching.into_iter().skip(offset).take(limit).collect()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_id(&self, id: &CourseId) -> RepositoryResult<Option<Course>> {
        Ok(self.courses.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Course>> {
        Ok(self
            .courses
            .iter()
            .find(|entry| entry.value().slug().as_str() == slug)
            .map(|entry| entry.value().clone()))
    }

    async fn find_all(&self, query: &CourseQuery) -> RepositoryResult<Vec<Course>> {
        Ok(self.collect(query))
    }

    async fn find_published(&self) -> RepositoryResult<Vec<Course>> {
        Ok(self.collect(&CourseQuery::published()))
    }

    async fn find_featured(&self) -> RepositoryResult<Vec<Course>> {
        Ok(self.collect(&CourseQuery {
            featured: Some(true),
            ..Default::default()
        }))
    }

    async fn find_by_difficulty(&self, difficulty: Difficulty) -> RepositoryResult<Vec<Course>> {
        Ok(self.collect(&CourseQuery {
            difficulty: Some(difficulty),
            ..Default::default()
        }))
    }

    async fn save(&self, course: &Course) -> RepositoryResult<Course> {
        self.insert_checked(course.clone())?;
        Ok(course.clone())
    }

    async fn delete(&self, id: &CourseId) -> RepositoryResult<bool> {
        Ok(self.courses.remove(id).is_some())
    }

    async fn exists_by_slug(&self, slug: &str) -> RepositoryResult<bool> {
        Ok(self
            .courses
            .iter()
            .any(|entry| entry.value().slug().as_str() == slug))
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.courses.len() as u64)
    }

    async fn count_published(&self) -> RepositoryResult<u64> {
        Ok(self
            .courses
            .iter()
            .filter(|entry| entry.value().is_published())
            .count() as u64)
    }
}
