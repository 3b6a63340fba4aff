use std::collections::BTreeMap;
use std::sync::Arc;

use super::dto::{CourseDto, CourseStats};
use super::schemas::{parse_query_params, parse_slug};
use crate::modules::course::domain::{
    Course, CourseChanges, CourseId, CourseQuery, CourseRepository, Difficulty, Duration,
    NewCourse,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::RawParams;
use crate::{log_debug, log_info};

pub struct CourseService {
    course_repo: Arc<dyn CourseRepository>,
    default_page_size: u32,
}

impl CourseService {
    pub fn new(course_repo: Arc<dyn CourseRepository>) -> Self {
        Self {
            course_repo,
            default_page_size: 20,
        }
    }

    /// Limit applied when a listing query does not specify one
    pub fn with_default_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub async fn list_courses(&self, query: &CourseQuery) -> AppResult<Vec<CourseDto>> {
        let query = CourseQuery {
            limit: query.limit.or(Some(self.default_page_size)),
            ..*query
        };
        log_debug!("Listing courses with {:?}", query);

        let courses = self.course_repo.find_all(&query).await?;
        Ok(courses.iter().map(CourseDto::from).collect())
    }

    /// HTTP entry point: validate raw query-string pairs, then list
    pub async fn list_courses_from_params(&self, raw: &RawParams) -> AppResult<Vec<CourseDto>> {
        let query = parse_query_params(raw)?;
        self.list_courses(&query).await
    }

    pub async fn list_published(&self) -> AppResult<Vec<CourseDto>> {
        let courses = self.course_repo.find_published().await?;
        Ok(courses.iter().map(CourseDto::from).collect())
    }

    pub async fn list_featured(&self) -> AppResult<Vec<CourseDto>> {
        let courses = self.course_repo.find_featured().await?;
        Ok(courses
            .iter()
            .filter(|c| c.is_published())
            .map(CourseDto::from)
            .collect())
    }

    pub async fn get_course(&self, id: &CourseId) -> AppResult<Option<CourseDto>> {
        let course = self.course_repo.find_by_id(id).await?;
        Ok(course.as_ref().map(CourseDto::from))
    }

    /// A malformed slug cannot match any course, so it short-circuits to `None`
    pub async fn get_course_by_slug(&self, slug: &str) -> AppResult<Option<CourseDto>> {
        let slug = match parse_slug(slug) {
            Ok(slug) => slug,
            Err(_) => {
                log_debug!("Rejected malformed slug lookup: {:?}", slug);
                return Ok(None);
            }
        };

        let course = self.course_repo.find_by_slug(slug.as_str()).await?;
        Ok(course.as_ref().map(CourseDto::from))
    }

    pub async fn create_course(&self, input: NewCourse) -> AppResult<CourseDto> {
        if self.course_repo.exists_by_slug(input.slug.as_str()).await? {
            return Err(AppError::Conflict(format!(
                "A course with slug '{}' already exists",
                input.slug
            )));
        }

        let course = Course::new(input)?;
        let saved = self.course_repo.save(&course).await?;

        log_info!("Created course {} ({})", saved.slug(), saved.id());
        Ok(CourseDto::from(&saved))
    }

    pub async fn update_course(&self, id: &CourseId, changes: CourseChanges) -> AppResult<CourseDto> {
        let existing = self.require(id).await?;

        if let Some(new_slug) = &changes.slug {
            if new_slug != existing.slug()
                && self.course_repo.exists_by_slug(new_slug.as_str()).await?
            {
                return Err(AppError::Conflict(format!(
                    "A course with slug '{}' already exists",
                    new_slug
                )));
            }
        }

        let revised = existing.revise(changes)?;
        let saved = self.course_repo.save(&revised).await?;

        log_info!("Updated course {}", saved.id());
        Ok(CourseDto::from(&saved))
    }

    pub async fn set_published(&self, id: &CourseId, published: bool) -> AppResult<CourseDto> {
        let course = self.require(id).await?.with_published(published);
        let saved = self.course_repo.save(&course).await?;
        log_info!(
            "Course {} is now {}",
            saved.slug(),
            if published { "published" } else { "a draft" }
        );
        Ok(CourseDto::from(&saved))
    }

    pub async fn set_featured(&self, id: &CourseId, featured: bool) -> AppResult<CourseDto> {
        let course = self.require(id).await?.with_featured(featured);
        let saved = self.course_repo.save(&course).await?;
        Ok(CourseDto::from(&saved))
    }

    pub async fn delete_course(&self, id: &CourseId) -> AppResult<()> {
        if !self.course_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Course with ID {} not found", id)));
        }

        log_info!("Deleted course {}", id);
        Ok(())
    }

    /// Catalogue summary, computed from a single unpaged listing
    pub async fn stats(&self) -> AppResult<CourseStats> {
        let courses = self.course_repo.find_all(&CourseQuery::default()).await?;

        let mut by_difficulty: BTreeMap<Difficulty, u64> =
            Difficulty::ALL.into_iter().map(|d| (d, 0)).collect();
        let mut published = 0u64;
        let mut featured = 0u64;
        let mut published_duration = Duration::default();

        for course in &courses {
            *by_difficulty.entry(course.difficulty()).or_insert(0) += 1;
            if course.is_featured() {
                featured += 1;
            }
            if course.is_published() {
                published += 1;
                published_duration = published_duration.add(&course.duration());
            }
        }

        let total = courses.len() as u64;
        Ok(CourseStats {
            total,
            published,
            drafts: total - published,
            featured,
            by_difficulty,
            published_minutes: published_duration.minutes(),
            published_duration_label: published_duration.format_human_readable(),
        })
    }

    async fn require(&self, id: &CourseId) -> AppResult<Course> {
        self.course_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with ID {} not found", id)))
    }
}
