pub mod course_repository;

pub use course_repository::{CourseQuery, CourseRepository, MAX_QUERY_LIMIT};

#[cfg(test)]
pub use course_repository::MockCourseRepository;
