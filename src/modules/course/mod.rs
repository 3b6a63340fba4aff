pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{CourseDto, CourseService, CourseStats};
pub use domain::{Course, CourseId, CourseQuery, CourseRepository};
pub use infrastructure::{InMemoryCourseRepository, PgCourseRepository};
