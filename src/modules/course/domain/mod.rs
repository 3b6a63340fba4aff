pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Course, CourseChanges, NewCourse};
pub use errors::{DomainError, RepositoryError, RepositoryResult};
pub use repositories::{CourseQuery, CourseRepository};
pub use value_objects::{CourseId, Difficulty, Duration, DurationUnit, Money, Slug};
