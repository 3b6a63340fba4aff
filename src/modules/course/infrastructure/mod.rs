pub mod mapper;
pub mod models;
pub mod persistence;

pub use persistence::{InMemoryCourseRepository, PgCourseRepository};
