pub mod course_repository_impl;
pub mod in_memory_repository;

pub use course_repository_impl::PgCourseRepository;
pub use in_memory_repository::InMemoryCourseRepository;
