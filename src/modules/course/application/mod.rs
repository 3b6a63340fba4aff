pub mod dto;
pub mod schemas;
pub mod service;

pub use dto::{CourseDto, CourseStats, CreateCourseRequest, UpdateCourseRequest};
pub use schemas::{parse_query_params, parse_slug};
pub use service::CourseService;
