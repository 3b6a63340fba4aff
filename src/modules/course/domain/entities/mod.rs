pub mod course;

pub use course::{Course, CourseChanges, NewCourse};
