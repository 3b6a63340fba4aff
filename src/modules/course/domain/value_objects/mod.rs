//! Course value objects

pub mod course_id;
pub mod difficulty;
pub mod duration;
pub mod money;
pub mod slug;

pub use course_id::CourseId;
pub use difficulty::Difficulty;
pub use duration::{Duration, DurationUnit};
pub use money::{Money, DEFAULT_CURRENCY};
pub use slug::Slug;
