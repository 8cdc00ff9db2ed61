pub mod calculator;
pub mod courses;

pub use crate::domain::model::{Course, CourseChanges, CourseId, Lesson, LessonQuery, SortOrder};
pub use crate::domain::ports::{ConfigProvider, CourseApi, Logger};
pub use crate::utils::error::Result;
