pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::logger::TracingLogger;
pub use config::CatalogConfig;
pub use core::{calculator::CalculatorService, courses::CoursesService};
pub use domain::model::{
    Course, CourseCategory, CourseChanges, CourseId, CourseTitles, Lesson, LessonQuery, SortOrder,
};
pub use domain::ports::{ConfigProvider, CourseApi, Logger};
pub use utils::error::{CatalogError, Result};
