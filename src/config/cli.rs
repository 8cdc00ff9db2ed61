use crate::domain::model::{CourseId, SortOrder, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

#[derive(Debug, Clone, Parser)]
#[command(name = "course-catalog")]
#[command(about = "Query and update a course catalog backend")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, global = true, help = "TOML configuration file (overrides --base-url)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all courses
    Courses,
    /// Show a single course
    Course { id: CourseId },
    /// Save changes to a course
    Save {
        id: CourseId,
        #[arg(long, help = "Partial course as JSON")]
        changes: String,
    },
    /// List the lessons of a course
    Lessons {
        course_id: CourseId,
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long, default_value_t = SortOrder::Asc)]
        sort_order: SortOrder,
        #[arg(long, default_value_t = DEFAULT_PAGE_NUMBER)]
        page_number: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Add two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Subtract the second number from the first
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        if let Some(path) = &self.config {
            validation::validate_non_empty_string("config", path)?;
        }
        Ok(())
    }
}
