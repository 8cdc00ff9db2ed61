use anyhow::Context;
use clap::Parser;
use course_catalog::utils::{logger, validation::Validate};
use course_catalog::{
    CalculatorService, CatalogConfig, CliConfig, Command, CourseApi, CourseChanges,
    CoursesService, LessonQuery, TracingLogger,
};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(service: &CoursesService, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Courses => {
            let courses = service.find_all_courses().await?;
            tracing::info!("📚 {} courses", courses.len());
            print_json(&courses)
        }
        Command::Course { id } => print_json(&service.find_course_by_id(id).await?),
        Command::Save { id, changes } => {
            let changes: CourseChanges =
                serde_json::from_str(&changes).context("--changes must be a JSON object")?;
            let course = service.save_course(id, &changes).await?;
            tracing::info!("💾 Course {} saved", course.id);
            print_json(&course)
        }
        Command::Lessons {
            course_id,
            filter,
            sort_order,
            page_number,
            page_size,
        } => {
            let query = LessonQuery::new(course_id)
                .filter(filter)
                .sort_order(sort_order)
                .page(page_number)
                .page_size(page_size);
            print_json(&service.find_lessons_with(&query).await?)
        }
        Command::Add { a, b } => {
            let calculator = CalculatorService::new(TracingLogger::default());
            println!("{}", calculator.add(a, b));
            Ok(())
        }
        Command::Subtract { a, b } => {
            let calculator = CalculatorService::new(TracingLogger::default());
            println!("{}", calculator.subtract(a, b));
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => Some(
            CatalogConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path))?,
        ),
        None => None,
    };

    // 初始化日誌
    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.is_verbose());
    match file_config.as_ref().map(|c| c.log_format()) {
        Some("json") => logger::init_json_logger(verbose),
        _ => logger::init_cli_logger(verbose),
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    let validated = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validated {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let service = match &file_config {
        Some(config) => CoursesService::from_config(config)?,
        None => CoursesService::from_config(&cli)?,
    };
    tracing::debug!("Using course backend at {}", service.base_url());

    if let Err(e) = run(&service, cli.command.clone()).await {
        tracing::error!("❌ {:#}", e);
        match e.downcast_ref::<course_catalog::CatalogError>() {
            Some(catalog_error) => eprintln!("❌ {}", catalog_error.user_friendly_message()),
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(2);
    }

    Ok(())
}
