//! NRP contractor training CLI - course players and resource catalog.

mod render;
mod session;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nrp_core::{catalog, format_minutes, Course};
use nrp_progress::{CourseProgressTracker, TrackerConfig, UnlockPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::render::TextCertificateRenderer;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "nrp-training")]
#[command(about = "Contractor training courses and resources", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in courses
    Courses,
    /// Show a course and its modules
    Show {
        /// Course code or name word (e.g. wrt, customer)
        course: Option<String>,
        /// Load the course from a JSON file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Browse downloadable resources
    Resources {
        /// Only show one category
        #[arg(long)]
        category: Option<String>,
    },
    /// Work through a course interactively
    Play {
        /// Course code or name word (e.g. wrt, customer)
        course: Option<String>,
        /// Load the course from a JSON file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Name printed on the certificate
        #[arg(long, env = "NRP_CONTRACTOR", default_value = "John Smith")]
        contractor: String,
        /// Unlock rule (sequential, static)
        #[arg(long, default_value_t = UnlockPolicy::Sequential)]
        unlock: UnlockPolicy,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Courses => {
            let courses = catalog::builtin_courses()?;
            println!("Courses ({})", courses.len());
            for course in courses {
                println!(
                    "  {} | {} modules | {} | {}",
                    course.code,
                    course.len(),
                    format_minutes(course.total_duration_minutes()),
                    course.name,
                );
            }
        }
        Commands::Show { course, file } => {
            let course = resolve_course(course.as_deref(), file)?;
            let tracker = CourseProgressTracker::new(course);
            print!("{}", render::course_header(tracker.course()));
            println!("{}", render::summary_line(&tracker.progress_summary()));
            print!("{}", render::module_list(&tracker, true));
        }
        Commands::Resources { category } => {
            let resources = catalog::resource_catalog();
            let selected: Vec<_> = match category {
                Some(name) => match resources.category(&name) {
                    Some(category) => vec![category],
                    None => bail!("Unknown resource category: {}", name),
                },
                None => resources.categories().iter().collect(),
            };
            print!("{}", render::resource_list(&selected));
        }
        Commands::Play { course, file, contractor, unlock } => {
            let course = resolve_course(course.as_deref(), file)?;
            info!(course = %course.code, policy = %unlock, "starting course session");

            let tracker = CourseProgressTracker::new(course).with_config(TrackerConfig {
                unlock_policy: unlock,
            });
            let mut session = Session::new(tracker, contractor, TextCertificateRenderer);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session.run(stdin.lock(), &mut stdout)?;

            let summary = session.tracker().progress_summary();
            info!(
                completed = summary.completed_count,
                total = summary.total_count,
                "course session closed"
            );
        }
    }

    Ok(())
}

fn resolve_course(key: Option<&str>, file: Option<PathBuf>) -> Result<Course> {
    match (key, file) {
        (_, Some(path)) => Course::load(&path)
            .with_context(|| format!("Failed to load course from {}", path.display())),
        (Some(key), None) => catalog::find_course(key)?
            .with_context(|| format!("Unknown course: {}", key)),
        (None, None) => bail!("Name a course (see `nrp-training courses`) or pass --file"),
    }
}
