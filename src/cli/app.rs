//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use super::commands;
use super::commands::SyncRequest;
use coursesync::error::ExitCode;
use coursesync::output::OutputMode;
use coursesync::paths;

/// coursesync - Mirror coursework submissions into a local tree
#[derive(Parser, Debug)]
#[command(
    name = "coursesync",
    version,
    about = "Mirror coursework submissions into a local tree",
    long_about = "Download student submissions of the configured courses.\n\n\
                  Course data is read from the course service; every submission is\n\
                  checked out from the student's repository into {root}/{task}/{student}."
)]
pub struct Cli {
    /// Configuration file (default: ./coursesync.toml, then the user config dir)
    #[arg(short = 'C', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download submissions
    Sync {
        /// Only these course ids
        #[arg(short = 'c', long = "course", value_name = "ID")]
        courses: Vec<String>,

        /// Only these tasks (qualified name or title)
        #[arg(short = 't', long = "task", value_name = "NAME")]
        tasks: Vec<String>,

        /// Only these students (name or account)
        #[arg(short = 's', long = "student", value_name = "NAME")]
        students: Vec<String>,

        /// Fetch whole repositories of submissions with unknown location
        #[arg(long)]
        force: bool,

        /// Ask for a link after each whole-repository fetch
        #[arg(long, requires = "force")]
        ask_link: bool,

        /// Delete links made redundant by a reported path
        #[arg(long)]
        remove_links: bool,

        /// Check out even when the revision marker matches
        #[arg(long)]
        no_cache: bool,

        /// Only show what would be fetched
        #[arg(long)]
        dry_run: bool,
    },

    /// List task names
    Tasks,

    /// List students
    Students,

    /// Manage links from review ids to repository paths
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Manage account relocations
    Relocate {
        #[command(subcommand)]
        action: RelocateAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum LinkAction {
    /// Link a review to a path in the student's repository
    Add {
        /// Review id
        review_id: String,

        /// Path inside the repository (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        path: Vec<String>,
    },

    /// Remove a link
    Remove {
        /// Review id
        review_id: String,
    },

    /// List links
    List,
}

#[derive(Subcommand, Debug)]
pub enum RelocateAction {
    /// Use account `to` wherever `from` is reported
    Add {
        /// Reported account
        from: String,

        /// Account to use instead
        to: String,
    },

    /// Remove a relocation
    Remove {
        /// Reported account
        from: String,
    },

    /// List relocations
    List,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Run the CLI, returning the process exit code
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = paths::config_file(cli.config.as_deref());

    let result = match cli.command {
        Some(Command::Sync {
            courses,
            tasks,
            students,
            force,
            ask_link,
            remove_links,
            no_cache,
            dry_run,
        }) => {
            let request = SyncRequest {
                courses,
                tasks,
                students,
                force,
                ask_link,
                remove_links,
                no_cache,
                dry_run,
            };
            commands::sync(&config, request, output_mode)
        },
        Some(Command::Tasks) => commands::tasks(&config, output_mode),
        Some(Command::Students) => commands::students(&config, output_mode),
        Some(Command::Link { action }) => commands::link(&config, action, output_mode),
        Some(Command::Relocate { action }) => commands::relocate(&config, action, output_mode),
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": coursesync::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("coursesync v{}", coursesync::VERSION);
                println!("\nRun 'coursesync --help' for usage");
            }
            Ok(())
        },
    };

    match result {
        Ok(()) => ExitCode::Success.code(),
        Err(e) => {
            let code = ExitCode::of(&e);
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "error": format!("{e:#}"),
                        "code": code.as_str()
                    })
                );
            } else {
                eprintln!("{} {e:#}", "error:".red().bold());
            }
            code.code()
        },
    }
}
