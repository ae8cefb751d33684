//! Sync command - download submissions

use std::path::Path;

use log::info;

use super::context::Context;
use coursesync::adapters::{ConsolePrompt, SvnClient};
use coursesync::core::services::{ResolveOptions, Selection};
use coursesync::output::OutputMode;
use coursesync::sync::{Planner, SyncOptions, Synchronizer};

/// Command-line choices of a sync run
#[derive(Debug, Default)]
pub struct SyncRequest {
    pub courses: Vec<String>,
    pub tasks: Vec<String>,
    pub students: Vec<String>,
    pub force: bool,
    pub ask_link: bool,
    pub remove_links: bool,
    pub no_cache: bool,
    pub dry_run: bool,
}

/// Synchronize the selected submissions, or report what would change
pub fn sync(config: &Path, request: SyncRequest, mode: OutputMode) -> anyhow::Result<()> {
    let mut context = Context::load(config)?;
    let model = context.model()?;
    let settings = &context.settings;

    let program = settings.client.clone().unwrap_or_else(SvnClient::lookup_program);
    info!("Using svn client '{}'", program.display());
    let svn = SvnClient::new(program, &settings.svn_url, &settings.auth.username, &settings.auth.password);

    let selection = Selection {
        courses: request.courses,
        tasks: request.tasks,
        students: request.students,
        ignore: settings.ignore.clone(),
    };
    let options = SyncOptions {
        resolve: ResolveOptions {
            force: request.force,
            remove_redundant_links: request.remove_links,
        },
        ask_link: request.ask_link,
        caching: !request.no_cache,
    };
    let planner = Planner::new(settings.root.clone(), settings.unsorted.clone());

    let mut prompt = ConsolePrompt::stdio();
    let mut synchronizer = Synchronizer::new(planner, &svn, &mut context.store, options);

    if request.dry_run {
        synchronizer.plan(model.submissions(), &selection).render(mode);
        return Ok(());
    }

    if options.ask_link {
        synchronizer = synchronizer.with_prompt(&mut prompt);
    }
    synchronizer.synchronize(model.submissions(), &selection).render(mode);

    Ok(())
}
