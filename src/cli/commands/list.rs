//! Listing commands - tasks and students of the configured courses

use std::path::Path;

use coursesync::output::{OutputMode, StudentInfo, StudentListResult, TaskListResult};

use super::context::Context;

/// Print distinct qualified task names, ordered by task id
pub fn tasks(config: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let model = Context::load(config)?.model()?;

    TaskListResult {
        tasks: model.task_names(),
    }
    .render(mode);

    Ok(())
}

/// Print students, ordered by name
pub fn students(config: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let model = Context::load(config)?.model()?;

    let students = model
        .students_by_name()
        .iter()
        .map(|s| StudentInfo {
            name: s.name.clone(),
            account: s.account.clone(),
        })
        .collect();
    StudentListResult { students }.render(mode);

    Ok(())
}
