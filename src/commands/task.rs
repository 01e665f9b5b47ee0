//! Task commands - add, list, and complete tasks

use cleanmate::TaskDraft;
use cleanmate::models::resolve_template;
use cleanmate::output::{TaskAddResult, TaskDoneResult, TaskListResult};

use super::Context;

/// Add a task from a name or a template
pub fn add(
    ctx: &Context,
    name: Option<&str>,
    template: Option<&str>,
    due: Option<&str>,
) -> anyhow::Result<()> {
    let mut draft = TaskDraft::new();

    if let Some(reference) = template {
        let Some(template_name) = resolve_template(&ctx.config.tasks.templates, reference) else {
            anyhow::bail!("Unknown template: {reference}. Run 'cleanmate templates' to list them");
        };
        draft.select_template(template_name);
    }
    if let Some(name) = name {
        draft.set_name(name);
    }
    if let Some(due) = due {
        draft.set_due_date(due);
    }

    let mut store = ctx.tasks();
    let task = draft.submit(&mut store)?;

    TaskAddResult {
        success: task.is_some(),
        task,
    }
    .render(ctx.mode);
    Ok(())
}

/// List tasks, optionally only pending or only done ones
pub fn list(ctx: &Context, pending: bool, done: bool) -> anyhow::Result<()> {
    let store = ctx.tasks();
    let tasks = store
        .tasks()
        .iter()
        .filter(|t| match (pending, done) {
            (true, _) => t.is_pending(),
            (_, true) => t.completed,
            _ => true,
        })
        .cloned()
        .collect();

    TaskListResult::new(tasks, ctx.theme()).render(ctx.mode);
    Ok(())
}

/// Mark a task as done
pub fn done(ctx: &Context, id: u64) -> anyhow::Result<()> {
    let mut store = ctx.tasks();
    let was_done = store.get(id).map(|t| t.completed);
    store.mark_done(id)?;

    TaskDoneResult {
        found: was_done.is_some(),
        id,
        already_done: was_done.unwrap_or(false),
        task: store.get(id).cloned(),
    }
    .render(ctx.mode);
    Ok(())
}
