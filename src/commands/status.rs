//! Overview commands - dashboard, tip of the day, templates

use cleanmate::TipOfDay;
use cleanmate::output::{DashboardResult, TaskListResult, TemplateListResult, TipResult};

use super::Context;

/// Show all tasks together with the tip of the day
pub fn dashboard(ctx: &Context) -> anyhow::Result<()> {
    let theme = ctx.theme();
    let store = ctx.tasks();

    DashboardResult {
        theme,
        tip: TipOfDay::pick().text().to_string(),
        tasks: TaskListResult::new(store.tasks().to_vec(), theme),
    }
    .render(ctx.mode);
    Ok(())
}

pub fn tip(ctx: &Context) -> anyhow::Result<()> {
    TipResult {
        tip: TipOfDay::pick().text().to_string(),
        theme: ctx.theme(),
    }
    .render(ctx.mode);
    Ok(())
}

pub fn templates(ctx: &Context) -> anyhow::Result<()> {
    TemplateListResult {
        templates: ctx.config.tasks.templates.clone(),
    }
    .render(ctx.mode);
    Ok(())
}
