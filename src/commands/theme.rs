//! Theme command - show or toggle light/dark

use cleanmate::output::ThemeResult;

use super::Context;

pub fn theme_show(ctx: &Context) -> anyhow::Result<()> {
    ThemeResult {
        theme: ctx.theme(),
        changed: false,
    }
    .render(ctx.mode);
    Ok(())
}

pub fn theme_toggle(ctx: &Context) -> anyhow::Result<()> {
    let prefs = ctx.preferences();
    let next = prefs.theme().toggled();
    prefs.set(next)?;

    ThemeResult {
        theme: next,
        changed: true,
    }
    .render(ctx.mode);
    Ok(())
}
