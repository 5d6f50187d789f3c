use anyhow::Result;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &Context) -> Result<()> {
    let calendar = ctx.load_calendar()?;

    if calendar.is_empty() {
        println!("{}", "No notes recorded yet".dimmed());
        return Ok(());
    }

    for entry in &calendar {
        println!("{}", entry.render());
    }

    Ok(())
}
