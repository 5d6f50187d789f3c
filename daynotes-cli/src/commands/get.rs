use anyhow::Result;
use daynotes_core::render;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &Context, date: Option<&str>) -> Result<()> {
    let id = ctx.day(date)?;
    let calendar = ctx.load_calendar()?;

    println!("{}", id.render());
    if !calendar.contains(&id) {
        println!("{}", "No notes recorded for this day".dimmed());
    }
    render::display_notes(&calendar.day_notes(&id));

    Ok(())
}
