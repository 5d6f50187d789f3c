use anyhow::Result;
use daynotes_core::day_id::DayId;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;
use crate::utils::date_arg;

pub fn run(ctx: &Context, date: &str) -> Result<()> {
    let id: DayId = date_arg::parse_day(date, ctx.policy())?;
    let mut calendar = ctx.load_calendar()?;

    match calendar.remove_day(&id) {
        Some(_) => {
            ctx.save_calendar(&calendar)?;
            println!("{}", format!("Removed notes for {}", id).green());
        }
        None => println!("{} {}", "No notes to remove for".dimmed(), id.render()),
    }

    Ok(())
}
