use anyhow::Result;
use daynotes_core::render::{self, WeekView};

use crate::context::Context;

pub fn run(ctx: &Context, date: Option<&str>) -> Result<()> {
    let id = ctx.day(date)?;
    let calendar = ctx.load_calendar()?;

    let view = WeekView::containing(id.date());
    print!("{}", view.render_marked(&calendar));
    println!();

    render::display_notes(&calendar.day_notes(&id));

    Ok(())
}
