use anyhow::Result;
use daynotes_core::calendar::DayNotes;
use daynotes_core::render;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

/// Values given on the command line; `None` keeps the stored value.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoteValues {
    pub day_quality: Option<i32>,
    pub sleep_quality: Option<i32>,
    pub took_meds: Option<bool>,
}

impl NoteValues {
    fn is_empty(&self) -> bool {
        self.day_quality.is_none() && self.sleep_quality.is_none() && self.took_meds.is_none()
    }

    fn apply(&self, notes: DayNotes) -> DayNotes {
        DayNotes {
            day_quality: self.day_quality.unwrap_or(notes.day_quality),
            sleep_quality: self.sleep_quality.unwrap_or(notes.sleep_quality),
            took_meds: self.took_meds.unwrap_or(notes.took_meds),
        }
    }
}

pub fn run(ctx: &Context, date: Option<&str>, values: NoteValues) -> Result<()> {
    let id = ctx.day(date)?;
    let mut calendar = ctx.load_calendar()?;
    let current = calendar.day_notes(&id);

    let notes = if values.is_empty() {
        println!("{}", id.render());
        prompt_notes(current)?
    } else {
        values.apply(current)
    };

    calendar.add_day(id, notes);
    ctx.save_calendar(&calendar)?;

    println!("{}", format!("Saved notes for {}", id).green());
    render::display_notes(&notes);

    Ok(())
}

/// Ask for each field, offering the stored value as the default.
fn prompt_notes(current: DayNotes) -> Result<DayNotes> {
    let day_quality: i32 = Input::new()
        .with_prompt("  Day quality")
        .default(current.day_quality)
        .interact_text()?;

    let sleep_quality: i32 = Input::new()
        .with_prompt("  Sleep quality")
        .default(current.sleep_quality)
        .interact_text()?;

    let took_meds = Confirm::new()
        .with_prompt("  Took meds?")
        .default(current.took_meds)
        .interact()?;

    Ok(DayNotes {
        day_quality,
        sleep_quality,
        took_meds,
    })
}
