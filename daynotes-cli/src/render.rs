//! TUI rendering traits for daynotes types.
//!
//! Extension traits that add colored terminal rendering to daynotes-core
//! types using owo_colors. The plain-text grid and notes layout live in
//! `daynotes_core::render`.

use daynotes_core::calendar::DayNotes;
use daynotes_core::day_id::DayId;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DayId {
    fn render(&self) -> String {
        let date = self.date();
        format!("{} {}", date.format("%a %Y-%m-%d").bold(), format!("({})", self).dimmed())
    }
}

impl Render for DayNotes {
    fn render(&self) -> String {
        let meds = if self.took_meds {
            "meds ✓".green().to_string()
        } else {
            "meds ✗".red().to_string()
        };
        format!(
            "day {:>3}  sleep {:>3}  {}",
            self.day_quality, self.sleep_quality, meds
        )
    }
}

impl Render for (&DayId, &DayNotes) {
    fn render(&self) -> String {
        let (id, notes) = self;
        format!("{}  {}", id.render(), notes.render())
    }
}
