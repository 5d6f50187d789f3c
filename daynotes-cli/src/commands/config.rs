use anyhow::Result;
use daynotes_core::day_id::DatePolicy;
use owo_colors::OwoColorize;

use crate::context::Context;

pub fn run(ctx: &mut Context, strict_dates: Option<bool>) -> Result<()> {
    if let Some(strict) = strict_dates {
        if ctx.daynotes.set_strict_dates(strict)? {
            println!("{}", format!("strict_dates set to {}", strict).green());
        }
    }

    println!("{}", "Paths".bold());
    println!("  Config:     {}", ctx.daynotes.config_path().display());
    println!("  Data dir:   {}", ctx.daynotes.display_path().display());
    println!("  Note file:  {}", ctx.data_file.display());

    println!("{}", "Dates".bold());
    println!("  Configured: {}", describe(ctx.daynotes.date_policy()));
    println!("  Active:     {}", describe(ctx.policy()));

    Ok(())
}

fn describe(policy: DatePolicy) -> &'static str {
    match policy {
        DatePolicy::Lenient => "lenient (out-of-range days roll over)",
        DatePolicy::Strict => "strict (out-of-range days are rejected)",
    }
}
