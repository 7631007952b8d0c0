use super::{load_tracker, resolve_now, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::formatting::mins2readable;
use crate::utils::time::{format_clock, round_minutes};

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Today { at } = cmd else {
        return Ok(());
    };

    let now = resolve_now(at)?;
    let today = now.date_naive();
    let store = store_for(cli, cfg);
    let tracker = load_tracker(&store);

    let employee = tracker
        .selected_employee()
        .ok_or(AppError::NoEmployeeSelected)?;

    println!("📅 {}  {}", today, employee.name);

    let records = tracker.history.closed_for(&employee.id, today);
    let live = tracker.current_session.as_ref();

    if records.is_empty() && live.is_none() {
        messages::info("No records for today");
        return Ok(());
    }

    let mut worked_total = 0;

    if let Some(session) = live {
        let live_minutes = round_minutes(session.project_elapsed_ms(now));
        worked_total += live_minutes;
        println!(
            "🟢 In {}  Out   -   Break {}  Worked {}  (in progress)",
            format_clock(&session.clock_in),
            mins2readable(round_minutes(session.break_time_ms()), false, true),
            mins2readable(live_minutes, false, true),
        );
    }

    for s in &records {
        worked_total += s.worked_minutes;
        println!(
            "   In {}  Out {}  Break {}  Worked {}",
            format_clock(&s.clock_in),
            format_clock(&s.clock_out),
            mins2readable(s.break_minutes, false, true),
            mins2readable(s.worked_minutes, false, true),
        );
    }

    let expected = employee.expected_hours() * 60;
    println!(
        "   Total {}  Expected {}  Surplus {}",
        mins2readable(worked_total, false, true),
        mins2readable(expected, false, true),
        mins2readable(worked_total - expected, true, true),
    );

    Ok(())
}
