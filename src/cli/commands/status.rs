use super::{load_tracker, resolve_now, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting::{bold, mins2readable};
use crate::utils::time::{format_clock, format_duration};

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Status { at } = cmd else {
        return Ok(());
    };

    let now = resolve_now(at)?;
    let store = store_for(cli, cfg);
    let tracker = load_tracker(&store);

    match tracker.selected_employee() {
        Some(e) => println!(
            "👤 {} [{}, {}h/day]",
            bold(&e.name),
            e.schedule.label(),
            e.expected_hours()
        ),
        None => {
            messages::info("No employee selected (use `employee select`)");
        }
    }

    println!("Status:  {}", messages::state_label(tracker.state()));

    if let Some(session) = &tracker.current_session {
        let elapsed = tracker.project_elapsed_ms(now);
        let elapsed_str = if cfg.show_seconds {
            format_duration(elapsed)
        } else {
            mins2readable(crate::utils::time::round_minutes(elapsed), false, true)
        };

        println!("In:      {}", format_clock(&session.clock_in));
        println!("Worked:  {}", elapsed_str);
        println!(
            "Breaks:  {} ({} completed)",
            format_duration(session.break_time_ms()),
            session.breaks.len()
        );
        if let Some(since) = session.current_break {
            println!("On break since {}", format_clock(&since));
        }
    }

    Ok(())
}
