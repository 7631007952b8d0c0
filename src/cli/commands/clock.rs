use super::{load_tracker, persist, resolve_now, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::session::ClosedSession;
use crate::ui::messages;
use crate::utils::formatting::mins2readable;
use crate::utils::time::format_clock;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = store_for(cli, cfg);
    let mut tracker = load_tracker(&store);

    match cmd {
        Commands::In { at } => {
            let now = resolve_now(at)?;
            tracker.clock_in(now)?;
            persist(&store, &tracker);

            // clock_in guarantees a selected employee
            let name = tracker
                .selected_employee()
                .map(|e| e.name.clone())
                .unwrap_or_default();
            messages::success(format!("{} clocked in at {}", name, format_clock(&now)));
        }

        Commands::Out { at } => {
            let now = resolve_now(at)?;
            let closed = tracker.clock_out(now)?;
            persist(&store, &tracker);
            print_closed_summary(&closed);
        }

        _ => {}
    }

    Ok(())
}

fn print_closed_summary(s: &ClosedSession) {
    messages::success(format!(
        "{} clocked out at {}",
        s.employee_name,
        format_clock(&s.clock_out)
    ));
    println!(
        "   In {}  Out {}  Break {}  Worked {}",
        format_clock(&s.clock_in),
        format_clock(&s.clock_out),
        mins2readable(s.break_minutes, false, true),
        mins2readable(s.worked_minutes, false, true),
    );

    for (i, b) in s.breaks.iter().enumerate() {
        println!(
            "   Break {}: {} - {} ({} min)",
            i + 1,
            format_clock(&b.start),
            format_clock(&b.end),
            b.minutes
        );
    }
}
