use super::{load_tracker, persist, resolve_now, store_for};
use crate::cli::parser::{BreakAction, Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time::format_clock;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Break { action } = cmd else {
        return Ok(());
    };

    let store = store_for(cli, cfg);
    let mut tracker = load_tracker(&store);

    match action {
        BreakAction::Start { at } => {
            let now = resolve_now(at)?;
            tracker.start_break(now)?;
            persist(&store, &tracker);
            messages::success(format!("Break started at {}", format_clock(&now)));
        }

        BreakAction::End { at } => {
            let now = resolve_now(at)?;
            tracker.end_break(now)?;
            persist(&store, &tracker);

            // the interval just appended is the one that ended
            if let Some(b) = tracker
                .current_session
                .as_ref()
                .and_then(|s| s.breaks.last())
            {
                messages::success(format!(
                    "Break ended at {} ({} min)",
                    format_clock(&now),
                    b.minutes
                ));
            }
        }
    }

    Ok(())
}
