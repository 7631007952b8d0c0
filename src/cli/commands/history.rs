use super::{load_tracker, persist, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date::{format_date_header, parse_date};
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;
use std::io::{self, BufRead, Write};

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::History { clear, period } = cmd else {
        return Ok(());
    };

    let store = store_for(cli, cfg);
    let mut tracker = load_tracker(&store);

    if *clear {
        if !confirm("Delete ALL history records? [y/N] ")? {
            messages::info("Aborted, history unchanged");
            return Ok(());
        }
        tracker.history.clear();
        persist(&store, &tracker);
        messages::success("History cleared");
        return Ok(());
    }

    let only = match period {
        Some(p) => Some(parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?),
        None => None,
    };

    let mut grouped = tracker.history.group_by_date();
    if let Some(date) = only {
        grouped.retain(|(d, _)| *d == date);
    }
    if grouped.is_empty() {
        messages::info("No history records yet");
        return Ok(());
    }

    for (date, sessions) in grouped {
        println!("\n📅 {}", format_date_header(&date));

        let mut table = Table::new(vec![
            Column { header: "Employee".into(), width: 24 },
            Column { header: "In".into(), width: 5 },
            Column { header: "Out".into(), width: 5 },
            Column { header: "Break".into(), width: 6 },
            Column { header: "Worked".into(), width: 6 },
        ]);

        for s in sessions {
            table.add_row(vec![
                s.employee_name.clone(),
                format_clock(&s.clock_in),
                format_clock(&s.clock_out),
                mins2readable(s.break_minutes, false, true),
                mins2readable(s.worked_minutes, false, true),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}

fn confirm(prompt: &str) -> AppResult<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
