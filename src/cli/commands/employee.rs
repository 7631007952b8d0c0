use super::{load_tracker, persist, store_for};
use crate::cli::parser::{Cli, Commands, EmployeeAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::ScheduleKind;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let store = store_for(cli, cfg);
    let mut tracker = load_tracker(&store);

    match action {
        EmployeeAction::Add { name, schedule } => {
            let kind = match schedule.as_deref() {
                Some(s) => ScheduleKind::sk_from_str(s)
                    .ok_or_else(|| AppError::InvalidSchedule(s.to_string()))?,
                None => ScheduleKind::sk_from_str(&cfg.default_schedule)
                    .ok_or_else(|| AppError::InvalidSchedule(cfg.default_schedule.clone()))?,
            };

            let employee = tracker.register_employee(name, kind)?;
            persist(&store, &tracker);
            messages::success(format!(
                "Registered and selected {} [{}, {}h/day] (id: {})",
                employee.name,
                employee.schedule.label(),
                employee.expected_hours(),
                employee.id
            ));
        }

        EmployeeAction::List => {
            if tracker.employees.is_empty() {
                messages::info("No employees registered yet");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column { header: "Id".into(), width: 15 },
                Column { header: "Name".into(), width: 24 },
                Column { header: "Schedule".into(), width: 10 },
                Column { header: "Expected".into(), width: 8 },
            ]);

            let selected = tracker.current_employee.clone();
            for e in &tracker.employees {
                let marker = if selected.as_deref() == Some(e.id.as_str()) {
                    format!("{} *", e.name)
                } else {
                    e.name.clone()
                };
                table.add_row(vec![
                    e.id.clone(),
                    marker,
                    e.schedule.label().to_string(),
                    mins2readable(e.expected_hours() * 60, false, true),
                ]);
            }
            print!("{}", table.render());
        }

        EmployeeAction::Select { id } => {
            tracker.select_employee(id, date::today())?;
            persist(&store, &tracker);
            // select_employee validated the id, the lookup cannot miss
            let name = tracker
                .employee(id)
                .map(|e| e.name.clone())
                .unwrap_or_default();
            messages::success(format!("Selected employee {}", name));
        }
    }

    Ok(())
}
