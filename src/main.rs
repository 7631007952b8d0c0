//! rtimeclock main entrypoint.

use rtimeclock::run;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        rtimeclock::ui::messages::error(e);
        std::process::exit(1);
    }
}
