//! tcreport main entrypoint.

use tcreport::run;
use tcreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
