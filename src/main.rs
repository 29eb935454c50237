//! rTripAgenda main entrypoint.

use rtripagenda::run;
use rtripagenda::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
