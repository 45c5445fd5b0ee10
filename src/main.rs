//! productcodes main entrypoint.

use productcodes::run;
use productcodes::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
