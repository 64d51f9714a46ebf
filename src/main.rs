#![allow(warnings)]
//! Task List Frontend Entry Point

use log::{error, LevelFilter};
use todo_list_ui::{logging, mount};

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    if let Err(e) = mount::start() {
        error!("[APP] Failed to start: {}", e);
    }
}
