use contact_book::{
    logging::init_logging,
    prelude::{Notice, render::display_notice, run_app},
};
use std::process::exit;

fn main() {
    let _logger = match init_logging() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("{e}");
            None
        }
    };

    if let Err(e) = run_app() {
        eprintln!("{}", display_notice(&Notice::from_error(&e)));
        exit(1);
    }
}
