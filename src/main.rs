use std::io;

use clap::Parser;

use interface::{arguments::Arguments, cli::Interface};

#[macro_use]
extern crate lazy_static;

mod game;
mod interface;
mod util;


fn main() {
    let args = Arguments::parse();
    util::logger::init_logger(args.verbose);

    let stdin = io::stdin();
    let mut interface = Interface::new(stdin.lock(), io::stdout());
    if let Err(e) = interface.init(&args) {
        tracing::error!(error = %e, "Game stopped");
    }
}
