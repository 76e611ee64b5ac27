//! Binary entry point for the jscrub CLI.

use std::process;

fn main() {
    if let Err(err) = jscrub::run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
