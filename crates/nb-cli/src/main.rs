//! newsboard - news feed and comments from the command line
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize in the current directory
//! newsboard init
//!
//! # Register a user and publish a news item
//! newsboard user add alice
//! newsboard news add --title "Hello" --text "First post"
//!
//! # Comment as that user, then read the page
//! newsboard --user alice comment add 1 --text "Nice"
//! newsboard news show 1
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
