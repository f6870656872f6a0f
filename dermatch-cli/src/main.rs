//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = dermatch_cli::run() {
        eprintln!("dermatch: {err}");
        std::process::exit(1);
    }
}
