//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::{Builder, Env};

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
    if let Err(err) = nightwalk_cli::run() {
        eprintln!("nightwalk: {err}");
        std::process::exit(1);
    }
}
