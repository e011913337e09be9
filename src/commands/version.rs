//! Command: print version information.

/// Print the gldn version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    let version = option_env!("GLDN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    println!("gldn {version}");
}
