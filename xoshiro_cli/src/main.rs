// CLI entry point for `rngen`.
//
// Draws values from the xoshiro engines and prints them to stdout. See
// `config.rs` for the options.
//
// Usage:
//   rngen [--kind KIND] [--count N] [--bound N | --min N --max M] [--len L]
//         [--seed N] [--json] [--config FILE]

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match xoshiro_cli::run(&args) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("rngen: {e}");
            if matches!(e, xoshiro_cli::CliError::Args(_)) {
                eprintln!();
                eprintln!("{}", xoshiro_cli::config::usage());
            }
            std::process::exit(1);
        }
    }
}

/// Log to stderr so stdout stays clean for the sampled values.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
