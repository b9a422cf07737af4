//! Tiny compiler CLI entry point

fn main() {
    // Arguments are parsed first so `--verbose` has one source of truth and grammar-rule
    // traces cover the whole compilation.
    let cli = tinyc::cli::parse_args();

    // Initialize structured logging with env-based filter
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.default_log_filter())),
        )
        .try_init();

    tinyc::cli::run(cli);
}
