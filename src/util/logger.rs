use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};


fn default_filter(verbose: bool) -> &'static str {
    return match verbose {
        true => "millionaire_tycoon=debug",
        false => "millionaire_tycoon=warn",
    };
}


/// Logs go to stderr; stdout carries only the game text.
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
