use env_logger::Env;

/// Initialise the global logger.
///
/// `RUST_LOG` always wins; otherwise `info`, or `debug` when `debug` is set.
/// Safe to call more than once.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .format_target(debug)
        .try_init();
}
