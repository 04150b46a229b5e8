use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Maps the number of `-v` flags to a log level.
pub fn level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// Initializer for logger
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level(verbosity))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::level;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), Level::WARN);
        assert_eq!(level(1), Level::INFO);
        assert_eq!(level(2), Level::DEBUG);
        assert_eq!(level(9), Level::TRACE);
    }
}
