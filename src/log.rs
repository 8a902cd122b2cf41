// src/log.rs
use tracing_subscriber::EnvFilter;

/// Map `-v` count to a default level for this crate.
fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("crypto_tracker={level}")
}

/// Install the stderr subscriber. `RUST_LOG` overrides `verbosity`.
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "crypto_tracker=warn");
        assert_eq!(default_directive(1), "crypto_tracker=info");
        assert_eq!(default_directive(2), "crypto_tracker=debug");
        assert_eq!(default_directive(9), "crypto_tracker=trace");
    }
}
