use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "telesim",
    "telesim_agreement",
    "telesim_analysis",
    "telesim_combine",
    "telesim_field",
    "telesim_scaling",
    "telesim_select",
    "telesim_similarity",
    "telesim_stats",
];

/// Filter directive enabling `verbosity` on every workspace target.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
pub fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)))
}

/// Install a global fmt subscriber for the given verbosity.
///
/// `RUST_LOG` overrides the verbosity if set.
///
/// # Panics
///
/// Panics if a global subscriber is already installed; see [`try_init`].
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt().with_env_filter(filter(verbosity)).init();
}

/// Like [`init`], but returns an error instead of panicking when a global
/// subscriber is already installed.
pub fn try_init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert!(default_filter(0).starts_with("telesim=warn,"));
        assert!(default_filter(1).contains("telesim_similarity=info"));
        assert!(default_filter(2).contains("telesim_analysis=debug"));
        assert!(default_filter(9).ends_with("telesim_stats=trace"));
        assert_eq!(default_filter(0).split(',').count(), CRATE_TARGETS.len());
    }

    #[test]
    fn second_install_is_an_error() {
        let _ = try_init(0);
        assert!(try_init(0).is_err());
    }
}
