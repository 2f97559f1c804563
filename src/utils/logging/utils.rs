//! Logger initialization and log-safe formatting helpers

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{BillingError, Result};
use tracing_subscriber::EnvFilter;

/// Tokens of at most this many characters are masked completely
const MASK_MIN_TOKEN_LEN: usize = 8;
/// Characters kept visible at the start of a masked token
const MASK_VISIBLE_HEAD: usize = 4;
/// Characters kept visible at the end of a masked token
const MASK_VISIBLE_TAIL: usize = 2;

/// Logging helpers shared by the library and the CLI
pub struct LoggingUtils;

impl LoggingUtils {
    /// Install the global subscriber. `RUST_LOG` wins over the configured level.
    pub fn init_logger(config: &LoggingConfig) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false);

        let installed = match config.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Text => builder.try_init(),
        };

        installed.map_err(|e| BillingError::internal(format!("Failed to install logger: {}", e)))
    }

    /// Payment tokens are single-use credentials; keep only the ends.
    pub fn mask_token(token: &str) -> String {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() > MASK_MIN_TOKEN_LEN {
            let head: String = chars[..MASK_VISIBLE_HEAD].iter().collect();
            let tail: String = chars[chars.len() - MASK_VISIBLE_TAIL..].iter().collect();
            format!("{}***{}", head, tail)
        } else {
            "***".to_string()
        }
    }
}
