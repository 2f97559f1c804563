//! Top-level billing configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Everything the billing client needs for one page session
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BillingConfig {
    /// Billing server connection
    #[serde(default)]
    pub server: ServerConfig,
    /// Page-load parameters supplied by the server
    #[serde(default)]
    pub page: PageParams,
    /// Payment widget settings
    #[serde(default)]
    pub payment: PaymentConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
