//! Payment widget configuration

use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Publishable key handed to the widget
    #[serde(default)]
    pub publishable_key: String,
    /// Pre-filled billing email
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_product_description")]
    pub product_description: String,
    #[serde(default = "default_true")]
    pub collect_billing_address: bool,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            publishable_key: String::new(),
            email: None,
            product_description: default_product_description(),
            collect_billing_address: true,
        }
    }
}
