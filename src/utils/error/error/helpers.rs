//! Helper functions for creating specific error types

use super::types::BillingError;

impl BillingError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn rejected<S: Into<String>>(message: S) -> Self {
        Self::Rejected(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }

    pub fn payment_cancelled<S: Into<String>>(message: S) -> Self {
        Self::PaymentCancelled(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl BillingError {
    /// Client-side failures never reach the server
    pub fn is_client_side(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::PaymentCancelled(_))
    }

    /// Text to put in the form's error element
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(msg) => msg.clone(),
            Self::Validation(msg) => msg.clone(),
            Self::Network(_) | Self::HttpClient(_) => super::TRY_RELOADING.to_string(),
            _ => super::CONTACT_SUPPORT.to_string(),
        }
    }
}
