//! Type conversions for BillingError

use super::response::ServerErrorBody;
use super::types::BillingError;

impl From<ServerErrorBody> for BillingError {
    fn from(body: ServerErrorBody) -> Self {
        BillingError::Rejected(body.msg)
    }
}

impl From<url::ParseError> for BillingError {
    fn from(err: url::ParseError) -> Self {
        BillingError::Config(format!("Invalid URL: {}", err))
    }
}

impl From<std::num::ParseIntError> for BillingError {
    fn from(err: std::num::ParseIntError) -> Self {
        BillingError::Parsing(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for BillingError {
    fn from(err: std::num::ParseFloatError) -> Self {
        BillingError::Parsing(err.to_string())
    }
}
