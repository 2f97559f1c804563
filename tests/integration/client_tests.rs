//! HTTP submission against a mock billing server

#[cfg(test)]
mod tests {
    use seatbill::BillingError;
    use seatbill::config::ServerConfig;
    use seatbill::services::billing::{
        BillingClient, BillingEndpoint, BillingForm, FieldConstraints, PaymentToken,
        SubmissionOutcome, Submitter,
    };
    use seatbill::utils::error::TRY_RELOADING;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BillingClient {
        BillingClient::new(&ServerConfig {
            base_url: server.uri(),
            timeout: 5,
            ..Default::default()
        })
        .unwrap()
    }

    fn autopay_form(licenses: &str) -> BillingForm {
        BillingForm::new("autopay")
            .field("schedule", "annual")
            .field("license_management", "manual")
            .input(
                "manual_license_count",
                "licenses",
                licenses,
                FieldConstraints::required().with_min(10),
            )
    }

    #[tokio::test]
    async fn test_successful_upgrade() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/json/billing/upgrade"))
            .and(body_string_contains("stripe_token=%22tok_visa%22"))
            .and(body_string_contains("schedule=%22annual%22"))
            .and(body_string_contains("licenses=12"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":"success"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .submit(
                BillingEndpoint::Upgrade,
                &autopay_form("12"),
                Some(&PaymentToken::new("tok_visa")),
            )
            .await
            .unwrap();

        assert_eq!(outcome, SubmissionOutcome::Success);
    }

    #[tokio::test]
    async fn test_rejection_message_is_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/json/billing/upgrade"))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"result":"error","msg":"Your card was declined."}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .submit(
                BillingEndpoint::Upgrade,
                &autopay_form("12"),
                Some(&PaymentToken::new("tok_chargeDeclined")),
            )
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                msg: "Your card was declined.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unparseable_error_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .submit(BillingEndpoint::Upgrade, &autopay_form("12"), None)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                msg: TRY_RELOADING.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string(r#"{"result":"error","msg":"Oops"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .submit(BillingEndpoint::Upgrade, &autopay_form("12"), None)
            .await
            .unwrap();

        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_invalid_form_never_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .submit(BillingEndpoint::Upgrade, &autopay_form("3"), None)
            .await;

        assert!(matches!(result, Err(BillingError::Validation(_))));
    }

    #[tokio::test]
    async fn test_card_change_forwards_session_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/json/billing/sources/change"))
            .and(header("cookie", "sessionid=abc123"))
            .and(body_string_contains("stripe_token=%22tok_mastercard%22"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = BillingClient::new(&ServerConfig {
            base_url: server.uri(),
            session_cookie: Some("sessionid=abc123".to_string()),
            ..Default::default()
        })
        .unwrap();

        let outcome = client
            .submit(
                BillingEndpoint::ChangeSource,
                &BillingForm::new("cardchange"),
                Some(&PaymentToken::new("tok_mastercard")),
            )
            .await
            .unwrap();

        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = BillingClient::new(&ServerConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: 2,
            ..Default::default()
        })
        .unwrap();

        let err = client
            .submit(BillingEndpoint::Upgrade, &autopay_form("12"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, BillingError::Network(_)));
        assert_eq!(err.user_message(), TRY_RELOADING);
    }
}
