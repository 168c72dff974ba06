//! Confirmation email delivery via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport. When `SMTP_HOST` is
//! not configured the mailer is disabled: [`Mailer::send_confirmation_code`]
//! logs the code instead of mailing it, which keeps local development
//! working without a relay.

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::core::config::MailConfig;
use crate::core::error::{AppError, Result};

pub struct Mailer {
    config: MailConfig,
}

impl Mailer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.smtp_host.is_some()
    }

    /// Mail the sign-up confirmation code to `to_email`
    pub async fn send_confirmation_code(
        &self,
        to_email: &str,
        username: &str,
        code: &str,
    ) -> Result<()> {
        let Some(smtp_host) = &self.config.smtp_host else {
            tracing::info!(
                username = username,
                code = code,
                "SMTP not configured; confirmation code logged instead of mailed"
            );
            return Ok(());
        };

        let body = format!(
            "You are receiving this email because you tried to sign up\n\
             or refresh your token on Kritika.\n\
             Your username: {}\n\
             Use this confirmation code:\n\
             \"{}\"",
            username, code
        );

        let email = Message::builder()
            .from(
                self.config
                    .from_address
                    .parse()
                    .map_err(|e| AppError::Internal(format!("Invalid SMTP_FROM address: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::Validation(format!("Invalid email address: {}", e)))?)
            .subject("Kritika registration")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))?;

        let mut transport_builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(smtp_host)
            .map_err(|e| AppError::ExternalServiceError(format!("SMTP relay error: {}", e)))?
            .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer
            .send(email)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Failed to send email: {}", e)))?;

        tracing::info!(to = to_email, "Confirmation email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disabled_config() -> MailConfig {
        MailConfig {
            smtp_host: None,
            smtp_port: 587,
            from_address: "noreply@kritika.local".to_string(),
            smtp_user: None,
            smtp_password: None,
        }
    }

    #[test]
    fn mailer_is_disabled_without_smtp_host() {
        assert!(!Mailer::new(disabled_config()).is_enabled());
    }

    #[tokio::test]
    async fn disabled_mailer_logs_and_succeeds() {
        let mailer = Mailer::new(disabled_config());
        let result = mailer
            .send_confirmation_code("reader@example.com", "reader", "1abc-deadbeef")
            .await;
        assert!(result.is_ok());
    }
}
