use crate::domain::EmailAddress;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// HTTP client for the transactional email provider.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: EmailAddress,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: EmailAddress,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }

    #[tracing::instrument(
        name = "Sending an email",
        skip(self, html_content),
        fields(recipient = %recipient)
    )]
    pub async fn send_email(
        &self,
        sender_name: &str,
        recipient: &EmailAddress,
        subject: &str,
        html_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/emails", self.base_url);
        let from = format!("{} <{}>", sender_name, self.sender);
        let request_body = SendEmailRequest {
            from: &from,
            to: vec![recipient.as_str()],
            subject,
            html: html_content,
        };
        self.http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}
