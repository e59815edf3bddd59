use std::process::{Command, Stdio};
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;

use super::error::ContactError;
use super::mailto::mailto_url;
use super::payload::ContactPayload;

/// How a message left the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Accepted by the contact endpoint.
    Endpoint,
    /// Handed to the mail client. `opened` is false when no client could be
    /// launched; the link is then shown to the user instead.
    MailClient { url: String, opened: bool },
}

/// Outcome of [`ContactClient::submit`].
#[derive(Debug)]
pub struct Submission {
    pub delivery: Delivery,
    /// Endpoint error that caused the mail client fallback.
    pub fallback: Option<ContactError>,
}

/// Opens `mailto:` links.
pub trait MailClient: Send + Sync {
    fn open(&self, url: &str) -> Result<(), ContactError>;
}

/// Launches the platform URL opener.
pub struct SystemMailClient;

impl MailClient for SystemMailClient {
    fn open(&self, url: &str) -> Result<(), ContactError> {
        let opener = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        Command::new(opener)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(ContactError::MailClient)
    }
}

pub struct ContactClient {
    http: Client,
    endpoint: Option<String>,
    recipient: String,
    mail: Arc<dyn MailClient>,
}

impl ContactClient {
    pub fn new(
        endpoint: Option<String>,
        recipient: String,
        timeout: Duration,
        mail: Arc<dyn MailClient>,
    ) -> Result<Self, ContactError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ContactError::Client)?;

        Ok(Self {
            http,
            endpoint,
            recipient,
            mail,
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Deliver `payload`: endpoint first when configured, mail client otherwise
    /// or when the endpoint fails.
    pub async fn submit(&self, payload: &ContactPayload) -> Submission {
        let fallback = match &self.endpoint {
            Some(endpoint) => match self.post(endpoint, payload).await {
                Ok(()) => {
                    tracing::info!(endpoint = %endpoint, "Contact message delivered");
                    return Submission {
                        delivery: Delivery::Endpoint,
                        fallback: None,
                    };
                }
                Err(err) => {
                    tracing::warn!(
                        endpoint = %endpoint,
                        error = %err,
                        "Contact endpoint failed, falling back to mail client"
                    );
                    Some(err)
                }
            },
            None => None,
        };

        Submission {
            delivery: self.hand_off(payload),
            fallback,
        }
    }

    async fn post(&self, endpoint: &str, payload: &ContactPayload) -> Result<(), ContactError> {
        let response = self
            .http
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(ContactError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    fn hand_off(&self, payload: &ContactPayload) -> Delivery {
        let url = mailto_url(&self.recipient, payload);
        let opened = match self.mail.open(&url) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Mail client handoff failed");
                false
            }
        };
        Delivery::MailClient { url, opened }
    }
}
