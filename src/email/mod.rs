pub mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{SmtpConfig, TlsMode};

pub use templates::ContactEmail;

/// Delivers contact notifications to the site owner.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, email: &ContactEmail) -> Result<(), String>;
}

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    owner: Mailbox,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let address: Address = config
            .user
            .parse()
            .map_err(|e| format!("Invalid EMAIL_USER address: {e}"))?;
        let from = Mailbox::new(Some(config.from_name.clone()), address);

        let owner: Mailbox = config
            .owner
            .parse()
            .map_err(|e| format!("Invalid owner address: {e}"))?;

        let transport = build_smtp_transport(config)?;

        Ok(Self {
            transport,
            from,
            owner,
        })
    }

    /// Open a connection to the relay and authenticate.
    pub async fn verify(&self) -> Result<(), String> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err("SMTP server did not accept the connection".to_string()),
            Err(e) => Err(format!("SMTP connection failed: {e}")),
        }
    }

    async fn send_text(&self, to: &Mailbox, subject: &str, body: String) -> Result<(), String> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}

#[async_trait]
impl Notifier for Mailer {
    async fn notify(&self, email: &ContactEmail) -> Result<(), String> {
        self.send_text(&self.owner, &email.subject, email.body.clone())
            .await
    }
}

fn build_smtp_transport(config: &SmtpConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>, String> {
    let creds = Credentials::new(config.user.clone(), config.pass.clone());

    let transport = match config.tls {
        TlsMode::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| format!("SMTP relay error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build(),
        TlsMode::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .credentials(creds)
            .build(),
        TlsMode::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP starttls error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build(),
    };

    Ok(transport)
}
