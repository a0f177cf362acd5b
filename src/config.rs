use std::net::IpAddr;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,\
https://my-portfolio-server-nu-eosin.vercel.app,\
https://astounding-griffin-1653d5.netlify.app";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_body_size: usize,
    pub log_level: String,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub tls: TlsMode,
    pub user: String,
    pub pass: String,
    /// Display name on the sender mailbox. The address is always `user`.
    pub from_name: String,
    /// Where contact notifications are delivered.
    pub owner: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TlsMode {
    StartTls,
    Tls,
    None,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = env_or("PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS));

        let max_body_size: usize = env_or("MAX_BODY_SIZE", "102400")
            .parse()
            .map_err(|e| format!("Invalid MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("LOG_LEVEL", "info");

        let smtp = SmtpConfig::from_env()?;

        Ok(Config {
            database_url,
            host,
            port,
            cors_origins,
            max_body_size,
            log_level,
            smtp,
        })
    }
}

impl SmtpConfig {
    fn from_env() -> Result<Self, String> {
        let user = env_required("EMAIL_USER")?;
        let pass = env_required("EMAIL_PASS")?;

        let port: u16 = env_or("SMTP_PORT", "587")
            .parse()
            .map_err(|e| format!("Invalid SMTP_PORT: {e}"))?;

        let tls = match env_or("SMTP_TLS", "starttls").as_str() {
            "starttls" => TlsMode::StartTls,
            "tls" => TlsMode::Tls,
            "none" => TlsMode::None,
            other => return Err(format!("Invalid SMTP_TLS '{other}': expected starttls, tls or none")),
        };

        Ok(SmtpConfig {
            host: env_or("SMTP_HOST", "smtp.gmail.com"),
            port,
            tls,
            owner: env_or("CONTACT_OWNER_EMAIL", &user),
            from_name: env_or("CONTACT_FROM_NAME", "Portfolio Contact"),
            user,
            pass,
        })
    }
}

/// Split a comma-separated origin list, dropping blanks and trailing slashes.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
