use carhire_core::settings::SiteContact;

/// Server configuration loaded from environment variables.
///
/// All fields except the session secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for background tasks on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Admin session cookie settings.
    pub session: SessionConfig,
    /// Contact details used until the operator stores their own settings.
    pub site: SiteContact,
}

/// Admin session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server-side key mixed into every stored token hash.
    pub secret: String,
    /// Session lifetime in hours (default: 168, one week).
    pub ttl_hours: i64,
    /// Add the `Secure` attribute to the cookie (default: `false`).
    pub cookie_secure: bool,
}

/// Default session lifetime in hours.
const DEFAULT_SESSION_TTL_HOURS: i64 = 168;

/// Longest accepted session lifetime in hours (ten years). Keeps expiry
/// arithmetic on timestamps and cookie `Max-Age` far from overflow.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365 * 10;

impl SessionConfig {
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.ttl_hours)
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_hours * 3600
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                       |
    /// | `SESSION_SECRET`         | **required**               |
    /// | `SESSION_TTL_HOURS`      | `168`                      |
    /// | `SESSION_COOKIE_SECURE`  | `false`                    |
    /// | `SITE_NAME`              | `RC Veículos`              |
    /// | `CONTACT_WHATSAPP_E164`  | empty                      |
    /// | `CONTACT_EMAIL`          | empty                      |
    /// | `CONTACT_PHONE_DISPLAY`  | empty                      |
    /// | `CONTACT_CITY`           | `São Tomé`                 |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is missing or empty, a numeric variable
    /// does not parse, or `SESSION_TTL_HOURS` is outside
    /// `1..=MAX_SESSION_TTL_HOURS`. Misconfiguration should stop the server
    /// at startup.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let host = or("HOST", "0.0.0.0");

        let port: u16 = or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = or("SHUTDOWN_TIMEOUT_SECS", "30")
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let secret = var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.trim().is_empty(), "SESSION_SECRET must not be empty");

        let ttl_hours: i64 = or("SESSION_TTL_HOURS", &DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");
        assert!(ttl_hours > 0, "SESSION_TTL_HOURS must be positive");
        assert!(
            ttl_hours <= MAX_SESSION_TTL_HOURS,
            "SESSION_TTL_HOURS must be at most {MAX_SESSION_TTL_HOURS}"
        );

        let cookie_secure = matches!(
            or("SESSION_COOKIE_SECURE", "false").to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        );

        let defaults = SiteContact::default();
        let site = SiteContact {
            site_name: or("SITE_NAME", &defaults.site_name),
            whatsapp_e164: or("CONTACT_WHATSAPP_E164", &defaults.whatsapp_e164),
            email: or("CONTACT_EMAIL", &defaults.email),
            phone_display: or("CONTACT_PHONE_DISPLAY", &defaults.phone_display),
            city: or("CONTACT_CITY", &defaults.city),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            session: SessionConfig {
                secret,
                ttl_hours,
                cookie_secure,
            },
            site,
        }
    }
}
