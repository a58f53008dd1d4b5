// Property keys are a compatibility surface: external configuration sources
// address them by these exact strings.
pub const SENDER_NAME_KEY: &str = "it.water.mail.sender.name";
pub const SMTP_HOST_KEY: &str = "it.water.mail.smtp.host";
pub const SMTP_PORT_KEY: &str = "it.water.mail.smtp.port";
pub const SMTP_USERNAME_KEY: &str = "it.water.mail.smtp.username";
pub const SMTP_PASSWORD_KEY: &str = "it.water.mail.smtp.password";
pub const SMTP_AUTH_ENABLED_KEY: &str = "it.water.mail.smtp.auth.enabled";
pub const SMTP_STARTTLS_ENABLED_KEY: &str = "it.water.mail.smtp.start-ttls.enabled";

// Fallbacks applied when a key is absent from the property store. Boolean
// options default to false and carry no constant here.
pub const DEFAULT_SENDER_NAME: &str = "Water-Application";
pub const DEFAULT_SMTP_HOST: &str = "localhost";
pub const DEFAULT_SMTP_PORT: &str = "587";
pub const DEFAULT_SMTP_USERNAME: &str = "-";
pub const DEFAULT_SMTP_PASSWORD: &str = "-";
