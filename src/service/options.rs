use std::sync::Arc;

use crate::{
    constants::{
        DEFAULT_SENDER_NAME, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PASSWORD, DEFAULT_SMTP_PORT,
        DEFAULT_SMTP_USERNAME, SENDER_NAME_KEY, SMTP_AUTH_ENABLED_KEY, SMTP_HOST_KEY,
        SMTP_PASSWORD_KEY, SMTP_PORT_KEY, SMTP_STARTTLS_ENABLED_KEY, SMTP_USERNAME_KEY,
    },
    properties::PropertyStore,
};

/// SMTP configuration surface consumed by the mail dispatcher. Every
/// accessor is total: a missing or malformed property degrades to its
/// documented default instead of erroring, so a partially initialized store
/// still yields usable settings.
pub trait EmailOptions: Send + Sync {
    /// Display name shown as the sender of outgoing mail.
    fn system_sender_name(&self) -> String;

    fn smtp_hostname(&self) -> String;

    /// Numeric text; parsing is left to the transport layer.
    fn smtp_port(&self) -> String;

    fn smtp_username(&self) -> String;

    fn smtp_password(&self) -> String;

    fn is_smtp_auth_enabled(&self) -> bool;

    fn is_starttls_enabled(&self) -> bool;
}

/// Resolves each option from the injected property store on every call.
/// Nothing is cached, so store mutations are reflected immediately.
pub struct EmailOptionsImpl {
    properties: Arc<dyn PropertyStore>,
}

impl EmailOptionsImpl {
    pub fn new(properties: Arc<dyn PropertyStore>) -> Self {
        Self { properties }
    }

    fn string_property(&self, key: &str, default: &str) -> String {
        self.properties
            .property(key)
            .map(|value| value.as_text())
            .unwrap_or_else(|| default.to_string())
    }

    fn bool_property(&self, key: &str) -> bool {
        self.properties
            .property(key)
            .map(|value| value.as_bool())
            .unwrap_or(false)
    }
}

impl EmailOptions for EmailOptionsImpl {
    fn system_sender_name(&self) -> String {
        self.string_property(SENDER_NAME_KEY, DEFAULT_SENDER_NAME)
    }

    fn smtp_hostname(&self) -> String {
        self.string_property(SMTP_HOST_KEY, DEFAULT_SMTP_HOST)
    }

    fn smtp_port(&self) -> String {
        self.string_property(SMTP_PORT_KEY, DEFAULT_SMTP_PORT)
    }

    fn smtp_username(&self) -> String {
        self.string_property(SMTP_USERNAME_KEY, DEFAULT_SMTP_USERNAME)
    }

    fn smtp_password(&self) -> String {
        self.string_property(SMTP_PASSWORD_KEY, DEFAULT_SMTP_PASSWORD)
    }

    fn is_smtp_auth_enabled(&self) -> bool {
        self.bool_property(SMTP_AUTH_ENABLED_KEY)
    }

    fn is_starttls_enabled(&self) -> bool {
        self.bool_property(SMTP_STARTTLS_ENABLED_KEY)
    }
}
