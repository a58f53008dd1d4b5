use std::{env, sync::Arc};

use email_options::{
    constants, EmailOptions, EmailOptionsImpl, EnvPropertyStore, InMemoryPropertyStore,
    PropertyStore, PropertyValue,
};
use serde_json::json;

#[test]
fn json_document_populates_the_store() {
    let store = Arc::new(InMemoryPropertyStore::new());
    let options = EmailOptionsImpl::new(store.clone());

    store
        .load_json(json!({
            "it.water.mail.sender.name": "Sender",
            "it.water.mail.smtp.host": "senderHost.water.it",
            "it.water.mail.smtp.port": 25,
            "it.water.mail.smtp.auth.enabled": "false",
            "it.water.mail.smtp.start-ttls.enabled": true,
        }))
        .expect("object document loads");

    assert_eq!(options.system_sender_name(), "Sender");
    assert_eq!(options.smtp_hostname(), "senderHost.water.it");
    // JSON numbers keep their textual form.
    assert_eq!(options.smtp_port(), "25");
    assert!(!options.is_smtp_auth_enabled());
    assert!(options.is_starttls_enabled());
    // Keys the document did not mention keep their defaults.
    assert_eq!(options.smtp_username(), "-");
    assert_eq!(options.smtp_password(), "-");
}

#[test]
fn json_load_rejects_non_object_documents() {
    let store = InMemoryPropertyStore::new();

    assert!(store.load_json(json!(["not", "an", "object"])).is_err());
    assert!(store.load_json(json!("bare string")).is_err());
}

#[test]
fn json_load_skips_members_without_a_usable_scalar() {
    let store = Arc::new(InMemoryPropertyStore::new());
    let options = EmailOptionsImpl::new(store.clone());

    store
        .load_json(json!({
            "it.water.mail.smtp.host": null,
            "it.water.mail.smtp.port": {"nested": true},
            "it.water.mail.smtp.username": ["username"],
        }))
        .expect("object document loads");

    assert_eq!(options.smtp_hostname(), "localhost");
    assert_eq!(options.smtp_port(), "587");
    assert_eq!(options.smtp_username(), "-");
}

#[test]
fn property_value_deserializes_untagged() {
    let text: PropertyValue = serde_json::from_str("\"587\"").expect("string value");
    assert_eq!(text, PropertyValue::String("587".to_string()));

    let flag: PropertyValue = serde_json::from_str("true").expect("bool value");
    assert_eq!(flag, PropertyValue::Bool(true));
}

// Environment handling lives in a single test so parallel test threads never
// race on process-wide variables.
#[test]
fn env_store_resolves_normalized_variables() {
    dotenvy::dotenv().ok();
    let store = Arc::new(EnvPropertyStore::new());
    let options = EmailOptionsImpl::new(store.clone());

    env::remove_var("IT_WATER_MAIL_SMTP_HOST");
    env::remove_var("IT_WATER_MAIL_SMTP_PORT");
    env::remove_var("IT_WATER_MAIL_SMTP_START_TTLS_ENABLED");

    assert_eq!(options.smtp_hostname(), "localhost");
    assert!(!options.is_starttls_enabled());

    // Dots and dashes in the key map to underscores in the variable name.
    env::set_var("IT_WATER_MAIL_SMTP_HOST", "relay.water.it");
    env::set_var("IT_WATER_MAIL_SMTP_START_TTLS_ENABLED", "TRUE");
    assert_eq!(options.smtp_hostname(), "relay.water.it");
    assert!(options.is_starttls_enabled());

    // Wrapping quotes and surrounding whitespace are stripped.
    env::set_var("IT_WATER_MAIL_SMTP_HOST", "  \"relay.water.it\"  ");
    assert_eq!(options.smtp_hostname(), "relay.water.it");

    // Blank or quote-only values count as absent.
    env::set_var("IT_WATER_MAIL_SMTP_PORT", "   ");
    assert_eq!(options.smtp_port(), "587");
    env::set_var("IT_WATER_MAIL_SMTP_PORT", "\"\"");
    assert_eq!(options.smtp_port(), "587");

    assert_eq!(
        store.property(constants::SMTP_HOST_KEY),
        Some(PropertyValue::String("relay.water.it".to_string()))
    );

    env::remove_var("IT_WATER_MAIL_SMTP_HOST");
    env::remove_var("IT_WATER_MAIL_SMTP_PORT");
    env::remove_var("IT_WATER_MAIL_SMTP_START_TTLS_ENABLED");
}
