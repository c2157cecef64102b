//! Contact-form message formatting and the messaging relay endpoint.
//!
//! Submissions are delivered through a third-party WhatsApp relay. The
//! relay credential necessarily ships in client-visible code, so the
//! submitter refuses to send anything while the placeholder key is still
//! in place rather than leak a broken request.

use crate::tools::encode_uri_component;
use std::fmt;

/// Value the deployment must replace before the form can send.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// Relay account used to deliver contact messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Destination number, kept in the relay's expected `+CC...` form.
    pub phone: &'static str,
    pub api_key: &'static str,
}

impl RelayConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key != PLACEHOLDER_API_KEY
    }
}

/// Deployment credentials.
pub const RELAY: RelayConfig = RelayConfig {
    phone: "+51990473216",
    api_key: PLACEHOLDER_API_KEY,
};

/// Failures on the submission path. Display strings are the user-facing
/// alert texts; the distinct configuration message tells the site owner
/// apart from the site visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    NotConfigured,
    MissingFields,
    Transport,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::NotConfigured => write!(
                f,
                "ERROR: Falta configurar la API Key del servicio de mensajes."
            ),
            ContactError::MissingFields => write!(f, "Por favor completa todos los campos."),
            ContactError::Transport => write!(
                f,
                "Hubo un error al enviar el mensaje. Inténtalo de nuevo."
            ),
        }
    }
}

impl std::error::Error for ContactError {}

/// A validated contact-form submission. All four fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    /// Build from raw field values, trimming whitespace; any empty field
    /// rejects the whole submission.
    pub fn new(name: &str, email: &str, phone: &str, message: &str) -> Result<Self, ContactError> {
        let fields = [name.trim(), email.trim(), phone.trim(), message.trim()];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ContactError::MissingFields);
        }
        let [name, email, phone, message] = fields;
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        })
    }

    /// Message template delivered to the relay.
    pub fn to_text(&self) -> String {
        format!(
            "Nuevo Contacto Web:\nNombre: {}\nEmail: {}\nCelular: {}\nMensaje: {}",
            self.name, self.email, self.phone, self.message
        )
    }

    /// Full relay request URL for this submission.
    pub fn relay_url(&self, relay: &RelayConfig) -> Result<String, ContactError> {
        if !relay.is_configured() {
            return Err(ContactError::NotConfigured);
        }
        Ok(format!(
            "https://api.callmebot.com/whatsapp.php?phone={}&text={}&apikey={}",
            relay.phone,
            encode_uri_component(&self.to_text()),
            relay.api_key
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIGURED: RelayConfig = RelayConfig {
        phone: "+51990473216",
        api_key: "abc123",
    };

    #[test]
    fn requires_every_field() {
        assert!(ContactMessage::new("Ana", "ana@mail.com", "999", "Hola").is_ok());
        for (name, email, phone, message) in [
            ("", "ana@mail.com", "999", "Hola"),
            ("Ana", "  ", "999", "Hola"),
            ("Ana", "ana@mail.com", "", "Hola"),
            ("Ana", "ana@mail.com", "999", "\n"),
        ] {
            assert_eq!(
                ContactMessage::new(name, email, phone, message),
                Err(ContactError::MissingFields)
            );
        }
    }

    #[test]
    fn fields_are_trimmed() {
        let msg = ContactMessage::new(" Ana ", "ana@mail.com", "999", " Hola ").unwrap();
        assert_eq!(msg.name, "Ana");
        assert_eq!(msg.message, "Hola");
    }

    #[test]
    fn message_template() {
        let msg = ContactMessage::new("Ana", "ana@mail.com", "999", "Hola").unwrap();
        assert_eq!(
            msg.to_text(),
            "Nuevo Contacto Web:\nNombre: Ana\nEmail: ana@mail.com\nCelular: 999\nMensaje: Hola"
        );
    }

    #[test]
    fn placeholder_key_refuses_to_build_url() {
        let msg = ContactMessage::new("Ana", "ana@mail.com", "999", "Hola").unwrap();
        assert_eq!(msg.relay_url(&RELAY), Err(ContactError::NotConfigured));
        assert!(!RELAY.is_configured());
        assert!(CONFIGURED.is_configured());
    }

    #[test]
    fn relay_url_encodes_the_template() {
        let msg = ContactMessage::new("Ana", "ana@mail.com", "999", "Hola").unwrap();
        let url = msg.relay_url(&CONFIGURED).unwrap();
        assert!(url.starts_with(
            "https://api.callmebot.com/whatsapp.php?phone=+51990473216&text=Nuevo%20Contacto%20Web%3A%0A"
        ));
        assert!(url.ends_with("&apikey=abc123"));
        assert!(url.contains("Nombre%3A%20Ana"));
    }
}
