//! Gateway configuration
//!
//! Defaults are the public PayU Latam sandbox credentials. Real deployments
//! override them from JSON or from `DEPACORA_PAYU_*` environment variables,
//! and should compute signatures server-side.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// Prefix of the environment variables read by [`GatewayConfig::from_env`].
pub const ENV_PREFIX: &str = "DEPACORA_PAYU_";

const SANDBOX_API_KEY: &str = "4Vj8eK4rloUd272L48hsrarnUA";
const SANDBOX_MERCHANT_ID: &str = "508029";
const SANDBOX_ACCOUNT_ID: &str = "512321";
const SANDBOX_ACTION_URL: &str = "https://sandbox.checkout.payulatam.com/ppp-web-gateway-payu/";

/// Settings for the hosted WebCheckout page
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GatewayConfig {
    /// Secret used in the request signature
    pub api_key: String,
    /// Merchant identifier
    pub merchant_id: String,
    /// Account identifier
    pub account_id: String,
    /// ISO 4217 currency code
    pub currency: String,
    /// Form action of the hosted checkout
    pub action_url: String,
    /// Page the buyer returns to
    pub response_url: String,
    /// Server-to-server confirmation endpoint
    pub confirmation_url: String,
    /// Sandbox transaction flag
    pub test: bool,
}

impl GatewayConfig {
    /// Public sandbox credentials.
    pub fn sandbox() -> Self {
        GatewayConfig {
            api_key: SANDBOX_API_KEY.to_string(),
            merchant_id: SANDBOX_MERCHANT_ID.to_string(),
            account_id: SANDBOX_ACCOUNT_ID.to_string(),
            currency: "COP".to_string(),
            action_url: SANDBOX_ACTION_URL.to_string(),
            response_url: "https://example.com".to_string(),
            confirmation_url: "https://example.com/confirmation".to_string(),
            test: true,
        }
    }

    /// Parse JSON; absent keys keep their sandbox values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GatewayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sandbox defaults overridden by `DEPACORA_PAYU_*` variables.
    pub fn from_env() -> Result<Self> {
        Self::sandbox().with_env_overrides()
    }

    /// Apply `DEPACORA_PAYU_*` variables on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok())
    }

    /// Apply overrides from `lookup`, keyed by the variable name without prefix.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strings: [(&str, &mut String); 7] = [
            ("API_KEY", &mut self.api_key),
            ("MERCHANT_ID", &mut self.merchant_id),
            ("ACCOUNT_ID", &mut self.account_id),
            ("CURRENCY", &mut self.currency),
            ("ACTION_URL", &mut self.action_url),
            ("RESPONSE_URL", &mut self.response_url),
            ("CONFIRMATION_URL", &mut self.confirmation_url),
        ];
        for (key, slot) in strings {
            if let Some(value) = lookup(key) {
                log::debug!("gateway setting {}{} overridden", ENV_PREFIX, key);
                *slot = value;
            }
        }

        if let Some(value) = lookup("TEST") {
            self.test = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(CheckoutError::InvalidConfig {
                        field: "test",
                        reason: "expected 1/0 or true/false",
                    })
                }
            };
        }

        self.validate()?;
        Ok(self)
    }

    /// Check that every setting can be embedded in a signed request.
    pub fn validate(&self) -> Result<()> {
        signature_field("apiKey", &self.api_key)?;
        signature_field("merchantId", &self.merchant_id)?;
        signature_field("accountId", &self.account_id)?;

        if self.currency.len() != 3 || !self.currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(CheckoutError::InvalidConfig {
                field: "currency",
                reason: "must be three uppercase letters",
            });
        }

        for (field, url) in [
            ("actionUrl", &self.action_url),
            ("responseUrl", &self.response_url),
            ("confirmationUrl", &self.confirmation_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(CheckoutError::InvalidConfig {
                    field,
                    reason: "must be an http(s) URL",
                });
            }
        }
        Ok(())
    }
}

fn signature_field(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CheckoutError::InvalidConfig { field, reason: "must not be empty" });
    }
    if !value.is_ascii() || value.contains('~') {
        return Err(CheckoutError::InvalidConfig {
            field,
            reason: "must be ASCII without '~'",
        });
    }
    Ok(())
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::sandbox()
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("merchant_id", &self.merchant_id)
            .field("account_id", &self.account_id)
            .field("currency", &self.currency)
            .field("action_url", &self.action_url)
            .field("response_url", &self.response_url)
            .field("confirmation_url", &self.confirmation_url)
            .field("test", &self.test)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sandbox_is_valid() {
        let config = GatewayConfig::sandbox();
        config.validate().unwrap();
        assert_eq!(config.merchant_id, "508029");
        assert_eq!(config.currency, "COP");
        assert!(config.test);
    }

    #[test]
    fn test_from_json_partial() {
        let config = GatewayConfig::from_json(r#"{"merchantId": "1", "test": false}"#).unwrap();
        assert_eq!(config.merchant_id, "1");
        assert!(!config.test);
        assert_eq!(config.api_key, SANDBOX_API_KEY);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            GatewayConfig::from_json("{not json"),
            Err(CheckoutError::Json(_))
        ));
        assert!(matches!(
            GatewayConfig::from_json(r#"{"currency": "cop"}"#),
            Err(CheckoutError::InvalidConfig { field: "currency", .. })
        ));
        assert!(matches!(
            GatewayConfig::from_json(r#"{"apiKey": "a~b"}"#),
            Err(CheckoutError::InvalidConfig { field: "apiKey", .. })
        ));
        assert!(matches!(
            GatewayConfig::from_json(r#"{"actionUrl": "ftp://x"}"#),
            Err(CheckoutError::InvalidConfig { field: "actionUrl", .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [("MERCHANT_ID", "777"), ("TEST", "false")]
            .iter()
            .cloned()
            .collect();
        let config = GatewayConfig::sandbox()
            .with_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.merchant_id, "777");
        assert!(!config.test);
        assert_eq!(config.account_id, SANDBOX_ACCOUNT_ID);
    }

    #[test]
    fn test_overrides_bad_flag() {
        let err = GatewayConfig::sandbox()
            .with_overrides(|k| if k == "TEST" { Some("maybe".into()) } else { None })
            .unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidConfig { field: "test", .. }));
    }

    #[test]
    fn test_from_env() {
        // no other test reads the environment, so the variable cannot leak
        std::env::set_var("DEPACORA_PAYU_ACCOUNT_ID", "900900");
        let config = GatewayConfig::from_env();
        std::env::remove_var("DEPACORA_PAYU_ACCOUNT_ID");

        let config = config.unwrap();
        assert_eq!(config.account_id, "900900");
        assert_eq!(config.merchant_id, SANDBOX_MERCHANT_ID);
        assert_eq!(config.api_key, SANDBOX_API_KEY);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let dbg = format!("{:?}", GatewayConfig::sandbox());
        assert!(!dbg.contains(SANDBOX_API_KEY));
        assert!(dbg.contains("508029"));
    }
}
