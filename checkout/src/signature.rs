//! Request signature expected by the hosted checkout
//!
//! The gateway authenticates a request by the MD5 of
//! `apiKey~merchantId~referenceCode~amount~currency`.

use std::fmt;

use crate::amount::Amount;

/// Separator between the signed fields.
pub const DELIMITER: char = '~';

/// The fields covered by a signature, in signing order.
#[derive(Clone, Copy)]
pub struct SignatureInput<'a> {
    /// Merchant API key, the signing secret
    pub api_key: &'a str,
    /// Merchant identifier
    pub merchant_id: &'a str,
    /// Merchant-side transaction reference
    pub reference_code: &'a str,
    /// Total, signed with two fraction digits
    pub amount: Amount,
    /// ISO 4217 currency code
    pub currency: &'a str,
}

impl fmt::Debug for SignatureInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureInput")
            .field("api_key", &"<redacted>")
            .field("merchant_id", &self.merchant_id)
            .field("reference_code", &self.reference_code)
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .finish()
    }
}

impl SignatureInput<'_> {
    /// The plain text that gets digested.
    pub fn plain_text(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.api_key,
            self.merchant_id,
            self.reference_code,
            self.amount,
            self.currency,
            d = DELIMITER
        )
    }

    /// Compute the signature.
    pub fn sign(&self) -> Signature {
        Signature(md5::digest_hex(&self.plain_text()))
    }
}

/// A request signature: 32 lowercase hex characters, passed on unmodified.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// The hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the hex digest.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
