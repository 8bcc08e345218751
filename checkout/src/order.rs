//! Buyer details, reference codes and the signed checkout parameters

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::catalog::Product;
use crate::config::GatewayConfig;
use crate::error::{CheckoutError, Result};
use crate::signature::{Signature, SignatureInput};

/// Buyer name sent when the form leaves it blank.
pub const DEFAULT_BUYER_NAME: &str = "Cliente Prueba";

/// Details typed into the order form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Buyer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

impl Buyer {
    /// Email must look like `x@y.z`; address and city are required.
    pub fn validate(&self) -> Result<()> {
        if !looks_like_email(&self.email) {
            return Err(CheckoutError::InvalidEmail(self.email.clone()));
        }
        if self.address.trim().is_empty() || self.city.trim().is_empty() {
            return Err(CheckoutError::MissingShippingAddress);
        }
        Ok(())
    }
}

/// Some line of `s` has the shape `a@b.c` with non-empty `a`, `b` and `c`.
fn looks_like_email(s: &str) -> bool {
    s.lines().any(|line| {
        line.match_indices('@').any(|(at, _)| {
            let domain = &line[at + 1..];
            at > 0
                && domain
                    .match_indices('.')
                    .any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// Merchant-side transaction reference, `DEP-<unix millis>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReferenceCode(String);

impl ReferenceCode {
    /// Reference for the current instant.
    pub fn now() -> Self {
        ReferenceCode(format!("DEP-{}", chrono::Utc::now().timestamp_millis()))
    }

    /// Wrap an existing reference; it must be non-empty ASCII without `~`.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.is_empty() || !code.is_ascii() || code.contains(crate::signature::DELIMITER) {
            return Err(CheckoutError::InvalidReference(code));
        }
        Ok(ReferenceCode(code))
    }

    /// The reference as sent to the gateway.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything posted to the hosted checkout page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutParams {
    pub action_url: String,
    pub merchant_id: String,
    pub account_id: String,
    pub description: String,
    pub reference_code: ReferenceCode,
    pub amount: Amount,
    pub tax: String,
    pub tax_return_base: String,
    pub currency: String,
    pub signature: Signature,
    pub test: bool,
    pub buyer_email: String,
    pub buyer_full_name: String,
    pub telephone: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub response_url: String,
    pub confirmation_url: String,
    /// Ordered quantity
    pub extra1: String,
}

impl CheckoutParams {
    /// Build and sign the request for `qty` units of `product`.
    ///
    /// The buyer is validated first; a quantity of zero counts as one.
    pub fn build(
        config: &GatewayConfig,
        product: &Product,
        buyer: &Buyer,
        qty: u32,
        reference: ReferenceCode,
    ) -> Result<Self> {
        buyer.validate()?;
        let qty = qty.max(1);
        let amount = Amount::from_units(product.price)
            .and_then(|unit| unit.checked_mul(qty))
            .ok_or(CheckoutError::AmountOverflow)?;

        let signature = SignatureInput {
            api_key: &config.api_key,
            merchant_id: &config.merchant_id,
            reference_code: reference.as_str(),
            amount,
            currency: &config.currency,
        }
        .sign();

        log::debug!(
            "checkout {} for {:?} x{}: {} {}",
            reference,
            product.name,
            qty,
            amount,
            config.currency
        );

        let buyer_full_name = if buyer.name.trim().is_empty() {
            DEFAULT_BUYER_NAME.to_string()
        } else {
            buyer.name.clone()
        };

        Ok(CheckoutParams {
            action_url: config.action_url.clone(),
            merchant_id: config.merchant_id.clone(),
            account_id: config.account_id.clone(),
            description: format!("{} x{}", product.name, qty),
            reference_code: reference,
            amount,
            tax: "0".to_string(),
            tax_return_base: "0".to_string(),
            currency: config.currency.clone(),
            signature,
            test: config.test,
            buyer_email: buyer.email.clone(),
            buyer_full_name,
            telephone: buyer.phone.clone(),
            shipping_address: buyer.address.clone(),
            shipping_city: buyer.city.clone(),
            response_url: config.response_url.clone(),
            confirmation_url: config.confirmation_url.clone(),
            extra1: qty.to_string(),
        })
    }
}
