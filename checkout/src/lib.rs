//! # Depacora checkout
//!
//! Builds the signed request that hands a storefront order to the PayU
//! WebCheckout hosted page.
//!
//! The request signature is the MD5 of
//! `apiKey~merchantId~referenceCode~amount~currency`, computed by the
//! [`md5`] crate. Defaults are the public sandbox credentials; production
//! signing belongs on a server.
//!
//! ## Example
//!
//! ```
//! use checkout::{default_catalog, prepare_checkout, render_auto_submit_form, Buyer, GatewayConfig};
//!
//! let config = GatewayConfig::sandbox();
//! let catalog = default_catalog();
//! let buyer = Buyer {
//!     email: "ana@example.com".to_string(),
//!     address: "Calle 1 #2-3".to_string(),
//!     city: "Medellín".to_string(),
//!     ..Buyer::default()
//! };
//!
//! let params = prepare_checkout(&config, &catalog[0], &buyer, "2").unwrap();
//! assert_eq!(params.amount.to_string(), "170000.00");
//! assert_eq!(params.signature.as_str().len(), 32);
//!
//! let html = render_auto_submit_form(&params);
//! assert!(html.contains("name=\"signature\""));
//! ```

pub mod amount;
pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod order;
pub mod signature;

pub use amount::{format_cop, parse_quantity, Amount};
pub use catalog::{default_catalog, smoke_check, Product, SmokeReport};
pub use config::GatewayConfig;
pub use error::{CheckoutError, Result};
pub use form::{render_auto_submit_form, urlencoded_body};
pub use order::{Buyer, CheckoutParams, ReferenceCode};
pub use signature::{Signature, SignatureInput};

/// Sign an order for `product` with a fresh reference code.
///
/// `qty` is the raw quantity field; see [`parse_quantity`].
pub fn prepare_checkout(
    config: &GatewayConfig,
    product: &Product,
    buyer: &Buyer,
    qty: &str,
) -> Result<CheckoutParams> {
    CheckoutParams::build(config, product, buyer, parse_quantity(qty), ReferenceCode::now())
}
