//! Hosted-form rendering
//!
//! The gateway receives a plain `POST` of the checkout fields, either as an
//! auto-submitting HTML form or as an urlencoded body.

use crate::order::CheckoutParams;

/// Id of the rendered form element.
pub const FORM_ID: &str = "payuForm";

impl CheckoutParams {
    /// Form fields in the order the hosted checkout receives them.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("merchantId", self.merchant_id.clone()),
            ("accountId", self.account_id.clone()),
            ("description", self.description.clone()),
            ("referenceCode", self.reference_code.to_string()),
            ("amount", self.amount.to_string()),
            ("tax", self.tax.clone()),
            ("taxReturnBase", self.tax_return_base.clone()),
            ("currency", self.currency.clone()),
            ("signature", self.signature.to_string()),
            ("test", if self.test { "1" } else { "0" }.to_string()),
            ("buyerEmail", self.buyer_email.clone()),
            ("buyerFullName", self.buyer_full_name.clone()),
            ("telephone", self.telephone.clone()),
            ("shippingAddress", self.shipping_address.clone()),
            ("shippingCity", self.shipping_city.clone()),
            ("responseUrl", self.response_url.clone()),
            ("confirmationUrl", self.confirmation_url.clone()),
            ("extra1", self.extra1.clone()),
        ]
    }
}

/// Hidden form posting `params` to the gateway, submitted on load.
pub fn render_auto_submit_form(params: &CheckoutParams) -> String {
    let mut out = format!(
        "<form id=\"{}\" method=\"post\" action=\"{}\" hidden>\n",
        FORM_ID,
        escape_html(&params.action_url)
    );
    for (name, value) in params.fields() {
        out.push_str(&format!(
            "  <input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
            name,
            escape_html(&value)
        ));
    }
    out.push_str("</form>\n");
    out.push_str(&format!(
        "<script>document.getElementById(\"{}\").submit();</script>\n",
        FORM_ID
    ));
    out
}

/// `application/x-www-form-urlencoded` body of the checkout fields.
pub fn urlencoded_body(params: &CheckoutParams) -> String {
    let mut out = String::new();
    for (i, (name, value)) in params.fields().iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        encode_component(&mut out, name);
        out.push('=');
        encode_component(&mut out, value);
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn encode_component(out: &mut String, s: &str) {
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::config::GatewayConfig;
    use crate::order::{Buyer, ReferenceCode};

    fn params() -> CheckoutParams {
        let buyer = Buyer {
            name: "Ana <Ruiz>".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            address: "Calle 1 #2-3".to_string(),
            city: "Bogotá".to_string(),
        };
        let catalog = default_catalog();
        let reference = ReferenceCode::new("DEP-1700000000000").unwrap();
        CheckoutParams::build(&GatewayConfig::sandbox(), &catalog[1], &buyer, 1, reference)
            .unwrap()
    }

    #[test]
    fn test_field_order() {
        let names: Vec<&str> = params().fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "merchantId",
                "accountId",
                "description",
                "referenceCode",
                "amount",
                "tax",
                "taxReturnBase",
                "currency",
                "signature",
                "test",
                "buyerEmail",
                "buyerFullName",
                "telephone",
                "shippingAddress",
                "shippingCity",
                "responseUrl",
                "confirmationUrl",
                "extra1",
            ]
        );
    }

    #[test]
    fn test_field_values() {
        let p = params();
        let fields = p.fields();
        let get = |name: &str| {
            fields
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("amount"), "109000.00");
        assert_eq!(get("test"), "1");
        assert_eq!(get("signature"), p.signature.as_str());
        assert_eq!(get("description"), "Florero 'Venus' con flores preservadas x1");
    }

    #[test]
    fn test_form_is_escaped() {
        let html = render_auto_submit_form(&params());
        assert!(html.contains(r#"action="https://sandbox.checkout.payulatam.com/ppp-web-gateway-payu/""#));
        assert!(html.contains(r#"name="buyerFullName" value="Ana &lt;Ruiz&gt;""#));
        assert!(html.contains("Florero &#39;Venus&#39;"));
        assert!(html.starts_with(r#"<form id="payuForm" method="post" "#));
        assert!(html.ends_with("</form>\n<script>document.getElementById(\"payuForm\").submit();</script>\n"));
        assert_eq!(html.matches("<input").count(), 18);
    }

    #[test]
    fn test_urlencoded_body() {
        let body = urlencoded_body(&params());
        assert!(body.starts_with("merchantId=508029&accountId=512321&"));
        assert!(body.contains("&shippingAddress=Calle+1+%232-3&"));
        assert!(body.contains("&shippingCity=Bogot%C3%A1&"));
        assert!(body.ends_with("&extra1=1"));
        assert!(body.contains("&buyerFullName=Ana+%3CRuiz%3E&"));
    }
}
