//! Product catalog and its startup sanity checks

use serde::{Deserialize, Serialize};

/// A product on sale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    /// Unit price in whole pesos
    pub price: u64,
    /// Crossed-out price shown next to `price`
    #[serde(default)]
    pub old_price: Option<u64>,
    #[serde(default)]
    pub description: String,
    /// Gallery image paths, first one is the cover
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tag: String,
}

impl Product {
    fn new(
        name: &str,
        price: u64,
        old_price: Option<u64>,
        description: &str,
        images: &[&str],
        tag: &str,
    ) -> Self {
        Product {
            name: name.to_string(),
            price,
            old_price,
            description: description.to_string(),
            images: images.iter().map(|img| asset(img)).collect(),
            tag: tag.to_string(),
        }
    }
}

/// Path under which images are served.
pub fn asset(name: &str) -> String {
    format!("/assets/{}", name)
}

/// The storefront's catalog.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new(
            "Gato/Perro en porcelana con flores preservadas",
            85000,
            Some(95000),
            "Base en porcelana en forma de gato o perro con flores preservadas que duran años. \
             No necesitan agua ni sol. Disponible en 12 colores.",
            &[
                "Screenshot_2025-09-19_at_4.25.21_PM.png",
                "Screenshot_2025-09-19_at_4.25.54_PM.png",
                "Screenshot_2025-09-19_at_4.25.28_PM.png",
                "Screenshot_2025-09-19_at_4.25.12_PM.png",
            ],
            "Oferta",
        ),
        Product::new(
            "Florero 'Venus' con flores preservadas",
            109000,
            Some(115000),
            "Florero en cerámica 'Venus' con flores preservadas. Disponible en 12 colores. \
             Altura del florero 13 cm.",
            &[
                "Screenshot_2025-09-19_at_4.30.17_PM.png",
                "Screenshot_2025-09-19_at_4.30.10_PM.png",
                "Screenshot_2025-09-19_at_4.30.31_PM.png",
                "Screenshot_2025-09-19_at_4.30.41_PM.png",
            ],
            "Nuevo",
        ),
        Product::new(
            "Florero 'Artemisa' con flores preservadas",
            119000,
            Some(125000),
            "Florero en cerámica (Sentidos) con flores preservadas que duran años y no necesitan \
             agua. 12 colores disponibles. Altura del florero 16 cm.",
            &[
                "Screenshot_2025-09-19_at_4.32.50_PM.png",
                "Screenshot_2025-09-19_at_4.32.56_PM.png",
                "Screenshot_2025-09-19_at_4.33.12_PM.png",
                "Screenshot_2025-09-19_at_4.33.02_PM.png",
                "Screenshot_2025-09-19_at_4.32.42_PM.png",
            ],
            "Exclusivo",
        ),
        Product::new(
            "Centro de mesa 'Angelita'",
            98000,
            None,
            "Hortensia preservada (20 cm diámetro aprox.) en canasto artesanal con follaje. \
             Colores a elección según disponibilidad.",
            &[
                "Screenshot_2025-09-19_at_4.35.22_PM.png",
                "Screenshot_2025-09-19_at_4.35.31_PM.png",
                "Screenshot_2025-09-19_at_4.35.15_PM.png",
                "Screenshot_2025-09-19_at_4.35.10_PM.png",
            ],
            "Clásico",
        ),
        Product::new(
            "Diseño floral redondo 'Maga'",
            215000,
            None,
            "Diseño floral redondo preservado con hortensia y follaje. Colores personalizables \
             según disponibilidad. No incluye florero.",
            &[
                "Screenshot_2025-09-19_at_4.36.54_PM.png",
                "Screenshot_2025-09-19_at_4.36.45_PM.png",
            ],
            "Premium",
        ),
        Product::new(
            "Diseño floral 'Paz' mesa de recibidor",
            276000,
            None,
            "Diseño floral con flores preservadas (hortensias y rosas) y follaje. Incluye florero \
             en cerámica blanco.",
            &[
                "Screenshot_2025-09-19_at_4.37.53_PM.png",
                "Screenshot_2025-09-19_at_4.38.01_PM.png",
                "Screenshot_2025-09-19_at_4.38.07_PM.png",
                "Screenshot_2025-09-19_at_4.38.16_PM.png",
            ],
            "Elegancia",
        ),
        Product::new(
            "Base porcelana 'Slim' con flores preservadas",
            75000,
            Some(85000),
            "Base en porcelana con flores preservadas que duran años y no necesitan agua. \
             12 colores disponibles. Siguiendo las recomendaciones duran más de 2 años.",
            &[
                "Screenshot_2025-09-19_at_4.39.32_PM.png",
                "Screenshot_2025-09-19_at_4.39.37_PM.png",
                "Screenshot_2025-09-19_at_4.39.42_PM.png",
                "Screenshot_2025-09-19_at_4.39.49_PM.png",
            ],
            "Económico",
        ),
    ]
}

/// Outcome of [`smoke_check`]: the description of every failed check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SmokeReport {
    /// Number of checks run
    pub checks: usize,
    /// Descriptions of the checks that failed, in order
    pub failures: Vec<String>,
}

impl SmokeReport {
    /// Every check passed.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    fn check(&mut self, name: impl FnOnce() -> String, ok: bool) {
        self.checks += 1;
        if !ok {
            self.failures.push(name());
        }
    }
}

/// Sanity-check a catalog: it is non-empty and every product has a name, a
/// positive price and at least one image.
pub fn smoke_check(products: &[Product]) -> SmokeReport {
    let mut report = SmokeReport::default();
    report.check(|| "catalog is not empty".to_string(), !products.is_empty());

    for (i, p) in products.iter().enumerate() {
        let n = i + 1;
        report.check(|| format!("product #{} has a name", n), !p.name.trim().is_empty());
        report.check(|| format!("product #{} has a valid price", n), p.price > 0);
        report.check(|| format!("product #{} has images", n), !p.images.is_empty());
    }

    if report.is_ok() {
        log::info!("catalog smoke checks passed ({} checks)", report.checks);
    } else {
        log::warn!("catalog smoke checks failed: {:?}", report.failures);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_passes() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 7);
        let report = smoke_check(&catalog);
        assert!(report.is_ok(), "{:?}", report.failures);
        assert_eq!(report.checks, 1 + 3 * 7);
        assert_eq!(catalog[0].images[0], "/assets/Screenshot_2025-09-19_at_4.25.21_PM.png");
    }

    #[test]
    fn test_empty_catalog_fails() {
        let report = smoke_check(&[]);
        assert_eq!(report.failures, vec!["catalog is not empty".to_string()]);
    }

    #[test]
    fn test_bad_products_reported() {
        let mut catalog = default_catalog();
        catalog[1].name = "   ".to_string();
        catalog[2].price = 0;
        catalog[3].images.clear();
        let report = smoke_check(&catalog);
        assert_eq!(
            report.failures,
            vec![
                "product #2 has a name".to_string(),
                "product #3 has a valid price".to_string(),
                "product #4 has images".to_string(),
            ]
        );
    }

    #[test]
    fn test_product_from_json() {
        let p: Product = serde_json::from_str(
            r#"{"name": "Florero", "price": 1000, "oldPrice": 1200, "images": ["/assets/a.png"]}"#,
        )
        .unwrap();
        assert_eq!(p.old_price, Some(1200));
        assert!(p.tag.is_empty());
    }
}
