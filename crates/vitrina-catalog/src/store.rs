//! The in-memory catalog store.
//!
//! The catalog is populated once at process start from a static definition
//! and never mutated. All accessors are read-only and return products in
//! seed order.

use std::collections::BTreeMap;

use crate::product::Product;

/// A fixed, immutable, ordered sequence of product records.
///
/// Constructor-injected wherever catalog access is needed; holding it behind
/// an `Arc` is enough for concurrent use because no write path exists.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Creates a catalog from an explicit product list.
    ///
    /// Ids must be unique; this is an invariant of the seed data and of any
    /// test fixture handed in here.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<u64> = products.iter().map(|p| p.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "catalog contains duplicate product ids"
        );
        Self { products }
    }

    /// Returns every product, in seed order. The order is identical on
    /// every call.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true when the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a single product by numeric id.
    #[must_use]
    pub fn by_id(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a single product by a textual id.
    ///
    /// The id is normalized to an integer before comparison; non-numeric
    /// input behaves as "not found" rather than erroring.
    #[must_use]
    pub fn by_raw_id(&self, raw: &str) -> Option<&Product> {
        raw.trim().parse::<u64>().ok().and_then(|id| self.by_id(id))
    }

    /// Looks up multiple products by id.
    ///
    /// The result is a subsequence of the catalog: matching entries keep
    /// catalog order (not request order), and ids with no match are
    /// silently omitted.
    #[must_use]
    pub fn by_ids(&self, ids: &[u64]) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect()
    }

    /// Builds the static seed catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(vec![
            product(
                1,
                "iPhone 15 Pro",
                999.99,
                "El iPhone más avanzado con chip A17 Pro y cámara de 48MP",
                "https://example.com/images/iphone15pro.jpg",
                4.8,
                &[
                    ("Pantalla", "6.1 pulgadas Super Retina XDR"),
                    ("Procesador", "A17 Pro"),
                    ("Cámara", "48MP principal + 12MP ultra gran angular"),
                    ("Almacenamiento", "128GB/256GB/512GB/1TB"),
                    ("Batería", "Hasta 23 horas de reproducción de video"),
                ],
            ),
            product(
                2,
                "MacBook Air M2",
                1199.99,
                "Laptop ultradelgada con chip M2 y pantalla Liquid Retina de 13.6 pulgadas",
                "https://example.com/images/macbook-air-m2.jpg",
                4.7,
                &[
                    ("Pantalla", "13.6 pulgadas Liquid Retina"),
                    ("Procesador", "Apple M2"),
                    ("Memoria", "8GB/16GB/24GB RAM unificada"),
                    ("Almacenamiento", "256GB/512GB/1TB/2TB SSD"),
                    ("Batería", "Hasta 18 horas de duración"),
                ],
            ),
            product(
                3,
                "Samsung Galaxy S24 Ultra",
                1299.99,
                "Smartphone premium con S Pen y cámara de 200MP",
                "https://example.com/images/galaxy-s24-ultra.jpg",
                4.6,
                &[
                    ("Pantalla", "6.8 pulgadas Dynamic AMOLED 2X"),
                    ("Procesador", "Snapdragon 8 Gen 3"),
                    ("Cámara", "200MP principal + 50MP periscope + 10MP teleobjetivo"),
                    ("Almacenamiento", "256GB/512GB/1TB"),
                    ("Batería", "5000mAh con carga rápida de 45W"),
                ],
            ),
            product(
                4,
                "Sony WH-1000XM5",
                399.99,
                "Auriculares inalámbricos con cancelación de ruido líder en la industria",
                "https://example.com/images/sony-wh1000xm5.jpg",
                4.9,
                &[
                    ("Tipo", "Supraaurales inalámbricos"),
                    ("Cancelación de ruido", "Sí, con procesador V1"),
                    ("Autonomía", "Hasta 30 horas"),
                    ("Conexión", "Bluetooth 5.2, NFC"),
                    ("Micrófono", "8 micrófonos para llamadas claras"),
                ],
            ),
            product(
                5,
                "iPad Pro 12.9",
                1099.99,
                "Tablet profesional con chip M2 y pantalla Liquid Retina XDR",
                "https://example.com/images/ipad-pro-12-9.jpg",
                4.8,
                &[
                    ("Pantalla", "12.9 pulgadas Liquid Retina XDR"),
                    ("Procesador", "Apple M2"),
                    ("Cámara", "12MP gran angular + 10MP ultra gran angular"),
                    ("Almacenamiento", "128GB/256GB/512GB/1TB/2TB"),
                    ("Conexión", "USB-C con Thunderbolt 4"),
                ],
            ),
            product(
                6,
                "Dell XPS 13",
                999.99,
                "Laptop ultrabook con pantalla InfinityEdge y procesador Intel Core i7",
                "https://example.com/images/dell-xps-13.jpg",
                4.5,
                &[
                    ("Pantalla", "13.4 pulgadas FHD+ InfinityEdge"),
                    ("Procesador", "Intel Core i7-1360P"),
                    ("Memoria", "16GB LPDDR5"),
                    ("Almacenamiento", "512GB SSD PCIe"),
                    ("Batería", "Hasta 12 horas de duración"),
                ],
            ),
            product(
                7,
                "AirPods Pro 2",
                249.99,
                "Auriculares inalámbricos con cancelación de ruido adaptativa",
                "https://example.com/images/airpods-pro-2.jpg",
                4.7,
                &[
                    ("Tipo", "Intraaurales inalámbricos"),
                    ("Cancelación de ruido", "Adaptativa con chip H2"),
                    ("Autonomía", "Hasta 6 horas + 24 horas con estuche"),
                    ("Conexión", "Bluetooth 5.3"),
                    ("Resistencia", "IPX4 contra sudor y agua"),
                ],
            ),
            product(
                8,
                "Nintendo Switch OLED",
                349.99,
                "Consola híbrida con pantalla OLED de 7 pulgadas",
                "https://example.com/images/nintendo-switch-oled.jpg",
                4.6,
                &[
                    ("Pantalla", "7 pulgadas OLED"),
                    ("Modos", "TV, sobremesa y portátil"),
                    ("Almacenamiento", "64GB (expandible con microSD)"),
                    ("Batería", "4.5-9 horas según el juego"),
                    ("Joy-Con", "Incluye Joy-Con izquierdo y derecho"),
                ],
            ),
            product(
                9,
                "PlayStation 5",
                499.99,
                "Consola de videojuegos de nueva generación con SSD ultrarrápido",
                "https://example.com/images/playstation-5.jpg",
                4.8,
                &[
                    ("Procesador", "AMD Zen 2 personalizado"),
                    ("GPU", "AMD RDNA 2 personalizada"),
                    ("Almacenamiento", "825GB SSD NVMe"),
                    ("Resolución", "Hasta 4K a 120fps"),
                    ("Ray Tracing", "Soporte completo"),
                ],
            ),
            product(
                10,
                "Apple Watch Series 9",
                399.99,
                "Reloj inteligente con chip S9 y pantalla Always-On Retina",
                "https://example.com/images/apple-watch-series-9.jpg",
                4.7,
                &[
                    ("Pantalla", "45mm Always-On Retina"),
                    ("Procesador", "S9 SiP"),
                    ("Resistencia", "WR50 (hasta 50 metros)"),
                    ("Batería", "Hasta 18 horas de duración"),
                    ("Sensores", "ECG, oxígeno en sangre, temperatura"),
                ],
            ),
        ])
    }
}

fn product(
    id: u64,
    name: &str,
    price: f64,
    description: &str,
    image_url: &str,
    rating: f64,
    specs: &[(&str, &str)],
) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        description: description.to_string(),
        image_url: image_url.to_string(),
        rating,
        specs: specs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_ten_unique_products() {
        let catalog = ProductCatalog::seed();
        assert_eq!(catalog.len(), 10);

        let mut ids: Vec<u64> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_order_is_stable() {
        let catalog = ProductCatalog::seed();
        let first: Vec<u64> = catalog.products().iter().map(|p| p.id).collect();
        let second: Vec<u64> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        assert_eq!(first, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_by_id() {
        let catalog = ProductCatalog::seed();
        assert_eq!(catalog.by_id(4).map(|p| p.name.as_str()), Some("Sony WH-1000XM5"));
        assert!(catalog.by_id(999).is_none());
    }

    #[test]
    fn test_by_raw_id_normalizes_text() {
        let catalog = ProductCatalog::seed();
        assert!(catalog.by_raw_id("1").is_some());
        assert!(catalog.by_raw_id(" 2 ").is_some());
        // Non-numeric input is "not found", never an error.
        assert!(catalog.by_raw_id("abc").is_none());
        assert!(catalog.by_raw_id("1.5").is_none());
        assert!(catalog.by_raw_id("-1").is_none());
    }

    #[test]
    fn test_by_ids_preserves_catalog_order_and_drops_unmatched() {
        let catalog = ProductCatalog::seed();

        // Request order is irrelevant; catalog order wins.
        let found = catalog.by_ids(&[9, 2, 5]);
        let ids: Vec<u64> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);

        // Unmatched ids are silently omitted.
        let found = catalog.by_ids(&[1, 999_999]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }
}
