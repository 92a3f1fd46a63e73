//! Mock catalog generation.
//!
//! Expands the category dictionaries into one product per
//! (category, product type, brand) triple. The triple order is fixed; price,
//! rating, stock, discount, freshness and creation date are drawn from the
//! supplied random source, so a seeded RNG reproduces a catalog exactly.

use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::catalog::{CatalogDictionary, CategoryDictionary, Product, Rating};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Probability that a product is discounted.
pub const DISCOUNT_PROBABILITY: f64 = 0.2;
/// Discount percentages drawn for discounted products.
pub const DISCOUNT_PERCENT_RANGE: RangeInclusive<u8> = 10..=49;
/// Probability that a product carries the "new" badge.
pub const NEW_PRODUCT_PROBABILITY: f64 = 0.1;
/// Units in stock.
pub const STOCK_RANGE: RangeInclusive<u32> = 1..=100;
/// Products are created up to this many days before `now` (exclusive).
pub const CREATED_WITHIN_DAYS: i64 = 90;

/// Generates product records from a set of dictionaries.
#[derive(Debug, Clone)]
pub struct CatalogGenerator<'a> {
    dictionary: &'a CatalogDictionary,
    currency: Currency,
    now: DateTime<Utc>,
}

impl<'a> CatalogGenerator<'a> {
    pub fn new(dictionary: &'a CatalogDictionary) -> Self {
        Self {
            dictionary,
            currency: Currency::default(),
            now: Utc::now(),
        }
    }

    /// Set the currency prices are expressed in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the reference time creation dates are counted back from.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Generate the catalog in category, product type, brand order.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Product> {
        let mut products = Vec::with_capacity(self.dictionary.expected_product_count());
        let mut next_id = 1;

        for entry in self.dictionary.entries() {
            for product_type in &entry.product_types {
                for brand in &entry.brands {
                    products.push(self.product(
                        rng,
                        ProductId::new(next_id),
                        entry,
                        brand,
                        product_type,
                    ));
                    next_id += 1;
                }
            }
        }

        tracing::debug!(
            products = products.len(),
            categories = self.dictionary.entries().len(),
            "generated catalog"
        );
        products
    }

    fn product<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: ProductId,
        entry: &CategoryDictionary,
        brand: &str,
        product_type: &str,
    ) -> Product {
        let range = entry.price_range;
        let price = rng.gen_range(range.min..=range.max);
        let rating = Rating::from_f64(rng.gen_range(3.0..=5.0));
        let stock = rng.gen_range(STOCK_RANGE);
        let days_ago = rng.gen_range(0..CREATED_WITHIN_DAYS);
        let is_new = rng.gen_bool(NEW_PRODUCT_PROBABILITY);
        let discount_percent = if rng.gen_bool(DISCOUNT_PROBABILITY) {
            rng.gen_range(DISCOUNT_PERCENT_RANGE)
        } else {
            0
        };

        Product {
            id,
            name: format!("{} {}", brand, product_type),
            description: format!(
                "{}'s {}. Best-in-class quality and design.",
                brand, product_type
            ),
            image_url: format!(
                "https://source.unsplash.com/random?{}",
                product_type.replacen(' ', "", 1)
            ),
            price: Money::new(price, self.currency),
            discount_percent,
            rating,
            category: entry.category,
            brand: brand.to_string(),
            product_type: product_type.to_string(),
            stock,
            created_at: self.now - Duration::days(days_ago),
            is_new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, PriceRange};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(seed: u64) -> Vec<Product> {
        let dictionary = CatalogDictionary::standard();
        let mut rng = StdRng::seed_from_u64(seed);
        CatalogGenerator::new(&dictionary).generate(&mut rng)
    }

    #[test]
    fn test_one_product_per_triple() {
        let dictionary = CatalogDictionary::standard();
        let products = generate(1);
        assert_eq!(products.len(), dictionary.expected_product_count());

        for entry in dictionary.entries() {
            let count = products
                .iter()
                .filter(|p| p.category == entry.category)
                .count();
            assert_eq!(count, entry.brands.len() * entry.product_types.len());
        }
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let products = generate(2);
        for (i, p) in products.iter().enumerate() {
            assert_eq!(p.id.get(), i as u64 + 1);
        }
    }

    #[test]
    fn test_triple_order_and_names() {
        let products = generate(3);
        assert_eq!(products[0].name, "Samsung Smartphone");
        assert_eq!(products[1].name, "LG Smartphone");
        assert_eq!(products[10].name, "Samsung Laptop");
        assert_eq!(products[0].image_url, "https://source.unsplash.com/random?Smartphone");
        assert_eq!(products[60].product_type, "Bluetooth Speaker");
        assert_eq!(products[60].image_url, "https://source.unsplash.com/random?BluetoothSpeaker");
    }

    #[test]
    fn test_numeric_fields_within_bounds() {
        let dictionary = CatalogDictionary::standard();
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(4);
        let products = CatalogGenerator::new(&dictionary)
            .with_now(now)
            .generate(&mut rng);

        for p in &products {
            let range = dictionary.get(p.category).unwrap().price_range;
            assert!(range.contains(p.price.amount), "price out of range: {:?}", p);
            assert!(p.discount_percent == 0 || DISCOUNT_PERCENT_RANGE.contains(&p.discount_percent));
            assert!(p.rating >= Rating::MIN && p.rating <= Rating::MAX);
            assert!(STOCK_RANGE.contains(&p.stock));
            assert!(p.created_at <= now);
            assert!(now - p.created_at < Duration::days(CREATED_WITHIN_DAYS));
        }
    }

    #[test]
    fn test_probabilities_are_plausible() {
        let products = generate(5);
        let discounted = products.iter().filter(|p| p.has_discount()).count();
        let fresh = products.iter().filter(|p| p.is_new).count();
        // 660 draws: expected 132 discounted and 66 new.
        assert!((70..200).contains(&discounted), "discounted = {}", discounted);
        assert!((25..120).contains(&fresh), "new = {}", fresh);
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let dictionary = CatalogDictionary::standard();
        let now = Utc::now();
        let generator = CatalogGenerator::new(&dictionary).with_now(now);
        let a = generator.generate(&mut StdRng::seed_from_u64(42));
        let b = generator.generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_point_price_range() {
        let dictionary = CatalogDictionary::new(vec![CategoryDictionary::new(
            Category::Beauty,
            &["Hera", "MAC"],
            &["Serum"],
            PriceRange::new(15_000, 15_000),
        )])
        .unwrap();
        let products = CatalogGenerator::new(&dictionary)
            .with_currency(Currency::KRW)
            .generate(&mut StdRng::seed_from_u64(6));
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.price.amount == 15_000));
    }
}
