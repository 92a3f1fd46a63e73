//! Read-only access to a generated catalog.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{CatalogDictionary, CatalogGenerator, Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Something that can hand out the storefront's products.
///
/// Views only ever borrow from a provider; the products themselves are
/// created once and never mutated.
pub trait CatalogProvider {
    /// All products in generation order.
    fn products(&self) -> &[Product];

    /// The dictionaries the products were generated from.
    fn dictionary(&self) -> &CatalogDictionary;

    /// Look up a product by id.
    fn find(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.products()
            .iter()
            .find(|p| p.id == id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// Products of one category, in generation order.
    fn in_category(&self, category: Category) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}

/// An in-memory catalog with an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    dictionary: CatalogDictionary,
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Generate a catalog from dictionaries using the given random source.
    pub fn generate<R: Rng + ?Sized>(
        dictionary: CatalogDictionary,
        currency: Currency,
        rng: &mut R,
    ) -> Self {
        let products = CatalogGenerator::new(&dictionary)
            .with_currency(currency)
            .generate(rng);
        Self::indexed(dictionary, products)
    }

    /// Generate the standard catalog from thread-local randomness.
    pub fn random() -> Self {
        Self::generate(
            CatalogDictionary::standard(),
            Currency::default(),
            &mut rand::thread_rng(),
        )
    }

    /// Generate the standard catalog from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::generate(
            CatalogDictionary::standard(),
            Currency::default(),
            &mut StdRng::seed_from_u64(seed),
        )
    }

    /// Wrap pre-built products, e.g. fixtures loaded from JSON.
    ///
    /// Ids must be unique and every product's category must be present in
    /// the dictionary.
    pub fn from_products(
        dictionary: CatalogDictionary,
        products: Vec<Product>,
    ) -> Result<Self, CommerceError> {
        let mut seen = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if seen.insert(product.id, pos).is_some() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if dictionary.get(product.category).is_none() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} uses category {} missing from the dictionary",
                    product.id, product.category
                )));
            }
        }
        Ok(Self {
            dictionary,
            products,
            index: seen,
        })
    }

    fn indexed(dictionary: CatalogDictionary, products: Vec<Product>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(pos, p)| (p.id, pos))
            .collect();
        Self {
            dictionary,
            products,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products per category, in dictionary order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        self.dictionary
            .categories()
            .map(|c| (c, self.products.iter().filter(|p| p.category == c).count()))
            .collect()
    }
}

impl CatalogProvider for Catalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn dictionary(&self) -> &CatalogDictionary {
        &self.dictionary
    }

    fn find(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.index
            .get(&id)
            .map(|&pos| &self.products[pos])
            .ok_or(CommerceError::ProductNotFound(id))
    }
}
