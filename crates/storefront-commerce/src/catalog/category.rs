//! Categories and the dictionaries the catalog is generated from.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// A top-level product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Beauty,
    Sports,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Fashion,
        Category::Home,
        Category::Beauty,
        Category::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
            Category::Beauty => "Beauty",
            Category::Sports => "Sports",
        }
    }

    /// Lowercase form used in category page paths.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Home => "home",
            Category::Beauty => "beauty",
            Category::Sports => "sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    /// Case-insensitive match on the category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

/// Inclusive price bounds, in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, amount: i64) -> bool {
        (self.min..=self.max).contains(&amount)
    }
}

/// Brands, product types and price bounds for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDictionary {
    pub category: Category,
    pub brands: Vec<String>,
    pub product_types: Vec<String>,
    pub price_range: PriceRange,
}

impl CategoryDictionary {
    pub fn new(
        category: Category,
        brands: &[&str],
        product_types: &[&str],
        price_range: PriceRange,
    ) -> Self {
        Self {
            category,
            brands: brands.iter().map(|b| b.to_string()).collect(),
            product_types: product_types.iter().map(|t| t.to_string()).collect(),
            price_range,
        }
    }

    /// Number of products this category expands to.
    pub fn product_count(&self) -> usize {
        self.brands.len() * self.product_types.len()
    }

    /// Check whether a product type belongs to this category (case-insensitive).
    pub fn has_product_type(&self, product_type: &str) -> bool {
        let needle = product_type.to_lowercase();
        self.product_types
            .iter()
            .any(|t| t.to_lowercase() == needle)
    }
}

/// The full set of category dictionaries, in generation order.
///
/// Deserialized input goes through [`CatalogDictionary::new`], so a loaded
/// dictionary is as valid as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalogDictionary")]
pub struct CatalogDictionary {
    entries: Vec<CategoryDictionary>,
}

#[derive(Deserialize)]
struct RawCatalogDictionary {
    entries: Vec<CategoryDictionary>,
}

impl TryFrom<RawCatalogDictionary> for CatalogDictionary {
    type Error = CommerceError;

    fn try_from(raw: RawCatalogDictionary) -> Result<Self, Self::Error> {
        Self::new(raw.entries)
    }
}

impl CatalogDictionary {
    /// Build a dictionary set, rejecting malformed input.
    ///
    /// Every category may appear at most once, brand and type lists must be
    /// non-empty, and price ranges must satisfy `0 < min <= max`.
    pub fn new(entries: Vec<CategoryDictionary>) -> Result<Self, CommerceError> {
        if entries.is_empty() {
            return Err(CommerceError::InvalidCatalog("no categories".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            let name = entry.category.as_str();
            if !seen.insert(entry.category) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "category {} listed twice",
                    name
                )));
            }
            if entry.brands.is_empty() {
                return Err(CommerceError::InvalidCatalog(format!("{} has no brands", name)));
            }
            if entry.product_types.is_empty() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "{} has no product types",
                    name
                )));
            }
            let range = entry.price_range;
            if range.min <= 0 || range.min > range.max {
                return Err(CommerceError::InvalidCatalog(format!(
                    "{} has invalid price range {}..={}",
                    name, range.min, range.max
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The storefront's built-in dictionaries (660 products in total).
    pub fn standard() -> Self {
        let entries = vec![
            CategoryDictionary::new(
                Category::Electronics,
                &[
                    "Samsung", "LG", "Apple", "Sony", "Philips", "Xiaomi", "Huawei", "Panasonic",
                    "Braun", "Dyson",
                ],
                &[
                    "Smartphone",
                    "Laptop",
                    "Tablet",
                    "Earphones",
                    "Headphones",
                    "Smartwatch",
                    "Bluetooth Speaker",
                    "Air Purifier",
                    "Monitor",
                    "Keyboard",
                    "Mouse",
                    "TV",
                    "Gaming Laptop",
                    "Vacuum Cleaner",
                    "Refrigerator",
                    "Washing Machine",
                    "Dryer",
                    "Air Conditioner",
                ],
                PriceRange::new(50_000, 2_000_000),
            ),
            CategoryDictionary::new(
                Category::Fashion,
                &[
                    "Nike", "Adidas", "Zara", "Uniqlo", "H&M", "Gucci", "Prada", "Burberry",
                    "Polo", "Lacoste",
                ],
                &[
                    "T-Shirt", "Jeans", "Jacket", "Coat", "Dress", "Skirt", "Shirt", "Knitwear",
                    "Puffer", "Hoodie", "Sweater", "Blouse", "Slacks", "Suit",
                ],
                PriceRange::new(20_000, 300_000),
            ),
            CategoryDictionary::new(
                Category::Home,
                &[
                    "IKEA", "Hanssem", "Simmons", "Tempur", "iloom", "Casamia", "Muji", "Desker",
                    "Ace", "Coway",
                ],
                &[
                    "Sofa",
                    "Bed",
                    "Dining Table",
                    "Chair",
                    "Desk",
                    "Wardrobe",
                    "Storage Cabinet",
                    "Mattress",
                    "Curtain",
                    "Lighting",
                    "TV Stand",
                    "Vanity",
                    "Bookshelf",
                ],
                PriceRange::new(30_000, 1_000_000),
            ),
            CategoryDictionary::new(
                Category::Beauty,
                &[
                    "Lancome",
                    "Estee Lauder",
                    "MAC",
                    "Innisfree",
                    "Sulwhasoo",
                    "Biotherm",
                    "Laneige",
                    "Hera",
                    "Shiseido",
                    "Skinfood",
                ],
                &[
                    "Skincare",
                    "Sunscreen",
                    "Foundation",
                    "Lipstick",
                    "Eyeshadow",
                    "Mascara",
                    "Perfume",
                    "Shampoo",
                    "Body Lotion",
                    "Cleanser",
                    "Serum",
                ],
                PriceRange::new(10_000, 100_000),
            ),
            CategoryDictionary::new(
                Category::Sports,
                &[
                    "Fila",
                    "Puma",
                    "Under Armour",
                    "New Balance",
                    "Reebok",
                    "Asics",
                    "Mizuno",
                    "Descente",
                    "Spyder",
                    "K-Swiss",
                ],
                &[
                    "Sneakers",
                    "Running Shoes",
                    "Tracksuit",
                    "Yoga Mat",
                    "Tennis Racket",
                    "Golf Club",
                    "Swimsuit",
                    "Ski Wear",
                    "Hiking Wear",
                    "Bicycle",
                ],
                PriceRange::new(20_000, 500_000),
            ),
        ];

        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryDictionary] {
        &self.entries
    }

    pub fn get(&self, category: Category) -> Option<&CategoryDictionary> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Categories in generation order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|e| e.category)
    }

    /// Product types (subcategories) of a category, empty if absent.
    pub fn product_types(&self, category: Category) -> &[String] {
        self.get(category)
            .map(|e| e.product_types.as_slice())
            .unwrap_or(&[])
    }

    /// Brands of a category, empty if absent.
    pub fn brands(&self, category: Category) -> &[String] {
        self.get(category).map(|e| e.brands.as_slice()).unwrap_or(&[])
    }

    /// Total number of products the dictionaries expand to.
    pub fn expected_product_count(&self) -> usize {
        self.entries.iter().map(CategoryDictionary::product_count).sum()
    }
}

impl Default for CatalogDictionary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("electronics".parse::<Category>().unwrap(), Category::Electronics);
        assert_eq!("SPORTS".parse::<Category>().unwrap(), Category::Sports);
        assert!(matches!(
            "garden".parse::<Category>(),
            Err(CommerceError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_standard_dictionary_sizes() {
        let dict = CatalogDictionary::standard();
        assert_eq!(dict.get(Category::Electronics).unwrap().product_count(), 180);
        assert_eq!(dict.product_types(Category::Fashion).len(), 14);
        assert_eq!(dict.product_types(Category::Home).len(), 13);
        assert_eq!(dict.product_types(Category::Beauty).len(), 11);
        assert_eq!(dict.product_types(Category::Sports).len(), 10);
        assert_eq!(dict.expected_product_count(), 660);
    }

    #[test]
    fn test_standard_dictionary_is_valid() {
        let dict = CatalogDictionary::standard();
        assert!(CatalogDictionary::new(dict.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let entry = CategoryDictionary::new(
            Category::Beauty,
            &["Hera"],
            &["Serum"],
            PriceRange::new(1000, 2000),
        );
        let result = CatalogDictionary::new(vec![entry.clone(), entry]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_empty_lists_and_bad_ranges() {
        let no_brands =
            CategoryDictionary::new(Category::Home, &[], &["Sofa"], PriceRange::new(1, 2));
        assert!(CatalogDictionary::new(vec![no_brands]).is_err());

        let inverted =
            CategoryDictionary::new(Category::Home, &["IKEA"], &["Sofa"], PriceRange::new(5, 2));
        assert!(CatalogDictionary::new(vec![inverted]).is_err());
    }

    #[test]
    fn test_deserialize_validates_entries() {
        let json = r#"{"entries":[{"category":"Beauty","brands":["Hera"],"product_types":["Serum"],"price_range":{"min":5,"max":2}}]}"#;
        let err = serde_json::from_str::<CatalogDictionary>(json).unwrap_err();
        assert!(err.to_string().contains("invalid price range"));

        let empty = r#"{"entries":[]}"#;
        assert!(serde_json::from_str::<CatalogDictionary>(empty).is_err());
    }

    #[test]
    fn test_deserialize_standard_dictionary() {
        let dict = CatalogDictionary::standard();
        let json = serde_json::to_string(&dict).unwrap();
        let loaded: CatalogDictionary = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.expected_product_count(), 660);
    }

    #[test]
    fn test_has_product_type() {
        let dict = CatalogDictionary::standard();
        let electronics = dict.get(Category::Electronics).unwrap();
        assert!(electronics.has_product_type("bluetooth speaker"));
        assert!(!electronics.has_product_type("Sofa"));
    }
}
