//! Business category taxonomy.
//!
//! A fixed, closed enumeration of the business categories and licence
//! subcategories the directory recognizes. Membership tests are exact and
//! case-sensitive: the labels mirror the strings that appear verbatim in
//! imported licence records. The taxonomy is advisory for search filters
//! (an unrecognized filter value is passed through, not rejected) and
//! authoritative for the seed pipeline, which drops unrecognized rows.

use phf::{phf_map, phf_set};
use serde::Serialize;

/// Top-level business categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Restaurant,
    Retail,
    PersonalServices,
    ProfessionalServices,
    Accommodation,
    Cafe,
}

impl Category {
    /// Display label, as shown to clients and matched against filters.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Restaurant => "Restaurant",
            Category::Retail => "Retail",
            Category::PersonalServices => "Personal Services",
            Category::ProfessionalServices => "Professional Services",
            Category::Accommodation => "Accommodation",
            Category::Cafe => "Cafe",
        }
    }

    /// All categories, in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Restaurant,
            Category::Retail,
            Category::PersonalServices,
            Category::ProfessionalServices,
            Category::Accommodation,
            Category::Cafe,
        ]
    }

    /// The licence subcategory labels that roll up into this category.
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            Category::Restaurant => &[
                "Restaurant",
                "Restaurants",
                "Restaurant - Full Service",
                "Restaurant - Limited Service",
            ],
            Category::Retail => &[
                "Retail Dealer",
                "Retail Store",
                "Retail Trade",
                "Dealer - Retail",
            ],
            Category::PersonalServices => {
                &["Hair Salon", "Barber Shop", "Beauty Salon", "Nail Salon"]
            }
            Category::ProfessionalServices => {
                &["Consultant", "Consulting Service", "Business Consulting"]
            }
            Category::Accommodation => {
                &["Hotel/Motel", "Short-term Rental", "Long-term Rental"]
            }
            Category::Cafe => &["Cafe", "Café", "Coffee Shop", "Tea House"],
        }
    }
}

/// Subcategory label -> owning category.
static SUBCATEGORIES: phf::Map<&'static str, Category> = phf_map! {
    "Restaurant" => Category::Restaurant,
    "Restaurants" => Category::Restaurant,
    "Restaurant - Full Service" => Category::Restaurant,
    "Restaurant - Limited Service" => Category::Restaurant,
    "Retail Dealer" => Category::Retail,
    "Retail Store" => Category::Retail,
    "Retail Trade" => Category::Retail,
    "Dealer - Retail" => Category::Retail,
    "Hair Salon" => Category::PersonalServices,
    "Barber Shop" => Category::PersonalServices,
    "Beauty Salon" => Category::PersonalServices,
    "Nail Salon" => Category::PersonalServices,
    "Consultant" => Category::ProfessionalServices,
    "Consulting Service" => Category::ProfessionalServices,
    "Business Consulting" => Category::ProfessionalServices,
    "Hotel/Motel" => Category::Accommodation,
    "Short-term Rental" => Category::Accommodation,
    "Long-term Rental" => Category::Accommodation,
    "Cafe" => Category::Cafe,
    "Café" => Category::Cafe,
    "Coffee Shop" => Category::Cafe,
    "Tea House" => Category::Cafe,
};

static CATEGORY_LABELS: phf::Set<&'static str> = phf_set! {
    "Restaurant",
    "Retail",
    "Personal Services",
    "Professional Services",
    "Accommodation",
    "Cafe",
};

/// True iff `label` exactly matches an enumerated category or subcategory.
pub fn is_recognized(label: &str) -> bool {
    CATEGORY_LABELS.contains(label) || SUBCATEGORIES.contains_key(label)
}

/// The category a subcategory label rolls up into, if recognized.
pub fn category_of(subcategory: &str) -> Option<Category> {
    SUBCATEGORIES.get(subcategory).copied()
}
