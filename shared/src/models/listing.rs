use crate::{Result, SharedError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingCategory {
    Apparel,
    Footwear,
    Equipment,
    Accessories,
}

impl ListingCategory {
    pub fn all() -> [ListingCategory; 4] {
        [
            ListingCategory::Apparel,
            ListingCategory::Footwear,
            ListingCategory::Equipment,
            ListingCategory::Accessories,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingCategory::Apparel => "apparel",
            ListingCategory::Footwear => "footwear",
            ListingCategory::Equipment => "equipment",
            ListingCategory::Accessories => "accessories",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingCategory::Apparel => "Apparel",
            ListingCategory::Footwear => "Footwear",
            ListingCategory::Equipment => "Equipment",
            ListingCategory::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingCondition {
    New,
    Used,
}

impl ListingCondition {
    pub fn label(&self) -> &'static str {
        match self {
            ListingCondition::New => "New",
            ListingCondition::Used => "Used",
        }
    }
}

/// A marketplace listing for sports gear, sold between platform users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MarketListing {
    pub id: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    pub category: ListingCategory,

    pub condition: ListingCondition,

    /// Price in cents; avoids floating-point money.
    pub price_cents: u32,

    /// Seller display name (denormalized)
    #[validate(length(min = 1, max = 120, message = "Seller must be between 1 and 120 characters"))]
    pub seller: String,

    pub city: String,
    pub state: String,

    pub created_at: DateTime<Utc>,
}

impl MarketListing {
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }

    /// Price formatted as "R$ 120,00".
    pub fn display_price(&self) -> String {
        let reais = self.price_cents / 100;
        let cents = self.price_cents % 100;
        format!("R$ {reais},{cents:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn create_test_listing() -> MarketListing {
        MarketListing {
            id: "listing-1".to_string(),
            title: "Chuteira society tam 42".to_string(),
            category: ListingCategory::Footwear,
            condition: ListingCondition::Used,
            price_cents: 12050,
            seller: "Marina Costa".to_string(),
            city: "Sao Paulo".to_string(),
            state: "SP".to_string(),
            created_at: "2024-01-10T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_listing_validation() {
        let mut listing = create_test_listing();
        assert!(listing.validate_fields().is_ok());
        listing.title = String::new();
        assert!(listing.validate_fields().is_err());
    }

    #[test]
    fn test_display_price_pads_cents() {
        let mut listing = create_test_listing();
        assert_eq!(listing.display_price(), "R$ 120,50");
        listing.price_cents = 9900;
        assert_eq!(listing.display_price(), "R$ 99,00");
        listing.price_cents = 5;
        assert_eq!(listing.display_price(), "R$ 0,05");
    }

    #[test]
    fn test_category_wire_form() {
        assert_eq!(
            serde_json::to_string(&ListingCategory::Footwear).unwrap(),
            "\"footwear\""
        );
    }
}
