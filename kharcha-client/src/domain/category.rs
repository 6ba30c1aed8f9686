use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed expense taxonomy. The server accepts exactly these names, so
/// the wire representation is the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Entertainment,
    Cigarette,
    Fuel,
    Travel,
    #[serde(rename = "EMI")]
    Emi,
    Savings,
    Shopping,
    Rent,
    Others,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Entertainment,
        Category::Cigarette,
        Category::Fuel,
        Category::Travel,
        Category::Emi,
        Category::Savings,
        Category::Shopping,
        Category::Rent,
        Category::Others,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Entertainment => "Entertainment",
            Category::Cigarette => "Cigarette",
            Category::Fuel => "Fuel",
            Category::Travel => "Travel",
            Category::Emi => "EMI",
            Category::Savings => "Savings",
            Category::Shopping => "Shopping",
            Category::Rent => "Rent",
            Category::Others => "Others",
        }
    }

    /// Subcategories valid for this category. Every category has at least
    /// one.
    pub fn subcategories(self) -> &'static [&'static str] {
        match self {
            Category::Food => &["Breakfast", "Lunch", "Dinner", "Party", "Snacks"],
            Category::Entertainment => &["Movies", "Games", "Concerts", "Events"],
            Category::Cigarette => &["Regular", "Premium", "Other"],
            Category::Fuel => &["Petrol", "Diesel", "CNG"],
            Category::Travel => &["Flight", "Train", "Bus", "Cab", "Hotel"],
            Category::Emi => &["Home Loan", "Car Loan", "Education Loan", "Other"],
            Category::Savings => &["Fixed Deposit", "Mutual Funds", "Stocks", "Other"],
            Category::Shopping => &["Clothes", "Electronics", "Groceries", "Other"],
            Category::Rent => &["Apartment", "Office", "Storage", "Other"],
            Category::Others => &["Miscellaneous"],
        }
    }

    pub fn allows_subcategory(self, sub_category: &str) -> bool {
        self.subcategories().iter().any(|s| *s == sub_category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_name_matches_display_name() {
        for category in Category::ALL {
            let encoded = serde_json::to_string(&category).unwrap();
            assert_eq!(encoded, format!("\"{}\"", category));
        }
    }

    #[test]
    fn emi_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Category::Emi).unwrap(), "\"EMI\"");
        let decoded: Category = serde_json::from_str("\"EMI\"").unwrap();
        assert_eq!(decoded, Category::Emi);
    }

    #[test]
    fn subcategory_membership_is_per_category() {
        assert!(Category::Food.allows_subcategory("Lunch"));
        assert!(!Category::Fuel.allows_subcategory("Lunch"));
        assert!(Category::Others.allows_subcategory("Miscellaneous"));
    }

    #[test]
    fn every_category_has_subcategories() {
        for category in Category::ALL {
            assert!(!category.subcategories().is_empty());
        }
    }
}
