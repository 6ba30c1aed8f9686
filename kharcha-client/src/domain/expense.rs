use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Category;

/// A stored expense as returned by the collection endpoints. The server
/// names the record id `_id`; some deployments expose it as `id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub category: Category,
    pub sub_category: String,
    pub amount: f64,
}

/// Payload for POST /api/expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub category: Category,
    pub sub_category: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_collection_row() {
        let raw = r#"{
            "_id": "65a1",
            "date": "2026-01-05T09:30:00.000Z",
            "category": "Food",
            "subCategory": "Breakfast",
            "amount": 150
        }"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.id, "65a1");
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.sub_category, "Breakfast");
        assert_eq!(expense.amount, 150.0);
        assert_eq!(expense.date.year(), 2026);
    }

    #[test]
    fn new_expense_uses_camel_case_keys() {
        let body = serde_json::to_value(NewExpense {
            category: Category::Fuel,
            sub_category: "Petrol".to_string(),
            amount: 500.0,
        })
        .unwrap();
        assert_eq!(body["category"], "Fuel");
        assert_eq!(body["subCategory"], "Petrol");
        assert_eq!(body["amount"], 500.0);
    }
}
