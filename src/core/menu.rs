//! Menu item model and seed data

use serde::{Deserialize, Serialize};

/// The closed set of menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl Category {
    /// Wire labels accepted by the validator, in reporting order.
    pub const LABELS: [&'static str; 4] = ["appetizer", "entree", "dessert", "beverage"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

/// A single orderable product record held by the store.
///
/// `id` is assigned by the store and immutable afterwards. Every stored item
/// satisfies the validation rules; payloads only reach the store through
/// [`MenuItemDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: bool,
}

/// A validated create/update payload.
///
/// Ids are never client-supplied; the store assigns one on create and
/// preserves the existing one on update. Unknown payload fields are dropped
/// during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: Option<bool>,
}

impl MenuItemDraft {
    /// Materialize the draft under the given id. `available` defaults to
    /// true when the payload omitted it.
    pub fn into_item(self, id: u64) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            ingredients: self.ingredients,
            available: self.available.unwrap_or(true),
        }
    }
}

/// The fixed records present at process start, ids 1 through 8. State is
/// volatile, so a restart always comes back to exactly this set.
pub fn seed_items() -> Vec<MenuItem> {
    fn item(
        id: u64,
        name: &str,
        description: &str,
        price: f64,
        category: Category,
        ingredients: &[&str],
    ) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            available: true,
        }
    }

    vec![
        item(
            1,
            "Garlic Bread",
            "Toasted baguette slices brushed with garlic butter and herbs",
            4.5,
            Category::Appetizer,
            &["baguette", "garlic", "butter", "parsley"],
        ),
        item(
            2,
            "Bruschetta",
            "Grilled bread topped with fresh tomatoes, basil and olive oil",
            5.25,
            Category::Appetizer,
            &["bread", "tomato", "basil", "olive oil"],
        ),
        item(
            3,
            "Margherita Pizza",
            "Wood-fired pizza with tomato sauce, mozzarella and basil",
            11.0,
            Category::Entree,
            &["dough", "tomato sauce", "mozzarella", "basil"],
        ),
        item(
            4,
            "Spaghetti Carbonara",
            "Spaghetti tossed with pancetta, egg yolk and pecorino",
            12.5,
            Category::Entree,
            &["spaghetti", "pancetta", "egg", "pecorino"],
        ),
        item(
            5,
            "Grilled Salmon",
            "Atlantic salmon fillet with lemon butter and seasonal greens",
            16.75,
            Category::Entree,
            &["salmon", "lemon", "butter", "greens"],
        ),
        item(
            6,
            "Tiramisu",
            "Espresso-soaked ladyfingers layered with mascarpone cream",
            6.5,
            Category::Dessert,
            &["ladyfingers", "espresso", "mascarpone", "cocoa"],
        ),
        item(
            7,
            "New York Cheesecake",
            "Baked cheesecake on a graham crust with berry compote",
            7.0,
            Category::Dessert,
            &["cream cheese", "graham crust", "berries"],
        ),
        item(
            8,
            "Fresh Lemonade",
            "House-squeezed lemonade served over ice with mint",
            3.5,
            Category::Beverage,
            &["lemon", "sugar", "water", "mint"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate;
    use serde_json::json;

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Category::Appetizer).expect("should serialize"),
            json!("appetizer")
        );
        assert_eq!(
            serde_json::to_value(Category::Entree).expect("should serialize"),
            json!("entree")
        );
    }

    #[test]
    fn test_category_labels_round_trip() {
        for label in Category::LABELS {
            let category: Category =
                serde_json::from_value(json!(label)).expect("label should deserialize");
            assert_eq!(category.as_str(), label);
        }
    }

    #[test]
    fn test_category_rejects_unknown_label() {
        assert!(serde_json::from_value::<Category>(json!("brunch")).is_err());
    }

    #[test]
    fn test_draft_defaults_available_to_true() {
        let draft: MenuItemDraft = serde_json::from_value(json!({
            "name": "Veggie Wrap",
            "description": "Fresh veggies wrapped in a tortilla",
            "price": 6.5,
            "category": "entree",
            "ingredients": ["veggies", "tortilla"]
        }))
        .expect("draft should deserialize");

        let item = draft.into_item(9);
        assert_eq!(item.id, 9);
        assert!(item.available);
    }

    #[test]
    fn test_draft_keeps_explicit_available() {
        let draft: MenuItemDraft = serde_json::from_value(json!({
            "name": "Veggie Wrap",
            "description": "Fresh veggies wrapped in a tortilla",
            "price": 6.5,
            "category": "entree",
            "ingredients": ["veggies"],
            "available": false
        }))
        .expect("draft should deserialize");

        assert!(!draft.into_item(1).available);
    }

    #[test]
    fn test_draft_ignores_unknown_fields() {
        let draft: MenuItemDraft = serde_json::from_value(json!({
            "id": 42,
            "name": "Veggie Wrap",
            "description": "Fresh veggies wrapped in a tortilla",
            "price": 6.5,
            "category": "entree",
            "ingredients": ["veggies"],
            "chef": "nobody"
        }))
        .expect("unknown fields should be dropped");

        // the client-supplied id has no effect; the store decides
        assert_eq!(draft.into_item(9).id, 9);
    }

    #[test]
    fn test_seed_ids_are_one_through_eight() {
        let ids: Vec<u64> = seed_items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_seed_items_satisfy_every_rule() {
        // the store must never hold an item that would fail validation
        for item in seed_items() {
            let payload = serde_json::to_value(&item).expect("seed item should serialize");
            assert!(
                validate(&payload).is_ok(),
                "seed item {} violates a field rule",
                item.id
            );
        }
    }

    #[test]
    fn test_seed_covers_every_category() {
        let items = seed_items();
        for label in Category::LABELS {
            assert!(
                items.iter().any(|item| item.category.as_str() == label),
                "no seed item for category {label}"
            );
        }
    }
}
