//! # Menu
//!
//! Static catalogs of orderable items, shared between the client and tester.
//!
//! Two catalogs:
//! - Regular menu: always visible, priced in gold.
//! - Secret menu: hidden until unlocked, each item costs a reward token on
//!   top of its gold price.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: u32,
    pub name: &'static str,
    pub price: u64,
    pub token_cost: Option<u32>,
    pub description: &'static str,
}

pub const PANDAREN_MENU: [MenuItem; 8] = [
    MenuItem {
        id: 1,
        name: "Steamed Dumplings",
        price: 50,
        token_cost: None,
        description: "Traditional pandaren dumplings filled with vegetables and mystery meat",
    },
    MenuItem {
        id: 2,
        name: "Spiced Noodle Soup",
        price: 50,
        token_cost: None,
        description: "Hearty noodle soup with exotic spices from the Jade Forest",
    },
    MenuItem {
        id: 3,
        name: "Bamboo Steamed Fish",
        price: 50,
        token_cost: None,
        description: "Fresh fish steamed in bamboo with aromatic herbs",
    },
    MenuItem {
        id: 4,
        name: "Pearl Rice Cakes",
        price: 50,
        token_cost: None,
        description: "Sweet rice cakes infused with pearl dust",
    },
    MenuItem {
        id: 5,
        name: "Five-Spice Tea",
        price: 50,
        token_cost: None,
        description: "Calming tea blend with five ancient spices",
    },
    MenuItem {
        id: 6,
        name: "Golden Lotus Soup",
        price: 50,
        token_cost: None,
        description: "Luxurious soup made with golden lotus petals",
    },
    MenuItem {
        id: 7,
        name: "Jade Forest Vegetables",
        price: 50,
        token_cost: None,
        description: "Mixed vegetables from the mystical Jade Forest",
    },
    MenuItem {
        id: 8,
        name: "Monk's Meditation Brew",
        price: 50,
        token_cost: None,
        description: "Special brew that enhances focus and inner peace",
    },
];

pub const SECRET_MENU: [MenuItem; 6] = [
    MenuItem {
        id: 101,
        name: "Emperor's Feast",
        price: 50,
        token_cost: Some(1),
        description: "A legendary meal fit for the Pandaren Emperor",
    },
    MenuItem {
        id: 102,
        name: "Chi-Infused Wine",
        price: 50,
        token_cost: Some(1),
        description: "Ancient wine that restores spiritual energy",
    },
    MenuItem {
        id: 103,
        name: "Mists of Pandaria Essence",
        price: 50,
        token_cost: Some(1),
        description: "Mystical essence captured from the vanishing mists",
    },
    MenuItem {
        id: 104,
        name: "Massage",
        price: 1,
        token_cost: Some(1),
        description: "Relaxing traditional Pandaren massage therapy",
    },
    MenuItem {
        id: 105,
        name: "Kiss",
        price: 1,
        token_cost: Some(1),
        description: "A gentle kiss on the forehead for good luck",
    },
    MenuItem {
        id: 106,
        name: "Hug",
        price: 1,
        token_cost: Some(1),
        description: "Warm and comforting Pandaren embrace",
    },
];

/// Looks up an item by id across both catalogs.
pub fn find_item(id: u32) -> Option<&'static MenuItem> {
    PANDAREN_MENU
        .iter()
        .chain(SECRET_MENU.iter())
        .find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<u32> = PANDAREN_MENU
            .iter()
            .chain(SECRET_MENU.iter())
            .map(|item| item.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), PANDAREN_MENU.len() + SECRET_MENU.len());
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item(1).unwrap().name, "Steamed Dumplings");
        assert_eq!(find_item(101).unwrap().token_cost, Some(1));
        assert!(find_item(999).is_none());
    }

    #[test]
    fn test_item_serializes_for_listings() {
        let json = serde_json::to_value(find_item(101).unwrap()).unwrap();

        assert_eq!(json["name"], "Emperor's Feast");
        assert_eq!(json["price"], 50);
        assert_eq!(json["token_cost"], 1);
    }

    #[test]
    fn test_secret_items_all_cost_tokens() {
        assert!(SECRET_MENU.iter().all(|item| item.token_cost == Some(1)));
        assert!(PANDAREN_MENU.iter().all(|item| item.token_cost.is_none()));
    }
}
