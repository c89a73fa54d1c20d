//! Food Catalog
//!
//! The fixed, ordered set of food records the search engine works over.
//! A catalog never changes once built.

use crate::error::{CalorieError, Result};
use serde::Serialize;
use std::collections::HashSet;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodRecord {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Human-readable food description
    pub name: String,
    /// Standard serving size
    pub portion: String,
    /// Kilocalories per portion
    pub calories: u32,
}

impl FoodRecord {
    pub fn new(id: u32, name: impl Into<String>, portion: impl Into<String>, calories: u32) -> Self {
        Self {
            id,
            name: name.into(),
            portion: portion.into(),
            calories,
        }
    }
}

/// Built-in reference data: (id, name, portion, calories)
const REFERENCE_FOODS: &[(u32, &str, &str, u32)] = &[
    (1, "Apple, raw", "1 medium (3\" dia)", 95),
    (2, "Banana, raw", "1 medium (7-8\" long)", 105),
    (3, "Orange, raw", "1 medium (2-5/8\" dia)", 62),
    (4, "Grapes, raw", "1 cup", 104),
    (5, "Strawberries, raw", "1 cup, halves", 49),
    (6, "Chicken breast, grilled", "3 oz", 165),
    (7, "Chicken thigh, grilled", "3 oz", 180),
    (8, "Ground beef, 85% lean", "3 oz", 213),
    (9, "Ground beef, 95% lean", "3 oz", 164),
    (10, "Salmon, Atlantic, wild", "3 oz", 175),
    (11, "Tuna, light, canned in water", "3 oz", 99),
    (12, "Egg, whole, cooked", "1 large", 78),
    (13, "Milk, 2% fat", "1 cup", 122),
    (14, "Milk, skim", "1 cup", 83),
    (15, "Yogurt, plain, low-fat", "1 cup", 154),
    (16, "Cheese, cheddar", "1 oz", 114),
    (17, "Bread, whole wheat", "1 slice", 81),
    (18, "Bread, white", "1 slice", 79),
    (19, "Rice, white, cooked", "1 cup", 205),
    (20, "Rice, brown, cooked", "1 cup", 216),
    (21, "Pasta, cooked", "1 cup", 221),
    (22, "Oatmeal, cooked", "1 cup", 166),
    (23, "Potato, baked with skin", "1 medium", 161),
    (24, "Sweet potato, baked", "1 medium", 103),
    (25, "Broccoli, cooked", "1 cup", 55),
    (26, "Carrots, raw", "1 medium", 25),
    (27, "Spinach, raw", "1 cup", 7),
    (28, "Tomato, raw", "1 medium", 22),
    (29, "Avocado, raw", "1/2 fruit", 160),
    (30, "Almonds, raw", "1 oz (23 nuts)", 164),
    (31, "Peanut butter", "2 tbsp", 188),
    (32, "Olive oil", "1 tbsp", 119),
    (33, "Butter", "1 tbsp", 102),
    (34, "Pizza, cheese", "1 slice", 285),
    (35, "Hamburger, fast food", "1 sandwich", 354),
    (36, "French fries", "1 medium order", 365),
    (37, "Soda, cola", "12 fl oz", 136),
    (38, "Coffee, black", "8 fl oz", 2),
    (39, "Orange juice", "8 fl oz", 112),
    (40, "Ice cream, vanilla", "1/2 cup", 137),
    (41, "Chocolate chip cookie", "1 medium", 78),
    (42, "Apple pie", "1 slice", 296),
    (43, "Steak, sirloin", "3 oz", 180),
    (44, "Pork chop, grilled", "3 oz", 197),
    (45, "Shrimp, cooked", "3 oz", 84),
    (46, "Tofu, firm", "1/2 cup", 94),
    (47, "Black beans, cooked", "1 cup", 227),
    (48, "Lentils, cooked", "1 cup", 230),
    (49, "Quinoa, cooked", "1 cup", 222),
    (50, "Blueberries, raw", "1 cup", 84),
];

/// Ordered, immutable collection of food records
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<FoodRecord>,
}

impl Catalog {
    /// Build a catalog from caller-supplied records, keeping their order.
    ///
    /// Ids must be positive and unique, and every record needs a non-blank name and portion.
    pub fn new(records: Vec<FoodRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            if record.id == 0 {
                return Err(CalorieError::InvalidId(record.id));
            }
            if !seen.insert(record.id) {
                return Err(CalorieError::DuplicateId(record.id));
            }
            if record.name.trim().is_empty() {
                return Err(CalorieError::EmptyField {
                    id: record.id,
                    field: "name",
                });
            }
            if record.portion.trim().is_empty() {
                return Err(CalorieError::EmptyField {
                    id: record.id,
                    field: "portion",
                });
            }
        }

        Ok(Self { records })
    }

    /// The built-in 50 item reference catalog
    pub fn reference() -> Self {
        let records = REFERENCE_FOODS
            .iter()
            .map(|&(id, name, portion, calories)| FoodRecord::new(id, name, portion, calories))
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodRecord> {
        self.records.iter()
    }

    /// Look up a record by id
    pub fn get(&self, id: u32) -> Option<&FoodRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FoodRecord;
    type IntoIter = std::slice::Iter<'a, FoodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_has_fifty_unique_records() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.len(), 50);

        let ids: HashSet<u32> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 50);
        assert!(Catalog::new(catalog.records().to_vec()).is_ok());
    }

    #[test]
    fn reference_catalog_keeps_source_order() {
        let catalog = Catalog::reference();
        let ids: Vec<u32> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
        assert_eq!(catalog.get(50).map(|r| r.name.as_str()), Some("Blueberries, raw"));
        assert!(catalog.get(51).is_none());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let records = vec![
            FoodRecord::new(1, "Apple", "1 medium", 95),
            FoodRecord::new(1, "Pear", "1 medium", 101),
        ];
        assert!(matches!(Catalog::new(records), Err(CalorieError::DuplicateId(1))));
    }

    #[test]
    fn new_rejects_zero_id() {
        let records = vec![FoodRecord::new(0, "Water", "1 cup", 0)];
        assert!(matches!(Catalog::new(records), Err(CalorieError::InvalidId(0))));
    }

    #[test]
    fn new_rejects_blank_fields() {
        let records = vec![FoodRecord::new(3, "Kale", "  ", 33)];
        assert!(matches!(
            Catalog::new(records),
            Err(CalorieError::EmptyField { id: 3, field: "portion" })
        ));

        let records = vec![FoodRecord::new(4, "", "1 cup", 33)];
        assert!(matches!(
            Catalog::new(records),
            Err(CalorieError::EmptyField { id: 4, field: "name" })
        ));
    }
}
