// catalog_server/src/db/seed.rs

/// Sample catalog written into an empty `items` table: `(name, price, category)`.
pub const SEED_ITEMS: &[(&str, f64, &str)] = &[
  ("Coffee - Small", 30.0, "beverages"),
  ("Coffee - Medium", 45.0, "beverages"),
  ("Coffee - Large", 60.0, "beverages"),
  ("Sandwich", 50.0, "food"),
  ("Fries", 35.0, "food"),
  ("Pizza", 120.0, "food"),
  ("Burger", 100.0, "food"),
];
