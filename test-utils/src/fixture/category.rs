//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Science Fiction";

/// Creates a category entity model with id `1` and the default name.
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
    }
}
