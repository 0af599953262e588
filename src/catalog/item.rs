/// A selectable catalog entry
///
/// Items are produced by the catalog loader and immutable for the rest of
/// the session. They describe what *could* go in the bag; committed units
/// are tracked separately as `BagEntry` records.
///
/// Invariant: `weight >= 0.0 && volume >= 0.0`. The loader is responsible
/// for coercing malformed source values to 0 rather than letting NaN or
/// negative numbers through.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique positive identifier, stable for the session
    pub id: u32,

    /// Source name (used to derive the image reference)
    pub name: String,

    /// Localized display name shown in the grid and modal
    pub localized_name: String,

    /// Weight of a single unit in kg
    pub weight: f32,

    /// Volume of a single unit in cubic meters
    pub volume: f32,

    /// Tooltip/description text, may be empty
    pub description: String,

    /// Path to the item sprite, derived from `name`
    pub image_ref: String,
}

impl Item {
    /// Returns true if this item matches a search query
    ///
    /// Matching is a case-insensitive substring test against the localized
    /// name. An empty query matches every item.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.localized_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    /// Derives the sprite path for an item name
    ///
    /// Lowercases the name and replaces spaces with underscores, so
    /// "Canned Beans" maps to "assets/items/canned_beans.png". The mapping
    /// is deterministic; the presentation layer falls back to a placeholder
    /// when the file is missing.
    pub fn derive_image_ref(name: &str) -> String {
        let slug: String = name
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        format!("assets/items/{}.png", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: 1,
            name: "Canned Beans".to_string(),
            localized_name: "Baked Beans".to_string(),
            weight: 1.5,
            volume: 0.5,
            description: String::new(),
            image_ref: Item::derive_image_ref("Canned Beans"),
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let item = sample_item();

        assert!(item.matches_search("beans"));
        assert!(item.matches_search("BAKED"));
        assert!(item.matches_search("ked Be"));
        assert!(!item.matches_search("rice"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let item = sample_item();

        assert!(item.matches_search(""));
    }

    #[test]
    fn test_image_ref_derivation() {
        assert_eq!(
            Item::derive_image_ref("Canned Beans"),
            "assets/items/canned_beans.png"
        );
        assert_eq!(Item::derive_image_ref(" Rope "), "assets/items/rope.png");
    }
}
