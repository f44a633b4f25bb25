use std::collections::HashMap;

/// A category derived from the product extract, before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Natural category ID, assigned 1..N in first-observed order
    pub category_id: i32,
    pub name: String,
    pub description: String,
}

/// Category name to natural ID mapping handed from the category loader to the
/// product loader.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    entries: Vec<CategoryEntry>,
    by_name: HashMap<String, i32>,
}

impl CategoryTable {
    /// Builds the table from category names in extract order.
    ///
    /// Duplicate names keep the ID of their first occurrence; IDs are dense
    /// from 1 with no gaps.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();

        for name in names {
            if table.by_name.contains_key(name) {
                continue;
            }

            let category_id = table.entries.len() as i32 + 1;
            table.by_name.insert(name.to_string(), category_id);
            table.entries.push(CategoryEntry {
                category_id,
                name: name.to_string(),
                description: format!("Category of {}", name),
            });
        }

        table
    }

    /// Natural category ID for `name`, if the name was observed.
    pub fn category_id(&self, name: &str) -> Option<i32> {
        self.by_name.get(name).copied()
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
