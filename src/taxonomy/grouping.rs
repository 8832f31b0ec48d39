use super::types::{Classified, Taxonomy};

impl Taxonomy {
    /// Items whose classification is listed under `key`, in input order.
    ///
    /// An unknown key behaves like a category with no members.
    pub fn items_by_category<T: Classified + Clone>(&self, key: &str, items: &[T]) -> Vec<T> {
        let Some(category) = self.get(key) else {
            return vec![];
        };

        items
            .iter()
            .filter(|item| category.contains(item.classification()))
            .cloned()
            .collect()
    }

    /// Member count per category, in taxonomy order
    pub fn category_counts<T: Classified>(&self, items: &[T]) -> Vec<(&str, usize)> {
        self.categories()
            .iter()
            .map(|category| {
                let count = items
                    .iter()
                    .filter(|item| category.contains(item.classification()))
                    .count();
                (category.key.as_str(), count)
            })
            .collect()
    }

    /// Count per category with each item assigned to exactly one category via
    /// [`Taxonomy::category_of`], plus the number of unassigned items.
    ///
    /// Unlike [`Taxonomy::category_counts`], the totals add up to `items.len()`.
    pub fn assigned_counts<T: Classified>(&self, items: &[T]) -> (Vec<(&str, usize)>, usize) {
        let mut counts: Vec<(&str, usize)> = self.keys().map(|key| (key, 0)).collect();
        let mut unassigned = 0;

        for item in items {
            match self.category_of(item.classification()) {
                Some(category) => {
                    if let Some(slot) = counts.iter_mut().find(|(key, _)| *key == category.key) {
                        slot.1 += 1;
                    }
                }
                None => unassigned += 1,
            }
        }

        (counts, unassigned)
    }
}

/// Free-function form of [`Taxonomy::items_by_category`]
pub fn items_by_category<T: Classified + Clone>(
    taxonomy: &Taxonomy,
    key: &str,
    items: &[T],
) -> Vec<T> {
    taxonomy.items_by_category(key, items)
}
