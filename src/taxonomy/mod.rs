mod grouping;
mod label;
mod types;

#[cfg(test)]
mod tests;

pub use grouping::items_by_category;
pub use label::format_label;
pub use types::{Category, Classified, Item, Taxonomy};
