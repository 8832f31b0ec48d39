use super::*;
use proptest::prelude::*;

fn make_item(id: &str, classification: &str) -> Item {
    Item::new(id, classification)
}

fn studio_taxonomy() -> Taxonomy {
    Taxonomy::default()
        .with_category("weddings", ["wedding", "engagement"])
        .with_category("portraits", ["portrait", "family"])
}

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_grouping_keeps_input_order() {
    let taxonomy = studio_taxonomy();
    let items = vec![
        make_item("1", "wedding"),
        make_item("2", "portrait"),
        make_item("3", "engagement"),
    ];

    let weddings = taxonomy.items_by_category("weddings", &items);
    assert_eq!(ids(&weddings), vec!["1", "3"]);

    let portraits = items_by_category(&taxonomy, "portraits", &items);
    assert_eq!(ids(&portraits), vec!["2"]);
}

#[test]
fn test_grouping_unknown_key_is_empty() {
    let taxonomy = studio_taxonomy();
    let items = vec![make_item("1", "wedding")];

    assert!(taxonomy.items_by_category("drone", &items).is_empty());
}

#[test]
fn test_grouping_no_matches_is_empty() {
    let taxonomy = studio_taxonomy();
    let items = vec![make_item("1", "corporate"), make_item("2", "product")];

    assert!(taxonomy.items_by_category("weddings", &items).is_empty());
    assert!(taxonomy.items_by_category::<Item>("weddings", &[]).is_empty());
}

#[test]
fn test_category_of_first_match_wins() {
    let taxonomy = Taxonomy::default()
        .with_category("corporate", ["corporate", "headshot"])
        .with_category("portraits", ["portrait", "headshot"]);

    assert_eq!(taxonomy.category_of("headshot").unwrap().key, "corporate");
    assert_eq!(taxonomy.category_of("portrait").unwrap().key, "portraits");
    assert!(taxonomy.category_of("pet").is_none());

    // Grouping still consults only the requested category's own list
    let items = vec![make_item("a", "headshot")];
    assert_eq!(taxonomy.items_by_category("portraits", &items).len(), 1);
}

#[test]
fn test_overlaps_reported() {
    let taxonomy = Taxonomy::default()
        .with_category("corporate", ["corporate", "headshot"])
        .with_category("portraits", ["portrait", "headshot"])
        .with_category("events", ["event"]);

    let overlaps = taxonomy.overlaps();
    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].0, "headshot");
    assert_eq!(overlaps[0].1, vec!["corporate", "portraits"]);

    assert!(studio_taxonomy().overlaps().is_empty());
}

#[test]
fn test_category_counts_in_taxonomy_order() {
    let taxonomy = studio_taxonomy();
    let items = vec![
        make_item("1", "family"),
        make_item("2", "wedding"),
        make_item("3", "portrait"),
        make_item("4", "unclassified"),
    ];

    let counts = taxonomy.category_counts(&items);
    assert_eq!(counts, vec![("weddings", 1), ("portraits", 2)]);
}

#[test]
fn test_assigned_counts_place_each_item_once() {
    let taxonomy = Taxonomy::default()
        .with_category("corporate", ["corporate", "headshot"])
        .with_category("portraits", ["portrait", "headshot"]);
    let items = vec![
        make_item("1", "headshot"),
        make_item("2", "portrait"),
        make_item("3", "headshot"),
        make_item("4", "drone"),
    ];

    // Membership counts double-count the shared classification
    assert_eq!(
        taxonomy.category_counts(&items),
        vec![("corporate", 2), ("portraits", 3)]
    );

    let (counts, unassigned) = taxonomy.assigned_counts(&items);
    assert_eq!(counts, vec![("corporate", 2), ("portraits", 1)]);
    assert_eq!(unassigned, 1);
    let total: usize = counts.iter().map(|(_, n)| n).sum::<usize>() + unassigned;
    assert_eq!(total, items.len());
}

#[test]
fn test_keys_and_lookup() {
    let taxonomy = studio_taxonomy();
    assert_eq!(taxonomy.keys().collect::<Vec<_>>(), vec!["weddings", "portraits"]);
    assert_eq!(taxonomy.len(), 2);
    assert!(!taxonomy.is_empty());
    assert!(taxonomy.get("portraits").unwrap().contains("family"));
    assert!(taxonomy.get("missing").is_none());
}

#[test]
fn test_format_label() {
    assert_eq!(format_label("matric-dance"), "Matric Dance");
    assert_eq!(format_label("linkedin_headshots"), "Linkedin Headshots");
    assert_eq!(format_label("product"), "Product");
}

#[test]
fn test_format_label_collapses_separators() {
    assert_eq!(format_label("  baby--shower__ SHOOT "), "Baby Shower Shoot");
    assert_eq!(format_label("mIxEd case"), "Mixed Case");
    assert_eq!(format_label(""), "");
    assert_eq!(format_label("-_ "), "");
}

#[test]
fn test_display_label() {
    let plain = Category::new("matric-dance", ["matric"]);
    assert_eq!(plain.display_label(), "Matric Dance");

    let labelled = Category::new("products", ["product"]).with_label("Product Photography");
    assert_eq!(labelled.display_label(), "Product Photography");
}

#[test]
fn test_item_json_passthrough() {
    let json = r#"[
        {"id": 7, "classification": "wedding", "url": "/img/7.jpg", "width": 1200},
        {"id": "b2c1", "classification": "family"}
    ]"#;

    let items: Vec<Item> = serde_json::from_str(json).unwrap();
    assert_eq!(items[0].id, "7");
    assert_eq!(items[0].attributes["url"], "/img/7.jpg");
    assert_eq!(items[0].attributes["width"], 1200);
    assert_eq!(items[1].id, "b2c1");
    assert!(items[1].attributes.is_empty());

    let back = serde_json::to_value(&items[0]).unwrap();
    assert_eq!(back["url"], "/img/7.jpg");
    assert_eq!(back["classification"], "wedding");
}

#[test]
fn test_item_with_attribute() {
    let item = make_item("1", "wedding").with_attribute("alt", "First dance");
    assert_eq!(item.attributes["alt"], "First dance");
}

const CLASSIFICATIONS: [&str; 5] = ["wedding", "engagement", "portrait", "family", "corporate"];

proptest! {
    #[test]
    fn prop_grouping_is_ordered_subsequence(tags in prop::collection::vec(0usize..5, 0..60)) {
        let taxonomy = studio_taxonomy();
        let items: Vec<Item> = tags
            .iter()
            .enumerate()
            .map(|(i, &t)| make_item(&i.to_string(), CLASSIFICATIONS[t]))
            .collect();

        let grouped = taxonomy.items_by_category("weddings", &items);
        let expected: Vec<Item> = items
            .iter()
            .filter(|i| i.classification == "wedding" || i.classification == "engagement")
            .cloned()
            .collect();

        prop_assert_eq!(grouped, expected);
    }
}
