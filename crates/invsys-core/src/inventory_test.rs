use std::path::Path;

use rust_decimal::Decimal;

use super::*;

fn make_item(code: &str, name: &str, quantity: u32, min_stock: Option<u32>) -> Item {
    Item {
        code: code.to_string(),
        name: name.to_string(),
        description: None,
        category: None,
        warehouse: None,
        supplier: None,
        quantity,
        min_stock,
        unit_price: Decimal::ZERO,
    }
}

fn sample_items() -> Vec<Item> {
    let mut ont = make_item("ONT-1", "Optical Network Terminal", 42, Some(20));
    ont.category = Some("CPE".to_string());
    ont.warehouse = Some("Jakarta".to_string());
    ont.unit_price = Decimal::new(85_000_000, 2);
    ont.description = Some("GPON terminal for fibre installs".to_string());

    let mut stb = make_item("STB-1", "Set Top Box", 8, Some(15));
    stb.category = Some("cpe".to_string());
    stb.warehouse = Some("Jakarta".to_string());
    stb.unit_price = Decimal::new(62_000_000, 2);

    let mut cable = make_item("DC-24", "Drop Cable", 0, Some(500));
    cable.category = Some("Cabling".to_string());
    cable.warehouse = Some("Bandung".to_string());
    cable.unit_price = Decimal::new(450_000, 2);

    let mut odp = make_item("ODP-16", "Distribution Point", 10, None);
    odp.category = Some("Passive".to_string());
    odp.warehouse = Some("Bandung".to_string());
    odp.unit_price = Decimal::new(125_000_000, 2);

    vec![ont, stb, cable, odp]
}

// -----------------------------------------------------------------------
// Item
// -----------------------------------------------------------------------

#[test]
fn item_without_min_stock_uses_default() {
    let item = make_item("A", "Alpha", 10, None);
    assert_eq!(item.min_stock_or(10), 10);
    assert_eq!(item.status(10), StockStatus::LowStock);
    assert_eq!(item.status(9), StockStatus::InStock);
}

#[test]
fn item_reading_carries_own_threshold() {
    let item = make_item("A", "Alpha", 3, Some(2));
    assert_eq!(item.reading(10), StockReading::new(3, 2));
    assert_eq!(item.status(10), StockStatus::InStock);
}

#[test]
fn item_total_value_multiplies_quantity_by_price() {
    let mut item = make_item("A", "Alpha", 3, None);
    item.unit_price = Decimal::new(1250, 2);
    assert_eq!(item.total_value(), Decimal::new(3750, 2));
}

#[test]
fn item_out_of_stock_counts_as_low_stock() {
    let item = make_item("A", "Alpha", 0, Some(0));
    assert!(item.is_low_stock(10));
    assert_eq!(item.status(10), StockStatus::OutOfStock);
}

// -----------------------------------------------------------------------
// validation
// -----------------------------------------------------------------------

#[test]
fn validate_rejects_empty_code() {
    let inventory = InventoryFile {
        items: vec![make_item("  ", "Alpha", 1, None)],
    };
    let err = validate_inventory(&inventory).unwrap_err();
    assert!(err.to_string().contains("empty code"));
}

#[test]
fn validate_rejects_empty_name() {
    let inventory = InventoryFile {
        items: vec![make_item("A-1", "", 1, None)],
    };
    let err = validate_inventory(&inventory).unwrap_err();
    assert!(err.to_string().contains("empty name"));
}

#[test]
fn validate_rejects_duplicate_code_case_insensitive() {
    let inventory = InventoryFile {
        items: vec![
            make_item("ont-1", "Alpha", 1, None),
            make_item("ONT-1", "Beta", 2, None),
        ],
    };
    let err = validate_inventory(&inventory).unwrap_err();
    assert!(err.to_string().contains("duplicate item code"));
}

#[test]
fn validate_rejects_negative_price() {
    let mut item = make_item("A-1", "Alpha", 1, None);
    item.unit_price = Decimal::new(-100, 2);
    let inventory = InventoryFile { items: vec![item] };
    let err = validate_inventory(&inventory).unwrap_err();
    assert!(err.to_string().contains("negative unit price"));
}

#[test]
fn validate_accepts_sample_items() {
    let inventory = InventoryFile {
        items: sample_items(),
    };
    assert!(validate_inventory(&inventory).is_ok());
}

#[test]
fn inventory_yaml_defaults_missing_fields() {
    let yaml = r#"
items:
  - code: SPL-1X8
    name: Splitter PLC 1x8
  - code: PATCH-3M
    name: Patch Cord
    quantity: 7
    min_stock: 4
    unit_price: "18000.50"
"#;
    let file: InventoryFile = serde_yaml::from_str(yaml).expect("parse");
    assert_eq!(file.items.len(), 2);
    assert_eq!(file.items[0].quantity, 0);
    assert_eq!(file.items[0].min_stock, None);
    assert_eq!(file.items[0].unit_price, Decimal::ZERO);
    assert_eq!(file.items[1].min_stock, Some(4));
    assert_eq!(file.items[1].unit_price, Decimal::new(1_800_050, 2));
}

#[test]
fn inventory_yaml_rejects_negative_quantity() {
    let yaml = r"
items:
  - code: A
    name: Alpha
    quantity: -3
";
    assert!(serde_yaml::from_str::<InventoryFile>(yaml).is_err());
}

#[test]
fn load_inventory_missing_file_is_io_error() {
    let err = load_inventory(Path::new("/definitely/not/here/inventory.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::InventoryFileIo { .. }));
}

#[test]
fn load_inventory_from_sample_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("inventory.yaml");
    assert!(
        path.exists(),
        "inventory.yaml missing at {path:?}; required for this test"
    );
    let inventory = load_inventory(&path).expect("failed to load inventory.yaml");
    assert!(!inventory.items.is_empty());

    let summary = InventorySummary::compute(&inventory.items, 10, 5);
    assert_eq!(summary.total_items, 6);
    assert_eq!(summary.low_stock_count, 3);
    assert_eq!(summary.status_counts.out_of_stock, 1);
}

// -----------------------------------------------------------------------
// StockFilter
// -----------------------------------------------------------------------

#[test]
fn stock_filter_parses_known_values() {
    assert_eq!("".parse::<StockFilter>().unwrap(), StockFilter::All);
    assert_eq!("all".parse::<StockFilter>().unwrap(), StockFilter::All);
    assert_eq!("LOW".parse::<StockFilter>().unwrap(), StockFilter::Low);
    assert_eq!(" out ".parse::<StockFilter>().unwrap(), StockFilter::Out);
}

#[test]
fn stock_filter_rejects_unknown() {
    let err = "soon".parse::<StockFilter>().unwrap_err();
    assert!(matches!(err, CoreError::InvalidStockFilter(ref v) if v == "soon"));
}

#[test]
fn stock_filter_display_roundtrips() {
    for filter in [StockFilter::All, StockFilter::Low, StockFilter::Out] {
        assert_eq!(filter.to_string().parse::<StockFilter>().unwrap(), filter);
    }
}

#[test]
fn stock_filter_low_includes_out_of_stock() {
    let items = sample_items();
    let codes: Vec<&str> = items
        .iter()
        .filter(|i| StockFilter::Low.matches(i, 10))
        .map(|i| i.code.as_str())
        .collect();
    assert_eq!(codes, vec!["STB-1", "DC-24", "ODP-16"]);
}

#[test]
fn stock_filter_out_only_zero_quantity() {
    let items = sample_items();
    let codes: Vec<&str> = items
        .iter()
        .filter(|i| StockFilter::Out.matches(i, 10))
        .map(|i| i.code.as_str())
        .collect();
    assert_eq!(codes, vec!["DC-24"]);
}

// -----------------------------------------------------------------------
// ItemQuery
// -----------------------------------------------------------------------

#[test]
fn query_default_returns_all_sorted_by_name() {
    let items = sample_items();
    let names: Vec<&str> = ItemQuery::default()
        .apply(&items, 10)
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Distribution Point",
            "Drop Cable",
            "Optical Network Terminal",
            "Set Top Box"
        ]
    );
}

#[test]
fn query_search_matches_code_name_and_description() {
    let items = sample_items();
    let by_code = ItemQuery {
        search: Some("odp".to_string()),
        ..ItemQuery::default()
    };
    assert_eq!(by_code.apply(&items, 10).len(), 1);

    let by_description = ItemQuery {
        search: Some("GPON".to_string()),
        ..ItemQuery::default()
    };
    let found = by_description.apply(&items, 10);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "ONT-1");
}

#[test]
fn query_blank_search_is_ignored() {
    let items = sample_items();
    let query = ItemQuery {
        search: Some("   ".to_string()),
        ..ItemQuery::default()
    };
    assert_eq!(query.apply(&items, 10).len(), items.len());
}

#[test]
fn query_category_and_stock_filters_combine() {
    let items = sample_items();
    let query = ItemQuery {
        category: Some("CPE".to_string()),
        stock: StockFilter::Low,
        ..ItemQuery::default()
    };
    let found = query.apply(&items, 10);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "STB-1");
}

#[test]
fn query_warehouse_filter() {
    let items = sample_items();
    let query = ItemQuery {
        warehouse: Some("bandung".to_string()),
        ..ItemQuery::default()
    };
    let codes: Vec<&str> = query
        .apply(&items, 10)
        .iter()
        .map(|i| i.code.as_str())
        .collect();
    assert_eq!(codes, vec!["ODP-16", "DC-24"]);
}

// -----------------------------------------------------------------------
// InventorySummary
// -----------------------------------------------------------------------

#[test]
fn summary_counts_and_value() {
    let items = sample_items();
    let summary = InventorySummary::compute(&items, 10, 5);

    assert_eq!(summary.total_items, 4);
    // "CPE" and "cpe" collapse into one category.
    assert_eq!(summary.total_categories, 3);
    assert_eq!(summary.total_warehouses, 2);
    assert_eq!(summary.low_stock_count, 3);
    assert_eq!(
        summary.status_counts,
        StatusCounts {
            out_of_stock: 1,
            low_stock: 2,
            in_stock: 1,
        }
    );
    // 42 * 850000 + 8 * 620000 + 0 * 4500 + 10 * 1250000
    assert_eq!(summary.total_value, Decimal::new(53_160_000, 0));
}

#[test]
fn summary_preview_is_limited_and_name_ordered() {
    let items = sample_items();
    let summary = InventorySummary::compute(&items, 10, 2);
    assert_eq!(summary.low_stock_count, 3);
    let codes: Vec<&str> = summary
        .low_stock_preview
        .iter()
        .map(|e| e.code.as_str())
        .collect();
    assert_eq!(codes, vec!["ODP-16", "DC-24"]);
    assert_eq!(summary.low_stock_preview[0].min_stock, 10);
    assert_eq!(summary.low_stock_preview[0].status, StockStatus::LowStock);
    assert_eq!(summary.low_stock_preview[1].status, StockStatus::OutOfStock);
}

#[test]
fn summary_respects_default_threshold() {
    let items = sample_items();
    let summary = InventorySummary::compute(&items, 5, 5);
    // ODP-16 (10 units, no threshold) is in stock once the default drops to 5.
    assert_eq!(summary.low_stock_count, 2);
    assert_eq!(summary.status_counts.in_stock, 2);
}

#[test]
fn summary_of_empty_catalog() {
    let summary = InventorySummary::compute(&[], 10, 5);
    assert_eq!(summary.total_items, 0);
    assert_eq!(summary.total_value, Decimal::ZERO);
    assert!(summary.low_stock_preview.is_empty());
}

// -----------------------------------------------------------------------
// value overflow
// -----------------------------------------------------------------------

#[test]
fn validate_rejects_item_value_overflow() {
    let yaml = r#"
items:
  - code: HUGE-1
    name: Overpriced
    quantity: 3
    unit_price: "79228162514264337593543950335"
"#;
    let inventory: InventoryFile = serde_yaml::from_str(yaml).expect("parse");
    let err = validate_inventory(&inventory).unwrap_err();
    assert!(
        err.to_string().contains("value overflows"),
        "unexpected error: {err}"
    );
}

#[test]
fn validate_rejects_catalog_value_overflow() {
    let mut first = make_item("A-1", "Alpha", 1, None);
    first.unit_price = Decimal::MAX;
    let mut second = make_item("B-2", "Beta", 1, None);
    second.unit_price = Decimal::MAX;
    let inventory = InventoryFile {
        items: vec![first, second],
    };
    let err = validate_inventory(&inventory).unwrap_err();
    assert!(err.to_string().contains("catalog value overflows"));
}

#[test]
fn total_value_saturates_instead_of_panicking() {
    let mut item = make_item("HUGE-1", "Overpriced", 3, None);
    item.unit_price = Decimal::MAX;
    assert_eq!(item.checked_total_value(), None);
    assert_eq!(item.total_value(), Decimal::MAX);
}

#[test]
fn summary_saturates_total_value() {
    let mut first = make_item("A-1", "Alpha", 3, None);
    first.unit_price = Decimal::MAX;
    let mut second = make_item("B-2", "Beta", 1, None);
    second.unit_price = Decimal::MAX;
    let summary = InventorySummary::compute(&[first, second], 10, 5);
    assert_eq!(summary.total_value, Decimal::MAX);
}

// -----------------------------------------------------------------------
// group_items
// -----------------------------------------------------------------------

#[test]
fn group_by_category_ordered_by_name() {
    let items = sample_items();
    let groups = group_items(&items, GroupBy::Category, 10);
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    // "CPE" and "cpe" merge; the first spelling wins.
    assert_eq!(names, vec!["Cabling", "CPE", "Passive"]);

    let cpe = &groups[1];
    assert_eq!(cpe.item_count, 2);
    assert_eq!(cpe.total_quantity, 50);
    assert_eq!(cpe.total_min_stock, 35);
    assert_eq!(cpe.low_stock_count, 1);
    assert_eq!(cpe.badge.status, StockStatus::InStock);
    assert_eq!(cpe.total_value, Decimal::new(40_660_000, 0));

    assert_eq!(groups[0].badge.status, StockStatus::OutOfStock);
    // ODP-16 has no threshold, so the default applies to its group.
    assert_eq!(groups[2].total_min_stock, 10);
    assert_eq!(groups[2].badge.status, StockStatus::LowStock);
}

#[test]
fn group_by_warehouse() {
    let items = sample_items();
    let groups = group_items(&items, GroupBy::Warehouse, 10);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Bandung");
    assert_eq!(groups[0].total_quantity, 10);
    assert_eq!(groups[0].total_min_stock, 510);
    assert_eq!(groups[0].low_stock_count, 2);
    assert_eq!(groups[0].badge.status, StockStatus::LowStock);
    assert_eq!(groups[1].name, "Jakarta");
    assert_eq!(groups[1].badge.status, StockStatus::InStock);
}

#[test]
fn group_items_without_attribute_are_unassigned() {
    let mut blank = make_item("B-2", "Beta", 4, Some(2));
    blank.warehouse = Some("   ".to_string());
    let items = vec![make_item("A-1", "Alpha", 0, None), blank];
    let groups = group_items(&items, GroupBy::Warehouse, 10);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, UNASSIGNED_GROUP);
    assert_eq!(groups[0].item_count, 2);
    assert_eq!(groups[0].total_quantity, 4);
    assert_eq!(groups[0].total_min_stock, 12);
}

#[test]
fn group_quantities_saturate() {
    let items = vec![
        make_item("A-1", "Alpha", u32::MAX, Some(u32::MAX)),
        make_item("B-2", "Beta", 5, Some(1)),
    ];
    let groups = group_items(&items, GroupBy::Category, 10);
    assert_eq!(groups[0].total_quantity, u32::MAX);
    assert_eq!(groups[0].total_min_stock, u32::MAX);
    assert_eq!(groups[0].badge.status, StockStatus::LowStock);
}

#[test]
fn group_of_empty_catalog_is_empty() {
    assert!(group_items(&[], GroupBy::Category, 10).is_empty());
}

#[test]
fn group_by_display() {
    assert_eq!(GroupBy::Category.to_string(), "category");
    assert_eq!(GroupBy::Warehouse.to_string(), "warehouse");
}
