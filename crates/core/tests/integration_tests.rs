//! Integration tests for catalog-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use catalog_core::{
    collection::ProductCollection,
    config::{load_config, CatalogConfig},
    error::Error,
    file_handling::{load_catalog, load_saved_catalog, save_catalog, LoadOptions},
    product::{CatalogEntry, Category, Product},
};
use std::io::Write;
use tempfile::NamedTempFile;

const PRODUCTS_CSV: &str = "\
id,nome,tipo,quantidade,preco
1,Arroz Agulha,AL,120,1.09
2,Detergente Loiça,DL,35,2.49
3,Bananas,FRL,80,0.99
";

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

fn ids(catalog: &ProductCollection) -> Vec<u32> {
    catalog.iter().map(|product| product.id).collect()
}

/// Load a catalog, delete the middle product and check the order of the rest
#[test]
fn test_load_then_delete_keeps_order() {
    let temp_file = write_temp(PRODUCTS_CSV);
    let mut catalog =
        load_catalog(temp_file.path().to_str().unwrap(), &LoadOptions::default()).unwrap();
    assert_eq!(ids(&catalog), vec![1, 2, 3]);

    catalog.remove_by_id(2).unwrap();

    assert_eq!(ids(&catalog), vec![1, 3]);
    assert!(catalog.search_by_id(2).is_none());
}

/// A product added to the catalog can be found again with all its fields
#[test]
fn test_add_then_search_by_id_returns_equal_product() {
    let temp_file = write_temp(PRODUCTS_CSV);
    let mut catalog =
        load_catalog(temp_file.path().to_str().unwrap(), &LoadOptions::default()).unwrap();

    let widget = Product::new(10, "Widget", "AL".parse().unwrap(), 5, 9.99).unwrap();
    catalog.append(widget.clone());

    let found = catalog.search_by_id(10).unwrap();
    assert_eq!(found, &widget);
    assert_eq!(found.name, "Widget");
    assert_eq!(found.category, Category::Al);
    assert_eq!(found.quantity, 5);
    assert!((found.price - 9.99).abs() < f64::EPSILON);
}

/// An empty search result is distinct from a missing product
#[test]
fn test_search_by_type_without_matches() {
    let catalog = ProductCollection::from_products(vec![
        Product::new(1, "Arroz", Category::Al, 1, 1.0).unwrap(),
        Product::new(2, "Lixívia", Category::Dl, 1, 1.0).unwrap(),
    ]);

    let found = catalog.search(|product| product.category == Category::Frl);

    assert!(found.is_empty());
    assert!(catalog.search_by_id(1).is_some());
}

/// Saving and reloading keeps identifier, name and quantity
#[test]
fn test_save_and_reload_round_trip() {
    let products_file = write_temp(PRODUCTS_CSV);
    let catalog =
        load_catalog(products_file.path().to_str().unwrap(), &LoadOptions::default()).unwrap();

    let output_file = NamedTempFile::new().unwrap();
    let output_path = output_file.path().to_str().unwrap();
    save_catalog(output_path, &catalog).unwrap();

    let saved = load_saved_catalog(output_path).unwrap();
    let expected: Vec<CatalogEntry> = catalog.iter().map(CatalogEntry::from).collect();
    assert_eq!(saved, expected);
    assert_eq!(saved[1].name, "Detergente Loiça");
}

/// A malformed row aborts the whole load
#[test]
fn test_malformed_row_aborts_load() {
    let temp_file = write_temp(
        "\
id,nome,tipo,quantidade,preco
1,Arroz,AL,10,1.20
2,Sem preço,DL,4,
3,Bananas,FRL,80,0.99
",
    );

    let result = load_catalog(temp_file.path().to_str().unwrap(), &LoadOptions::default());

    match result {
        Err(Error::InvalidRecord { line, .. }) => assert_eq!(line, 3),
        other => panic!("Expected an invalid record error, got {other:?}"),
    }
}

/// Configuration drives how the products file is read
#[test]
fn test_config_driven_load() {
    let products_file = write_temp("7;Pêras;FRL;15;1.75\n8;Sabão;DL;3;0.80\n");
    let config_file = write_temp(&format!(
        "products_path: {}\nhas_header: false\ndelimiter: \";\"\n",
        products_file.path().to_str().unwrap()
    ));

    let config = load_config(config_file.path().to_str().unwrap())
        .unwrap()
        .expanded();
    let options = LoadOptions::try_from(&config).unwrap();
    let catalog = load_catalog(&config.products_path, &options).unwrap();

    assert_eq!(ids(&catalog), vec![7, 8]);
    assert_eq!(config.output_path, CatalogConfig::default().output_path);
}
