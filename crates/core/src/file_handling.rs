//! Reading and writing catalog files.
//!
//! The catalog is loaded from a delimited text file with one product per row
//! (identifier, name, category, quantity, price) and saved as a JSON list of
//! `{id, name, quantity}` entries.

use std::fs::{self, File};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::collection::ProductCollection;
use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::product::{CatalogEntry, Category, Product};

const PRODUCT_FIELD_COUNT: usize = 5;

/// How the delimited products file is laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    pub has_header: bool,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
        }
    }
}

impl TryFrom<&CatalogConfig> for LoadOptions {
    type Error = Error;

    fn try_from(value: &CatalogConfig) -> Result<Self> {
        if !value.delimiter.is_ascii() {
            return Err(Error::InvalidDelimiter(value.delimiter));
        }

        Ok(Self {
            has_header: value.has_header,
            delimiter: value.delimiter as u8,
        })
    }
}

#[derive(Deserialize, Debug)]
struct ProductRecord {
    id: u32,
    name: String,
    category: String,
    quantity: u32,
    price: f64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = Error;

    fn try_from(value: ProductRecord) -> Result<Self> {
        let category: Category = value.category.parse()?;
        Product::new(value.id, &value.name, category, value.quantity, value.price)
    }
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn parse_record(path: &str, record: &StringRecord) -> Result<Product> {
    let line = record.position().map_or(0, csv::Position::line);

    if record.len() != PRODUCT_FIELD_COUNT {
        return Err(Error::invalid_record(
            path.to_string(),
            line,
            format!(
                "expected {} fields, found {}",
                PRODUCT_FIELD_COUNT,
                record.len()
            ),
        ));
    }

    let product_record: ProductRecord = record
        .deserialize(None)
        .map_err(|e| Error::invalid_record(path.to_string(), line, e.to_string()))?;

    Product::try_from(product_record)
        .map_err(|e| Error::invalid_record(path.to_string(), line, e.to_string()))
}

/// Loads the product catalog from a delimited text file.
///
/// Loading is all-or-nothing: the first malformed row aborts the load.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - A row does not have exactly five fields
/// - The identifier, quantity or price are not valid numbers
/// - The category is not a known code, or the name is empty
///
/// # Examples
///
/// ```no_run
/// use catalog_core::file_handling::{load_catalog, LoadOptions};
///
/// let catalog = load_catalog("products.csv", &LoadOptions::default())?;
/// println!("Loaded {} products", catalog.len());
/// # Ok::<(), catalog_core::error::Error>(())
/// ```
pub fn load_catalog(path: &str, options: &LoadOptions) -> Result<ProductCollection> {
    debug!("Loading products from `{}` with {:?}", path, options);
    let reader = get_reader("products", path)?;

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(options.has_header)
        .delimiter(options.delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut products = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| Error::Csv {
            path: path.to_string(),
            original: e,
        })?;
        products.push(parse_record(path, &record)?);
    }

    info!("Loaded {} products from `{}`", products.len(), path);
    Ok(ProductCollection::from_products(products))
}

/// Saves the catalog as a JSON list of `{id, name, quantity}` entries.
///
/// Category and price are not part of the saved format. The destination is
/// overwritten, and only touched once the whole document has been serialized.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_catalog(path: &str, catalog: &ProductCollection) -> Result<()> {
    let entries: Vec<CatalogEntry> = catalog.iter().map(CatalogEntry::from).collect();

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    entries.serialize(&mut serializer).map_err(|e| {
        Error::json_error(
            "writing".to_string(),
            "catalog".to_string(),
            path.to_string(),
            e,
        )
    })?;

    fs::write(path, buffer)
        .map_err(|e| Error::io_error("catalog".to_string(), path.to_string(), e))?;

    info!("Saved {} products to `{}`", entries.len(), path);
    Ok(())
}

/// Reads back a catalog written by [`save_catalog`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a list of entries.
pub fn load_saved_catalog(path: &str) -> Result<Vec<CatalogEntry>> {
    let reader = get_reader("catalog", path)?;

    serde_json::from_reader(reader).map_err(|e| {
        Error::json_error(
            "reading".to_string(),
            "catalog".to_string(),
            path.to_string(),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_products(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    fn load(content: &str, options: &LoadOptions) -> Result<ProductCollection> {
        let temp_file = write_products(content);
        load_catalog(temp_file.path().to_str().unwrap(), options)
    }

    #[test]
    fn test_load_catalog_with_header() {
        let catalog = load(
            "id,nome,tipo,quantidade,preco\n1,Arroz,AL,10,1.20\n2,Lixívia,DL,4,2.50\n",
            &LoadOptions::default(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let lixivia = catalog.search_by_id(2).unwrap();
        assert_eq!(lixivia.name, "Lixívia");
        assert_eq!(lixivia.category, Category::Dl);
        assert_eq!(lixivia.quantity, 4);
        assert!((lixivia.price - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_catalog_without_header_and_custom_delimiter() {
        let options = LoadOptions {
            has_header: false,
            delimiter: b';',
        };
        let catalog = load("3; Maçã ; frl ; 20 ; 0.35\n", &options).unwrap();

        let product = catalog.search_by_id(3).unwrap();
        assert_eq!(product.name, "Maçã");
        assert_eq!(product.category, Category::Frl);
    }

    #[test]
    fn test_load_catalog_unknown_category() {
        let result = load(
            "id,nome,tipo,quantidade,preco\n1,Arroz,XX,10,1.20\n",
            &LoadOptions::default(),
        );
        assert!(matches!(result, Err(Error::InvalidRecord { line: 2, .. })));
    }

    #[test]
    fn test_load_catalog_wrong_field_count() {
        let result = load(
            "id,nome,tipo,quantidade,preco\n1,Arroz,AL,10\n",
            &LoadOptions::default(),
        );
        assert!(matches!(result, Err(Error::InvalidRecord { .. })));
    }

    #[test]
    fn test_load_catalog_non_numeric_quantity() {
        let result = load(
            "id,nome,tipo,quantidade,preco\n1,Arroz,AL,muitos,1.20\n",
            &LoadOptions::default(),
        );
        assert!(matches!(result, Err(Error::InvalidRecord { .. })));
    }

    #[test]
    fn test_load_catalog_file_not_found() {
        let result = load_catalog("/this/path/does/not/exist.csv", &LoadOptions::default());
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_options_from_config_rejects_non_ascii_delimiter() {
        let config = CatalogConfig {
            delimiter: '§',
            ..CatalogConfig::default()
        };
        let result = LoadOptions::try_from(&config);
        assert!(matches!(result, Err(Error::InvalidDelimiter('§'))));
    }

    #[test]
    fn test_save_catalog_writes_narrow_entries() {
        let catalog = ProductCollection::from_products(vec![
            Product::new(1, "Arroz", Category::Al, 10, 1.2).unwrap(),
        ]);
        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        save_catalog(temp_path, &catalog).unwrap();

        let written = fs::read_to_string(temp_path).unwrap();
        assert_eq!(
            written,
            "[\n    {\n        \"id\": 1,\n        \"name\": \"Arroz\",\n        \"quantity\": 10\n    }\n]"
        );
    }

    #[test]
    fn test_save_catalog_overwrites_existing_file() {
        let temp_file = write_products("old content that is definitely longer than the new one");
        let temp_path = temp_file.path().to_str().unwrap();

        save_catalog(temp_path, &ProductCollection::new()).unwrap();

        assert_eq!(fs::read_to_string(temp_path).unwrap(), "[]");
    }

    #[test]
    fn test_load_saved_catalog_invalid_json() {
        let temp_file = write_products("{ not json");
        let result = load_saved_catalog(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Json { .. })));
    }
}
