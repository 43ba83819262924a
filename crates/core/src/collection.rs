//! In-memory, ordered product catalog.
//!
//! Products keep their insertion order. Lookups are linear scans, which is
//! all a hand-maintained catalog needs.

use log::{info, warn};

use crate::error::{Error, Result};
use crate::product::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCollection {
    products: Vec<Product>,
}

impl ProductCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Adds a product to the end of the catalog.
    ///
    /// Identifiers are not checked for uniqueness; a duplicate only gets logged.
    pub fn append(&mut self, product: Product) {
        if self.search_by_id(product.id).is_some() {
            warn!("Appending product with duplicate ID {}", product.id);
        }
        info!("Appending product {}", product);
        self.products.push(product);
    }

    /// Returns the first product with the given ID, if any.
    #[must_use]
    pub fn search_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Returns every product matching the predicate, in catalog order.
    pub fn search<P>(&self, predicate: P) -> Vec<&Product>
    where
        P: Fn(&Product) -> bool,
    {
        self.products
            .iter()
            .filter(|product| predicate(product))
            .collect()
    }

    /// Removes the first product with the given ID and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProductNotFound`] if no product has that ID. The
    /// catalog is left untouched in that case.
    pub fn remove_by_id(&mut self, id: u32) -> Result<Product> {
        let index = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or(Error::ProductNotFound(id))?;

        let removed = self.products.remove(index);
        info!("Removed product {}", removed);
        Ok(removed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl FromIterator<Product> for ProductCollection {
    fn from_iter<T: IntoIterator<Item = Product>>(iter: T) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ProductCollection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl IntoIterator for ProductCollection {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.into_iter()
    }
}
