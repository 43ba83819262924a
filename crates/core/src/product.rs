use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classification code attached to every product.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    /// Alimentação
    Al,
    /// Detergentes e Limpeza
    Dl,
    /// Frutas e Legumes
    Frl,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Al, Category::Dl, Category::Frl];

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Category::Al => "AL",
            Category::Dl => "DL",
            Category::Frl => "FRL",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Category::Al => "Alimentação",
            Category::Dl => "Detergentes e Limpeza",
            Category::Frl => "Frutas e Legumes",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_uppercase();
        Category::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or_else(|| Error::UnknownCategory(s.trim().to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.code().to_string()
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.code())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub price: f64,
}

impl Product {
    /// Builds a product, trimming the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the price is negative or not finite.
    pub fn new(
        id: u32,
        name: &str,
        category: Category,
        quantity: u32,
        price: f64,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        if !price.is_finite() || price < 0.0 {
            return Err(Error::InvalidPrice(price));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            category,
            quantity,
            price,
        })
    }
}

impl Display for Product {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} - {} ({}, {} un., {:.2}€)",
            self.id, self.name, self.category, self.quantity, self.price
        )
    }
}

/// The subset of a product that gets written when the catalog is saved.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
}

impl From<&Product> for CatalogEntry {
    fn from(value: &Product) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            quantity: value.quantity,
        }
    }
}
