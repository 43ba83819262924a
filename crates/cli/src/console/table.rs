use catalog_core::product::Product;

/// Header line of the product table.
#[must_use]
pub fn header() -> String {
    format!(
        "{:^8} | {:^26} | {:^8} | {:^16} | {:^14}",
        "ID", "Nome", "Tipo", "Quantidade", "Preço"
    )
}

#[must_use]
pub fn separator() -> String {
    format!(
        "{}+{}+{}+{}+{}",
        "-".repeat(9),
        "-".repeat(28),
        "-".repeat(10),
        "-".repeat(18),
        "-".repeat(16)
    )
}

#[must_use]
pub fn row(product: &Product) -> String {
    format!(
        "{:^8} | {:<26} | {:<8} | {:>16} | {:>14.2}€",
        product.id,
        product.name,
        product.category.code(),
        product.quantity,
        product.price
    )
}

/// Renders the header, separator and one row per product.
pub fn render<'a, I>(products: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut lines = vec![header(), separator()];
    lines.extend(products.into_iter().map(row));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::product::Category;

    #[test]
    fn test_separator_spans_row_width() {
        let product = Product::new(1, "Arroz", Category::Al, 3, 1.5).unwrap();
        assert_eq!(row(&product).chars().count(), separator().chars().count());
        assert!(header().contains("Quantidade"));
    }

    #[test]
    fn test_row_formatting() {
        let product = Product::new(10, "Widget", Category::Al, 5, 9.99).unwrap();
        let line = row(&product);

        assert!(line.starts_with("   10    | Widget "));
        assert!(line.ends_with("           9.99€"));
        assert!(line.contains("| AL       |"));
    }

    #[test]
    fn test_render_empty_has_only_header() {
        let lines = render(std::iter::empty());
        assert_eq!(lines.len(), 2);
    }
}
