use std::collections::HashMap;

use contracts::dashboards::d400_sales_overview::ProductTotal;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_sale::SaleRecord;

/// How many products the dashboard ranking shows by default.
pub const DEFAULT_TOP_LIMIT: usize = 6;

/// Placeholder when neither the record nor the catalog carries a name.
pub const UNKNOWN_PRODUCT: &str = "Unknown";

/// Products ranked by total units sold, descending, truncated to `limit`.
///
/// Groups are keyed by `product_id` and accumulated in first-seen input
/// order; the sort is stable, so products with equal totals keep that
/// order. The display name is taken from the first record seen for the id.
pub fn top_products(records: &[SaleRecord], limit: usize) -> Vec<ProductTotal> {
    let mut totals: Vec<ProductTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sale in records {
        let slot = match index.get(sale.product_id.as_str()) {
            Some(slot) => *slot,
            None => {
                let name = sale
                    .product_name
                    .as_deref()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or(UNKNOWN_PRODUCT)
                    .to_string();
                totals.push(ProductTotal { name, quantity: 0 });
                index.insert(sale.product_id.as_str(), totals.len() - 1);
                totals.len() - 1
            }
        };
        totals[slot].quantity += sale.units();
    }

    totals.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    totals.truncate(limit);
    totals
}

/// Copy of the snapshot with missing denormalized product names filled in
/// from the catalog. Names already on a record win, stale or not.
pub fn with_resolved_names(records: &[SaleRecord], catalog: &[Product]) -> Vec<SaleRecord> {
    let names: HashMap<&str, &str> = catalog
        .iter()
        .map(|product| (product.id.as_str(), product.name.as_str()))
        .collect();

    records
        .iter()
        .cloned()
        .map(|mut sale| {
            let missing = sale
                .product_name
                .as_deref()
                .map_or(true, |n| n.trim().is_empty());
            if missing {
                if let Some(name) = names.get(sale.product_id.as_str()) {
                    sale.product_name = Some((*name).to_string());
                }
            }
            sale
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(product_id: &str, name: Option<&str>, qty: i64) -> SaleRecord {
        SaleRecord {
            id: format!("s-{product_id}-{qty}"),
            product_id: product_id.to_string(),
            product_name: name.map(str::to_string),
            quantity: Some(qty),
            ..Default::default()
        }
    }

    #[test]
    fn test_ranks_by_total_descending() {
        let records = vec![
            sale("a", Some("Aspirin"), 2),
            sale("b", Some("Ibuprofen"), 9),
            sale("a", Some("Aspirin"), 4),
        ];
        let top = top_products(&records, DEFAULT_TOP_LIMIT);
        assert_eq!(
            top,
            vec![
                ProductTotal {
                    name: "Ibuprofen".to_string(),
                    quantity: 9
                },
                ProductTotal {
                    name: "Aspirin".to_string(),
                    quantity: 6
                },
            ]
        );
    }

    #[test]
    fn test_limit_bounds_the_result() {
        let records: Vec<SaleRecord> = (0..10)
            .map(|i| sale(&format!("p{i}"), Some("x"), i + 1))
            .collect();
        assert_eq!(top_products(&records, 6).len(), 6);
        assert_eq!(top_products(&records, 20).len(), 10);
        assert_eq!(top_products(&records, 0).len(), 0);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = vec![
            sale("x", Some("X"), 5),
            sale("y", Some("Y"), 5),
            sale("z", Some("Z"), 7),
        ];
        let top = top_products(&records, 6);
        assert_eq!(top[0].name, "Z");
        assert_eq!(top[1].name, "X");
        assert_eq!(top[2].name, "Y");
    }

    #[test]
    fn test_first_seen_name_wins_over_later_rename() {
        let records = vec![
            sale("a", Some("Old name"), 1),
            sale("a", Some("New name"), 1),
        ];
        let top = top_products(&records, 6);
        assert_eq!(top[0].name, "Old name");
    }

    #[test]
    fn test_unnamed_product_gets_placeholder() {
        let records = vec![sale("a", None, 3), sale("b", Some(""), 2)];
        let top = top_products(&records, 6);
        assert_eq!(top[0].name, UNKNOWN_PRODUCT);
        assert_eq!(top[1].name, UNKNOWN_PRODUCT);
    }

    #[test]
    fn test_missing_quantity_counts_as_zero() {
        let mut record = sale("a", Some("Aspirin"), 0);
        record.quantity = None;
        let top = top_products(&[record], 6);
        assert_eq!(top[0].quantity, 0);
    }

    #[test]
    fn test_with_resolved_names_fills_only_gaps() {
        let catalog = vec![
            Product {
                id: "a".to_string(),
                name: "Aspirin 100mg".to_string(),
                code: None,
                category: None,
                is_active: true,
            },
            Product {
                id: "b".to_string(),
                name: "Ibuprofen 400mg".to_string(),
                code: None,
                category: None,
                is_active: true,
            },
        ];
        let records = vec![sale("a", None, 1), sale("b", Some("Ibuprofen"), 1)];
        let resolved = with_resolved_names(&records, &catalog);
        assert_eq!(resolved[0].product_name.as_deref(), Some("Aspirin 100mg"));
        assert_eq!(resolved[1].product_name.as_deref(), Some("Ibuprofen"));
    }
}
