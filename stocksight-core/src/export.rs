//! CSV export of reorder recommendations

use crate::product::Product;

/// Header row of the recommendations export
pub const RECOMMENDATIONS_CSV_HEADER: &str =
    "SKU ID,Product Name,Current Stock,7-Day Demand,Recommended Reorder,Priority";

/// File name offered to the browser for the export
pub const RECOMMENDATIONS_CSV_FILENAME: &str = "recommendations.csv";

/// Serialize products as the recommendations CSV.
///
/// One row per product in list order, rows joined by `\n` with no trailing
/// newline. Fields are written verbatim: a comma inside a product name is not
/// quoted and will shift the columns of that row.
pub fn recommendations_csv(products: &[Product]) -> String {
    let mut csv = String::from(RECOMMENDATIONS_CSV_HEADER);
    csv.push('\n');

    let rows: Vec<String> = products
        .iter()
        .map(|product| {
            format!(
                "{},{},{},{},{},{}",
                product.sku,
                product.name,
                product.current_stock,
                product.predicted_demand,
                product.recommended_reorder,
                product.priority.as_str()
            )
        })
        .collect();
    csv.push_str(&rows.join("\n"));

    csv
}
