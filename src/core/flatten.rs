use crate::core::{Catalog, Row};
use crate::domain::model::Variant;
use serde_json::Value;

/// 依服務順序、再依變體順序攤平成資料列
pub fn flatten(catalog: &Catalog) -> Vec<Row> {
    let rows: Vec<Row> = catalog
        .services
        .iter()
        .flat_map(|service| service.variants.iter())
        .map(to_row)
        .collect();

    tracing::debug!(
        "Flattened {} services into {} rows",
        catalog.services.len(),
        rows.len()
    );
    rows
}

pub fn to_row(variant: &Variant) -> Row {
    Row {
        name: cell_text(variant.name.as_ref()),
        price: cell_text(variant.price.as_ref()),
        secondary_price: cell_text(variant.secondary_price.as_ref()),
        markup_percent: cell_text(variant.markup_percent.as_ref()),
        description: cell_text(variant.description.as_ref()),
        estimated_time_hours: cell_text(variant.estimated_time_hours.as_ref()),
    }
}

// 字串原樣輸出（引號由 CSV writer 處理），數字保留原本的表示法
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}
