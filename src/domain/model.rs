use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 服務目錄：JSON 根物件
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "lenient_objects")]
    pub services: Vec<Service>,
}

impl Catalog {
    /// 根節點不是物件時視為空目錄
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            tracing::warn!("Catalog root is not a JSON object, treating it as empty");
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }

    pub fn variant_count(&self) -> usize {
        self.services.iter().map(|s| s.variants.len()).sum()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Service {
    #[serde(default, deserialize_with = "lenient_objects")]
    pub variants: Vec<Variant>,
}

/// 每個欄位都可能缺少、為 null，或是數字與字串混用
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub secondary_price: Option<Value>,
    pub markup_percent: Option<Value>,
    pub description: Option<Value>,
    pub estimated_time_hours: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub name: String,
    pub price: String,
    pub secondary_price: String,
    pub markup_percent: String,
    pub description: String,
    pub estimated_time_hours: String,
}

impl Row {
    pub const HEADERS: [&'static str; 6] = [
        "name",
        "price",
        "secondaryPrice",
        "markupPercent",
        "description",
        "estimatedTimeHours",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_written: usize,
    pub output_path: String,
}

// 非陣列 ⇒ 空；陣列中非物件的元素 ⇒ 預設值（仍佔一個位置）
fn lenient_objects<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .map(|item| {
            if item.is_object() {
                T::deserialize(item).unwrap_or_default()
            } else {
                T::default()
            }
        })
        .collect())
}
