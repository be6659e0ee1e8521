use crate::domain::model::{Catalog, LoadSummary, Row};
use crate::utils::error::Result;

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    /// 路徑實際對應到的位置，用於訊息顯示
    fn locate(&self, path: &str) -> String;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// 回傳實際寫入的位置
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    /// 命令列指定的輸入檔
    fn input_path(&self) -> Option<&str>;
    fn default_input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Catalog>;
    fn transform(&self, catalog: Catalog) -> Result<Vec<Row>>;
    fn load(&self, rows: Vec<Row>) -> Result<LoadSummary>;
}
