use crate::core::flatten::flatten;
use crate::core::input::{parse_catalog, read_source, resolve_source};
use crate::core::output::render_csv;
use crate::core::{Catalog, ConfigProvider, LoadSummary, Pipeline, Row, Storage};
use crate::utils::error::Result;
use std::cell::RefCell;
use std::io::{IsTerminal, Read};

pub struct CatalogPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    stdin: RefCell<Box<dyn Read>>,
    stdin_is_terminal: bool,
}

impl<S: Storage, C: ConfigProvider> CatalogPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let stdin = std::io::stdin();
        let stdin_is_terminal = stdin.is_terminal();
        Self::with_stdin(storage, config, Box::new(stdin), stdin_is_terminal)
    }

    pub fn with_stdin(
        storage: S,
        config: C,
        stdin: Box<dyn Read>,
        stdin_is_terminal: bool,
    ) -> Self {
        Self {
            storage,
            config,
            stdin: RefCell::new(stdin),
            stdin_is_terminal,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CatalogPipeline<S, C> {
    fn extract(&self) -> Result<Catalog> {
        let source = resolve_source(&self.storage, &self.config, self.stdin_is_terminal)?;
        tracing::info!("Reading catalog from {:?}", source);

        let data = read_source(&source, &self.storage, &mut **self.stdin.borrow_mut())?;
        tracing::debug!("Read {} bytes of catalog JSON", data.len());

        parse_catalog(&data)
    }

    fn transform(&self, catalog: Catalog) -> Result<Vec<Row>> {
        Ok(flatten(&catalog))
    }

    fn load(&self, rows: Vec<Row>) -> Result<LoadSummary> {
        let data = render_csv(&rows)?;

        // 整份內容一次寫入，失敗時不會留下半個檔案
        tracing::debug!("Writing {} bytes of CSV", data.len());
        let output_path = self.storage.write_file(self.config.output_path(), &data)?;

        Ok(LoadSummary {
            rows_written: rows.len(),
            output_path,
        })
    }
}
