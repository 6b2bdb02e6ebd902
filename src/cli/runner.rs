//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::collect::{Harvest, PaginatingCollector};
use crate::endpoint::{self, EndpointDescriptor};
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::http::{HttpClient, HttpClientConfig};
use crate::keys::keys_from_csv;
use crate::output::{CsvTableWriter, CsvWriterConfig};
use chrono::{Datelike, Utc};
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Uasg { output } => self.collect_registry(endpoint::uasg(), output).await,
            Commands::Orgao { output } => self.collect_registry(endpoint::orgao(), output).await,
            Commands::Pgc {
                input,
                column,
                year,
                page_size,
                output,
            } => {
                self.collect_pgc(input, column.as_deref(), *year, *page_size, output)
                    .await
            }
            Commands::Endpoints => self.list_endpoints(),
        }
    }

    /// Collect a key-less registry and export it
    async fn collect_registry(&self, descriptor: EndpointDescriptor, output: &Path) -> Result<()> {
        let fetcher = PageFetcher::new(self.http_client()?, descriptor);
        let harvest = PaginatingCollector::new(fetcher).collect_all().await;
        self.export(&harvest, output)
    }

    /// Collect the key-scoped procurement-plan registry and export it
    async fn collect_pgc(
        &self,
        input: &Path,
        column: Option<&str>,
        year: Option<i32>,
        page_size: u32,
        output: &Path,
    ) -> Result<()> {
        // The key list is the only input whose failure is fatal; everything
        // past this point degrades to a partial harvest at worst.
        let keys = keys_from_csv(input, column)?;
        let year = year.unwrap_or_else(|| Utc::now().year());

        let descriptor = endpoint::pgc_detalhe(year, page_size);
        let fetcher = PageFetcher::new(self.http_client()?, descriptor);
        let harvest = PaginatingCollector::new(fetcher).collect_for_keys(&keys).await;
        self.export(&harvest, output)
    }

    fn list_endpoints(&self) -> Result<()> {
        for name in endpoint::builtin_names() {
            println!("{name}");
        }
        Ok(())
    }

    fn http_client(&self) -> Result<HttpClient> {
        let config = HttpClientConfig::builder()
            .base_url(self.cli.base_url.clone())
            .build();
        HttpClient::with_config(config)
    }

    fn export(&self, harvest: &Harvest, output: &Path) -> Result<()> {
        if !self.cli.delimiter.is_ascii() {
            return Err(Error::config("delimiter must be a single ASCII character"));
        }
        let delimiter = self.cli.delimiter as u8;

        let writer = CsvTableWriter::with_config(CsvWriterConfig { delimiter });
        let rows = writer.write(output, &harvest.records)?;

        println!(
            "{rows} rows written to {} ({} pages requested)",
            output.display(),
            harvest.stats.pages_requested
        );
        Ok(())
    }
}
