//! CLI commands and argument parsing

use crate::endpoint::{DEFAULT_BASE_URL, DEFAULT_PGC_PAGE_SIZE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// compras.gov.br open-data harvester
#[derive(Parser, Debug)]
#[command(name = "comprasgov-harvester")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Field delimiter for the output file
    #[arg(long, global = true, default_value_t = ',')]
    pub delimiter: char,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect the UASG organizational units registry
    Uasg {
        /// Output CSV path
        #[arg(short, long, default_value = "BASES/dados_uasg.csv")]
        output: PathBuf,
    },

    /// Collect the organization registration records registry
    Orgao {
        /// Output CSV path
        #[arg(short, long, default_value = "BASES/dados_orgaos.csv")]
        output: PathBuf,
    },

    /// Collect procurement-plan line items for every CNPJ in a prior export
    Pgc {
        /// CSV file holding the key column (e.g. a filtered uasg export)
        #[arg(short, long)]
        input: PathBuf,

        /// Column holding the CNPJs (auto-detected when omitted)
        #[arg(long)]
        column: Option<String>,

        /// Fiscal year of the procurement plans (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Items per page
        #[arg(long, default_value_t = DEFAULT_PGC_PAGE_SIZE)]
        page_size: u32,

        /// Output CSV path
        #[arg(short, long, default_value = "BASES/dados_pgc.csv")]
        output: PathBuf,
    },

    /// List the built-in registries
    Endpoints,
}
