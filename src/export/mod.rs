mod csv;
pub mod envelope;
mod fs_utils;
pub mod logic;
pub(crate) mod range;

pub use logic::ExportLogic;

use clap::ValueEnum;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
