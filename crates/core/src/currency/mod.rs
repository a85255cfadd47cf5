//! Currency handling: unit conversion and the currency table.

pub mod conversion;
pub mod table;

#[cfg(test)]
mod props;

pub use conversion::{MajorAmount, convert_major_to_minor};
pub use table::CurrencyTable;
