//! Agricultural and climate dataset
//!
//! The store is filled once by a [`DataProvider`] and is read-only afterwards.

pub mod provider;
pub mod seed;
pub mod store;
pub mod table;

pub use provider::{DataProvider, JsonFileProvider, StaticSeedProvider};
pub use store::{
    AgricultureData, AgricultureRecord, ClimateData, ClimateRecord, DataStore, Year, YearSeries,
};
pub use table::OrderedTable;
