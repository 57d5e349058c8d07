pub mod analyzers;
pub mod charts;
pub mod cleaner;
pub mod error;
pub mod generator;
pub mod geocoder;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod records;
