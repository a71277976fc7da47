pub mod instrument_source;

pub use instrument_source::InstrumentSource;
