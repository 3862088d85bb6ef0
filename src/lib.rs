pub mod backend;
pub mod frontend;


pub use backend::band::{
    band_by_name, band_for_frequency, bands, Band, BandEntry, BAND_COUNT,
    BAND_TABLE
};
pub use backend::frequency::Hertz;
