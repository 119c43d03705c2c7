//! Image processing stages
//!
//! Splitting the sheet into bands, clearing the near-black background
//! and cropping each band to its visible content.

pub mod region;
pub mod bands;
pub mod background;

pub use region::Region;
pub use bands::{Band, band_regions, split_bands};
pub use background::{clear_background, bounding_box, remove_background, BACKGROUND_THRESHOLD};
