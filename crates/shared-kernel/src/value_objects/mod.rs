//! Value object modules for the quality size-range slider.

pub mod encoded;
pub mod profile;
pub mod range;
pub mod size;

pub use encoded::EncodedRange;
pub use profile::ProfileId;
pub use range::SliderRange;
pub use size::SizeValue;
