pub mod convert;
pub mod error;
pub mod format;
pub mod input;
pub mod settings;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use convert::{convert, evaluate, Conversion, ConversionRequest, ConversionResult};
pub use error::ConvertError;
pub use units::QuantityKind;
