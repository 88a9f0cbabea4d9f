pub mod errors;

pub use errors::{ColorSpaceError, ColorSpaceResult};
