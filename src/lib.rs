//! Generates EAV insert SQL from one image-analysis JSON payload: image,
//! analysis run, detected objects and their flattened attributes, chained
//! through session variables.

pub mod attribute;
pub mod error;
pub mod flatten;
pub mod generate;
pub mod request;
pub mod sql;

pub use error::GenerateError;
pub use generate::generate_sql;
