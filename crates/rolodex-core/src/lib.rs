pub mod domain;
pub mod error;
pub mod record;

pub use domain::*;
pub use error::CoreError;
pub use record::{parse_record, ContactRecord};
