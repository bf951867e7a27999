//! khata-domain
//!
//! Pure domain models (Transaction, filters, summary outputs, category
//! suggestions). No I/O, no services, no storage. Only data types.

pub mod category;
pub mod summary;
pub mod transaction;

pub use category::*;
pub use summary::*;
pub use transaction::*;
