//! khata-core
//!
//! Record store, validation, and the pure filter/aggregate pipeline behind
//! khata frontends. Depends on khata-domain. No terminal I/O, no UI concerns,
//! no direct filesystem access beyond the storage abstraction.

pub mod error;
pub mod format;
pub mod storage;
pub mod store;
pub mod summary_service;

pub use error::{CoreError, CoreResult};
pub use format::AmountFormatter;
pub use storage::{MemorySlotStorage, SlotStorage};
pub use store::RecordStore;
pub use summary_service::SummaryService;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("khata_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("khata tracing initialized");
    });
}
