//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Inbound ports ([`inbound::operator`]) are what the CLI drives; outbound
//! ports are what the application services drive.
//!
//! ```text
//!                ┌─────────────────────────┐
//!                │       Application       │
//!                │  Provisioner, Importer  │
//!                └────────────┬────────────┘
//!                             │
//!              ┌──────────────┴──────────────┐
//!              ▼                             ▼
//!       ┌─────────────┐               ┌─────────────┐
//!       │DatabaseAdmin│               │ProductStore │
//!       └─────────────┘               └─────────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use outbound::admin::DatabaseAdmin;
pub use outbound::store::ProductStore;
