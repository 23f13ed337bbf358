//! Shared advice engine for EcoShare components.
//!
//! Turns a classifier result into rotating reuse/recycle/donate tips and a
//! pre-filled donation listing.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod cycler;
pub mod describe;
pub mod donation;
pub mod error;
pub mod labels;

pub use catalog::{AdviceCatalog, AdviceCategory, AdviceLists};
pub use classify::{classify, Prediction};
pub use config::EcoshareConfig;
pub use cycler::{advance, peek, AdviceCycler, CycleState, TipPanel};
pub use describe::{DescriptionCatalog, EstimatedCondition};
pub use donation::{Condition, DonationDraft, ItemAge, Location};
pub use error::{DraftError, EcoshareError};
