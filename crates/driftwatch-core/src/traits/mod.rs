//! Seams between the detector and its collaborators.

pub mod baseline;
pub mod notifier;

pub use baseline::BaselineSupplier;
pub use notifier::Notifier;
