use crate::errors::BaselineError;
use crate::models::Series;

/// Reduces a series (or some part of it) to a single reference value.
///
/// Implementations decide which samples count as "normal"; the detector only
/// ever sees the resulting scalar.
pub trait BaselineSupplier {
    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    fn baseline(&self, series: &Series) -> Result<f64, BaselineError>;
}
