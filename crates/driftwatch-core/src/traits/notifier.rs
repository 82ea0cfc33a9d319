use crate::errors::NotifyError;

/// A downstream channel that delivers a rendered alert.
///
/// Delivery must not influence detection; callers treat a failed `send` as a
/// reportable outcome, not as a failed run.
pub trait Notifier {
    /// Channel name used in logs and delivery reports (e.g. "smtp").
    fn name(&self) -> &str;

    fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}
