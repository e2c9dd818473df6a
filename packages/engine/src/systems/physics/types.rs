use crate::domain::IntegrationWarning;

/// Result of one integration batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntegrationReport {
    /// Delta time shared by the batch, in update intervals.
    pub delta_time: f64,
    /// Bodies that were advanced.
    pub integrated: usize,
    /// Bodies without gravity (and `allGravity` off).
    pub idle: usize,
    /// Malformed bodies that were left untouched.
    pub skipped: Vec<IntegrationWarning>,
}

impl IntegrationReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
