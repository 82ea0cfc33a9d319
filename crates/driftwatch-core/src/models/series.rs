//! Time-ordered sequence of samples, immutable once built.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::Sample;

/// An ordered sequence of samples for a single metric.
///
/// Ordering is the loader's responsibility; [`Series::check_ordering`] lets it
/// verify before handing the series to the detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Samples in `range`, clamped to the series bounds.
    pub fn slice(&self, range: Range<usize>) -> &[Sample] {
        let end = range.end.min(self.samples.len());
        let start = range.start.min(end);
        &self.samples[start..end]
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Index of the midpoint, the default end of the baseline region.
    pub fn midpoint(&self) -> usize {
        self.samples.len() / 2
    }

    /// Returns the index of the first sample whose timestamp is earlier than
    /// its predecessor's, or `None` if timestamps are non-decreasing.
    pub fn check_ordering(&self) -> Option<usize> {
        self.samples
            .windows(2)
            .position(|w| w[1].timestamp < w[0].timestamp)
            .map(|i| i + 1)
    }
}

impl From<Vec<Sample>> for Series {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
