mod tests_error;

use crate::detect::{Detection, EncodingDetector};

/// Detector that always returns the same answer
pub(super) struct FixedDetector(pub Detection);

impl EncodingDetector for FixedDetector {
    fn detect(&self, _bytes: &[u8]) -> Detection {
        self.0
    }
}
