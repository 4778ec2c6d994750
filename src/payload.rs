use std::fmt;

/// Task-boundary wrapper around a payload value.
///
/// Carries the bookkeeping state a payload accumulates as it crosses
/// component boundaries: a validity flag and a timestamp in seconds,
/// stamped automatically unless automatic stamping is turned off.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload<T> {
    inner: T,
    valid: bool,
    timestamp: f64,
    automatic_timestamp: bool,
}

impl<T> Payload<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            valid: false,
            timestamp: 0.0,
            automatic_timestamp: true,
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, seconds: f64) {
        self.timestamp = seconds;
    }

    pub fn automatic_timestamp(&self) -> bool {
        self.automatic_timestamp
    }

    pub fn set_automatic_timestamp(&mut self, automatic: bool) {
        self.automatic_timestamp = automatic;
    }

    /// Stamp the payload unless automatic stamping has been turned off.
    /// Returns whether the timestamp was taken.
    pub fn stamp(&mut self, seconds: f64) -> bool {
        if self.automatic_timestamp {
            self.timestamp = seconds;
        }
        self.automatic_timestamp
    }
}

impl<T> From<T> for Payload<T> {
    fn from(inner: T) -> Self {
        Payload::new(inner)
    }
}

impl<T: fmt::Display> fmt::Display for Payload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timestamp {} ({}), {}",
            self.timestamp,
            if self.valid { "valid" } else { "invalid" },
            self.inner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::DoubleMat;

    #[test]
    fn test_defaults() {
        let p = Payload::new(DoubleMat::zeros(2, 2));
        assert!(!p.valid());
        assert_eq!(p.timestamp(), 0.0);
        assert!(p.automatic_timestamp());
        assert_eq!(p.inner().shape().dims2(), (2, 2));
    }

    #[test]
    fn test_stamp_honors_automatic_flag() {
        let mut p = Payload::new(DoubleMat::new());
        assert!(p.stamp(1.5));
        assert_eq!(p.timestamp(), 1.5);

        p.set_automatic_timestamp(false);
        assert!(!p.stamp(2.0));
        assert_eq!(p.timestamp(), 1.5);

        p.set_timestamp(3.0);
        assert_eq!(p.timestamp(), 3.0);
    }

    #[test]
    fn test_inner_access() {
        let mut p = Payload::new(DoubleMat::zeros(2, 2));
        p.inner_mut().fill(4.0);
        p.set_valid(true);
        assert!(p.valid());
        assert_eq!(p.inner().get(1, 1).unwrap(), 4.0);
        let m = p.into_inner();
        assert_eq!(m.get(0, 0).unwrap(), 4.0);
    }

    #[test]
    fn test_display() {
        let mut p = Payload::new(DoubleMat::new());
        p.set_valid(true);
        p.stamp(0.5);
        assert_eq!(format!("{}", p), "timestamp 0.5 (valid), []");
    }
}
