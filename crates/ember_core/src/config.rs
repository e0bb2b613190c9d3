//! Sequence configuration.

use crate::errors::SeqError;

/// Options fixed when a sequence is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeqConfig {
    /// Upper bound on capacity. `None` leaves growth bounded only by the
    /// allocator.
    pub max_capacity: Option<usize>,
}

impl SeqConfig {
    pub fn with_max_capacity(limit: usize) -> Self {
        Self {
            max_capacity: Some(limit),
        }
    }

    /// Checks whether a backing store of `requested` slots is allowed.
    pub fn check(&self, requested: usize) -> Result<(), SeqError> {
        match self.max_capacity {
            Some(limit) if requested > limit => Err(SeqError::CapacityLimit { requested, limit }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_accepts_anything() {
        assert_eq!(SeqConfig::default().check(usize::MAX), Ok(()));
    }

    #[test]
    fn limit_is_inclusive() {
        let cfg = SeqConfig::with_max_capacity(4);
        assert_eq!(cfg.check(4), Ok(()));
        assert_eq!(
            cfg.check(5),
            Err(SeqError::CapacityLimit { requested: 5, limit: 4 })
        );
    }
}
