use std::time::{Duration, Instant};

/// Single-value cache with an optional time-to-live.
/// A `None` ttl keeps the first stored value for the life of the process.
pub struct TtlSlot<V> {
    ttl: Option<Duration>,
    slot: Option<(Instant, V)>,
}

impl<V: Clone> TtlSlot<V> {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self { ttl, slot: None }
    }

    /// Build from a seconds value where `0` means "never expires".
    pub fn from_secs(secs: u64) -> Self {
        Self::new((secs > 0).then(|| Duration::from_secs(secs)))
    }

    pub fn insert(&mut self, value: V) {
        self.slot = Some((Instant::now(), value));
    }

    pub fn get(&self) -> Option<V> {
        let (ts, v) = self.slot.as_ref()?;
        match self.ttl {
            Some(ttl) if ts.elapsed() >= ttl => None,
            _ => Some(v.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_secs_never_expires() {
        let mut slot = TtlSlot::from_secs(0);
        slot.insert(7_u32);
        assert_eq!(slot.get(), Some(7));
    }

    #[test]
    fn expired_entry_is_hidden() {
        let mut slot = TtlSlot::new(Some(Duration::ZERO));
        slot.insert("plan");
        assert_eq!(slot.get(), None);
    }
}
