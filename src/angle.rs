use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Rotation angle in degrees shared between the touch and render threads.
///
/// Stored as `f32` bits; the latest write wins.
#[derive(Clone, Debug, Default)]
pub struct SharedAngle {
    bits: Arc<AtomicU32>,
}

impl SharedAngle {
    pub fn new(degrees: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(degrees.to_bits())),
        }
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub fn set(&self, degrees: f32) {
        self.bits.store(degrees.to_bits(), Ordering::Release);
    }

    /// Add `delta` and return the new angle
    pub fn add(&self, delta: f32) -> f32 {
        let mut current = self.bits.load(Ordering::Acquire);
        loop {
            let next = (f32::from_bits(current) + delta).to_bits();
            match self
                .bits
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return f32::from_bits(next),
                Err(actual) => current = actual,
            }
        }
    }
}
