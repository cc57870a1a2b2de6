use crate::core::sample::Sample;
use parking_lot::Mutex;

/// Per-voxel sample lists, one independently lockable slot per voxel.
///
/// Slots are allocated once when the store is created; appends to different voxels never
/// contend. Within a slot, insertion order is preserved.
#[derive(Debug)]
pub struct SampleStore {
    slots: Vec<Mutex<Vec<Sample>>>,
}

impl SampleStore {
    pub fn new(n_voxels: usize) -> Self {
        Self {
            slots: (0..n_voxels).map(|_| Mutex::new(Vec::new())).collect(),
        }
    }

    pub fn n_voxels(&self) -> usize {
        self.slots.len()
    }

    /// Appends `sample` to the slot of `voxel`. Returns `false` if `voxel` is out of range.
    pub fn record(&self, voxel: usize, sample: Sample) -> bool {
        match self.slots.get(voxel) {
            Some(slot) => {
                slot.lock().push(sample);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.get_mut().clear();
        }
    }

    /// Ends the append phase, releasing the locks.
    pub fn freeze(self) -> FrozenSamples {
        FrozenSamples {
            slots: self.slots.into_iter().map(Mutex::into_inner).collect(),
        }
    }
}

/// Read-only view of a [`SampleStore`] after accumulation. Freely shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenSamples {
    slots: Vec<Vec<Sample>>,
}

impl FrozenSamples {
    /// Samples bound to `voxel`, empty for an out-of-range index.
    pub fn samples(&self, voxel: usize) -> &[Sample] {
        self.slots.get(voxel).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn n_voxels(&self) -> usize {
        self.slots.len()
    }

    pub fn total_samples(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orientation::Orientation;
    use nalgebra::Point3;

    fn sample(frame: u64) -> Sample {
        Sample::new(Point3::origin(), Orientation::Rotationless, frame)
    }

    #[test]
    fn record_preserves_insertion_order_within_a_voxel() {
        let store = SampleStore::new(4);
        assert!(store.record(2, sample(1)));
        assert!(store.record(2, sample(2)));
        assert!(store.record(0, sample(3)));
        let frozen = store.freeze();
        let frames: Vec<u64> = frozen.samples(2).iter().map(|s| s.frame).collect();
        assert_eq!(frames, vec![1, 2]);
        assert_eq!(frozen.samples(0).len(), 1);
        assert!(frozen.samples(1).is_empty());
        assert_eq!(frozen.total_samples(), 3);
    }

    #[test]
    fn record_rejects_out_of_range_voxel() {
        let store = SampleStore::new(2);
        assert!(!store.record(2, sample(1)));
        assert_eq!(store.freeze().total_samples(), 0);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut store = SampleStore::new(3);
        store.record(0, sample(1));
        store.record(1, sample(1));
        store.clear();
        assert_eq!(store.freeze().total_samples(), 0);
    }

    #[test]
    fn concurrent_records_to_the_same_voxel_are_all_kept() {
        let store = SampleStore::new(1);
        std::thread::scope(|scope| {
            for t in 0..4u64 {
                let store = &store;
                scope.spawn(move || {
                    for i in 0..250 {
                        store.record(0, sample(t * 1000 + i));
                    }
                });
            }
        });
        assert_eq!(store.freeze().samples(0).len(), 1000);
    }
}
