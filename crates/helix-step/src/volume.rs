use std::collections::BTreeMap;

use helix_core::VolumeId;

/// Registry resolving [`VolumeId`] handles to volumes it owns.
pub trait VolumeLookup {
    /// Volume description held by the registry.
    type Volume;

    /// Returns the volume behind `id`, if the registry knows it.
    fn volume(&self, id: VolumeId) -> Option<&Self::Volume>;
}

impl<V> VolumeLookup for [V] {
    type Volume = V;

    fn volume(&self, id: VolumeId) -> Option<&V> {
        self.get(id.as_raw() as usize)
    }
}

impl<V> VolumeLookup for BTreeMap<VolumeId, V> {
    type Volume = V;

    fn volume(&self, id: VolumeId) -> Option<&V> {
        self.get(&id)
    }
}
