use helix_core::{SchemaVersion, VolumeId};

#[test]
fn volume_id_round_trips_raw_index() {
    let id = VolumeId::from_raw(17);
    assert_eq!(id.as_raw(), 17);
    assert_eq!(id.to_string(), "vol#17");
}

#[test]
fn schema_compatibility_follows_major_version() {
    let current = SchemaVersion::new(1, 2, 0);
    assert!(current.is_compatible_with(&SchemaVersion::new(1, 0, 3)));
    assert!(!current.is_compatible_with(&SchemaVersion::new(2, 0, 0)));
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}
