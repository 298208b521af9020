#![deny(missing_docs)]
#![doc = "Step state record of a stepping-helix propagation and its conversions to free \
and surface-anchored trajectory states."]

/// Step direction indicator.
pub mod direction;
/// Conversion options.
pub mod options;
/// JSON snapshots of step states.
#[path = "serde.rs"]
pub mod serde_io;
/// The step state record.
pub mod state;
/// Step result codes.
pub mod status;
/// Volume registry lookup.
pub mod volume;

pub use direction::PropagationDirection;
pub use options::{ConversionOptions, SurfaceAnchor};
pub use serde_io::{from_json, to_json};
pub use state::{StepState, RADIATION_LENGTH_INFINITE};
pub use status::StepStatus;
pub use volume::VolumeLookup;
