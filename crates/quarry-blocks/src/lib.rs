//! Block material model and registry for chunk meshing.
#![forbid(unsafe_code)]

pub mod face;
pub mod material;
pub mod registry;
pub mod types;

pub use face::{AxisFaces, Face};
pub use material::{MaterialType, Occlusion};
pub use registry::MaterialRegistry;
pub use types::MaterialId;
