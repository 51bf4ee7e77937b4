use serde::{Deserialize, Serialize};

/// Index into a [`crate::MaterialRegistry`] material table.
///
/// Id 0 is always the `air` material of the registry that produced the id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u16);

impl MaterialId {
    pub const AIR: MaterialId = MaterialId(0);

    #[inline]
    pub fn is_air(self) -> bool {
        self == Self::AIR
    }
}
