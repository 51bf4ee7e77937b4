use serde::Deserialize;

use super::face::Face;
use super::types::MaterialId;

/// All six face bits set; the default occlusion mask for full cubes.
pub const FULL_OCCLUSION_MASK: u8 = 0b11_1111;

/// How a material hides the faces of its neighbors.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occlusion {
    /// Hides nothing (glass, foliage).
    None,
    /// Hides only faces of the same material (water bodies, merged panes).
    Same,
    /// Hides every adjacent face (opaque cubes).
    #[default]
    All,
}

/// Immutable descriptor of one block material.
#[derive(Clone, Debug)]
pub struct MaterialType {
    pub id: MaterialId,
    pub key: String,
    pub visible: bool,
    pub occlusion: Occlusion,
    /// Which of this material's faces occlude at all, 6 bits in `Face` order.
    /// Partial shapes (slabs, carpets) clear the bits of their open faces.
    pub occlusion_mask: u8,
}

impl MaterialType {
    /// The distinguished empty material: invisible, occludes nothing.
    pub fn air() -> Self {
        MaterialType {
            id: MaterialId::AIR,
            key: "air".to_string(),
            visible: false,
            occlusion: Occlusion::None,
            occlusion_mask: 0,
        }
    }

    /// Whether this material contributes any rendered face.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether `face` of this material fully hides the adjacent face of
    /// `other` across their shared boundary.
    #[inline]
    pub fn occludes(&self, other: &MaterialType, face: Face) -> bool {
        if self.occlusion_mask & (1 << face.index()) == 0 {
            return false;
        }
        match self.occlusion {
            Occlusion::None => false,
            Occlusion::Same => self.id == other.id,
            Occlusion::All => true,
        }
    }
}
