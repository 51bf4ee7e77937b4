use quarry_geom::Vec3;

/// One of the six axis-aligned block faces.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    /// Returns the `[0..6)` index of this face (bit position in occlusion masks).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parses the config spelling of a face name.
    #[inline]
    pub fn from_name(s: &str) -> Option<Face> {
        match s {
            "pos_y" => Some(Face::PosY),
            "neg_y" => Some(Face::NegY),
            "pos_x" => Some(Face::PosX),
            "neg_x" => Some(Face::NegX),
            "pos_z" => Some(Face::PosZ),
            "neg_z" => Some(Face::NegZ),
            _ => None,
        }
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }
}

/// The two opposing faces of one principal axis, indexable so axis-generic
/// meshing code can be written once and reused with swapped face identities.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AxisFaces {
    pub neg: Face,
    pub pos: Face,
}

impl AxisFaces {
    pub const X: AxisFaces = AxisFaces {
        neg: Face::NegX,
        pos: Face::PosX,
    };
    pub const Y: AxisFaces = AxisFaces {
        neg: Face::NegY,
        pos: Face::PosY,
    };
    pub const Z: AxisFaces = AxisFaces {
        neg: Face::NegZ,
        pos: Face::PosZ,
    };

    /// Index 0 is the negative-direction face, index 1 the positive one.
    #[inline]
    pub fn get(self, i: usize) -> Face {
        if i == 0 { self.neg } else { self.pos }
    }
}
