use quarry_geom::Vec3;

/// Which side of a boundary plane a quad faces. Selects one of the two
/// fixed index emission patterns so triangles wind counter-clockwise when
/// seen from the visible side.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum QuadWinding {
    /// Visible from the positive axis direction.
    TowardPos,
    /// Visible from the negative axis direction.
    TowardNeg,
}

impl QuadWinding {
    #[inline]
    fn offsets(self) -> [u32; 6] {
        match self {
            QuadWinding::TowardPos => [3, 1, 2, 2, 1, 0],
            QuadWinding::TowardNeg => [3, 2, 1, 2, 0, 1],
        }
    }
}

/// Flat vertex-attribute and index buffers ready for GPU upload.
///
/// Positions are 3 floats per vertex in a shared index space; indices are
/// 32-bit. The normals buffer exists for the renderer's attribute layout
/// but this mesher leaves it unpopulated.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Clears all arrays but retains capacity for reuse across re-meshes.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.idx.clear();
    }

    /// Pre-reserves capacity for approximately `n_quads` quads.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * 4 * 3);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }

    /// Interleaved vertex normals; empty for meshes built by this mesher.
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }

    pub fn indices(&self) -> &[u32] {
        &self.idx
    }

    /// Appends four fresh vertices and the six indices of one quad. Corners
    /// are not deduplicated against earlier quads.
    pub fn push_quad(&mut self, corners: [Vec3; 4], winding: QuadWinding) {
        let base = self.vertex_count() as u32;
        for off in winding.offsets() {
            self.idx.push(base + off);
        }
        for c in corners {
            self.pos.extend_from_slice(&[c.x, c.y, c.z]);
        }
    }
}
