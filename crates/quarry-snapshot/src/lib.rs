//! Immutable chunk and world snapshots for off-thread meshing.
#![forbid(unsafe_code)]

use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use quarry_blocks::{Face, MaterialId};

/// Side length of the cubic chunk grid, in blocks.
pub const CHUNK_SIZE: usize = 32;
/// Coordinate mask; `CHUNK_SIZE` is a power of two.
pub const CHUNK_MASK: i32 = CHUNK_SIZE as i32 - 1;
/// Cell count of one chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// Integer position of a chunk on the chunk grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// Grid position of the face-adjacent neighbor behind `face`.
    #[inline]
    pub fn neighbor(self, face: Face) -> Self {
        let (dx, dy, dz) = face.delta();
        self.offset(dx, dy, dz)
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

/// Read-only copy of one chunk's block materials, taken at a point in time.
///
/// Never mutated after construction; meshing jobs share snapshots via `Arc`.
#[derive(Clone, Debug)]
pub struct ChunkSnapshot {
    coord: ChunkCoord,
    materials: Vec<MaterialId>,
}

impl ChunkSnapshot {
    /// Builds a snapshot from a linear cell array in `idx` order. The array
    /// is padded or truncated to exactly `CHUNK_VOLUME` cells.
    pub fn from_materials(coord: ChunkCoord, materials: Vec<MaterialId>) -> Self {
        let mut cells = materials;
        if cells.len() != CHUNK_VOLUME {
            cells.resize(CHUNK_VOLUME, MaterialId::AIR);
        }
        Self {
            coord,
            materials: cells,
        }
    }

    /// Builds a snapshot filled with a single material.
    pub fn filled(coord: ChunkCoord, material: MaterialId) -> Self {
        Self {
            coord,
            materials: vec![material; CHUNK_VOLUME],
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn materials(&self) -> &[MaterialId] {
        &self.materials
    }

    /// Linear index of a local cell.
    #[inline]
    pub fn idx(x: usize, y: usize, z: usize) -> usize {
        (y * CHUNK_SIZE + z) * CHUNK_SIZE + x
    }

    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> MaterialId {
        self.materials[Self::idx(x, y, z)]
    }

    /// Material at a local coordinate, where each coordinate may be one step
    /// out of range (`-1` or `CHUNK_SIZE`): the mesher probes one block past
    /// the chunk edge and the neighbor snapshot answers with the wrapped
    /// cell. Coordinates further out are not part of the contract.
    #[inline]
    pub fn material(&self, x: i32, y: i32, z: i32) -> MaterialId {
        self.get_local(
            (x & CHUNK_MASK) as usize,
            (y & CHUNK_MASK) as usize,
            (z & CHUNK_MASK) as usize,
        )
    }

    #[inline]
    pub fn has_non_air(&self) -> bool {
        self.materials.iter().any(|m| !m.is_air())
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        !self.has_non_air()
    }
}

/// Read-only mapping from chunk-grid position to chunk snapshot, covering
/// the chunks captured for one meshing request. Absent entries are normal
/// (world edge or unloaded chunk), never an error.
#[derive(Clone, Debug, Default)]
pub struct WorldSnapshot {
    chunks: HashMap<ChunkCoord, Arc<ChunkSnapshot>>,
}

impl WorldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chunk: Arc<ChunkSnapshot>) {
        self.chunks.insert(chunk.coord(), chunk);
    }

    #[inline]
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Arc<ChunkSnapshot>> {
        self.chunks.get(&coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Material lookup seam consumed by the mesher. Implemented by
/// [`ChunkSnapshotGroup`]; test code substitutes counting or synthetic
/// sources.
pub trait MaterialSource {
    /// Material at a local coordinate of the middle chunk; out-of-range
    /// coordinates (one step, one axis) resolve through neighbors.
    fn material_at(&self, x: i32, y: i32, z: i32) -> MaterialId;
}

/// A chunk and its six face neighbors, resolved once at construction so the
/// mesher sees one fixed view of the world for its whole run.
#[derive(Clone, Debug)]
pub struct ChunkSnapshotGroup {
    middle: Arc<ChunkSnapshot>,
    neg_x: Option<Arc<ChunkSnapshot>>,
    pos_x: Option<Arc<ChunkSnapshot>>,
    neg_y: Option<Arc<ChunkSnapshot>>,
    pos_y: Option<Arc<ChunkSnapshot>>,
    neg_z: Option<Arc<ChunkSnapshot>>,
    pos_z: Option<Arc<ChunkSnapshot>>,
}

impl ChunkSnapshotGroup {
    /// Resolves the middle chunk and its neighbors from the world snapshot.
    /// Returns `None` when the middle chunk itself is absent; missing
    /// neighbors are kept as empty slots and read as air.
    pub fn new(world: &WorldSnapshot, coord: ChunkCoord) -> Option<Self> {
        let middle = world.chunk(coord)?.clone();
        let fetch = |face: Face| world.chunk(coord.neighbor(face)).cloned();
        Some(Self {
            middle,
            neg_x: fetch(Face::NegX),
            pos_x: fetch(Face::PosX),
            neg_y: fetch(Face::NegY),
            pos_y: fetch(Face::PosY),
            neg_z: fetch(Face::NegZ),
            pos_z: fetch(Face::PosZ),
        })
    }

    #[inline]
    pub fn middle(&self) -> &ChunkSnapshot {
        &self.middle
    }
}

#[inline]
fn neighbor_material(
    neighbor: &Option<Arc<ChunkSnapshot>>,
    x: i32,
    y: i32,
    z: i32,
) -> MaterialId {
    // The out-of-range coordinate is forwarded as-is; the neighbor's own
    // accessor wraps it onto the matching edge cell.
    neighbor
        .as_ref()
        .map_or(MaterialId::AIR, |c| c.material(x, y, z))
}

impl MaterialSource for ChunkSnapshotGroup {
    #[inline]
    fn material_at(&self, x: i32, y: i32, z: i32) -> MaterialId {
        let side = CHUNK_SIZE as i32;
        if x < 0 {
            neighbor_material(&self.neg_x, x, y, z)
        } else if x >= side {
            neighbor_material(&self.pos_x, x, y, z)
        } else if y < 0 {
            neighbor_material(&self.neg_y, x, y, z)
        } else if y >= side {
            neighbor_material(&self.pos_y, x, y, z)
        } else if z < 0 {
            neighbor_material(&self.neg_z, x, y, z)
        } else if z >= side {
            neighbor_material(&self.pos_z, x, y, z)
        } else {
            self.middle.material(x, y, z)
        }
    }
}
