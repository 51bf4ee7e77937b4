//! CPU chunk mesher: per-block face culling over a snapshot group.
//!
//! Voxels are meshed as unit cubes. Any face hidden by its neighbor is
//! culled, including faces on chunk edges, which resolve through the
//! neighbor snapshots. A chunk of side `n` costs `3*n*n*(n+2)` material
//! lookups: three axis passes, each scanning `n*n` columns of `n+2`
//! samples (the column plus one step past either edge).
#![forbid(unsafe_code)]

mod mesh_build;

pub use mesh_build::{MeshBuild, QuadWinding};

use quarry_blocks::{AxisFaces, Face, MaterialId, MaterialRegistry};
use quarry_geom::Vec3;
use quarry_snapshot::{CHUNK_SIZE, MaterialSource};

/// Meshes one chunk into a fresh buffer.
///
/// Pure and deterministic: identical snapshot data yields bit-identical
/// buffers. Safe to call concurrently for different chunks.
pub fn mesh_chunk<S: MaterialSource>(src: &S, reg: &MaterialRegistry) -> MeshBuild {
    let mut build = MeshBuild::default();
    mesh_chunk_into(src, reg, &mut build);
    build
}

/// Meshes one chunk into a caller-owned buffer, reusing its capacity.
pub fn mesh_chunk_into<S: MaterialSource>(src: &S, reg: &MaterialRegistry, build: &mut MeshBuild) {
    build.clear_keep_capacity();
    // X axis: columns over (z, y), boundary quads span the yz unit square.
    mesh_axis(
        src,
        reg,
        build,
        AxisFaces::X,
        |a, o, i| (a, i, o),
        |a, o, i| {
            [
                Vec3::new(a, i + 1.0, o + 1.0),
                Vec3::new(a, i + 1.0, o),
                Vec3::new(a, i, o + 1.0),
                Vec3::new(a, i, o),
            ]
        },
    );
    // Y axis: columns over (x, z).
    mesh_axis(
        src,
        reg,
        build,
        AxisFaces::Y,
        |a, o, i| (o, a, i),
        |a, o, i| {
            [
                Vec3::new(o, a, i),
                Vec3::new(o + 1.0, a, i),
                Vec3::new(o, a, i + 1.0),
                Vec3::new(o + 1.0, a, i + 1.0),
            ]
        },
    );
    // Z axis: columns over (x, y).
    mesh_axis(
        src,
        reg,
        build,
        AxisFaces::Z,
        |a, o, i| (o, i, a),
        |a, o, i| {
            [
                Vec3::new(o, i + 1.0, a),
                Vec3::new(o + 1.0, i + 1.0, a),
                Vec3::new(o, i, a),
                Vec3::new(o + 1.0, i, a),
            ]
        },
    );
    log::trace!(
        "meshed chunk: quads={} verts={}",
        build.quad_count(),
        build.vertex_count()
    );
}

/// One axis pass. `probe` permutes `(scan, outer, inner)` column coordinates
/// into `(x, y, z)`; `corners` produces the four corner positions of a
/// boundary quad at scan position `a`, in the emission order the two index
/// patterns expect.
fn mesh_axis<S: MaterialSource>(
    src: &S,
    reg: &MaterialRegistry,
    build: &mut MeshBuild,
    faces: AxisFaces,
    probe: impl Fn(i32, i32, i32) -> (i32, i32, i32),
    corners: impl Fn(f32, f32, f32) -> [Vec3; 4],
) {
    let n = CHUNK_SIZE as i32;
    for o in 0..n {
        for i in 0..n {
            let (x, y, z) = probe(-1, o, i);
            let mut back = src.material_at(x, y, z);
            // Scan front from 0 through n inclusive; position n is one step
            // past the far edge and resolves through the neighbor.
            for a in 0..=n {
                let (x, y, z) = probe(a, o, i);
                let front = src.material_at(x, y, z);
                if let Some(face) = boundary_face(reg, back, front, faces) {
                    let winding = if face == faces.pos {
                        QuadWinding::TowardPos
                    } else {
                        QuadWinding::TowardNeg
                    };
                    build.push_quad(corners(a as f32, o as f32, i as f32), winding);
                }
                back = front;
            }
        }
    }
}

/// Decides the visible face, if any, at a back|front boundary.
///
/// The branch order is load-bearing: when both sides could qualify (two
/// adjacent non-occluding visible materials), the back side wins and a
/// single toward-positive quad is emitted. Do not reorder the branches.
#[inline]
fn boundary_face(
    reg: &MaterialRegistry,
    back: MaterialId,
    front: MaterialId,
    faces: AxisFaces,
) -> Option<Face> {
    let back = reg.material(back);
    let front = reg.material(front);
    if back.is_visible() && !front.occludes(back, faces.get(0)) {
        return Some(faces.get(1));
    }
    if front.is_visible() && !back.occludes(front, faces.get(1)) {
        return Some(faces.get(0));
    }
    None
}
