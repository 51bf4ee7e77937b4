use std::sync::Arc;

use proptest::prelude::*;
use quarry_blocks::{MaterialId, MaterialRegistry, Occlusion};
use quarry_mesh_cpu::mesh_chunk;
use quarry_snapshot::{
    CHUNK_SIZE, CHUNK_VOLUME, ChunkCoord, ChunkSnapshot, ChunkSnapshotGroup, WorldSnapshot,
};

fn stone_registry() -> (MaterialRegistry, MaterialId) {
    let mut reg = MaterialRegistry::new();
    let stone = reg.register("stone", true, Occlusion::All);
    (reg, stone)
}

fn arb_voxels() -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
    proptest::collection::vec(
        (0..CHUNK_SIZE, 0..CHUNK_SIZE, 0..CHUNK_SIZE),
        0..64,
    )
}

fn chunk_of(voxels: &[(usize, usize, usize)], material: MaterialId) -> ChunkSnapshot {
    let mut cells = vec![MaterialId::AIR; CHUNK_VOLUME];
    for &(x, y, z) in voxels {
        cells[ChunkSnapshot::idx(x, y, z)] = material;
    }
    ChunkSnapshot::from_materials(ChunkCoord::new(0, 0, 0), cells)
}

fn group_of(middle: ChunkSnapshot) -> ChunkSnapshotGroup {
    let coord = middle.coord();
    let mut world = WorldSnapshot::new();
    world.insert(Arc::new(middle));
    ChunkSnapshotGroup::new(&world, coord).unwrap()
}

// Independent oracle for solid/air chunks with air borders: one face per
// solid cell side whose neighbor cell is not solid.
fn exposed_faces(voxels: &[(usize, usize, usize)]) -> usize {
    let mut solid = vec![false; CHUNK_VOLUME];
    for &(x, y, z) in voxels {
        solid[ChunkSnapshot::idx(x, y, z)] = true;
    }
    let n = CHUNK_SIZE as i32;
    let is_solid = |x: i32, y: i32, z: i32| {
        x >= 0
            && x < n
            && y >= 0
            && y < n
            && z >= 0
            && z < n
            && solid[ChunkSnapshot::idx(x as usize, y as usize, z as usize)]
    };
    let mut count = 0;
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                if !is_solid(x, y, z) {
                    continue;
                }
                for (dx, dy, dz) in [
                    (1, 0, 0),
                    (-1, 0, 0),
                    (0, 1, 0),
                    (0, -1, 0),
                    (0, 0, 1),
                    (0, 0, -1),
                ] {
                    if !is_solid(x + dx, y + dy, z + dz) {
                        count += 1;
                    }
                }
            }
        }
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Quad count equals the brute-force count of exposed solid faces.
    #[test]
    fn quad_count_matches_exposed_faces(voxels in arb_voxels()) {
        let (reg, stone) = stone_registry();
        let mb = mesh_chunk(&group_of(chunk_of(&voxels, stone)), &reg);
        prop_assert_eq!(mb.quad_count(), exposed_faces(&voxels));
    }

    // Two groups over identical snapshot data mesh bit-identically.
    #[test]
    fn meshing_is_idempotent(voxels in arb_voxels()) {
        let (reg, stone) = stone_registry();
        let a = mesh_chunk(&group_of(chunk_of(&voxels, stone)), &reg);
        let b = mesh_chunk(&group_of(chunk_of(&voxels, stone)), &reg);
        prop_assert_eq!(a.positions(), b.positions());
        prop_assert_eq!(a.indices(), b.indices());
    }

    // Buffer shape invariants: 4 vertices and 6 indices per quad, every
    // index in range, normals never populated.
    #[test]
    fn buffer_shape_is_consistent(voxels in arb_voxels()) {
        let (reg, stone) = stone_registry();
        let mb = mesh_chunk(&group_of(chunk_of(&voxels, stone)), &reg);
        prop_assert_eq!(mb.vertex_count() , mb.quad_count() * 4);
        prop_assert_eq!(mb.indices().len(), mb.quad_count() * 6);
        let verts = mb.vertex_count() as u32;
        prop_assert!(mb.indices().iter().all(|&i| i < verts));
        prop_assert!(mb.normals().is_empty());
    }

    // An absent neighbor and a present all-air neighbor are
    // indistinguishable in the output.
    #[test]
    fn absent_neighbor_equals_air_neighbor(voxels in arb_voxels()) {
        let (reg, stone) = stone_registry();
        let coord = ChunkCoord::new(0, 0, 0);
        let middle = chunk_of(&voxels, stone);

        let mut bare = WorldSnapshot::new();
        bare.insert(Arc::new(middle.clone()));
        let without = ChunkSnapshotGroup::new(&bare, coord).unwrap();

        let mut padded = WorldSnapshot::new();
        padded.insert(Arc::new(middle));
        for (dx, dy, dz) in [
            (1, 0, 0),
            (-1, 0, 0),
            (0, 1, 0),
            (0, -1, 0),
            (0, 0, 1),
            (0, 0, -1),
        ] {
            let c = coord.offset(dx, dy, dz);
            padded.insert(Arc::new(ChunkSnapshot::filled(c, MaterialId::AIR)));
        }
        let with = ChunkSnapshotGroup::new(&padded, coord).unwrap();

        prop_assert_eq!(mesh_chunk(&without, &reg), mesh_chunk(&with, &reg));
    }
}
