use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::face::Face;
use super::material::{FULL_OCCLUSION_MASK, MaterialType, Occlusion};
use super::types::MaterialId;

/// Explicit material table, passed by the caller to snapshot producers and
/// the mesher instead of living in a global singleton.
///
/// The `air` material always occupies id 0, so snapshots can default to
/// `MaterialId::AIR` without holding a registry reference.
#[derive(Clone, Debug)]
pub struct MaterialRegistry {
    pub materials: Vec<MaterialType>,
    pub by_key: HashMap<String, MaterialId>,
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialRegistry {
    pub fn new() -> Self {
        let air = MaterialType::air();
        let mut by_key = HashMap::new();
        by_key.insert(air.key.clone(), air.id);
        Self {
            materials: vec![air],
            by_key,
        }
    }

    /// Registers a full-cube material and returns its id.
    pub fn register(&mut self, key: &str, visible: bool, occlusion: Occlusion) -> MaterialId {
        self.register_masked(key, visible, occlusion, FULL_OCCLUSION_MASK)
    }

    /// Registers a material with an explicit occlusion mask (6 bits in
    /// `Face` order). Re-registering an existing key returns the old id.
    pub fn register_masked(
        &mut self,
        key: &str,
        visible: bool,
        occlusion: Occlusion,
        occlusion_mask: u8,
    ) -> MaterialId {
        if let Some(&id) = self.by_key.get(key) {
            return id;
        }
        let id = MaterialId(self.materials.len() as u16);
        self.by_key.insert(key.to_string(), id);
        self.materials.push(MaterialType {
            id,
            key: key.to_string(),
            visible,
            occlusion,
            occlusion_mask,
        });
        id
    }

    #[inline]
    pub fn get(&self, id: MaterialId) -> Option<&MaterialType> {
        self.materials.get(id.0 as usize)
    }

    /// Resolves an id, falling back to air for ids outside the table.
    #[inline]
    pub fn material(&self, id: MaterialId) -> &MaterialType {
        self.materials
            .get(id.0 as usize)
            .unwrap_or(&self.materials[0])
    }

    #[inline]
    pub fn air(&self) -> &MaterialType {
        &self.materials[0]
    }

    pub fn id_by_key(&self, key: &str) -> Option<MaterialId> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Builds a registry from a TOML material table. The `air` entry is
    /// fixed and cannot be redefined; an `air` key in the config is ignored.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        let mut reg = MaterialRegistry::new();
        let mut entries: Vec<(String, MaterialEntry)> = cfg.materials.into_iter().collect();
        // HashMap iteration order is nondeterministic; sort keys so
        // MaterialId assignment is stable across runs.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            if key == "air" {
                continue;
            }
            let mut mask = FULL_OCCLUSION_MASK;
            for name in &entry.open_faces {
                let face = Face::from_name(name)
                    .ok_or_else(|| format!("material {key:?}: unknown face name {name:?}"))?;
                mask &= !(1 << face.index());
            }
            reg.register_masked(&key, entry.visible, entry.occludes, mask);
        }
        Ok(reg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MaterialsConfig {
    pub materials: HashMap<String, MaterialEntry>,
}

#[derive(Deserialize)]
pub struct MaterialEntry {
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub occludes: Occlusion,
    /// Faces that never occlude, by config name (`pos_y`, `neg_x`, ...).
    #[serde(default)]
    pub open_faces: Vec<String>,
}

fn default_visible() -> bool {
    true
}
