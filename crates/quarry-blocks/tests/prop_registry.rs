use proptest::prelude::*;
use quarry_blocks::{MaterialRegistry, Occlusion};
use std::collections::HashSet;

fn arb_keys() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z][a-z0-9_]{0,12}", 0..32)
}

proptest! {
    // Every registered key resolves back to a unique id and the id
    // resolves back to the same key.
    #[test]
    fn register_roundtrips(keys in arb_keys()) {
        let mut reg = MaterialRegistry::new();
        for key in &keys {
            reg.register(key, true, Occlusion::All);
        }
        let distinct: HashSet<&String> = keys.iter().collect();
        let expect_air = !distinct.contains(&"air".to_string());
        prop_assert_eq!(reg.len(), distinct.len() + usize::from(expect_air));
        for key in &keys {
            let id = reg.id_by_key(key).expect("registered key");
            prop_assert_eq!(&reg.material(id).key, key);
        }
    }

    // Ids assigned by the TOML loader are dense and air stays at 0.
    #[test]
    fn toml_ids_are_dense(keys in arb_keys()) {
        let mut doc = String::new();
        for key in &keys {
            doc.push_str(&format!("[materials.{key}]\noccludes = \"all\"\n"));
        }
        if let Ok(reg) = MaterialRegistry::from_toml_str(&doc) {
            for (i, m) in reg.materials.iter().enumerate() {
                prop_assert_eq!(m.id.0 as usize, i);
            }
            prop_assert!(!reg.air().is_visible());
        }
    }
}
