//! Material records and input-tree assembly.
//!
//! One material per immediate subdirectory of the input root. Assembly only
//! looks at file names; no image content is read until packing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{MaterialError, MaterialResult};
use crate::role::{classify, Role, RoleNameTables};

/// A material assembled from one input subdirectory.
///
/// Each role holds at most one source file. `diffuse` and `normal` are
/// required for compilation; the MRAO channels are optional and fall back to
/// constant defaults when packing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Material {
    /// Material name, taken from the subdirectory name.
    pub name: String,
    pub diffuse: Option<PathBuf>,
    pub roughness: Option<PathBuf>,
    pub metallic: Option<PathBuf>,
    pub ao: Option<PathBuf>,
    pub normal: Option<PathBuf>,
}

impl Material {
    /// Creates an empty material with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns the source file assigned to the given role, if any.
    pub fn source(&self, role: Role) -> Option<&Path> {
        match role {
            Role::Diffuse => self.diffuse.as_deref(),
            Role::Roughness => self.roughness.as_deref(),
            Role::Metallic => self.metallic.as_deref(),
            Role::Ao => self.ao.as_deref(),
            Role::Normal => self.normal.as_deref(),
        }
    }

    /// Assigns a source file to a role, replacing any previous assignment.
    pub fn set_source(&mut self, role: Role, path: PathBuf) {
        let slot = match role {
            Role::Diffuse => &mut self.diffuse,
            Role::Roughness => &mut self.roughness,
            Role::Metallic => &mut self.metallic,
            Role::Ao => &mut self.ao,
            Role::Normal => &mut self.normal,
        };
        *slot = Some(path);
    }
}

/// All assembled materials, keyed by material name.
///
/// A `BTreeMap` so batch processing iterates materials in a stable order.
pub type MaterialSet = BTreeMap<String, Material>;

/// Scans `input_root` and assembles one [`Material`] per subdirectory.
///
/// Directory entries are sorted lexically before classification, so when two
/// files in a folder match the same role the lexically-last one wins,
/// independent of filesystem iteration order. Non-directory entries at the
/// top level are ignored.
pub fn assemble(input_root: &Path, tables: &RoleNameTables) -> MaterialResult<MaterialSet> {
    let mut materials = MaterialSet::new();

    for folder in sorted_entries(input_root)? {
        if !folder.is_dir() {
            continue;
        }
        let name = match folder.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let mut material = Material::new(name.clone());
        for file in sorted_entries(&folder)? {
            let Some(filename) = file.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            if let Some(role) = classify(&filename, tables) {
                material.set_source(role, file);
            }
        }
        materials.insert(name, material);
    }

    Ok(materials)
}

fn sorted_entries(dir: &Path) -> MaterialResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| MaterialError::InputDirUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| MaterialError::InputDirUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_assemble_brick_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let brick = dir.path().join("brick");
        fs::create_dir(&brick).unwrap();
        touch(&brick.join("brick_diffuse.png"));
        touch(&brick.join("brick_rough.png"));
        touch(&brick.join("brick_metal.png"));

        let materials = assemble(dir.path(), &RoleNameTables::default()).unwrap();
        assert_eq!(materials.len(), 1);

        let brick_mat = &materials["brick"];
        assert_eq!(brick_mat.name, "brick");
        assert_eq!(brick_mat.diffuse, Some(brick.join("brick_diffuse.png")));
        assert_eq!(brick_mat.roughness, Some(brick.join("brick_rough.png")));
        assert_eq!(brick_mat.metallic, Some(brick.join("brick_metal.png")));
        assert_eq!(brick_mat.ao, None);
        assert_eq!(brick_mat.normal, None);
    }

    #[test]
    fn test_assemble_ignores_top_level_files_and_unknown_names() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("stray.png"));
        let wood = dir.path().join("wood");
        fs::create_dir(&wood).unwrap();
        touch(&wood.join("notes.txt"));
        touch(&wood.join("wood_albedo.png"));

        let materials = assemble(dir.path(), &RoleNameTables::default()).unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(
            materials["wood"].diffuse,
            Some(wood.join("wood_albedo.png"))
        );
        assert_eq!(materials["wood"].normal, None);
    }

    #[test]
    fn test_assemble_duplicate_role_last_sorted_wins() {
        let dir = tempfile::tempdir().unwrap();
        let tile = dir.path().join("tile");
        fs::create_dir(&tile).unwrap();
        touch(&tile.join("a_diffuse.png"));
        touch(&tile.join("b_diffuse.png"));

        let materials = assemble(dir.path(), &RoleNameTables::default()).unwrap();
        assert_eq!(
            materials["tile"].diffuse,
            Some(tile.join("b_diffuse.png"))
        );
    }

    #[test]
    fn test_assemble_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = assemble(&missing, &RoleNameTables::default()).unwrap_err();
        assert!(matches!(err, MaterialError::InputDirUnreadable { .. }));
    }

    #[test]
    fn test_assemble_iterates_materials_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zinc", "brick", "moss"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        let materials = assemble(dir.path(), &RoleNameTables::default()).unwrap();
        let names: Vec<&str> = materials.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["brick", "moss", "zinc"]);
    }

    #[test]
    fn test_set_source_overwrites() {
        let mut material = Material::new("test");
        material.set_source(Role::Ao, PathBuf::from("first_ao.png"));
        material.set_source(Role::Ao, PathBuf::from("second_ao.png"));
        assert_eq!(material.source(Role::Ao), Some(Path::new("second_ao.png")));
        assert_eq!(material.source(Role::Diffuse), None);
    }
}
