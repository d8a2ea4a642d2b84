//! Texture roles and filename classification.
//!
//! Source artists name their maps inconsistently (`albedo` vs `diffuse` vs
//! `color`, `bump` vs `normal`), so classification runs each filename against
//! configurable per-role substring lists instead of fixed suffixes.

use serde::{Deserialize, Serialize};

/// Semantic texture role of a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Base color / albedo map.
    Diffuse,
    /// Roughness map (packed into the MRAO green channel).
    Roughness,
    /// Metallic map (packed into the MRAO red channel).
    Metallic,
    /// Ambient occlusion map (packed into the MRAO blue channel).
    Ao,
    /// Tangent-space normal map.
    Normal,
}

impl Role {
    /// All roles in classification priority order. The first role whose name
    /// table matches a filename wins.
    pub const PRIORITY: [Role; 5] = [
        Role::Diffuse,
        Role::Roughness,
        Role::Metallic,
        Role::Ao,
        Role::Normal,
    ];

    /// Returns the string identifier for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Diffuse => "diffuse",
            Role::Roughness => "roughness",
            Role::Metallic => "metallic",
            Role::Ao => "ao",
            Role::Normal => "normal",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-role lists of filename substrings used for classification.
///
/// Matching is case-sensitive containment, so variants like `"ao"`/`"AO"`
/// must be listed explicitly. A partial JSON table deserializes with the
/// defaults filled in for the missing roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleNameTables {
    pub diffuse: Vec<String>,
    pub roughness: Vec<String>,
    pub metallic: Vec<String>,
    pub ao: Vec<String>,
    pub normal: Vec<String>,
}

impl Default for RoleNameTables {
    fn default() -> Self {
        Self {
            diffuse: str_vec(&["diffuse", "albedo", "color"]),
            roughness: str_vec(&["rough"]),
            metallic: str_vec(&["metal"]),
            ao: str_vec(&["ao", "AO", "ambient"]),
            normal: str_vec(&["normal", "bump", "nrml", "Nrml", "NRML"]),
        }
    }
}

impl RoleNameTables {
    /// Returns the name list for the given role.
    pub fn names(&self, role: Role) -> &[String] {
        match role {
            Role::Diffuse => &self.diffuse,
            Role::Roughness => &self.roughness,
            Role::Metallic => &self.metallic,
            Role::Ao => &self.ao,
            Role::Normal => &self.normal,
        }
    }
}

fn str_vec(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Classifies a filename into a texture role.
///
/// Roles are tried in [`Role::PRIORITY`] order and the first role with a
/// matching substring wins, so a file like `metal_color.png` classifies as
/// diffuse. Returns `None` when no table matches; such files are ignored by
/// assembly.
pub fn classify(filename: &str, tables: &RoleNameTables) -> Option<Role> {
    Role::PRIORITY
        .into_iter()
        .find(|role| tables.names(*role).iter().any(|n| filename.contains(n)))
}
