//! matforge material model
//!
//! This crate provides the material-side half of the matforge pipeline:
//! classifying source image files into texture roles, assembling per-folder
//! [`Material`] records, packing metallic/roughness/AO maps into a single
//! MRAO image, and emitting Source-engine PBR `.vmt` material descriptions.
//!
//! # Overview
//!
//! A material is one subdirectory of the input root. Each file inside it is
//! classified by case-sensitive substring matching against configurable
//! per-role name tables, and the resulting [`Material`] records at most one
//! source file per role. Downstream, the roughness/metallic/AO sources are
//! merged into one RGB image (metallic in R, roughness in G, AO in B) so the
//! engine samples a single texture at render time.
//!
//! Nothing in this crate spawns processes; texture compilation lives in
//! `matforge-vtf`.
//!
//! # Modules
//!
//! - [`role`]: texture roles and filename classification
//! - [`material`]: material records and input-tree assembly
//! - [`pack`]: MRAO channel packing and PNG persistence
//! - [`vmt`]: VMT material description emission
//! - [`error`]: error types

pub mod error;
pub mod material;
pub mod pack;
pub mod role;
pub mod vmt;

pub use error::{MaterialError, MaterialResult};
pub use material::{assemble, Material, MaterialSet};
pub use pack::{load_rgba, pack_mrao, write_png, MraoSources};
pub use role::{classify, Role, RoleNameTables};
pub use vmt::{render_vmt, write_vmt, VMT_EXTENSION};
