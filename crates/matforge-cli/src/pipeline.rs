//! Material conversion pipeline.
//!
//! Ties the pieces together per material: compile the diffuse and normal
//! maps, pack and compile the MRAO texture, and rename everything into the
//! names the VMT references. Materials are independent, so a failure here is
//! reported per material and the batch moves on.

use std::path::Path;

use matforge_material::{
    load_rgba, pack_mrao, write_png, write_vmt, Material, MaterialError, MaterialSet, MraoSources,
    Role,
};
use matforge_vtf::{VtfCompiler, VtfError};
use thiserror::Error;

/// Errors from converting one material.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The material lacks a map required for compilation.
    #[error("Material '{material}' is missing its {role} map")]
    MissingRequiredChannel { material: String, role: Role },

    /// Material-side failure (image decode, packed PNG write).
    #[error(transparent)]
    Material(#[from] MaterialError),

    /// VTFCmd failure.
    #[error(transparent)]
    Compiler(#[from] VtfError),

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the VMT description for every assembled material.
///
/// Runs before any compilation so a VMT failure aborts the batch while the
/// output tree is still cheap to throw away.
pub fn write_descriptions(materials: &MaterialSet, output_root: &Path) -> Result<(), CompileError> {
    for name in materials.keys() {
        write_vmt(name, output_root)?;
    }
    Ok(())
}

/// Compiles all textures for one material into `output_root/<name>/`.
///
/// Steps, in order: compile the diffuse map as `<name>_basecolor`, pack the
/// MRAO texture sized from this material's diffuse map, compile the normal
/// map as `<name>_bump`, compile the packed texture as `<name>_mrao` with
/// the compressed non-alpha format. The required-map check runs before any
/// subprocess is spawned.
pub fn compile_material(
    material: &Material,
    output_root: &Path,
    compiler: &VtfCompiler,
    mrao_format: &str,
) -> Result<(), CompileError> {
    let diffuse = require(material, Role::Diffuse)?;
    let normal = require(material, Role::Normal)?;

    let out_dir = output_root.join(&material.name);

    compiler.compile_as(
        diffuse,
        &out_dir,
        None,
        &format!("{}_basecolor", material.name),
    )?;

    let diffuse_image = load_rgba(diffuse)?;
    let reference_size = (diffuse_image.width(), diffuse_image.height());
    let metallic = material.metallic.as_deref().map(load_rgba).transpose()?;
    let roughness = material.roughness.as_deref().map(load_rgba).transpose()?;
    let ao = material.ao.as_deref().map(load_rgba).transpose()?;
    let packed = pack_mrao(
        reference_size,
        MraoSources {
            metallic: metallic.as_ref(),
            roughness: roughness.as_ref(),
            ao: ao.as_ref(),
        },
    );

    // The packed texture lives next to the sources only for the duration of
    // the compile; the tempfile is removed on drop.
    let input_dir = diffuse.parent().unwrap_or_else(|| Path::new("."));
    let packed_file = tempfile::Builder::new()
        .prefix("mrao_")
        .suffix(".png")
        .tempfile_in(input_dir)?;
    write_png(&packed, packed_file.path())?;

    compiler.compile_as(normal, &out_dir, None, &format!("{}_bump", material.name))?;

    compiler.compile_as(
        packed_file.path(),
        &out_dir,
        Some(mrao_format),
        &format!("{}_mrao", material.name),
    )?;

    Ok(())
}

fn require(material: &Material, role: Role) -> Result<&Path, CompileError> {
    material
        .source(role)
        .ok_or_else(|| CompileError::MissingRequiredChannel {
            material: material.name.clone(),
            role,
        })
}
