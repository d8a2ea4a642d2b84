//! End-to-end pipeline tests against a fake VTFCmd.
//!
//! The fake compiler is a shell script that behaves like VTFCmd: it parses
//! `-file`/`-output`, drops `<stem>.vtf` into the output directory, and logs
//! each invocation so the tests can assert on subprocess activity.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use image::RgbImage;
use matforge_cli::pipeline::{compile_material, write_descriptions, CompileError};
use matforge_material::{assemble, render_vmt, Role, RoleNameTables};
use matforge_vtf::{CompilerConfig, VtfCompiler};

fn install_fake_vtfcmd(dir: &Path) -> PathBuf {
    let script = dir.join("vtfcmd");
    let body = "#!/bin/sh\n\
        echo \"$@\" >> \"$(dirname \"$0\")/calls.log\"\n\
        while [ $# -gt 0 ]; do\n\
        \x20 case \"$1\" in\n\
        \x20   -file) file=\"$2\"; shift 2 ;;\n\
        \x20   -output) out=\"$2\"; shift 2 ;;\n\
        \x20   *) shift ;;\n\
        \x20 esac\n\
        done\n\
        stem=$(basename \"$file\")\n\
        stem=${stem%.*}\n\
        touch \"$out/$stem.vtf\"\n";
    std::fs::write(&script, body).unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();
    script
}

fn call_count(script: &Path) -> usize {
    let log = script.parent().unwrap().join("calls.log");
    match std::fs::read_to_string(log) {
        Ok(content) => content.lines().count(),
        Err(_) => 0,
    }
}

fn write_uniform_png(path: &Path, width: u32, height: u32, value: u8) {
    let img = RgbImage::from_pixel(width, height, image::Rgb([value, value, value]));
    img.save(path).unwrap();
}

fn compiler_for(script: &Path) -> VtfCompiler {
    VtfCompiler::with_config(CompilerConfig::default().vtfcmd_path(script))
}

#[test]
fn test_full_material_conversion() {
    let workspace = tempfile::tempdir().unwrap();
    let script = install_fake_vtfcmd(workspace.path());

    let input = workspace.path().join("input");
    let brick = input.join("brick");
    std::fs::create_dir_all(&brick).unwrap();
    write_uniform_png(&brick.join("brick_diffuse.png"), 4, 4, 100);
    write_uniform_png(&brick.join("brick_rough.png"), 4, 4, 50);
    write_uniform_png(&brick.join("brick_metal.png"), 4, 4, 200);
    write_uniform_png(&brick.join("brick_normal.png"), 4, 4, 128);

    let output = workspace.path().join("output");
    let materials = assemble(&input, &RoleNameTables::default()).unwrap();
    write_descriptions(&materials, &output).unwrap();

    let compiler = compiler_for(&script);
    compile_material(&materials["brick"], &output, &compiler, "dxt1").unwrap();

    let brick_out = output.join("brick");
    let vmt = std::fs::read_to_string(brick_out.join("brick.vmt")).unwrap();
    assert_eq!(vmt, render_vmt("brick"));
    assert!(brick_out.join("brick_basecolor.vtf").exists());
    assert!(brick_out.join("brick_bump.vtf").exists());
    assert!(brick_out.join("brick_mrao.vtf").exists());

    // One invocation per compiled texture: diffuse, normal, mrao.
    assert_eq!(call_count(&script), 3);

    // The packed temp PNG is cleaned out of the input folder.
    let leftovers: Vec<_> = std::fs::read_dir(&brick)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("mrao_"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {:?}", leftovers);
}

#[test]
fn test_missing_normal_spawns_no_compiler() {
    let workspace = tempfile::tempdir().unwrap();
    let script = install_fake_vtfcmd(workspace.path());

    let input = workspace.path().join("input");
    let stone = input.join("stone");
    std::fs::create_dir_all(&stone).unwrap();
    write_uniform_png(&stone.join("stone_diffuse.png"), 2, 2, 90);

    let materials = assemble(&input, &RoleNameTables::default()).unwrap();
    let compiler = compiler_for(&script);
    let err = compile_material(
        &materials["stone"],
        &workspace.path().join("output"),
        &compiler,
        "dxt1",
    )
    .unwrap_err();

    match err {
        CompileError::MissingRequiredChannel { material, role } => {
            assert_eq!(material, "stone");
            assert_eq!(role, Role::Normal);
        }
        other => panic!("expected MissingRequiredChannel, got {:?}", other),
    }
    assert_eq!(call_count(&script), 0);
}

#[test]
fn test_batch_continues_past_failing_material() {
    let workspace = tempfile::tempdir().unwrap();
    let script = install_fake_vtfcmd(workspace.path());

    let input = workspace.path().join("input");
    for (name, with_normal) in [("broken", false), ("good", true)] {
        let folder = input.join(name);
        std::fs::create_dir_all(&folder).unwrap();
        write_uniform_png(&folder.join(format!("{}_diffuse.png", name)), 2, 2, 10);
        if with_normal {
            write_uniform_png(&folder.join(format!("{}_normal.png", name)), 2, 2, 128);
        }
    }

    let output = workspace.path().join("output");
    let materials = assemble(&input, &RoleNameTables::default()).unwrap();
    write_descriptions(&materials, &output).unwrap();

    let compiler = compiler_for(&script);
    let results: Vec<_> = materials
        .values()
        .map(|m| (m.name.clone(), compile_material(m, &output, &compiler, "dxt1")))
        .collect();

    assert!(results[0].1.is_err(), "'broken' should fail");
    assert!(results[1].1.is_ok(), "'good' should convert");
    assert!(output.join("good").join("good_mrao.vtf").exists());
    assert!(!output.join("broken").join("broken_basecolor.vtf").exists());
}
