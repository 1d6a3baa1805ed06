use std::path::{Path, PathBuf};

use zserio_compiler::generate::{compile_args, output_dir_for, GenerateOptions};
use zserio_compiler::DEFAULT_GEN_DIR_NAME;

#[test]
fn explicit_gen_dir_wins() {
    let out = output_dir_for(
        Path::new("zs/structure.zs"),
        Some(Path::new("zs")),
        Some(Path::new("gen")),
    );
    assert_eq!(out, PathBuf::from("gen"));
}

#[test]
fn src_dir_gets_default_subdir() {
    let out = output_dir_for(Path::new("structure.zs"), Some(Path::new("zs")), None);
    assert_eq!(out, Path::new("zs").join(DEFAULT_GEN_DIR_NAME));
}

#[test]
fn main_file_dir_is_the_last_resort() {
    let out = output_dir_for(Path::new("schemas/structure.zs"), None, None);
    assert_eq!(out, Path::new("schemas").join(DEFAULT_GEN_DIR_NAME));

    // A bare file name falls back to the current directory.
    let out = output_dir_for(Path::new("structure.zs"), None, None);
    assert_eq!(out, Path::new("").join(DEFAULT_GEN_DIR_NAME));
}

#[test]
fn args_are_assembled_in_compiler_order() {
    let options = GenerateOptions {
        src_dir: Some(PathBuf::from("zs")),
        top_level_package: Some("appl".to_string()),
        extra_args: vec!["-withoutSqlCode".to_string(), "-withTypeInfoCode".to_string()],
        ..Default::default()
    };
    let args = compile_args(Path::new("test/structure.zs"), &options, Path::new("gen"));

    assert_eq!(
        args,
        vec![
            "test/structure.zs",
            "-src",
            "zs",
            "-python",
            "gen",
            "-setTopLevelPackage",
            "appl",
            "-withoutSqlCode",
            "-withTypeInfoCode",
        ]
    );
}

#[test]
fn minimal_args_carry_only_main_and_output() {
    let options = GenerateOptions::default();
    let args = compile_args(Path::new("structure.zs"), &options, Path::new("out"));
    assert_eq!(args, vec!["structure.zs", "-python", "out"]);
}
