//! Directory builds through the filesystem host

use rstest::rstest;
use std::fs;
use tapegen::{generate, Config, FsHost, Target, CONFIG_FILE};
use tempfile::TempDir;

fn write_programs(dir: &TempDir) {
    fs::create_dir_all(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("hello.bf"), "++++++++[>+++++++++<-]>.").unwrap();
    fs::write(dir.path().join("lib").join("cat.bf"), ",[.,]").unwrap();
    fs::write(dir.path().join("notes.md"), "not [ a program").unwrap();
}

#[rstest]
#[case::rust(Target::Rust, "bf.rs")]
#[case::csharp(Target::CSharp, "BF.cs")]
#[case::python(Target::Python, "bf.py")]
#[case::typescript(Target::TypeScript, "BF.ts")]
#[case::go(Target::Go, "bf.go")]
#[case::java(Target::Java, "BF.java")]
fn build_writes_one_file_per_target(#[case] target: Target, #[case] file: &str) {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_programs(&input);

    let config = Config {
        target,
        ..Config::default()
    };
    let mut host = FsHost::new(input.path(), output.path());
    let report = generate(&mut host, &config).unwrap();

    assert_eq!(report.sources, vec!["hello.bf", "lib/cat.bf"]);
    assert_eq!(report.functions, vec!["hello", "cat"]);
    assert_eq!(report.emitted.as_deref(), Some(file));

    let entries: Vec<_> = fs::read_dir(output.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn config_file_selects_target_and_extension() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(
        input.path().join(CONFIG_FILE),
        "target: typescript\ncontainer: Programs\nextension: b\ntape_size: 30000\n",
    )
    .unwrap();
    fs::write(input.path().join("shout.b"), "+.").unwrap();
    fs::write(input.path().join("ignored.bf"), "-.").unwrap();

    let config = Config::discover(input.path()).unwrap();
    let mut host = FsHost::new(input.path(), output.path());
    let report = generate(&mut host, &config).unwrap();

    assert_eq!(report.functions, vec!["shout"]);
    let code = fs::read_to_string(output.path().join("Programs.ts")).unwrap();
    assert!(code.contains("export const TAPE_SIZE = 30000;"));
    assert!(code.contains("export class Programs {"));
    assert!(code.contains("static shout(input: string = \"\"): string {"));
}

#[test]
fn duplicate_names_keep_first() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::create_dir_all(input.path().join("a")).unwrap();
    fs::create_dir_all(input.path().join("b")).unwrap();
    fs::write(input.path().join("a").join("echo.bf"), ",.").unwrap();
    fs::write(input.path().join("b").join("echo.bf"), ",,.").unwrap();

    let mut host = FsHost::new(input.path(), output.path());
    let report = generate(&mut host, &Config::default()).unwrap();

    assert_eq!(report.functions, vec!["echo"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].file, "b/echo.bf");
}

#[test]
fn empty_input_directory_emits_nothing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let out_dir = output.path().join("gen");

    let mut host = FsHost::new(input.path(), &out_dir);
    let report = generate(&mut host, &Config::default()).unwrap();

    assert!(report.emitted.is_none());
    assert!(!out_dir.exists());
}
