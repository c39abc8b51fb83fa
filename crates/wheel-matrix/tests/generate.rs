use assert_cmd::assert::OutputAssertExt;
use assert_fs::prelude::*;
use indoc::indoc;
use predicates::prelude::*;

use crate::common::{TestContext, matrix_snapshot};

mod common;

/// Settings that declare `cffi` twice, the second time with a different version list.
const DUPLICATE_PACKAGE: &str = indoc! {r#"
    [releases]
    "13.2" = ["3.11"]

    [architectures]
    amd64 = "x86_64"

    [[packages]]
    name = "cffi"
    versions = ["1.15.0"]

    [[packages]]
    name = "coverage"
    versions = ["latest"]

    [[packages]]
    name = "cffi"
    versions = ["latest"]
"#};

#[test]
fn write_default_matrix() {
    let context = TestContext::new();

    matrix_snapshot!(&mut context.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updating: wheel_matrix.yml

    ----- stderr -----
    ");

    let matrix = context.read("wheel_matrix.yml");
    assert!(
        matrix.starts_with("# This file was generated by the `wheel-matrix` tool.\npackages:\n")
    );
    assert_eq!(matrix.matches("- platform_tag: ").count(), 66);
    assert_eq!(matrix.matches("abi: abi3").count(), 12);
    assert!(matrix.contains("platform_tag: freebsd_13_2_release_arm64"));

    // Running again rewrites identical contents.
    matrix_snapshot!(&mut context.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Up-to-date: wheel_matrix.yml

    ----- stderr -----
    ");
    assert_eq!(context.read("wheel_matrix.yml"), matrix);
}

#[test]
fn overwrite_existing_file() {
    let context = TestContext::new();
    context
        .temp_dir
        .child("wheel_matrix.yml")
        .write_str("packages: {}\n")
        .unwrap();

    context
        .command()
        .assert()
        .success()
        .stdout("Updating: wheel_matrix.yml\n");

    let matrix = context.read("wheel_matrix.yml");
    assert!(!matrix.contains("packages: {}"));
    assert_eq!(matrix.matches("- platform_tag: ").count(), 66);
}

#[test]
fn config_file() {
    let context = TestContext::new();
    context
        .temp_dir
        .child("wheel-matrix.toml")
        .write_str(indoc! {r#"
            [releases]
            "13.2" = ["3.11"]

            [architectures]
            amd64 = "x86_64"

            [[packages]]
            name = "cffi"
            versions = ["latest"]
        "#})
        .unwrap();

    matrix_snapshot!(context.command().arg("--config").arg("wheel-matrix.toml"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updating: wheel_matrix.yml

    ----- stderr -----
    ");

    insta::assert_snapshot!(context.read("wheel_matrix.yml"), @r"
    # This file was generated by the `wheel-matrix` tool.
    packages:
      cffi:
        versions:
          latest:
            wheels:
            - platform_tag: freebsd_13_2_release_amd64
              platform_instance: freebsd/13.2
              platform_arch: x86_64
              python:
              - tag: cp311
    ");
}

#[test]
fn config_file_invalid() {
    let context = TestContext::new();
    context
        .temp_dir
        .child("wheel-matrix.toml")
        .write_str(indoc! {r#"
            [releases]
            "13.2" = ["3.11"]

            [architectures]

            [[packages]]
            name = "cffi"
            versions = ["latest"]
        "#})
        .unwrap();

    matrix_snapshot!(context.command().arg("--config").arg("wheel-matrix.toml"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Invalid wheel matrix settings in `wheel-matrix.toml`
      Caused by: - no architectures are defined
    ");

    context
        .temp_dir
        .child("wheel_matrix.yml")
        .assert(predicate::path::missing());
}

#[test]
fn duplicate_package_warns() {
    let context = TestContext::new();
    context
        .temp_dir
        .child("wheel-matrix.toml")
        .write_str(DUPLICATE_PACKAGE)
        .unwrap();

    matrix_snapshot!(context.command().arg("--config").arg("wheel-matrix.toml"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updating: wheel_matrix.yml

    ----- stderr -----
    warning: Package `cffi` is declared more than once; using the last declaration
    ");

    // The last declaration wins, at the position of the first.
    let matrix = context.read("wheel_matrix.yml");
    assert!(!matrix.contains("1.15.0"), "{matrix}");
    let cffi = matrix.find("  cffi:").unwrap();
    let coverage = matrix.find("  coverage:").unwrap();
    assert!(cffi < coverage, "{matrix}");
}

#[test]
fn duplicate_package_quiet() {
    let context = TestContext::new();
    context
        .temp_dir
        .child("wheel-matrix.toml")
        .write_str(DUPLICATE_PACKAGE)
        .unwrap();

    context
        .command()
        .arg("--config")
        .arg("wheel-matrix.toml")
        .arg("--quiet")
        .assert()
        .success()
        .stderr("");
}

#[test]
fn unwritable_output() {
    let context = TestContext::new();

    context
        .command()
        .arg("--output")
        .arg("missing/wheel_matrix.yml")
        .assert()
        .code(2)
        .stderr(
            predicate::str::starts_with(
                "error: Failed to write the wheel matrix to `missing/wheel_matrix.yml`",
            )
            .and(predicate::str::contains("Caused by:")),
        );
}

#[test]
fn verbose_logging() {
    let context = TestContext::new();

    context
        .command()
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "DEBUG Expanded 2 version(s) of `cryptography` into 4 wheel(s) each",
        ));
}

#[test]
fn argument_errors() {
    let context = TestContext::new();

    context
        .command()
        .arg("--mode")
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument '--mode'"));
    context
        .temp_dir
        .child("wheel_matrix.yml")
        .assert(predicate::path::missing());

    context
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wheel-matrix"));
}
