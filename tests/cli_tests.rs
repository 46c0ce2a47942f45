use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn create_template_project(root: &Path) {
    std::fs::write(root.join("MyProjectTemplate.sln"), "Project(\"MyProjectTemplate\")").unwrap();
    std::fs::create_dir_all(root.join("src/MyProjectTemplateCore")).unwrap();
    std::fs::write(
        root.join("src/MyProjectTemplateCore/Class.cs"),
        "namespace MyProjectTemplateCore;\n\npublic class MyProjectTemplateService {}\n",
    )
    .unwrap();
    std::fs::create_dir(root.join("bin")).unwrap();
    std::fs::write(root.join("bin/MyProjectTemplate.dll"), "MyProjectTemplate").unwrap();
}

fn retemplate() -> Command {
    Command::cargo_bin("retemplate").unwrap()
}

#[test]
fn test_help_flag() {
    retemplate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rename a project template"));
}

#[test]
fn test_version_flag() {
    retemplate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_full_rename_scenario() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_template_project(root);

    retemplate()
        .args([
            "Acme",
            "--yes",
            "--template",
            "MyProjectTemplate",
            "--root",
            root.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULTS"));

    // Marker file renamed, contents rewritten.
    assert!(root.join("Acme.sln").is_file());
    assert!(!root.join("MyProjectTemplate.sln").exists());
    assert_eq!(
        std::fs::read_to_string(root.join("Acme.sln")).unwrap(),
        "Project(\"Acme\")"
    );

    // Directory and file inside it renamed, namespace rewritten.
    let class = root.join("src/AcmeCore/Class.cs");
    assert!(class.is_file());
    let contents = std::fs::read_to_string(&class).unwrap();
    assert!(contents.contains("namespace AcmeCore;"));
    assert!(contents.contains("AcmeService"));

    // Build output directories are never touched.
    assert_eq!(
        std::fs::read_to_string(root.join("bin/MyProjectTemplate.dll")).unwrap(),
        "MyProjectTemplate"
    );
}

#[test]
fn test_root_discovered_from_nested_directory() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_template_project(root);
    let nested = root.join("src/MyProjectTemplateCore");

    retemplate()
        .args([
            "Acme",
            "--yes",
            "--template",
            "MyProjectTemplate",
            "--root",
            nested.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(root.join("Acme.sln").is_file());
}

#[test]
fn test_root_not_found() {
    let dir = tempdir().unwrap();

    retemplate()
        .args([
            "Acme",
            "--yes",
            "--template",
            "MyProjectTemplate",
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(3) // ExitCode::RootNotFound
        .stderr(predicate::str::contains("MyProjectTemplate.sln"));
}

#[test]
fn test_invalid_name_rejected() {
    let dir = tempdir().unwrap();
    create_template_project(dir.path());

    retemplate()
        .args([
            "acme",
            "--yes",
            "--template",
            "MyProjectTemplate",
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(4) // ExitCode::InvalidName
        .stderr(predicate::str::contains("lowercase"));
}

#[test]
fn test_yes_without_name_rejected() {
    let dir = tempdir().unwrap();
    create_template_project(dir.path());

    retemplate()
        .args([
            "--yes",
            "--template",
            "MyProjectTemplate",
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(4) // ExitCode::InvalidName
        .stderr(predicate::str::contains("requires a name"));
}

#[test]
fn test_declined_confirmation_changes_nothing() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_template_project(root);

    retemplate()
        .args([
            "Acme",
            "--template",
            "MyProjectTemplate",
            "--root",
            root.to_str().unwrap(),
        ])
        .write_stdin("n\n")
        .assert()
        .success();

    assert!(root.join("MyProjectTemplate.sln").is_file());
    assert!(!root.join("Acme.sln").exists());
}

#[test]
fn test_interactive_prompt_drives_rename() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_template_project(root);

    retemplate()
        .args([
            "--template",
            "MyProjectTemplate",
            "--root",
            root.to_str().unwrap(),
        ])
        .write_stdin("Acme\ny\n")
        .assert()
        .success();

    assert!(root.join("Acme.sln").is_file());
}

#[test]
fn test_interactive_eof_is_invalid_name() {
    let dir = tempdir().unwrap();
    create_template_project(dir.path());

    retemplate()
        .args([
            "--template",
            "MyProjectTemplate",
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .write_stdin("")
        .assert()
        .code(4) // ExitCode::InvalidName
        .stderr(predicate::str::contains("input ended"));
}

#[test]
fn test_name_with_spaces_becomes_underscored() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_template_project(root);

    retemplate()
        .args([
            "North Star",
            "--yes",
            "--template",
            "MyProjectTemplate",
            "--root",
            root.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(root.join("North_Star.sln").is_file());
}

#[test]
fn test_second_run_reports_root_not_found() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_template_project(root);

    let run = || {
        let mut cmd = retemplate();
        cmd.args([
            "Acme",
            "--yes",
            "--template",
            "MyProjectTemplate",
            "--root",
            root.to_str().unwrap(),
        ]);
        cmd
    };

    run().assert().success();

    // The marker was renamed along with everything else, so a rerun
    // has no root to anchor to.
    run().assert().code(3);
}

#[test]
fn test_verbose_flag_still_succeeds() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_template_project(root);

    retemplate()
        .args([
            "Acme",
            "--yes",
            "-vv",
            "--template",
            "MyProjectTemplate",
            "--root",
            root.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(root.join("Acme.sln").is_file());
}
