//! CLI integration tests
use predicates::prelude::*;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("legenda").unwrap()
}

fn site_fixture_path(site: &str, name: &str) -> String {
    format!("../../tests/fixtures/sites/{}/{}", site, name)
}

#[test]
fn test_cli_help() {
    cmd().arg("--help").assert().success();
}

#[test]
fn test_cli_sites_lists_builtins() {
    cmd()
        .arg("sites")
        .assert()
        .success()
        .stdout(predicate::str::contains("novelfull"))
        .stdout(predicate::str::contains("readlightnovel"));
}

#[test]
fn test_cli_list_from_file() {
    cmd()
        .args(["list", "novelfull", "--file", &site_fixture_path("novelfull", "listing.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("/overgeared.html"))
        .stdout(predicate::str::contains("Overgeared"));
}

#[test]
fn test_cli_list_json_output() {
    cmd()
        .args([
            "list",
            "novelfull",
            "--json",
            "--file",
            &site_fixture_path("novelfull", "listing.html"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"has_next_page\": true"))
        .stdout(predicate::str::contains("\"id\": \"/overgeared.html\""));
}

#[test]
fn test_cli_read_from_file() {
    cmd()
        .args([
            "read",
            "novelfull",
            "/overgeared/chapter-12.html",
            "--file",
            &site_fixture_path("novelfull", "chapter.html"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grid looked down at the hammer"))
        .stdout(predicate::str::contains("the work itself had not changed"));
}

#[test]
fn test_cli_read_html_output() {
    cmd()
        .args([
            "read",
            "novelfull",
            "/overgeared/chapter-12.html",
            "--html",
            "--file",
            &site_fixture_path("novelfull", "chapter.html"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>"))
        .stdout(predicate::str::contains(
            "src=\"https://novelfull.com/media/illustrations/hammer.png\"",
        ));
}

#[test]
fn test_cli_unknown_site_fails() {
    cmd()
        .args(["list", "not-a-site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown site"));
}

#[test]
fn test_cli_unknown_filter_value_fails() {
    cmd()
        .args([
            "list",
            "novelfull",
            "--genre",
            "genre/Nonexistent",
            "--file",
            &site_fixture_path("novelfull", "listing.html"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not offered"));
}

#[test]
fn test_cli_custom_profile_dir() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("tiny.json"),
        r#"{"name": "tiny", "label": "Tiny Reads", "base_url": "https://tiny.example.org/"}"#,
    )
    .unwrap();

    cmd()
        .args(["sites", "--profiles"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tiny"));
}
