//! Integration tests for the imslc CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get an imslc command isolated from user config and environment
fn imslc(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("imslc").unwrap();
    cmd.current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join(".config"))
        .env_remove("IMSLC_OUTPUT_DIR")
        .env_remove("IMSLC_CONTENT_DIR")
        .env_remove("IMSLC_BASE_PATH")
        .env_remove("RUST_LOG");
    cmd
}

fn write_content(dir: &std::path::Path, lifecycle: &str, quality: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("lifecycle.yaml"), lifecycle).unwrap();
    fs::write(dir.join("quality.yaml"), quality).unwrap();
}

const SMALL_LIFECYCLE: &str = r#"
stages:
  - id: 1
    title: Проектирование
    description: Разработка схемы
    risks:
      - category: Технический
        description: Ошибка в схеме
        probability: Средняя
        impact: Высокое
        minimization: Моделирование
        reaction: Доработка
  - id: 2
    title: Производство
    description: Серийный выпуск
"#;

const SMALL_QUALITY: &str = r#"
indicators:
  - id: 1
    title: A
    description: Первый
    documents:
      - name: ГОСТ 1
        title: Стандарт один
  - id: 2
    title: B
    description: Второй
    documents:
      - name: ГОСТ 1
        title: Стандарт один
      - name: ТР 5
        title: Регламент пять
"#;

// ============================================================================
// Basic CLI
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("stage"))
        .stdout(predicate::str::contains("doc"));
}

#[test]
fn test_version() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("imslc"));
}

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("imslc"));
}

// ============================================================================
// Site build
// ============================================================================

#[test]
fn test_build_writes_all_pages_with_relative_links() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("site");

    imslc(&tmp)
        .args(["build", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 file(s)"));

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    let quality = fs::read_to_string(out.join("quality/index.html")).unwrap();
    let documents = fs::read_to_string(out.join("documents/index.html")).unwrap();
    assert!(out.join("assets/site.css").exists());

    assert!(index.contains("href=\"./quality/index.html\""));
    assert!(index.contains("href=\"./assets/site.css\""));
    assert!(index.contains("Маркетинг и формирование требований"));
    assert!(quality.contains("href=\"../index.html\""));
    assert!(quality.contains("href=\"../assets/site.css\""));
    assert!(quality.contains("Надёжность"));
    assert!(documents.contains("ГОСТ 18725-83"));
    assert!(documents.contains("Документы не найдены"));
}

#[test]
fn test_build_empty_base_keeps_links_relative() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("site");

    imslc(&tmp)
        .env("IMSLC_BASE_PATH", "")
        .args(["build", "--quiet", "--base", "", "-o"])
        .arg(&out)
        .assert()
        .success();

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    let quality = fs::read_to_string(out.join("quality/index.html")).unwrap();
    assert!(index.contains("href=\"./quality/index.html\""));
    assert!(quality.contains("href=\"../index.html\""));
    assert!(!quality.contains("href=\"/index.html\""));
}

#[test]
fn test_build_uses_local_config_output_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("imslc.yaml"), "output_dir: public\n").unwrap();

    imslc(&tmp).args(["build", "--quiet"]).assert().success();

    assert!(tmp.path().join("public/index.html").exists());
    assert!(tmp.path().join("public/documents/index.html").exists());
}

#[test]
fn test_build_env_overrides_local_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("imslc.yaml"), "output_dir: public\n").unwrap();

    imslc(&tmp)
        .env("IMSLC_OUTPUT_DIR", "from-env")
        .args(["build", "--quiet"])
        .assert()
        .success();

    assert!(tmp.path().join("from-env/index.html").exists());
    assert!(!tmp.path().join("public").exists());
}

// ============================================================================
// Stages and indicators
// ============================================================================

#[test]
fn test_stage_list_count() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["stage", "list", "--count"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_stage_list_table() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["stage", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Проектирование"))
        .stdout(predicate::str::contains("7 stage(s) found."));
}

#[test]
fn test_stage_show() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["stage", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3. Изготовление опытных образцов"))
        .stdout(predicate::str::contains("stage-3"));
}

#[test]
fn test_stage_show_json() {
    let tmp = TempDir::new().unwrap();
    let output = imslc(&tmp)
        .args(["stage", "show", "2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], 2);
    assert_eq!(value["title"], "Проектирование");
    assert!(value["risks"].as_array().is_some_and(|r| !r.is_empty()));
}

#[test]
fn test_stage_show_unknown_fails() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["stage", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_ind_list_count() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["ind", "list", "--count"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_ind_show_lists_documents() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["ind", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Надёжность"))
        .stdout(predicate::str::contains("ГОСТ 27.002-2015"));
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn test_doc_list_count() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["doc", "list", "--count"])
        .assert()
        .success()
        .stdout("18\n");
}

#[test]
fn test_doc_list_type_filter_count() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["doc", "list", "--type", "gost", "--count"])
        .assert()
        .success()
        .stdout("9\n");
    imslc(&tmp)
        .args(["doc", "list", "--type", "law", "--count"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_doc_list_search_is_case_insensitive() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["doc", "list", "--search", "гост 18725"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ГОСТ 18725-83"))
        .stdout(predicate::str::contains("1 document(s) found."));
}

#[test]
fn test_doc_list_no_match_prints_message() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["doc", "list", "--type", "law", "--search", "zzz-no-such-document"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Документы не найдены"));
}

#[test]
fn test_doc_list_search_is_used_verbatim() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["doc", "list", "--search", "  ", "--count"])
        .assert()
        .success()
        .stdout("0\n");
    imslc(&tmp)
        .args(["doc", "list", "--search", " 18725-83 ", "--count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_doc_list_json_merges_related_indicators() {
    let tmp = TempDir::new().unwrap();
    let output = imslc(&tmp)
        .args(["doc", "list", "--search", "18725", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let docs = value.as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["name"], "ГОСТ 18725-83");
    assert_eq!(docs[0]["kind"], "gost");
    assert_eq!(
        docs[0]["related_indicators"],
        serde_json::json!(["Электрические параметры", "Надёжность"])
    );
}

#[test]
fn test_doc_list_csv_header() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["doc", "list", "--type", "tr", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,kind,title,related"));
}

#[test]
fn test_doc_stats_json() {
    let tmp = TempDir::new().unwrap();
    let output = imslc(&tmp)
        .args(["doc", "stats", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 18);
    assert_eq!(value["gost"], 9);
    assert_eq!(value["tr"], 2);
    assert_eq!(value["law"], 3);
}

#[test]
fn test_doc_stats_summary() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["doc", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Всего документов"))
        .stdout(predicate::str::contains("Законы РБ"));
}

// ============================================================================
// Content directory and validation
// ============================================================================

#[test]
fn test_validate_embedded_content() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Content is valid!"));
}

#[test]
fn test_validate_strict_fails_on_unclassified_documents() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["validate", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));
}

#[test]
fn test_content_dir_override() {
    let tmp = TempDir::new().unwrap();
    let content = tmp.path().join("content");
    write_content(&content, SMALL_LIFECYCLE, SMALL_QUALITY);

    imslc(&tmp)
        .args(["stage", "list", "--count", "--content"])
        .arg(&content)
        .assert()
        .success()
        .stdout("2\n");

    let output = imslc(&tmp)
        .args(["doc", "list", "--format", "json", "--content"])
        .arg(&content)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let docs = value.as_array().unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["name"], "ГОСТ 1");
    assert_eq!(docs[0]["related_indicators"], serde_json::json!(["A", "B"]));
    assert_eq!(docs[1]["name"], "ТР 5");
    assert_eq!(docs[1]["related_indicators"], serde_json::json!(["B"]));
}

#[test]
fn test_content_dir_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let content = tmp.path().join("empty");
    fs::create_dir_all(&content).unwrap();

    imslc(&tmp)
        .args(["validate", "--content"])
        .arg(&content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Content file not found"));
}

#[test]
fn test_content_dir_out_of_order_stages_fail() {
    let tmp = TempDir::new().unwrap();
    let content = tmp.path().join("content");
    let lifecycle = SMALL_LIFECYCLE.replace("id: 2", "id: 5");
    write_content(&content, &lifecycle, SMALL_QUALITY);

    imslc(&tmp)
        .args(["validate", "--content"])
        .arg(&content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("stage ids must run 1..N"));
}

#[test]
fn test_content_dir_yaml_error_fails() {
    let tmp = TempDir::new().unwrap();
    let content = tmp.path().join("content");
    write_content(&content, "stages: [\n  - id: 1", SMALL_QUALITY);

    imslc(&tmp)
        .args(["stage", "list", "--content"])
        .arg(&content)
        .assert()
        .failure();
}

#[test]
fn test_browse_requires_terminal() {
    let tmp = TempDir::new().unwrap();
    imslc(&tmp)
        .args(["browse", "quality"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
