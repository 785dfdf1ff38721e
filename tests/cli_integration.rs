use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn run_folio(args: &[&str]) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_folio").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("folio.exe");
        } else {
            path.push("folio");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    // Keep user config out of the way
    cmd.args(["--no-config", "--timezone", "UTC", "--no-color"]);
    cmd.args(args);
    let output = cmd.output().expect("run folio");
    (output.status.success(), output.stdout, output.stderr)
}

fn run_json(args: &[&str]) -> Value {
    let (ok, stdout, stderr) = run_folio(args);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    serde_json::from_slice(&stdout).expect("json")
}

fn group_ids(group: &Value) -> Vec<String> {
    group["entries"]
        .as_array()
        .expect("entries")
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn list_json_groups_builtin_entries() {
    let json = run_json(&["list", "-j"]);
    assert_eq!(json["total"].as_u64(), Some(5));
    let groups = json["groups"].as_array().expect("groups");
    let labels: Vec<_> = groups.iter().map(|g| g["label"].as_str().unwrap()).collect();
    assert_eq!(labels, ["Ahora", "2025", "2021", "2019"]);
    assert_eq!(group_ids(&groups[0]), ["2025-workout-app"]);
    assert_eq!(group_ids(&groups[1]), ["2025-misquad", "2024-jccm"]);
    assert_eq!(group_ids(&groups[2]), ["2019-future"]);
    assert_eq!(group_ids(&groups[3]), ["2014-degree"]);
}

#[test]
fn category_filter_keeps_only_jobs() {
    let json = run_json(&["-k", "job", "-j"]);
    assert_eq!(json["category"].as_str(), Some("job"));
    assert_eq!(json["total"].as_u64(), Some(3));
    for group in json["groups"].as_array().unwrap() {
        for entry in group["entries"].as_array().unwrap() {
            assert_eq!(entry["category"].as_str(), Some("job"));
        }
    }
}

#[test]
fn search_matches_tech_tags_case_insensitively() {
    let json = run_json(&["-s", "ANGULAR 19", "-j"]);
    let ids: Vec<String> = json["groups"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(group_ids)
        .collect();
    assert_eq!(ids, ["2025-workout-app", "2025-misquad"]);
}

#[test]
fn no_matches_is_not_an_error() {
    let json = run_json(&["-s", "cobol", "-j"]);
    assert_eq!(json["total"].as_u64(), Some(0));
    assert!(json["groups"].as_array().unwrap().is_empty());

    let (ok, stdout, _) = run_folio(&["-s", "cobol"]);
    assert!(ok);
    assert!(String::from_utf8_lossy(&stdout).contains("No hay resultados"));
}

#[test]
fn english_labels() {
    let json = run_json(&["--locale", "en", "-j"]);
    assert_eq!(json["groups"][0]["label"].as_str(), Some("Now"));
}

#[test]
fn invalid_category_fails() {
    let (ok, _, stderr) = run_folio(&["-k", "hobby"]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Invalid category \"hobby\""));
}

#[test]
fn show_entry_and_unknown_id() {
    let json = run_json(&["show", "2024-jccm", "-j"]);
    assert_eq!(json["organization"].as_str(), Some("MINSAIT"));
    assert_eq!(json["links"][0]["url"].as_str(), Some("https://www.jccm.es/"));

    let (ok, _, stderr) = run_folio(&["show", "nope"]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("No entry with id \"nope\""));
}

#[test]
fn categories_counts() {
    let json = run_json(&["categories", "-j"]);
    let arr = json.as_array().expect("array output");
    assert_eq!(arr.len(), 6);
    let job = arr.iter().find(|c| c["category"] == "job").unwrap();
    assert_eq!(job["count"].as_u64(), Some(3));
    let education = arr.iter().find(|c| c["category"] == "education").unwrap();
    assert_eq!(education["count"].as_u64(), Some(1));
}

#[test]
fn now_lists_ongoing_entries() {
    let (ok, stdout, _) = run_folio(&["now"]);
    assert!(ok);
    assert_eq!(
        String::from_utf8_lossy(&stdout).trim(),
        "Ahora: Workout & Training Management App @ Side Project (Proyecto)"
    );
}

#[test]
fn csv_output_has_header_and_rows() {
    let (ok, stdout, _) = run_folio(&["--csv"]);
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("group,id,category"));
    assert!(lines[1].starts_with("Ahora,2025-workout-app,project,"));
}

#[test]
fn data_file_replaces_builtin_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("entries.json");
    write_file(
        &data,
        r#"[
  {"id":"A","category":"job","title":"Consultant","start":"2021-11","end":"2025-02"},
  {"id":"B","kind":"project","title":"Side app","start":"2025-03","end":"present"}
]"#,
    );

    let json = run_json(&["--data", data.to_str().unwrap(), "-j"]);
    let groups = json["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["label"].as_str(), Some("Ahora"));
    assert_eq!(group_ids(&groups[0]), ["B"]);
    assert_eq!(groups[1]["label"].as_str(), Some("2025"));
    assert_eq!(group_ids(&groups[1]), ["A"]);
}

#[test]
fn data_file_with_duplicate_ids_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("entries.json");
    write_file(
        &data,
        r#"[{"id":"A","category":"job","title":"x","start":"2021-11"},
            {"id":"A","category":"job","title":"y","start":"2022-11"}]"#,
    );

    let (ok, _, stderr) = run_folio(&["--data", data.to_str().unwrap()]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Duplicate entry id \"A\""));
}

#[test]
fn html_page_written_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("index.html");
    let (ok, _, stderr) = run_folio(&[
        "html",
        "-o",
        out.to_str().unwrap(),
        "--title",
        "Lucas del Pozo - Portfolio",
        "-k",
        "education",
    ]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let page = fs::read_to_string(&out).expect("read page");
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Lucas del Pozo - Portfolio</title>"));
    assert_eq!(page.matches("<article class=\"entry").count(), 5);
    assert!(page.contains("<option value=\"education\" selected>"));
    assert!(page.contains("function scheduleRecalc(run)"));
}

#[test]
fn layout_preview_reports_rail_and_spotlight() {
    let json = run_json(&["layout", "--scroll", "0", "--viewport", "900", "-j"]);
    assert_eq!(json["cards"].as_array().unwrap().len(), 5);
    let rail = &json["rail"];
    assert!(rail["end"].as_f64().unwrap() > rail["start"].as_f64().unwrap());
    assert!(json["active_id"].is_string());

    let far = run_json(&["layout", "--scroll", "100000", "-j"]);
    assert_eq!(far["active_id"].as_str(), Some("2014-degree"));
}

#[test]
fn compact_table_drops_detail_columns() {
    let (ok, stdout, _) = run_folio(&["list", "-c"]);
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("Timeline"));
    assert!(!text.contains("Organization"));
}

#[test]
fn data_file_with_unpadded_period_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("entries.json");
    write_file(
        &data,
        r#"[{"id":"later","category":"job","title":"x","start":"2024-01","end":"2025-10"},
            {"id":"earlier","category":"job","title":"y","start":"2024-01","end":"2025-3-01"}]"#,
    );

    let (ok, _, stderr) = run_folio(&["--data", data.to_str().unwrap()]);
    assert!(!ok);
    assert!(
        String::from_utf8_lossy(&stderr)
            .contains("Entry \"earlier\" has invalid end period \"2025-3-01\"")
    );
}

#[test]
fn categories_csv_and_ignored_csv_warning() {
    let (ok, stdout, _) = run_folio(&["categories", "--csv"]);
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.starts_with("category,count\n"));
    assert!(text.contains("job,3\n"));
    assert!(text.contains("oss,0\n"));

    let (ok, stdout, stderr) = run_folio(&["now", "--csv"]);
    assert!(ok);
    assert!(String::from_utf8_lossy(&stdout).starts_with("Ahora:"));
    assert!(String::from_utf8_lossy(&stderr).contains("--csv is ignored"));
}
