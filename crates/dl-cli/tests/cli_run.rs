use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dl-cli"))
}

fn repo_root() -> PathBuf {
    // crates/dl-cli -> repo root
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").canonicalize().unwrap()
}

fn fixture_path(name: &str) -> PathBuf {
    repo_root().join("tests/fixtures").join(name)
}

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("dilepton_cli_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

const HIST_NAMES: [&str; 9] = [
    "mumuMass", "eleMult", "muonMult", "elePt", "muonPt", "eleEta", "muonEta", "elePhi", "muonPhi",
];

fn assert_json_contract(v: &serde_json::Value) {
    let map = v.as_object().expect("output should be a JSON object");
    assert_eq!(map.len(), HIST_NAMES.len(), "unexpected histogram set: {:?}", map.keys());
    for name in HIST_NAMES {
        let h = map.get(name).unwrap_or_else(|| panic!("missing histogram '{name}'"));
        let n_bins =
            h.get("n_bins").and_then(|x| x.as_u64()).expect("n_bins should be an integer");
        let content = h
            .get("bin_content")
            .and_then(|x| x.as_array())
            .expect("bin_content should be an array");
        assert_eq!(content.len() as u64, n_bins, "bin_content length mismatch for {name}");
        let entries =
            h.get("entries").and_then(|x| x.as_u64()).expect("entries should be an integer");
        let _ = entries;
    }
    assert_eq!(map["mumuMass"]["n_bins"], 90);
    assert_eq!(map["mumuMass"]["x_min"], 30.0);
    assert_eq!(map["mumuMass"]["x_max"], 120.0);
}

#[test]
fn version_smoke() {
    let out = run(&["version"]);
    assert!(out.status.success(), "version should succeed");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("dilepton-spectrum "), "unexpected stdout: {}", stdout);
}

#[test]
fn run_writes_valid_json_to_stdout() {
    let input = fixture_path("simple_events.json");
    assert!(input.exists(), "missing fixture: {}", input.display());

    let out = run(&["run", "--input", input.to_string_lossy().as_ref()]);
    assert!(
        out.status.success(),
        "run should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_json_contract(&v);

    // The fixture holds exactly one qualifying opposite-charge pair and one
    // soft muon, so: one mass fill, three muon pt fills, two events.
    assert_eq!(v["mumuMass"]["entries"], 1);
    assert_eq!(v["muonPt"]["entries"], 3);
    assert_eq!(v["eleMult"]["entries"], 2);
    assert_eq!(v["muonMult"]["entries"], 2);
}

#[test]
fn run_writes_valid_json_to_file() {
    let input = fixture_path("simple_events.json");
    let output = tmp_path("hists_out.json");

    let out = run(&[
        "run",
        "--input",
        input.to_string_lossy().as_ref(),
        "--output",
        output.to_string_lossy().as_ref(),
    ]);
    assert!(
        out.status.success(),
        "run should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(output.exists(), "expected output file to exist: {}", output.display());

    let bytes = std::fs::read(&output).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&bytes).expect("output file should be JSON");
    assert_json_contract(&v);

    let _ = std::fs::remove_file(&output);
}

#[test]
fn run_honors_config_labels() {
    let input = fixture_path("custom_labels_events.json");
    let config = fixture_path("custom_labels_config.json");

    let out = run(&[
        "run",
        "--input",
        input.to_string_lossy().as_ref(),
        "--config",
        config.to_string_lossy().as_ref(),
    ]);
    assert!(
        out.status.success(),
        "run should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_eq!(v["mumuMass"]["entries"], 1);
}

#[test]
fn run_errors_on_missing_input() {
    let missing = tmp_path("does_not_exist.json");
    let out = run(&["run", "--input", missing.to_string_lossy().as_ref()]);
    assert!(!out.status.success(), "expected failure for missing input");
}

#[test]
fn run_errors_on_invalid_json() {
    let bad = tmp_path("bad.json");
    std::fs::write(&bad, "[").unwrap();

    let out = run(&["run", "--input", bad.to_string_lossy().as_ref()]);
    assert!(!out.status.success(), "expected failure for invalid JSON");

    let _ = std::fs::remove_file(&bad);
}

#[test]
fn run_errors_on_missing_collection() {
    let input = fixture_path("bad_missing_muons.json");
    assert!(input.exists(), "missing fixture: {}", input.display());

    let out = run(&["run", "--input", input.to_string_lossy().as_ref()]);
    assert!(!out.status.success(), "expected failure for missing collection");

    let stderr = String::from_utf8_lossy(&out.stderr).to_lowercase();
    assert!(
        stderr.contains("collection") || stderr.contains("validation"),
        "unexpected stderr: {}",
        stderr
    );
}
