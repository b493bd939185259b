use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "tarot-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_writes_json_report_to_file() {
    let exe = env!("CARGO_BIN_EXE_tarot-tester");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args([
            "--seeds",
            "1,2",
            "--days",
            "2",
            "--attempts-per-day",
            "5",
            "--start-date",
            "2024-05-01",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(value["summary"]["seeds"], 2);
    assert_eq!(value["summary"]["passed"], 2);
    assert_eq!(value["summary"]["completed"], 12);
    assert_eq!(value["seeds"][0]["days"][0]["date"], "2024-05-01");
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_console_report_prints_banner() {
    let exe = env!("CARGO_BIN_EXE_tarot-tester");
    let output = Command::new(exe)
        .args(["--seeds", "9", "--days", "1", "--vip", "--abandon-every", "3"])
        .env("NO_COLOR", "1")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Daily Tarot Tester"));
    assert!(stdout.contains("seed 9"));
}

#[test]
fn cli_rejects_bad_seed() {
    let exe = env!("CARGO_BIN_EXE_tarot-tester");
    let output = Command::new(exe)
        .args(["--seeds", "not-a-seed"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unrecognized seed token"));
}
