mod common;

use common::FwdspecProcess;

// ============================================================================
// version command
// ============================================================================

#[test]
fn version_human() {
    let output = FwdspecProcess::spawn_command(&["version"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("fwdspec "), "unexpected output: {stdout}");
    assert!(stdout.contains('.'), "should contain a version number: {stdout}");
}

#[test]
fn version_json() {
    let output = FwdspecProcess::spawn_command(&["version", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("version JSON should be valid");
    assert_eq!(parsed["name"], "fwdspec");
    assert!(parsed.get("version").is_some());
}

// ============================================================================
// parse command
// ============================================================================

#[test]
fn parse_prints_canonical_form() {
    let output = FwdspecProcess::spawn_command(&["parse", "8080:svc:5214", "27017:mongodb:27017"]);
    assert!(
        output.status.success(),
        "parse should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "8080:svc:5214\n27017:mongodb:27017\n"
    );
}

#[test]
fn parse_json_output() {
    let output = FwdspecProcess::spawn_command(&["parse", "--format", "json", "8080:svc:5214"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("parse JSON should be valid");
    assert_eq!(
        parsed,
        serde_json::json!([{
            "spec": "8080:svc:5214",
            "localPort": 8080,
            "serviceName": "svc",
            "remotePort": 5214
        }])
    );
}

#[test]
fn parse_errors_are_verbatim() {
    let cases = [
        ("8080::9090", "empty field"),
        ("8080:9090", "found 2 part(s)"),
        ("local:8080", "found 2 part(s)"),
        ("8080:svc:bar", "remote port 'bar'"),
        ("8080:8081:svc", "service name '8081' must not be numeric"),
        ("8080:svc:8082:8019", "found 4 part(s)"),
    ];

    for (input, expected) in cases {
        let output = FwdspecProcess::spawn_command(&["parse", input]);
        assert_eq!(output.status.code(), Some(2), "'{input}' should exit 2");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains(&format!("invalid forward '{input}'")),
            "stderr should quote the input: {stderr}"
        );
        assert!(stderr.contains(expected), "stderr should mention '{expected}': {stderr}");
    }
}

#[test]
fn parse_requires_a_spec() {
    let output = FwdspecProcess::spawn_command(&["parse"]);
    assert!(!output.status.success());
}

// ============================================================================
// render command
// ============================================================================

#[test]
fn render_scalar() {
    let output = FwdspecProcess::spawn_command(&[
        "render", "--local", "8080", "--service", "svc", "--remote", "5214",
    ]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "8080:svc:5214\n");
}

#[test]
fn render_drops_labels_from_scalar() {
    let output = FwdspecProcess::spawn_command(&[
        "render", "--local", "8080", "--service", "svc", "--remote", "5214", "--label",
        "key=value",
    ]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "8080:svc:5214\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("labels are not part of the scalar form"), "stderr: {stderr}");
}

#[test]
fn render_json_keeps_labels() {
    let output = FwdspecProcess::spawn_command(&[
        "render", "--local", "8080", "--service", "svc", "--remote", "5214", "--label",
        "key=value", "--format", "json",
    ]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["labels"]["key"], "value");
    assert_eq!(parsed["serviceName"], "svc");
}

#[test]
fn render_rejects_numeric_service() {
    let output = FwdspecProcess::spawn_command(&[
        "render", "--local", "8080", "--service", "8081", "--remote", "80",
    ]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn render_rejects_malformed_label() {
    let output = FwdspecProcess::spawn_command(&[
        "render", "--local", "8080", "--service", "svc", "--remote", "80", "--label", "tier",
    ]);
    assert_eq!(output.status.code(), Some(64));
}

// ============================================================================
// normalize command
// ============================================================================

#[test]
fn normalize_keeps_labels_structural() {
    let config = FwdspecProcess::fixture_arg("labels.yaml");
    let output = FwdspecProcess::spawn_command(&["normalize", &config]);
    assert!(
        output.status.success(),
        "normalize should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- 8080:api:80"), "stdout: {stdout}");
    assert!(stdout.contains("- 6379:redis:6379"), "stdout: {stdout}");
    assert!(stdout.contains("serviceName: postgres"), "stdout: {stdout}");
    assert!(stdout.contains("tier: db"), "stdout: {stdout}");
}
