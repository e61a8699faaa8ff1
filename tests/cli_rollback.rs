mod common;

use common::*;
use serde_json::json;

fn with_history(versions: &'static [&'static str]) -> FakeMarathon {
    FakeMarathon::start(move |req| match req.line().as_str() {
        "GET /v2/apps/web/versions" => Reply::ok(json!({"versions": versions})),
        "PUT /v2/apps/web" => Reply::ok(json!({"deploymentId": "d-9", "version": "v4"})),
        "GET /v2/apps/web" => Reply::ok(json!({"app": app_json("/web", "v4", &["d-9"])})),
        _ => Reply::not_found(),
    })
}

#[test]
fn test_rollback_targets_previous_version() {
    let env = TestEnv::new();
    let server = with_history(&["v3", "v2", "v1"]);

    let result = env.run(&["--host", server.url(), "app", "rollback", "/web"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        server.request_lines(),
        vec!["GET /v2/apps/web/versions", "PUT /v2/apps/web", "GET /v2/apps/web"]
    );
    assert_eq!(server.requests()[1].json(), json!({"id": "/web", "version": "v2"}));
    assert!(result.stdout.contains("Rolled back /web"), "got:\n{}", result.stdout);
    assert!(result.stderr.contains("Rolling back /web to v2"));
}

#[test]
fn test_rollback_with_explicit_version_skips_history() {
    let env = TestEnv::new();
    let server = with_history(&["v3"]);

    let result = env.run(&["--host", server.url(), "app", "rollback", "/web", "v1"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(server.request_lines(), vec!["PUT /v2/apps/web", "GET /v2/apps/web"]);
    assert_eq!(server.requests()[0].json()["version"], "v1");
}

#[test]
fn test_rollback_with_single_version_fails_without_update() {
    let env = TestEnv::new();
    let server = with_history(&["v1"]);

    let result = env.run(&["--host", server.url(), "app", "rollback", "/web"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("1 recorded version(s)"), "got:\n{}", result.stderr);
    assert_eq!(server.request_lines(), vec!["GET /v2/apps/web/versions"]);
}
