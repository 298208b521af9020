use helix_core::errors::{ErrorInfo, HelixError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("pt", "0")
        .with_context("reason", "example")
}

#[test]
fn kinematics_error_surface() {
    let err = HelixError::Kinematics(sample_info("zero-transverse-momentum", "momentum along z"));
    assert_eq!(err.info().code, "zero-transverse-momentum");
    assert!(err.info().context.contains_key("pt"));
}

#[test]
fn geometry_error_surface() {
    let err = HelixError::Geometry(sample_info(
        "degenerate-direction",
        "cylinder axis must be non-zero",
    ));
    assert_eq!(err.info().code, "degenerate-direction");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn serde_error_surface() {
    let err = HelixError::Serde(sample_info("schema-version", "unsupported step state schema"));
    assert_eq!(err.info().code, "schema-version");
}

#[test]
fn parse_error_surface() {
    let err = HelixError::Parse(sample_info("unknown-status", "not a step status name"));
    assert_eq!(err.info().code, "unknown-status");
}

#[test]
fn display_includes_context_and_hint() {
    let err = HelixError::Kinematics(
        ErrorInfo::new("zero-momentum", "momentum vanishes")
            .with_context("p", "0")
            .with_hint("seed the state with a non-zero momentum"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("kinematics error: momentum vanishes (code: zero-momentum)"));
    assert!(rendered.contains("context: [p=0]"));
    assert!(rendered.contains("hint: seed the state"));
}

#[test]
fn errors_round_trip_json() {
    let err = HelixError::Serde(ErrorInfo::new("json-deserialize", "eof"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Serde\""));
    let decoded: HelixError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
