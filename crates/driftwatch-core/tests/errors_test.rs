use driftwatch_core::errors::*;

#[test]
fn invalid_baseline_carries_value() {
    let err = DetectionError::InvalidBaseline { baseline: -3.5 };
    assert!(err.to_string().contains("-3.5"));
    assert_eq!(err.error_code(), "DETECTION_ERROR");
}

#[test]
fn coded_string_prefixes_code() {
    let err = DataError::Empty {
        path: "latency_metrics.csv".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[DATA_ERROR] No data found in latency_metrics.csv"
    );
}

#[test]
fn missing_credentials_lists_every_variable() {
    let err = NotifyError::MissingCredentials {
        missing: vec!["SMTP_USER".into(), "EMAIL_TO".into()],
    };
    let msg = err.to_string();
    assert!(msg.contains("SMTP_USER"));
    assert!(msg.contains("EMAIL_TO"));
    assert_eq!(err.error_code(), "NOTIFY_ERROR");
}

// --- From impls ---

#[test]
fn detection_error_converts_to_pipeline_error() {
    let err: PipelineError = DetectionError::EmptySeries.into();
    assert!(matches!(err, PipelineError::Detection(DetectionError::EmptySeries)));
    assert_eq!(err.error_code(), "DETECTION_ERROR");
}

#[test]
fn pipeline_error_keeps_subsystem_code() {
    let err: PipelineError = BaselineError::InvalidFraction { fraction: 2.0 }.into();
    assert_eq!(err.error_code(), "BASELINE_ERROR");

    let err: PipelineError = ConfigError::FileNotFound {
        path: "driftwatch.toml".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("driftwatch.toml"));
}
