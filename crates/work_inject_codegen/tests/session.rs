// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "This is a test module")]

//! Session bookkeeping, input handling and reporting.

mod util;

use rstest::rstest;
use serde_json::json;
use tracing_subscriber::util::SubscriberInitExt;
use util::{LogCapture, context, injected, module, round, simple_worker, worker, worker_parameters};
use work_inject_codegen::{
    Diagnostic, Error, ProcessingSession, ProcessorOptions, Round, RoundDescriptor, RunSummary, TracingSink,
};

#[test]
fn summary_accumulates_over_rounds() {
    let mut session = ProcessingSession::new(ProcessorOptions::default()).unwrap();

    session
        .process_json(&round(
            vec![simple_worker("TestWorker"), worker("QuietWorker", vec![context(), worker_parameters()])],
            Vec::new(),
        ))
        .unwrap();
    session
        .process_json(&round(Vec::new(), vec![module("TestModule", &["WorkerInject_TestModule"])]))
        .unwrap();

    assert_eq!(
        session.summary(),
        RunSummary {
            rounds: 2,
            targets: 2,
            modules: 1,
            files: 3,
            errors: 0,
            warnings: 1,
        }
    );
    assert!(session.summary().is_success());
}

#[test]
fn reset_starts_a_new_run() {
    let mut session = ProcessingSession::new(ProcessorOptions::default().with_public_module(true)).unwrap();
    let input = round(vec![simple_worker("TestWorker")], vec![module("TestModule", &["WorkerInject_TestModule"])]);

    let first = session.process_json(&input).unwrap();
    session.reset();
    let second = session.process_json(&input).unwrap();

    assert_eq!(first, second);
    assert_eq!(session.summary().rounds, 1);
    assert_eq!(session.targets().len(), 1);
    assert!(session.options().public_module());
}

#[test]
fn malformed_json_records_nothing() {
    let mut session = ProcessingSession::default();

    let error = session.process_json("{ \"classes\": [").unwrap_err();

    assert!(matches!(error, Error::Json(_)));
    assert!(error.to_string().starts_with("malformed round description: "));
    assert_eq!(session.summary(), RunSummary::default());
}

#[rstest]
#[case::unknown_field(json!({ "classes": [], "extra": true }), "malformed round description: ")]
#[case::bad_parameter_type(
    json!({ "classes": [worker("TestWorker", vec![injected("foo", "java.util.List<")])] }),
    "invalid type in parameter `foo` of test.TestWorker"
)]
#[case::bad_parameter_name(
    json!({ "classes": [worker("TestWorker", vec![injected("class", "long")])] }),
    "invalid parameter `class` of test.TestWorker: not a Java identifier"
)]
#[case::wildcard_parameter(
    json!({ "classes": [worker("TestWorker", vec![injected("foo", "?")])] }),
    "invalid type in parameter `foo` of test.TestWorker"
)]
#[case::bad_package(
    json!({ "modules": [{ "package": "Test.1", "name": "M", "location": { "file": "m.java", "line": 1 } }] }),
    "invalid package `Test.1`: not a valid package name"
)]
#[case::primitive_supertype(
    json!({ "classes": [{ "package": "test", "name": "W", "supertypes": ["int"], "location": { "file": "w.java", "line": 1 } }] }),
    "invalid supertype of class test.W: `int` is not a class"
)]
fn invalid_input_is_rejected(#[case] input: serde_json::Value, #[case] expected: &str) {
    let error = ProcessingSession::default().process_json(&input.to_string()).unwrap_err();

    assert!(
        error.to_string().starts_with(expected),
        "unexpected error: {error}"
    );
}

#[test]
fn descriptors_can_be_built_in_code() {
    let descriptor: RoundDescriptor = serde_json::from_str(&round(vec![simple_worker("TestWorker")], Vec::new())).unwrap();
    let parsed = Round::try_from(&descriptor).unwrap();

    let mut session = ProcessingSession::default();
    let output = session.process_round(&parsed);

    assert_eq!(parsed.classes()[0].class_name().canonical_name(), "test.TestWorker");
    assert_eq!(output.files.len(), 1);
}

#[test]
fn invalid_marker_type_is_rejected() {
    let options = ProcessorOptions::default()
        .with_generated_marker(true)
        .with_generated_annotation("not a type");

    let error = ProcessingSession::new(options).unwrap_err();

    assert!(matches!(error, Error::Options(_)));
}

#[test]
fn custom_marker_type() {
    let options = ProcessorOptions::from_json(
        r#"{ "generated_marker": true, "generated_annotation": "javax.annotation.processing.Generated" }"#,
    )
    .unwrap();
    let mut session = ProcessingSession::new(options).unwrap();

    let output = session.process_json(&round(vec![simple_worker("TestWorker")], Vec::new())).unwrap();

    let factory = output.file("test.TestWorker_AssistedFactory").unwrap();
    assert!(factory.imports().contains(&"javax.annotation.processing.Generated".to_string()));
}

#[test]
fn diagnostics_reach_the_sink_in_order() {
    let mut private = simple_worker("PrivateWorker");
    private["visibility"] = json!("private");
    let mut session = ProcessingSession::default();
    let output = session
        .process_json(&round(
            vec![private, worker("QuietWorker", vec![context(), worker_parameters()])],
            Vec::new(),
        ))
        .unwrap();

    let mut sink: Vec<Diagnostic> = Vec::new();
    output.report(&mut sink);

    assert_eq!(sink, output.diagnostics);
    assert!(sink[0].is_error());
    assert!(!sink[1].is_error());
}

#[test]
fn tracing_sink_logs_diagnostics() {
    let log_capture = LogCapture::default();
    let _guard = log_capture.subscriber().set_default();

    let mut private = simple_worker("PrivateWorker");
    private["visibility"] = json!("private");
    let output = ProcessingSession::default()
        .process_json(&round(vec![private], Vec::new()))
        .unwrap();
    output.report(&mut TracingSink);

    log_capture.assert_contains("ERROR");
    log_capture.assert_contains("test/PrivateWorker.java:9");
    log_capture.assert_contains("@WorkerInject-using types must not be private");
}

#[test]
fn generation_is_logged() {
    let log_capture = LogCapture::default();
    let _guard = log_capture.subscriber().set_default();

    ProcessingSession::default()
        .process_json(&round(
            vec![simple_worker("TestWorker")],
            vec![module("TestModule", &["WorkerInject_TestModule"])],
        ))
        .unwrap();

    log_capture.assert_contains("factory=test.TestWorker_AssistedFactory");
    log_capture.assert_contains("module=test.WorkerInject_TestModule");
    log_capture.assert_contains("bindings=1");
}
