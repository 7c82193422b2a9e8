// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(dead_code, reason = "Each test binary uses a different subset of the helpers")]
#![allow(missing_docs, reason = "This is a test module")]

//! Builders for round descriptions and shortcuts for running them.

use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use work_inject_codegen::{ProcessingSession, ProcessorOptions, RoundOutput};

pub fn assisted(name: &str, type_name: &str) -> Value {
    json!({ "name": name, "type": type_name, "assisted": true })
}

pub fn injected(name: &str, type_name: &str) -> Value {
    json!({ "name": name, "type": type_name })
}

pub fn context() -> Value {
    assisted("context", "android.content.Context")
}

pub fn worker_parameters() -> Value {
    assisted("workerParameters", "androidx.work.WorkerParameters")
}

/// A `ListenableWorker` subclass in package `test` with one `@WorkerInject` constructor.
pub fn worker(name: &str, parameters: Vec<Value>) -> Value {
    json!({
        "package": "test",
        "name": name,
        "supertypes": ["androidx.work.ListenableWorker"],
        "location": { "file": format!("test/{name}.java"), "line": 9 },
        "constructors": [{
            "worker_inject": true,
            "location": { "file": format!("test/{name}.java"), "line": 11 },
            "parameters": parameters,
        }],
    })
}

/// A worker taking the assisted pair followed by `Long foo`.
pub fn simple_worker(name: &str) -> Value {
    worker(name, vec![context(), worker_parameters(), injected("foo", "java.lang.Long")])
}

/// A `@WorkerModule` in package `test` annotated `@Module(includes = ...)`.
pub fn module(name: &str, includes: &[&str]) -> Value {
    json!({
        "package": "test",
        "name": name,
        "dagger_module": { "includes": includes },
        "location": { "file": format!("test/{name}.java"), "line": 9 },
    })
}

pub fn round(classes: Vec<Value>, modules: Vec<Value>) -> String {
    json!({ "classes": classes, "modules": modules }).to_string()
}

/// Runs each round through one session.
pub fn process_rounds(options: ProcessorOptions, rounds: &[String]) -> (ProcessingSession, Vec<RoundOutput>) {
    let mut session = ProcessingSession::new(options).unwrap();
    let outputs = rounds.iter().map(|round| session.process_json(round).unwrap()).collect();
    (session, outputs)
}

/// Runs a single round with default options.
pub fn process(classes: Vec<Value>, modules: Vec<Value>) -> RoundOutput {
    let (_, mut outputs) = process_rounds(ProcessorOptions::default(), &[round(classes, modules)]);
    outputs.remove(0)
}

pub fn source(output: &RoundOutput, canonical_name: &str) -> String {
    output
        .file(canonical_name)
        .unwrap_or_else(|| panic!("{canonical_name} was not generated"))
        .to_string()
}

pub fn messages(output: &RoundOutput) -> Vec<&str> {
    output.diagnostics.iter().map(|diagnostic| diagnostic.message()).collect()
}

pub fn generated_names(output: &RoundOutput) -> Vec<String> {
    output.files.iter().map(|file| file.class_name().canonical_name()).collect()
}

/// Collects formatted log output of the current thread while its subscriber is the default.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }

    pub fn assert_contains(&self, expected: &str) {
        let output = self.output();
        assert!(output.contains(expected), "log output does not contain '{expected}', got:\n{output}");
    }

    /// Use with `set_default()`.
    pub fn subscriber(&self) -> impl tracing::Subscriber {
        tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_writer(self.clone())
                .with_ansi(false),
        )
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogCaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

#[derive(Debug)]
pub struct LogCaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogCaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
