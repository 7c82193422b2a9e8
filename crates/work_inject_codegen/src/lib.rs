// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Generates assisted-injection factories for WorkManager workers.
//!
//! A worker whose constructor is annotated `@WorkerInject` takes two parameters from the
//! framework (`@Assisted Context context` and `@Assisted WorkerParameters workerParameters`)
//! and everything else from the Dagger graph. For each such worker this crate generates a
//! `<Worker>_AssistedFactory` implementing `WorkFactory`, and for the single class annotated
//! `@WorkerModule` it generates a Dagger module binding every factory into a
//! `Map<String, WorkFactory>` keyed by worker class name.
//!
//! Discovery of annotated elements is left to the host. It describes what it found in a
//! [`RoundDescriptor`], usually as JSON, and feeds one round at a time to a
//! [`ProcessingSession`]. Each round yields rendered [`JavaFile`](java_source::JavaFile)s
//! and [`Diagnostic`]s; the host writes the former and reports the latter.
//!
//! # Example
//!
//! ```
//! use work_inject_codegen::{ProcessingSession, ProcessorOptions};
//!
//! let round = r#"{
//!   "classes": [{
//!     "package": "test",
//!     "name": "TestWorker",
//!     "supertypes": ["androidx.work.ListenableWorker"],
//!     "location": { "file": "test/TestWorker.java", "line": 9 },
//!     "constructors": [{
//!       "worker_inject": true,
//!       "parameters": [
//!         { "name": "context", "type": "android.content.Context", "assisted": true },
//!         { "name": "workerParameters", "type": "androidx.work.WorkerParameters", "assisted": true },
//!         { "name": "foo", "type": "java.lang.Long" }
//!       ]
//!     }]
//!   }]
//! }"#;
//!
//! let mut session = ProcessingSession::new(ProcessorOptions::default()).unwrap();
//! let output = session.process_json(round).unwrap();
//!
//! let factory = output.file("test.TestWorker_AssistedFactory").unwrap();
//! assert!(factory.to_string().contains("return new TestWorker(context, workerParameters, foo.get());"));
//! assert!(session.summary().is_success());
//! ```
//!
//! # Validation
//!
//! Every rule is checked and every violation reported, so one pass shows all problems of a
//! class. A class with any error gets no factory; other classes are unaffected. Diagnostics
//! carry the host-supplied [`SourceLocation`] of the offending element and can be routed to
//! any [`DiagnosticSink`], such as [`TracingSink`].
//!
//! # Naming
//!
//! Nested workers are flattened with `_` by default (`Outer.Worker` gets
//! `Outer_Worker_AssistedFactory`, keyed `test.Outer.Worker`). [`NestingStyle::Reflection`]
//! uses `$` instead, matching `Class.getName()`.

mod binding;
mod diagnostic;
mod error;
mod factory;
mod inject;
mod model;
mod module;
pub mod names;
pub mod naming;
mod options;
mod session;

pub use diagnostic::{Diagnostic, DiagnosticSink, Severity, SourceLocation, TracingSink};
pub use error::{Error, Result};
pub use inject::InjectionTarget;
pub use model::{
    ClassDescriptor, ConstructorDescriptor, DaggerModuleDescriptor, EnclosingDescriptor, InjectConstructor, ModuleCandidate,
    ModuleDescriptor, Parameter, ParameterDescriptor, Qualifier, QualifierDescriptor, Role, Round, RoundDescriptor, Visibility,
    WorkerCandidate,
};
pub use module::ModuleTarget;
pub use naming::NestingStyle;
pub use options::ProcessorOptions;
pub use session::{ProcessingSession, RoundOutput, RunSummary};
