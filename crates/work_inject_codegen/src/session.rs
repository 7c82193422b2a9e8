// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeMap;

use java_source::{AnnotationSpec, ClassName, JavaFile};

use crate::diagnostic::{Diagnostic, DiagnosticSink, Diagnostics, SourceLocation};
use crate::inject::InjectionTarget;
use crate::model::{Round, TypeHierarchy};
use crate::module::{ModuleTarget, SeenModules};
use crate::naming::factory_name;
use crate::options::ProcessorOptions;
use crate::{Result, binding, factory, inject, module};

/// What one round produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundOutput {
    /// Generated source files, factories first.
    pub files: Vec<JavaFile>,
    /// Everything reported while validating the round.
    pub diagnostics: Vec<Diagnostic>,
}

impl RoundOutput {
    /// Whether any diagnostic of this round is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The generated file declaring `canonical_name`, if any.
    #[must_use]
    pub fn file(&self, canonical_name: &str) -> Option<&JavaFile> {
        self.files.iter().find(|file| file.class_name().canonical_name() == canonical_name)
    }

    /// Hands every diagnostic to `sink`, in reporting order.
    pub fn report(&self, sink: &mut impl DiagnosticSink) {
        for diagnostic in &self.diagnostics {
            sink.emit(diagnostic);
        }
    }
}

/// Totals of a run so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rounds processed.
    pub rounds: usize,
    /// Validated worker constructors.
    pub targets: usize,
    /// `@WorkerModule` classes seen.
    pub modules: usize,
    /// Generated source files.
    pub files: usize,
    /// Error diagnostics reported.
    pub errors: usize,
    /// Warning diagnostics reported.
    pub warnings: usize,
}

impl RunSummary {
    /// The run fails when any error was reported; warnings alone do not fail it.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.errors == 0
    }
}

/// State of one processing run, carried from round to round.
///
/// A run is what a single compiler invocation sees: module duplicates are detected across
/// all of its rounds, and the binding module contains every target validated before it.
/// Nothing is shared between sessions; use [`reset`](Self::reset) or a new session for the
/// next run.
///
/// ```
/// use work_inject_codegen::{ProcessingSession, ProcessorOptions};
///
/// let mut session = ProcessingSession::new(ProcessorOptions::default()).unwrap();
/// let output = session.process_json(r#"{ "classes": [], "modules": [] }"#).unwrap();
///
/// assert!(output.files.is_empty());
/// assert!(session.summary().is_success());
/// ```
#[derive(Debug)]
pub struct ProcessingSession {
    options: ProcessorOptions,
    marker: Option<AnnotationSpec>,
    hierarchy: TypeHierarchy,
    targets: Vec<InjectionTarget>,
    /// Owner of every generated type, keyed by the generated name.
    generated: BTreeMap<ClassName, ClassName>,
    modules: SeenModules,
    emitted_module: Option<ModuleTarget>,
    summary: RunSummary,
}

impl ProcessingSession {
    /// Starts a run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Options`](crate::Error::Options) if the generated marker type is not a
    /// valid class name.
    pub fn new(options: ProcessorOptions) -> Result<Self> {
        let marker = options.marker()?;
        Ok(Self::with_marker(options, marker))
    }

    fn with_marker(options: ProcessorOptions, marker: Option<AnnotationSpec>) -> Self {
        Self {
            options,
            marker,
            hierarchy: TypeHierarchy::new(),
            targets: Vec::new(),
            generated: BTreeMap::new(),
            modules: SeenModules::default(),
            emitted_module: None,
            summary: RunSummary::default(),
        }
    }

    /// The options this session was created with.
    #[must_use]
    pub const fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Every target validated so far, in discovery order.
    #[must_use]
    pub fn targets(&self) -> &[InjectionTarget] {
        &self.targets
    }

    /// The binding module generated in this run, once a round has produced it.
    #[must_use]
    pub const fn module(&self) -> Option<&ModuleTarget> {
        self.emitted_module.as_ref()
    }

    /// Totals over all rounds processed so far.
    #[must_use]
    pub const fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Forgets everything seen so far, keeping the options.
    pub fn reset(&mut self) {
        self.hierarchy = TypeHierarchy::new();
        self.targets.clear();
        self.generated.clear();
        self.modules = SeenModules::default();
        self.emitted_module = None;
        self.summary = RunSummary::default();
    }

    /// Parses a JSON round description and processes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the description is malformed; nothing is recorded in that case.
    pub fn process_json(&mut self, json: &str) -> Result<RoundOutput> {
        let round = Round::from_json(json)?;
        Ok(self.process_round(&round))
    }

    /// Validates one round and generates code for everything that passed.
    ///
    /// Factories are generated for valid workers right away. The binding module is generated
    /// in the round its `@WorkerModule` class is found, with every target validated up to and
    /// including that round; workers found in later rounds are reported as unbound.
    pub fn process_round(&mut self, round: &Round) -> RoundOutput {
        let style = self.options.nesting_style();
        let mut diagnostics = Diagnostics::default();
        let mut files = Vec::new();

        self.summary.rounds += 1;
        tracing::event!(
            name: "work_inject.round",
            tracing::Level::DEBUG,
            round = self.summary.rounds,
            classes = round.classes.len(),
            modules = round.modules.len(),
        );

        for class in &round.classes {
            self.hierarchy.record(&class.class_name, &class.supertypes);
        }

        for candidate in round.classes.iter().filter(|candidate| candidate.is_injected()) {
            let Some(target) = inject::validate(candidate, &self.hierarchy, &mut diagnostics) else {
                continue;
            };

            let name = factory_name(target.owner(), style);
            if !self.claim(name, target.owner(), target.location(), &mut diagnostics) {
                continue;
            }

            if let Some(module) = &self.emitted_module {
                diagnostics.warning(
                    format!(
                        "{} is not bound in {}, which was generated in an earlier round",
                        target.owner(),
                        module.generated_name()
                    ),
                    target.location(),
                );
            }

            files.push(factory::synthesize(&target, style, self.marker.as_ref()));
            self.targets.push(target);
        }

        let sole_module = self.modules.record(&round.modules, &mut diagnostics);
        for candidate in &round.modules {
            let Some(target) = module::validate(candidate, style, self.options.public_module(), &mut diagnostics) else {
                continue;
            };

            if !sole_module || self.emitted_module.is_some() {
                continue;
            }
            if !self.claim(target.generated_name().clone(), target.owner(), &candidate.location, &mut diagnostics) {
                continue;
            }

            files.push(binding::synthesize(&target, &self.targets, style, self.marker.as_ref()));
            self.emitted_module = Some(target);
        }

        let diagnostics = diagnostics.into_vec();
        self.summary.targets = self.targets.len();
        self.summary.modules = self.modules.len();
        self.summary.files += files.len();
        self.summary.errors += diagnostics.iter().filter(|diagnostic| diagnostic.is_error()).count();
        self.summary.warnings += diagnostics.iter().filter(|diagnostic| !diagnostic.is_error()).count();

        RoundOutput { files, diagnostics }
    }

    /// Registers a generated type name for `owner`.
    ///
    /// Returns `false` if the name is already taken, reporting an error when another owner
    /// holds it. A repeated owner is skipped silently so re-listed classes are not generated
    /// twice.
    fn claim(&mut self, name: ClassName, owner: &ClassName, location: &SourceLocation, diagnostics: &mut Diagnostics) -> bool {
        match self.generated.get(&name) {
            Some(existing) if existing == owner => false,
            Some(existing) => {
                diagnostics.error(
                    format!("Generated type {name} for {owner} collides with the one generated for {existing}"),
                    location,
                );
                false
            }
            None => {
                self.generated.insert(name, owner.clone());
                true
            }
        }
    }
}

/// A session with default options, which never request a marker.
impl Default for ProcessingSession {
    fn default() -> Self {
        Self::with_marker(ProcessorOptions::default(), None)
    }
}
