// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeSet;

use java_source::ClassName;

use crate::diagnostic::{Diagnostics, SourceLocation};
use crate::model::{ModuleCandidate, Visibility};
use crate::names::{WORKER_MODULE, simple_name};
use crate::naming::{NestingStyle, module_name};

/// A validated `@WorkerModule` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTarget {
    owner: ClassName,
    is_public: bool,
    generated_name: ClassName,
}

impl ModuleTarget {
    /// The `@WorkerModule` class.
    #[must_use]
    pub const fn owner(&self) -> &ClassName {
        &self.owner
    }

    /// Whether the binding module is emitted `public`.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.is_public
    }

    /// Name of the binding module generated for this class.
    #[must_use]
    pub const fn generated_name(&self) -> &ClassName {
        &self.generated_name
    }
}

/// Checks a module class for the `@Module` annotation and the include of its binding module.
///
/// Duplicate detection is separate, see [`SeenModules`].
pub(crate) fn validate(
    candidate: &ModuleCandidate,
    style: NestingStyle,
    public_module: bool,
    diagnostics: &mut Diagnostics,
) -> Option<ModuleTarget> {
    let annotation = simple_name(WORKER_MODULE);
    let generated_name = module_name(&candidate.class_name, style);

    let Some(includes) = &candidate.includes else {
        diagnostics.error(
            format!("@{annotation} must also be annotated as a Dagger @Module"),
            &candidate.location,
        );
        return None;
    };

    if !includes.iter().any(|include| refers_to(include, &generated_name)) {
        diagnostics.error(
            format!("@{annotation}'s @Module must include {}", generated_name.simple_name()),
            &candidate.location,
        );
        return None;
    }

    Some(ModuleTarget {
        owner: candidate.class_name.clone(),
        is_public: public_module || candidate.visibility == Visibility::Public,
        generated_name,
    })
}

/// Whether an include names the generated module. The generated class does not exist while
/// the module is compiled, so the host sees only the name as written.
fn refers_to(include: &ClassName, generated: &ClassName) -> bool {
    include == generated || (include.package().is_empty() && !include.is_nested() && include.simple_name() == generated.simple_name())
}

/// Every `@WorkerModule` class seen in a run, for reporting duplicates across rounds.
#[derive(Debug, Default)]
pub(crate) struct SeenModules {
    seen: Vec<(ClassName, SourceLocation)>,
    reported: BTreeSet<ClassName>,
}

impl SeenModules {
    /// Records the modules of one round and reports every duplicate declaration, each one once.
    ///
    /// Returns `true` when exactly one module has been seen so far.
    pub(crate) fn record<'a>(
        &mut self,
        candidates: impl IntoIterator<Item = &'a ModuleCandidate>,
        diagnostics: &mut Diagnostics,
    ) -> bool {
        for candidate in candidates {
            if !self.seen.iter().any(|(seen, _)| seen == &candidate.class_name) {
                self.seen.push((candidate.class_name.clone(), candidate.location.clone()));
            }
        }

        if self.seen.len() < 2 {
            return self.seen.len() == 1;
        }

        let annotation = simple_name(WORKER_MODULE);
        for (class_name, location) in &self.seen {
            if self.reported.insert(class_name.clone()) {
                diagnostics.error(format!("Multiple @{annotation}-annotated modules found."), location);
            }
        }

        false
    }

    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}
