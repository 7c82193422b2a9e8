// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Annotations and framework types the processor recognizes or references in generated code.

use java_source::ClassName;

/// Package holding the worker injection annotations and the `WorkFactory` interface.
pub const WORK_INJECT_PACKAGE: &str = "com.vikingsen.inject.work";

/// Marks the constructor a factory is generated for.
pub const WORKER_INJECT: &str = "com.vikingsen.inject.work.WorkerInject";

/// Marks the Dagger module that includes the generated binding module.
pub const WORKER_MODULE: &str = "com.vikingsen.inject.work.WorkerModule";

/// Marks a constructor parameter supplied when the factory is invoked.
pub const ASSISTED: &str = "com.squareup.inject.assisted.Assisted";

/// Tool identity carried by the optional generated marker.
pub const PROCESSOR_NAME: &str = "com.vikingsen.inject.work.processor.WorkerInjectProcessor";

/// Documentation reference carried by the optional generated marker.
pub const PROCESSOR_COMMENTS: &str = "https://github.com/hansenji/ViewModelInject";

/// Default type of the generated marker.
pub const DEFAULT_GENERATED_ANNOTATION: &str = "javax.annotation.Generated";

/// Suffix of every generated factory.
pub const FACTORY_SUFFIX: &str = "_AssistedFactory";

/// Prefix of the generated binding module.
pub const MODULE_PREFIX: &str = "WorkerInject_";

/// Prefix of every binding method in the generated module.
pub const BIND_METHOD_PREFIX: &str = "bind_";

pub(crate) fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

pub(crate) fn listenable_worker() -> ClassName {
    ClassName::new("androidx.work", "ListenableWorker")
}

pub(crate) fn worker_parameters() -> ClassName {
    ClassName::new("androidx.work", "WorkerParameters")
}

pub(crate) fn context() -> ClassName {
    ClassName::new("android.content", "Context")
}

/// `ListenableWorker` subclasses shipped with WorkManager, so workers extending them need no
/// further hierarchy information.
pub(crate) fn framework_workers() -> [ClassName; 4] {
    [
        ClassName::new("androidx.work", "Worker"),
        ClassName::new("androidx.work", "CoroutineWorker"),
        ClassName::new("androidx.work.rxjava2", "RxWorker"),
        ClassName::new("androidx.work.rxjava3", "RxWorker"),
    ]
}

pub(crate) fn work_factory() -> ClassName {
    ClassName::new(WORK_INJECT_PACKAGE, "WorkFactory")
}

pub(crate) fn provider() -> ClassName {
    ClassName::new("javax.inject", "Provider")
}

pub(crate) fn inject() -> ClassName {
    ClassName::new("javax.inject", "Inject")
}

pub(crate) fn java_override() -> ClassName {
    ClassName::new("java.lang", "Override")
}

pub(crate) fn lazy() -> ClassName {
    ClassName::new("dagger", "Lazy")
}

pub(crate) fn double_check() -> ClassName {
    ClassName::new("dagger.internal", "DoubleCheck")
}

pub(crate) fn dagger_module() -> ClassName {
    ClassName::new("dagger", "Module")
}

pub(crate) fn binds() -> ClassName {
    ClassName::new("dagger", "Binds")
}

pub(crate) fn into_map() -> ClassName {
    ClassName::new("dagger.multibindings", "IntoMap")
}

pub(crate) fn string_key() -> ClassName {
    ClassName::new("dagger.multibindings", "StringKey")
}
