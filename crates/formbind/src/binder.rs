use crate::error::Error;
use formbind_config::BinderConfig;
use formbind_core::{
    assemble::{self, BindContext, BindOutcome, Bound, TargetType},
    locale::BindOptions,
    model::EntityModel,
    record::Record,
    registry::{Registry, TypeRef},
    source::ValueSource,
    traits::BindEntity,
};
use std::path::Path;

///
/// Binder
///
/// Entry point for binding submitted form data. Typed binds go straight
/// to a derived entity; by-name binds resolve the target through the
/// registry and produce dynamic records.
///
/// A binder holds no per-request state and can be shared between
/// concurrent binds.
///

#[derive(Clone, Debug, Default)]
pub struct Binder {
    options: BindOptions,
    registry: Registry,
}

impl Binder {
    #[must_use]
    pub fn new(options: BindOptions) -> Self {
        Self {
            options,
            registry: Registry::new(),
        }
    }

    /// Binder whose registry holds the configured bindings among `models`.
    #[must_use]
    pub fn from_config(
        config: &BinderConfig,
        models: &[&'static EntityModel],
        options: BindOptions,
    ) -> Self {
        Self {
            options,
            registry: Registry::from_config(config, models),
        }
    }

    /// Read the binding configuration at `path`, then build as `from_config`.
    pub fn load(
        path: impl AsRef<Path>,
        models: &[&'static EntityModel],
        options: BindOptions,
    ) -> Result<Self, Error> {
        let config = BinderConfig::load(path)?;

        Ok(Self::from_config(&config, models, options))
    }

    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &BindOptions {
        &self.options
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    pub const fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Bind one `T`.
    #[must_use]
    pub fn bind<T: BindEntity>(&self, source: &dyn ValueSource) -> BindOutcome<T> {
        assemble::bind_one(source, &self.options)
    }

    /// Bind every submitted entry of `T`.
    #[must_use]
    pub fn bind_list<T: BindEntity>(&self, source: &dyn ValueSource) -> BindOutcome<Vec<T>> {
        assemble::bind_list(source, &self.options)
    }

    /// Bind the registered type named by `type_ref`, e.g. `Contact` or
    /// `List<Contact>`.
    pub fn bind_named(
        &self,
        type_ref: &str,
        source: &dyn ValueSource,
    ) -> Result<BindOutcome<Bound<Record>>, Error> {
        let target = self.registry.resolve(&TypeRef::parse(type_ref)?)?;

        self.bind_target(&target, source)
    }

    /// Bind an already resolved target shape into records.
    pub fn bind_target(
        &self,
        target: &TargetType,
        source: &dyn ValueSource,
    ) -> Result<BindOutcome<Bound<Record>>, Error> {
        let mut ctx = BindContext::new(source, &self.options);
        let bound = assemble::assemble(&mut ctx, target, Record::new)?;

        Ok(BindOutcome::new(bound, ctx.into_issues()))
    }
}
