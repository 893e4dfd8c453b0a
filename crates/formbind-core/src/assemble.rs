//! Entity assembly: walks a model's writable fields and fills one entity
//! per submitted entry, recording per-field issues on the way.
use crate::{
    TRACE_TARGET,
    cache::RawValueCache,
    coerce::coerce,
    error::InternalError,
    list::{EntryCount, resolve_entry_count, select_value},
    locale::BindOptions,
    model::{EntityModel, FieldModel},
    source::ValueSource,
    traits::{BindEntity, EntityWriter},
    validate::{IssueKind, ValidationIssue, ValidationIssues, check_range},
};
use tracing::{debug, trace, warn};

// ============================================================================
// CONTEXT
// ============================================================================

///
/// BindContext
///
/// Request-scoped state of one bind: the raw value cache and the issues
/// collected so far. Every top-level assembly resets both, so a context
/// never leaks values or issues from one bind into the next.
///

pub struct BindContext<'a> {
    cache: RawValueCache<'a>,
    issues: ValidationIssues,
    options: &'a BindOptions,
}

impl<'a> BindContext<'a> {
    #[must_use]
    pub fn new(source: &'a dyn ValueSource, options: &'a BindOptions) -> Self {
        Self {
            cache: RawValueCache::new(source),
            issues: ValidationIssues::new(),
            options,
        }
    }

    /// Forget cached values and collected issues.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.issues.clear();
    }

    #[must_use]
    pub const fn options(&self) -> &BindOptions {
        self.options
    }

    #[must_use]
    pub const fn issues(&self) -> &ValidationIssues {
        &self.issues
    }

    #[must_use]
    pub fn into_issues(self) -> ValidationIssues {
        self.issues
    }
}

// ============================================================================
// ASSEMBLY
// ============================================================================

/// Assemble a single entity from the unindexed field paths.
pub fn assemble_one<E, F>(ctx: &mut BindContext<'_>, model: &'static EntityModel, make: F) -> E
where
    E: EntityWriter,
    F: FnOnce() -> E,
{
    ctx.reset();
    debug!(target: TRACE_TARGET, entity = model.entity_name, "binding entity");

    let mut entity = make();
    fill_entity(ctx, model, &mut entity, 0, None);

    debug!(
        target: TRACE_TARGET,
        entity = model.entity_name,
        issues = ctx.issues.len(),
        "entity bound"
    );

    entity
}

/// Assemble one entity per submitted identifier value, in index order.
pub fn assemble_list<E, F>(
    ctx: &mut BindContext<'_>,
    model: &'static EntityModel,
    mut make: F,
) -> Vec<E>
where
    E: EntityWriter,
    F: FnMut() -> E,
{
    ctx.reset();

    let EntryCount { probed, count } = resolve_entry_count(model, &mut ctx.cache);
    debug!(
        target: TRACE_TARGET,
        entity = model.entity_name,
        probed,
        count,
        "binding entity list"
    );

    let entities: Vec<E> = (0..count)
        .map(|index| {
            let mut entity = make();
            fill_entity(ctx, model, &mut entity, index, Some(count));
            entity
        })
        .collect();

    debug!(
        target: TRACE_TARGET,
        entity = model.entity_name,
        count = entities.len(),
        issues = ctx.issues.len(),
        "entity list bound"
    );

    entities
}

// Range check and coercion run independently against the same raw value:
// a range issue does not stop a value that coerces from being written.
fn fill_entity<E: EntityWriter + ?Sized>(
    ctx: &mut BindContext<'_>,
    model: &EntityModel,
    entity: &mut E,
    index: usize,
    count: Option<usize>,
) {
    let options = ctx.options;

    for field in model.writable_fields() {
        let path = model.field_path(field.name);
        let values = ctx.cache.get(&path);
        let Some(raw) = select_value(values, index, count) else {
            continue;
        };

        let offending = Offending { raw, index, attempted: values };

        if let Some(kind) = check_range(field, raw, options) {
            ctx.issues.push(offending.issue(field, &path, kind, options));
        }

        match coerce(field, raw, options) {
            Ok(Some(value)) => {
                trace!(target: TRACE_TARGET, path = %path, index, value = ?value, "field coerced");
                if !entity.write(field, value) {
                    warn!(target: TRACE_TARGET, path = %path, "entity rejected coerced value");
                }
            }
            Ok(None) => {}
            Err(err) => {
                trace!(target: TRACE_TARGET, path = %path, index, error = %err, "field left unset");
                ctx.issues
                    .push(offending.issue(field, &path, IssueKind::InvalidType, options));
            }
        }
    }
}

// raw value selected for one entry, plus everything submitted under its path
struct Offending<'v> {
    raw: &'v str,
    index: usize,
    attempted: &'v [String],
}

impl Offending<'_> {
    fn issue(
        &self,
        field: &FieldModel,
        path: &str,
        kind: IssueKind,
        options: &BindOptions,
    ) -> ValidationIssue {
        ValidationIssue::new(field, path, kind, self.raw, &options.messages)
            .at_index(self.index)
            .with_attempted(self.attempted.to_vec())
    }
}

// ============================================================================
// TARGET SHAPES
// ============================================================================

///
/// TargetType
///
/// Shape of a bind target: a plain entity, or a generic type over its
/// entity arguments. Only single-argument generics are bindable; they are
/// bound as lists of their argument.
///

#[derive(Clone, Debug)]
pub enum TargetType {
    Scalar(&'static EntityModel),
    Generic(Vec<&'static EntityModel>),
}

impl TargetType {
    #[must_use]
    pub fn list(model: &'static EntityModel) -> Self {
        Self::Generic(vec![model])
    }
}

///
/// Bound
///

#[derive(Clone, Debug)]
pub enum Bound<E> {
    One(E),
    Many(Vec<E>),
}

impl<E> Bound<E> {
    /// Entities in index order; a scalar bind yields one.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        match self {
            Self::One(entity) => vec![entity],
            Self::Many(entities) => entities,
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::Many(_))
    }
}

/// Assemble any target shape. `make` builds an empty entity for a model.
pub fn assemble<E, F>(
    ctx: &mut BindContext<'_>,
    target: &TargetType,
    mut make: F,
) -> Result<Bound<E>, InternalError>
where
    E: EntityWriter,
    F: FnMut(&'static EntityModel) -> E,
{
    match target {
        TargetType::Scalar(model) => {
            let model = *model;
            Ok(Bound::One(assemble_one(ctx, model, || make(model))))
        }
        TargetType::Generic(args) => match args.as_slice() {
            [model] => {
                let model = *model;
                Ok(Bound::Many(assemble_list(ctx, model, || make(model))))
            }
            _ => {
                warn!(target: TRACE_TARGET, arity = args.len(), "unsupported target shape");
                Err(InternalError::unsupported_shape(args.len()))
            }
        },
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

///
/// BindOutcome
///
/// Best-effort bound value plus every issue found while binding it.
///

#[derive(Clone, Debug)]
pub struct BindOutcome<T> {
    pub value: T,
    pub issues: ValidationIssues,
}

impl<T> BindOutcome<T> {
    #[must_use]
    pub const fn new(value: T, issues: ValidationIssues) -> Self {
        Self { value, issues }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The value when nothing was reported, otherwise the issues.
    pub fn into_result(self) -> Result<T, ValidationIssues> {
        if self.issues.is_empty() {
            Ok(self.value)
        } else {
            Err(self.issues)
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BindOutcome<U> {
        BindOutcome::new(f(self.value), self.issues)
    }
}

/// Bind one `T` from `source`.
#[must_use]
pub fn bind_one<T: BindEntity>(source: &dyn ValueSource, options: &BindOptions) -> BindOutcome<T> {
    let mut ctx = BindContext::new(source, options);
    let value = assemble_one(&mut ctx, T::MODEL, T::default);

    BindOutcome::new(value, ctx.into_issues())
}

/// Bind every submitted entry of `T` from `source`.
#[must_use]
pub fn bind_list<T: BindEntity>(
    source: &dyn ValueSource,
    options: &BindOptions,
) -> BindOutcome<Vec<T>> {
    let mut ctx = BindContext::new(source, options);
    let value = assemble_list(&mut ctx, T::MODEL, T::default);

    BindOutcome::new(value, ctx.into_issues())
}

///
/// TESTS
///

#[cfg(test)]
mod tests;
