//! Named target types: which entity models may be bound by name, and
//! whether each may be bound as a list.
use crate::{
    TRACE_TARGET,
    assemble::TargetType,
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::EntityModel,
};
use formbind_config::BinderConfig;
use std::{collections::BTreeMap, fmt, str::FromStr};
use tracing::debug;

// ============================================================================
// TYPE REFERENCES
// ============================================================================

///
/// TypeRef
///
/// Textual target type: `Name` or `Name<Arg, ...>`. Names may be
/// namespace-qualified with `.` or `::`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeRef {
    pub name: String,
    pub args: Vec<Self>,
}

impl TypeRef {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    #[must_use]
    pub const fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }

    pub fn parse(text: &str) -> Result<Self, InternalError> {
        let mut parser = Parser { text, pos: 0 };
        let parsed = parser.type_ref()?;

        parser.skip_whitespace();
        if parser.pos < text.len() {
            return Err(parser.error("unexpected trailing input"));
        }

        Ok(parsed)
    }
}

impl FromStr for TypeRef {
    type Err = InternalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.args.is_empty() {
            return Ok(());
        }

        write!(f, "<")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ">")
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn type_ref(&mut self) -> Result<TypeRef, InternalError> {
        let name = self.name()?;
        self.skip_whitespace();

        if !self.eat('<') {
            return Ok(TypeRef::scalar(name));
        }

        let mut args = vec![self.type_ref()?];
        loop {
            self.skip_whitespace();
            if self.eat(',') {
                args.push(self.type_ref()?);
            } else if self.eat('>') {
                return Ok(TypeRef::generic(name, args));
            } else {
                return Err(self.error("expected ',' or '>'"));
            }
        }
    }

    fn name(&mut self) -> Result<String, InternalError> {
        self.skip_whitespace();

        let rest = &self.text[self.pos..];
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '.' | ':')))
            .unwrap_or(rest.len());
        let name = &rest[..len];

        if name.is_empty() {
            return Err(self.error("expected a type name"));
        }
        if name.starts_with(['.', ':']) || name.ends_with(['.', ':']) {
            return Err(self.error("type name has an empty segment"));
        }

        self.pos += len;
        Ok(name.to_string())
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.text[self.pos..].starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.text[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn error(&self, reason: &str) -> InternalError {
        InternalError::invalid_type_ref(self.text, &format!("{reason} at offset {}", self.pos))
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

///
/// Registration
///

#[derive(Clone, Copy, Debug)]
pub struct Registration {
    pub model: &'static EntityModel,
    pub enumerable: bool,
}

///
/// Registry
///
/// Entity models addressable by name. The first registration of a name
/// wins; later ones can only add list support. Names may be looked up
/// qualified with the configured model namespace.
///

#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: BTreeMap<&'static str, Registration>,
    namespace: Option<String>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `model` under its entity name.
    /// Returns false when the name was already taken.
    pub fn register(&mut self, model: &'static EntityModel, enumerable: bool) -> bool {
        match self.entries.get_mut(model.entity_name) {
            Some(existing) => {
                existing.enumerable |= enumerable;
                false
            }
            None => {
                self.entries
                    .insert(model.entity_name, Registration { model, enumerable });
                true
            }
        }
    }

    /// Register the configured bindings whose type is among `models`.
    /// Configured types without a model are skipped.
    #[must_use]
    pub fn from_config(config: &BinderConfig, models: &[&'static EntityModel]) -> Self {
        let mut registry = Self::new();
        if !config.model_namespace.is_empty() {
            registry.namespace = Some(config.model_namespace.clone());
        }

        for entry in &config.bindings {
            let local = config.local_name(&entry.type_name);

            match models.iter().find(|model| model.entity_name == local) {
                Some(model) => {
                    registry.register(*model, entry.enumerable);
                }
                None => debug!(
                    target: TRACE_TARGET,
                    binding = %entry.name,
                    type_name = %config.qualified_name(entry),
                    "configured type has no model"
                ),
            }
        }

        registry
    }

    /// Registration for a bare or namespace-qualified name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Registration> {
        let local = self
            .namespace
            .as_deref()
            .and_then(|namespace| name.strip_prefix(namespace))
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(name);

        self.entries.get(local)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a type reference to the shape the assembler binds.
    ///
    /// A single-argument generic binds as a list of its argument, which
    /// must be registered as enumerable. Wider generics resolve to a shape
    /// the assembler rejects.
    pub fn resolve(&self, target: &TypeRef) -> Result<TargetType, InternalError> {
        match target.args.as_slice() {
            [] => Ok(TargetType::Scalar(self.lookup(&target.name)?.model)),
            [arg] => {
                let registration = self.lookup_arg(arg)?;
                if !registration.enumerable {
                    return Err(InternalError::not_enumerable(&arg.name));
                }

                Ok(TargetType::list(registration.model))
            }
            args => {
                let models = args
                    .iter()
                    .map(|arg| self.lookup_arg(arg).map(|registration| registration.model))
                    .collect::<Result<_, _>>()?;

                Ok(TargetType::Generic(models))
            }
        }
    }

    fn lookup(&self, name: &str) -> Result<&Registration, InternalError> {
        self.get(name)
            .ok_or_else(|| InternalError::not_registered(name))
    }

    fn lookup_arg(&self, arg: &TypeRef) -> Result<&Registration, InternalError> {
        if arg.is_generic() {
            return Err(InternalError::new(
                ErrorClass::Unsupported,
                ErrorOrigin::Registry,
                format!("nested generic argument '{arg}' cannot be bound"),
            ));
        }

        self.lookup(&arg.name)
    }
}

///
/// TESTS
///
