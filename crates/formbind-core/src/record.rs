//! Model-bound value map for entities bound by name.
use crate::{
    model::{EntityModel, FieldModel},
    traits::EntityWriter,
    value::Value,
};
use std::collections::BTreeMap;

///
/// Record
///
/// Dynamic entity: the values written for one entry of a model when no
/// Rust type is available. Only fields of the model are accepted, and
/// only values of the field's kind (or `Null`).
///

#[derive(Clone, Debug)]
pub struct Record {
    model: &'static EntityModel,
    values: BTreeMap<&'static str, Value>,
}

impl Record {
    #[must_use]
    pub const fn new(model: &'static EntityModel) -> Self {
        Self {
            model,
            values: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn model(&self) -> &'static EntityModel {
        self.model
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Written fields, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl EntityWriter for Record {
    fn write(&mut self, field: &'static FieldModel, value: Value) -> bool {
        let Some(own) = self.model.field(field.name) else {
            return false;
        };
        if !own.writable || value.kind().is_some_and(|kind| kind != own.kind) {
            return false;
        }

        self.values.insert(own.name, value);
        true
    }
}

///
/// TESTS
///
