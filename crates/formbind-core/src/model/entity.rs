use crate::model::{FieldModel, join_path};

///
/// EntityModel
/// Minimal, macro-generated runtime model for one bindable entity.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Stable external name, used as the prefix of every field path.
    pub entity_name: &'static str,
    /// Name of the identifier field whose submitted values count list entries.
    pub primary_key: &'static str,
    /// Ordered field list (authoritative for binding order).
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    #[must_use]
    pub const fn new(
        entity_name: &'static str,
        primary_key: &'static str,
        fields: &'static [FieldModel],
    ) -> Self {
        Self {
            entity_name,
            primary_key,
            fields,
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields the assembler may write, in declaration order.
    pub fn writable_fields(&self) -> impl Iterator<Item = &'static FieldModel> {
        self.fields.iter().filter(|field| field.writable)
    }

    /// `Entity.field`
    #[must_use]
    pub fn field_path(&self, field: &str) -> String {
        join_path(self.entity_name, field)
    }

    /// `Entity.field.index`
    #[must_use]
    pub fn indexed_path(&self, field: &str, index: usize) -> String {
        join_path(&self.field_path(field), &index.to_string())
    }
}
