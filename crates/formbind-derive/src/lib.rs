use proc_macro::TokenStream;

mod bind_entity;

/// Derive `BindEntity` for a struct with named fields.
///
/// Struct attributes: `#[bind(entity = "...", primary_key = "...")]`.
/// Field attributes: `#[bind(rename = "...", display = "...",
/// range(min = .., max = ..), reference = "...", read_only, skip)]`.
#[proc_macro_derive(BindEntity, attributes(bind))]
pub fn derive_bind_entity(input: TokenStream) -> TokenStream {
    bind_entity::derive_bind_entity(input.into()).into()
}
