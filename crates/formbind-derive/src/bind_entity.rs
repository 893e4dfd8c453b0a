use convert_case::{Case, Casing};
use darling::{
    Error, FromDeriveInput, FromField, FromMeta,
    ast::Data,
    util::Ignored,
};
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use std::collections::HashSet;
use syn::{DeriveInput, Expr, ExprLit, ExprUnary, Generics, Ident, Lit, Type, UnOp, ext::IdentExt};

// derive_bind_entity
pub fn derive_bind_entity(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    EntityOpts::from_derive_input(&input)
        .and_then(|entity| entity.expand())
        .unwrap_or_else(Error::write_errors)
}

///
/// EntityOpts
///

#[derive(FromDeriveInput)]
#[darling(attributes(bind), supports(struct_named))]
struct EntityOpts {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, FieldOpts>,

    /// Path prefix of every field; defaults to the struct name.
    #[darling(default)]
    entity: Option<String>,

    /// Identifier field counted for lists; defaults to `Id`.
    #[darling(default)]
    primary_key: Option<String>,
}

impl EntityOpts {
    fn expand(&self) -> darling::Result<TokenStream> {
        if !self.generics.params.is_empty() {
            return Err(
                Error::custom("BindEntity cannot be derived for generic structs")
                    .with_span(&self.generics),
            );
        }

        let fields: Vec<&FieldOpts> = self
            .data
            .as_ref()
            .take_struct()
            .ok_or_else(|| Error::unsupported_shape("enum"))?
            .fields
            .into_iter()
            .filter(|field| !field.skip)
            .collect();

        check_unique_names(&fields)?;

        let ident = &self.ident;
        let entity_name = self.entity.clone().unwrap_or_else(|| ident.to_string());
        let primary_key = self.primary_key.as_deref().unwrap_or("Id");

        let field_models = fields
            .iter()
            .map(|field| field.model())
            .collect::<darling::Result<Vec<_>>>()?;
        let write_arms = fields
            .iter()
            .filter(|field| !field.read_only)
            .map(|field| field.write_arm())
            .collect::<darling::Result<Vec<_>>>()?;

        Ok(quote! {
            impl ::formbind::traits::BindEntity for #ident {
                const MODEL: &'static ::formbind::model::EntityModel = {
                    const FIELDS: &[::formbind::model::FieldModel] = &[
                        #(#field_models),*
                    ];
                    const MODEL: ::formbind::model::EntityModel =
                        ::formbind::model::EntityModel::new(#entity_name, #primary_key, FIELDS);

                    &MODEL
                };

                fn write_field(&mut self, field: &str, value: ::formbind::value::Value) -> bool {
                    match field {
                        #(#write_arms)*
                        _ => {
                            let _ = value;
                            false
                        }
                    }
                }
            }
        })
    }
}

fn check_unique_names(fields: &[&FieldOpts]) -> darling::Result<()> {
    let mut seen = HashSet::new();
    let mut errors = Error::accumulator();

    for field in fields {
        let name = errors.handle(field.form_name()).unwrap_or_default();
        if !name.is_empty() && !seen.insert(name.clone()) {
            errors.push(
                Error::custom(format!("duplicate form field name '{name}'"))
                    .with_span(&field.ty),
            );
        }
    }

    errors.finish()
}

///
/// FieldOpts
///

#[derive(FromField)]
#[darling(attributes(bind))]
struct FieldOpts {
    ident: Option<Ident>,
    ty: Type,

    /// Submitted key segment; defaults to the PascalCase field name.
    #[darling(default)]
    rename: Option<String>,

    #[darling(default)]
    display: Option<String>,

    #[darling(default)]
    range: Option<RangeOpts>,

    /// Entity kind a reference field points at.
    #[darling(default)]
    reference: Option<String>,

    #[darling(default)]
    read_only: bool,

    #[darling(default)]
    skip: bool,
}

impl FieldOpts {
    fn ident(&self) -> darling::Result<&Ident> {
        self.ident
            .as_ref()
            .ok_or_else(|| Error::custom("BindEntity requires named fields").with_span(&self.ty))
    }

    fn form_name(&self) -> darling::Result<String> {
        match &self.rename {
            Some(name) => Ok(name.clone()),
            None => Ok(self.ident()?.unraw().to_string().to_case(Case::Pascal)),
        }
    }

    fn model(&self) -> darling::Result<TokenStream> {
        let name = self.form_name()?;
        let ty = &self.ty;

        let mut model = quote! {
            ::formbind::model::FieldModel::new(
                #name,
                <#ty as ::formbind::traits::BindField>::KIND,
            )
        };

        if let Some(range) = &self.range {
            let (min, max) = (range.min.literal(), range.max.literal());
            model = quote!(#model.with_range(#min, #max));
        }
        if let Some(display) = &self.display {
            model = quote!(#model.with_display_name(#display));
        }
        if let Some(reference) = &self.reference {
            model = quote!(#model.with_reference(#reference));
        }
        if self.read_only {
            model = quote!(#model.read_only());
        }

        Ok(model)
    }

    fn write_arm(&self) -> darling::Result<TokenStream> {
        let name = self.form_name()?;
        let ident = self.ident()?;
        let ty = &self.ty;

        Ok(quote! {
            #name => match <#ty as ::formbind::traits::BindField>::from_value(value) {
                Some(field_value) => {
                    self.#ident = field_value;
                    true
                }
                None => false,
            },
        })
    }
}

///
/// RangeOpts
///

#[derive(FromMeta)]
struct RangeOpts {
    min: RangeBound,
    max: RangeBound,
}

///
/// RangeBound
/// Numeric literal, optionally negated, read as a finite `f64`.
///

struct RangeBound(f64);

impl RangeBound {
    fn literal(&self) -> TokenStream {
        let literal = Literal::f64_suffixed(self.0.abs());

        if self.0.is_sign_negative() {
            quote!(-#literal)
        } else {
            quote!(#literal)
        }
    }
}

impl FromMeta for RangeBound {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Lit(ExprLit { lit, .. }) => Self::from_value(lit),
            Expr::Unary(ExprUnary {
                op: UnOp::Neg(_),
                expr,
                ..
            }) => Self::from_expr(expr).map(|Self(bound)| Self(-bound)),
            Expr::Group(group) => Self::from_expr(&group.expr),
            _ => Err(Error::unexpected_expr_type(expr)),
        }
    }

    fn from_value(lit: &Lit) -> darling::Result<Self> {
        let bound = match lit {
            Lit::Int(int) => int.base10_parse::<f64>()?,
            Lit::Float(float) => float.base10_parse::<f64>()?,
            _ => return Err(Error::unexpected_lit_type(lit)),
        };

        if bound.is_finite() {
            Ok(Self(bound))
        } else {
            Err(Error::custom("range bound must be a finite number").with_span(lit))
        }
    }
}

///
/// TESTS
///
