//! Record derive macro implementation.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::{DeriveInput, Fields, LitStr, Type, Visibility, parse2};

/// Field options parsed from `#[record(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct RecordFieldOptions {
    /// Raw directives, keyed by namespace, in declaration order.
    tags: Vec<(String, String)>,
    /// Splice the field's own fields into the parent record.
    embed: bool,
}

/// Expand the `#[derive(Record)]` macro.
pub fn expand_record_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Only support structs with named fields
    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Record derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Record derive only supports structs",
            ));
        }
    };

    let mut descriptors = Vec::new();
    let mut accessors = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        // Safe: we've already verified this is a struct with named fields
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let options = parse_record_field_options(&field.attrs)?;

        let field_name = field_ident.unraw().to_string();
        let type_name = type_name(&field.ty);
        let exported = matches!(field.vis, Visibility::Public(_));
        let embedded = options.embed;
        let tags = options
            .tags
            .iter()
            .map(|(namespace, raw)| quote! { (#namespace, #raw) });

        descriptors.push(quote! {
            ::querystring::FieldDescriptor {
                name: #field_name,
                type_name: #type_name,
                tags: &[#(#tags),*],
                exported: #exported,
                embedded: #embedded,
            }
        });
        accessors.push(quote! {
            #index => ::core::option::Option::Some(::querystring::ToValue::to_value(&self.#field_ident)),
        });
    }

    Ok(quote! {
        impl #impl_generics ::querystring::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> &'static [::querystring::FieldDescriptor] {
                static FIELDS: &[::querystring::FieldDescriptor] = &[#(#descriptors),*];
                FIELDS
            }

            fn field(&self, index: usize) -> ::core::option::Option<::querystring::Value<'_>> {
                match index {
                    #(#accessors)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::querystring::ToValue for #name #ty_generics #where_clause {
            fn to_value(&self) -> ::querystring::Value<'_> {
                ::querystring::Value::Record(self)
            }
        }
    })
}

/// Parse field options from `#[record(...)]` attributes.
///
/// `embed` is a flag; every `namespace = "directive"` pair is kept as a tag.
fn parse_record_field_options(attrs: &[syn::Attribute]) -> syn::Result<RecordFieldOptions> {
    let mut options = RecordFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("embed") {
                options.embed = true;
                return Ok(());
            }

            let Some(namespace) = meta.path.get_ident().map(ToString::to_string) else {
                return Err(meta.error("expected a directive namespace such as `url`"));
            };
            if !meta.input.peek(syn::Token![=]) {
                return Err(meta.error(format!(
                    "expected `{namespace} = \"...\"` or `embed`"
                )));
            }
            let value: LitStr = meta.value()?.parse()?;
            if options.tags.iter().any(|(existing, _)| *existing == namespace) {
                return Err(syn::Error::new_spanned(
                    &value,
                    format!("duplicate directive for namespace `{namespace}`"),
                ));
            }
            options.tags.push((namespace, value.value()));
            Ok(())
        })?;
    }

    Ok(options)
}

/// Render a type the way it is usually written (`Option<Vec<u8>>`).
fn type_name(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" :: ", "::")
        .replace(":: ", "::")
}
