//! `#[derive(RewriteAst)]` for the `go_rewrite` syntax tree.
//!
//! The derive emits `impl crate::rewrite::RewriteChildren`, which hands every
//! field to `crate::rewrite::Slot::rewrite_slot` in declaration order. Field
//! order is therefore traversal order: declare fields in surface-syntax order.
//!
//! Attributes:
//! - `#[rewrite(inline)]` on a type: the type is structural glue, not a
//!   callback-visible node, so its `Slot` impl walks straight into its children.
//! - `#[rewrite(skip)]` on a field or variant: nothing under it is walked.

use proc_macro::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::{
    Attribute, Data, DeriveInput, Fields, Ident, Index, LitStr, parse_macro_input,
    spanned::Spanned,
};

#[proc_macro_derive(RewriteAst, attributes(rewrite))]
pub fn derive_rewrite_ast(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let span = input.span();

    let inline = match has_flag(&input.attrs, "inline") {
        Ok(inline) => inline,
        Err(err) => return err.into_compile_error().into(),
    };

    let rewrite_body = match generate_rewrite_body(name, &input.data) {
        Ok(body) => body,
        Err(err) => return err.into_compile_error().into(),
    };

    let slot_impl = if inline {
        quote_spanned! {span =>
            impl crate::rewrite::Slot for #name {
                #[inline]
                fn rewrite_slot<R: crate::rewrite::Rewriter + ?Sized>(
                    &mut self,
                    _slot: &'static str,
                    w: &mut crate::rewrite::Walker<'_, R>,
                ) {
                    crate::rewrite::RewriteChildren::rewrite_children(self, w);
                }
            }
        }
    } else {
        quote! {}
    };

    let expanded = quote_spanned! {span =>
        impl crate::rewrite::RewriteChildren for #name {
            #[inline]
            #[allow(unused_variables)]
            fn rewrite_children<R: crate::rewrite::Rewriter + ?Sized>(
                &mut self,
                w: &mut crate::rewrite::Walker<'_, R>,
            ) {
                #rewrite_body
            }
        }

        #slot_impl
    };

    expanded.into()
}

fn has_flag(attrs: &[Attribute], flag: &str) -> syn::Result<bool> {
    let mut found = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("rewrite")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(flag) {
                found = true;
                Ok(())
            } else if meta.path.is_ident("inline") || meta.path.is_ident("skip") {
                Ok(())
            } else {
                Err(meta.error("expected `inline` or `skip`"))
            }
        })?;
    }
    Ok(found)
}

fn generate_rewrite_body(name: &Ident, data: &Data) -> syn::Result<proc_macro2::TokenStream> {
    match data {
        Data::Struct(data_struct) => generate_fields_rewrite(name, &data_struct.fields),
        Data::Enum(data_enum) => {
            let arms = data_enum
                .variants
                .iter()
                .map(|variant| {
                    let variant_name = &variant.ident;
                    if has_flag(&variant.attrs, "skip")? {
                        return Ok(quote! { Self::#variant_name { .. } => {} });
                    }
                    generate_variant_arm(name, variant_name, &variant.fields)
                })
                .collect::<syn::Result<Vec<_>>>()?;

            Ok(quote! {
                match self {
                    #(#arms)*
                }
            })
        }
        Data::Union(u) => Err(syn::Error::new_spanned(
            u.union_token,
            "RewriteAst cannot be derived for unions",
        )),
    }
}

fn slot_label(owner: String, field: String, span: proc_macro2::Span) -> LitStr {
    LitStr::new(&format!("{owner}.{field}"), span)
}

fn generate_fields_rewrite(name: &Ident, fields: &Fields) -> syn::Result<proc_macro2::TokenStream> {
    let mut calls = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if has_flag(&field.attrs, "skip")? {
            continue;
        }
        let (access, label) = match &field.ident {
            Some(ident) => (
                quote! { &mut self.#ident },
                slot_label(name.to_string(), ident.to_string(), field.span()),
            ),
            None => {
                let index = Index::from(i);
                (
                    quote! { &mut self.#index },
                    slot_label(name.to_string(), i.to_string(), field.span()),
                )
            }
        };
        calls.push(quote! { crate::rewrite::Slot::rewrite_slot(#access, #label, w); });
    }

    Ok(quote! { #(#calls)* })
}

fn generate_variant_arm(
    name: &Ident,
    variant_name: &Ident,
    fields: &Fields,
) -> syn::Result<proc_macro2::TokenStream> {
    let owner = format!("{name}::{variant_name}");
    match fields {
        Fields::Unit => Ok(quote! { Self::#variant_name => {} }),
        Fields::Named(fields_named) => {
            let mut bindings = Vec::new();
            let mut calls = Vec::new();
            for field in &fields_named.named {
                if has_flag(&field.attrs, "skip")? {
                    continue;
                }
                let Some(ident) = field.ident.as_ref() else {
                    return Err(syn::Error::new_spanned(field, "named field without a name"));
                };
                let label = slot_label(owner.clone(), ident.to_string(), field.span());
                calls.push(quote! { crate::rewrite::Slot::rewrite_slot(#ident, #label, w); });
                bindings.push(ident);
            }

            Ok(quote! {
                Self::#variant_name { #(#bindings,)* .. } => {
                    #(#calls)*
                }
            })
        }
        Fields::Unnamed(fields_unnamed) => {
            let mut bindings = Vec::new();
            let mut calls = Vec::new();
            for (i, field) in fields_unnamed.unnamed.iter().enumerate() {
                if has_flag(&field.attrs, "skip")? {
                    bindings.push(quote! { _ });
                    continue;
                }
                let var = format_ident!("f{}", i);
                let label = slot_label(owner.clone(), i.to_string(), field.span());
                calls.push(quote! { crate::rewrite::Slot::rewrite_slot(#var, #label, w); });
                bindings.push(quote! { #var });
            }

            Ok(quote! {
                Self::#variant_name(#(#bindings),*) => {
                    #(#calls)*
                }
            })
        }
    }
}
