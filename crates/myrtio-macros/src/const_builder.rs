//! `ConstBuilder` expansion.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Fields, GenericParam, Generics, Ident, Lifetime, Type, parse2,
};

pub fn derive(input: TokenStream) -> TokenStream {
    parse2::<DeriveInput>(input)
        .and_then(|ast| expand(&ast))
        .unwrap_or_else(|e| e.to_compile_error())
}

struct BuilderField {
    name: Ident,
    ty: Type,
    optional: bool,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "ConstBuilder can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "ConstBuilder requires a struct with named fields",
        ));
    };

    let fields: Vec<BuilderField> = named
        .named
        .iter()
        .filter_map(|f| {
            let name = f.ident.clone()?;
            Some(BuilderField {
                name,
                optional: is_option(&f.ty),
                ty: f.ty.clone(),
            })
        })
        .collect();

    let target = &input.ident;
    let builder = format_ident!("{}Builder", target);
    let vis = &input.vis;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let lifetimes: Vec<&Lifetime> = lifetimes(generics).collect();
    let markers: Vec<Ident> = lifetimes
        .iter()
        .map(|lt| format_ident!("_phantom_{}", lt.ident))
        .collect();

    let slots = fields.iter().map(|f| {
        let (name, ty) = (&f.name, &f.ty);
        quote! { #name: Option<#ty> }
    });
    let empty_slots = fields.iter().map(|f| {
        let name = &f.name;
        quote! { #name: None }
    });
    let setters = fields.iter().map(|f| {
        let (name, ty) = (&f.name, &f.ty);
        quote! {
            #[must_use]
            pub const fn #name(mut self, value: #ty) -> Self {
                self.#name = Some(value);
                self
            }
        }
    });
    let finals = fields.iter().map(|f| {
        let name = &f.name;
        let missing = if f.optional {
            quote! { None }
        } else {
            let message = format!("missing required field: {}", name);
            quote! { panic!(#message) }
        };
        quote! {
            #name: match self.#name {
                Some(v) => v,
                None => #missing,
            }
        }
    });

    Ok(quote! {
        #[derive(Clone)]
        #vis struct #builder #impl_generics #where_clause {
            #(#slots,)*
            #(#markers: core::marker::PhantomData<&#lifetimes ()>,)*
        }

        impl #impl_generics #builder #ty_generics #where_clause {
            /// Create a builder with every field unset.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    #(#empty_slots,)*
                    #(#markers: core::marker::PhantomData,)*
                }
            }

            #(#setters)*

            /// Finish the value; panics when a required field is unset.
            #[must_use]
            pub const fn build(self) -> #target #ty_generics {
                #target {
                    #(#finals,)*
                }
            }
        }

        impl #impl_generics #target #ty_generics #where_clause {
            /// Create a new builder for this type.
            #[must_use]
            pub const fn builder() -> #builder #ty_generics {
                #builder::new()
            }
        }
    })
}

fn lifetimes(generics: &Generics) -> impl Iterator<Item = &Lifetime> {
    generics.params.iter().filter_map(|p| match p {
        GenericParam::Lifetime(lt) => Some(&lt.lifetime),
        _ => None,
    })
}

/// `Option<T>` fields may stay unset.
fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "Option")
}
