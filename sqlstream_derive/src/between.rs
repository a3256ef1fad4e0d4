use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

use crate::unit_variants;

pub fn between_operator_methods_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;
    let trait_name = format_ident!("{}Methods", enum_name);

    let variants = match unit_variants(&input) {
        Ok(variants) => variants,
        Err(e) => return e.to_compile_error().into(),
    };

    let methods = variants.iter().map(|var_name| {
        let snake = var_name.to_string().to_snake_case();
        let where_fn = format_ident!("where_{}", snake);

        quote! {
            fn #where_fn<F, L, H>(&mut self, field: F, low: L, high: H) -> crate::Result<&mut Self>
            where
                F: ::core::convert::Into<::smol_str::SmolStr>,
                L: crate::IntoValue,
                H: crate::IntoValue,
            {
                self.where_range(field, #enum_name::#var_name, low, high)
            }
        }
    });

    quote! {
        pub trait #trait_name: crate::ConditionMerge {
            #(#methods)*
        }

        impl<T> #trait_name for T where T: crate::ConditionMerge {}
    }
    .into()
}
