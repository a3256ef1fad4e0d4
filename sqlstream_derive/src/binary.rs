use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

use crate::unit_variants;

pub fn operator_methods_impl(input: TokenStream) -> TokenStream {
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
            fn #where_fn<F, V>(&mut self, field: F, value: V) -> crate::Result<&mut Self>
            where
                F: ::core::convert::Into<::smol_str::SmolStr>,
                V: crate::IntoValue,
            {
                self.where_binary(field, #enum_name::#var_name, value)
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
