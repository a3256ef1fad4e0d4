use proc_macro::TokenStream;
use syn::{Data, DeriveInput};

mod between;
mod binary;
mod unary;

#[proc_macro_derive(BinaryOperator)]
pub fn operator_methods(input: TokenStream) -> TokenStream {
    binary::operator_methods_impl(input)
}

#[proc_macro_derive(UnaryOperator)]
pub fn unary_operator_methods(input: TokenStream) -> TokenStream {
    unary::unary_operator_methods_impl(input)
}

#[proc_macro_derive(BetweenOperator)]
pub fn between_operator_methods(input: TokenStream) -> TokenStream {
    between::between_operator_methods_impl(input)
}

fn unit_variants(input: &DeriveInput) -> syn::Result<Vec<syn::Ident>> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "expected an enum with unit variants",
        ));
    };
    data.variants
        .iter()
        .map(|variant| match variant.fields {
            syn::Fields::Unit => Ok(variant.ident.clone()),
            _ => Err(syn::Error::new_spanned(
                &variant.ident,
                "expected a unit variant",
            )),
        })
        .collect()
}
