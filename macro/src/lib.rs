use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{parse_macro_input, spanned::Spanned, ItemFn};

/// Runs an `async fn` test to completion on `settle::runtime::block_on`.
///
/// # Examples
///
/// ```ignore
/// #[settle::test]
/// async fn chains_settle() -> anyhow::Result<()> {
///     let value = settle::task::from_value(1).select(|n| n + 1).await.into_result()?;
///     assert_eq!(value, 2);
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn attr_macro_test(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    if input.sig.asyncness.is_none() {
        return quote_spanned! { input.sig.fn_token.span()=>
            compile_error!("fn must be `async fn`");
        }
        .into();
    }

    let name = input.sig.ident;

    if !input.sig.inputs.is_empty() {
        return quote_spanned! { input.sig.inputs.span()=>
            compile_error!("arguments to tests are not supported");
        }
        .into();
    }
    let attrs = input.attrs;
    let output = input.sig.output;
    let block = input.block;
    quote! {
        #[test]
        pub fn #name() #output {

            #(#attrs)*
            async fn __run() #output {
                #block
            }

            ::settle::runtime::block_on(async {
                __run().await
            })
        }
    }
    .into()
}
