//! Proc macros for `chardiff-testhelpers`.

use unsynn::*;

// A test function is parsed as: preamble (attributes, visibility, qualifiers),
// `fn`, name, signature (generics, arguments, return type), body.

keyword! {
    KFn = "fn";
}

unsynn! {
    struct Preamble {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        preamble: Preamble, _fn: KFn, name: Ident,
        signature: Signature, body: BraceGroup
    }
}

impl quote::ToTokens for Preamble {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

/// Test attribute that installs the chardiff tracing subscriber before the
/// test body runs.
///
/// ```ignore
/// use chardiff_testhelpers::test;
///
/// #[test]
/// fn my_test() {
///     // tracing output from chardiff shows up here
/// }
/// ```
///
/// Pass another test attribute to wrap instead of `#[test]`:
/// `#[chardiff_testhelpers::test(tokio::test)]`.
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut iter = item.to_token_iter();
    let TestFn {
        preamble,
        _fn,
        name,
        signature,
        body,
    } = match iter.parse::<TestFn>() {
        Ok(test_fn) => test_fn,
        Err(err) => {
            let message = format!("#[chardiff_testhelpers::test] expects a function: {err:?}");
            return quote::quote! { ::core::compile_error!(#message); }.into();
        }
    };

    let test_attr = if attr.is_empty() {
        quote::quote! { #[::core::prelude::rust_2024::test] }
    } else {
        let attr = TokenStream::from(attr);
        quote::quote! { #[#attr] }
    };
    let body = body.0.stream();

    quote::quote! {
        #test_attr
        #preamble fn #name #signature {
            ::chardiff_testhelpers::setup();

            #body
        }
    }
    .into()
}
