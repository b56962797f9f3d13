use std::collections::BTreeSet;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, LitInt, Result, Type,
    parse::{Parse, ParseStream},
};

pub(crate) fn expand_from_messages(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromMessages` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromMessages` may only be derived on structs with named fields.",
        ))?
    };

    let mut collections = Vec::new();
    let mut seen = BTreeSet::new();
    let mut order: Option<Ident> = None;

    // Fields without a `message` attribute are left alone.
    for field in &fields.named {
        match Entry::parse(field)? {
            None => continue,
            Some(Entry::Order(name)) => {
                if order.replace(name).is_some() {
                    Err(Error::new_spanned(
                        field,
                        "Only one field may record the message order.",
                    ))?
                }
            }
            Some(Entry::Collection(collection)) => {
                if !seen.insert(collection.global) {
                    Err(Error::new_spanned(
                        &collection.number,
                        "Message numbers must be unique.",
                    ))?
                }

                collections.push(collection);
            }
        }
    }

    // Only messages that are collected are recorded in the order.
    let record_order = order
        .filter(|_| !collections.is_empty())
        .map(|order| {
            let numbers = collections.iter().map(|c| &c.number);

            quote! {
                if ::core::matches!(global, #(#numbers)|*) {
                    self.#order.push(global);
                }
            }
        });

    let cases = collections.iter().map(|collection| {
        let Collection {
            name,
            number,
            repeated,
            ..
        } = collection;

        let receiver = if *repeated {
            quote! {
                self.#name.push(::core::default::Default::default());
                self.#name
                    .last_mut()
                    .map(|m| m as &mut dyn ::regulator::listener::FromMessage)
            }
        } else {
            quote! {
                let m: &mut dyn ::regulator::listener::FromMessage =
                    self.#name.insert(::core::default::Default::default());
                ::core::option::Option::Some(m)
            }
        };

        quote! { #number => { #receiver } }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl ::regulator::listener::FromMessages for #name {
            fn add_message(
                &mut self,
                global: u16,
            ) -> ::core::option::Option<&mut dyn ::regulator::listener::FromMessage> {
                #record_order

                match global {
                    #(#cases)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    Ok(expanded.into())
}

struct Collection {
    name: Ident,
    number: LitInt,
    global: u16,
    repeated: bool,
}

/// A field taking part in the derive: a message collection, or the record of
/// message order.
enum Entry {
    Collection(Collection),
    Order(Ident),
}

impl Entry {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("message")) else {
            return Ok(None);
        };

        let Some(name) = field.ident.clone() else {
            Err(Error::new_spanned(field, "Field must be named."))?
        };

        let number = match attr.meta.require_list()?.parse_args()? {
            MessageAttribute::Number(number) => number,
            MessageAttribute::Order => {
                if !is_vec(&field.ty) {
                    Err(Error::new_spanned(
                        &field.ty,
                        "The message order is recorded in a `Vec<u16>`.",
                    ))?
                }

                return Ok(Some(Self::Order(name)));
            }
        };

        let global = number.base10_parse::<u16>()?;

        let Type::Path(path) = &field.ty else {
            Err(Error::new_spanned(
                &field.ty,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?
        };

        let repeated = match path.path.segments.last() {
            Some(segment) if segment.ident == "Vec" => true,
            Some(segment) if segment.ident == "Option" => false,
            _ => Err(Error::new_spanned(
                &path.path,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?,
        };

        Ok(Some(Self::Collection(Collection {
            name,
            number,
            global,
            repeated,
        })))
    }
}

fn is_vec(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Vec"),
        _ => false,
    }
}

enum MessageAttribute {
    Number(LitInt),
    Order,
}

impl Parse for MessageAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Ident) {
            let ident = input.parse::<Ident>()?;

            if ident != "order" {
                Err(Error::new_spanned(
                    ident,
                    "Message identifier must be an integer literal or `order`.",
                ))?
            }

            Ok(Self::Order)
        } else {
            Ok(Self::Number(input.parse::<LitInt>()?))
        }
    }
}
