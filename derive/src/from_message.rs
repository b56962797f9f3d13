use std::collections::{BTreeMap, BTreeSet};

use proc_macro2::Span;
use quote::{ToTokens, format_ident, quote};
use syn::{
    Data, DeriveInput, Error, ExprClosure, Field, Fields, GenericArgument, Ident, LitInt, Pat,
    PathArguments, Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

/// Primitives a decoder can publish, in the order of the listener methods.
const PRIMITIVES: [&str; 10] = [
    "u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64", "f32", "f64",
];

pub(crate) fn expand_from_message(input: &DeriveInput) -> Result<proc_macro::TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`FromMessage` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`FromMessage` may only be derived on structs with named fields.",
        ))?
    };

    // Receivers grouped by the primitive they accept, keyed for a stable
    // expansion order.
    let mut by_primitive: BTreeMap<usize, Vec<(LitInt, Receiver)>> = BTreeMap::new();
    let mut numbers = BTreeSet::new();
    let mut time: Option<Receiver> = None;

    for field in &fields.named {
        let Some(FieldMetadata {
            identifier,
            primitive,
            receiver,
            span,
        }) = FieldMetadata::parse(field)?
        else {
            continue;
        };

        match identifier {
            FieldIdentifier::Number(number) => {
                if !numbers.insert(number.base10_parse::<u8>()?) {
                    Err(Error::new(number.span(), "Field numbers must be unique."))?
                }

                by_primitive
                    .entry(primitive)
                    .or_default()
                    .push((number, receiver));
            }
            FieldIdentifier::Time => {
                if PRIMITIVES[primitive] != "u8" {
                    Err(Error::new(span, "The time offset is received as a `u8`."))?
                }

                if time.replace(receiver).is_some() {
                    Err(Error::new(span, "Only one field may receive the time offset."))?
                }
            }
        }
    }

    let methods = by_primitive.into_iter().map(|(primitive, receivers)| {
        let primitive = format_ident!("{}", PRIMITIVES[primitive]);
        let method = format_ident!("add_{}", primitive);

        let cases = receivers.into_iter().map(|(number, receiver)| {
            let assignment = receiver.assign(quote! { value });
            quote! { #number => { #assignment } }
        });

        quote! {
            fn #method(&mut self, field: u8, value: #primitive) {
                match field {
                    #(#cases)*
                    _ => {}
                }
            }
        }
    });

    let time = time.map(|receiver| {
        let assignment = receiver.assign(quote! { offset });

        quote! {
            fn add_time_offset(&mut self, offset: u8) {
                #assignment
            }
        }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl ::regulator::listener::FromMessage for #name {
            #(#methods)*
            #time
        }
    };

    Ok(expanded.into())
}

/// Where a received value goes: straight into an `Option<T>`, or through an
/// accumulator closure.
struct Receiver {
    name: Ident,
    accumulator: Option<(Type, ExprClosure)>,
}

impl Receiver {
    fn assign(self, value: proc_macro2::TokenStream) -> proc_macro2::TokenStream {
        let name = self.name;

        match self.accumulator {
            Some((field_type, closure)) => {
                let mut inputs = closure.inputs.iter();
                let acc = inputs.next();
                let val = inputs.next();
                let body = closure.body;

                quote! {
                    (|#acc: &mut #field_type, #val| { #body })(&mut self.#name, #value);
                }
            }
            None => quote! {
                self.#name = ::core::option::Option::Some(#value);
            },
        }
    }
}

enum FieldIdentifier {
    Number(LitInt),
    Time,
}

struct FieldMetadata {
    identifier: FieldIdentifier,
    /// Index into [`PRIMITIVES`].
    primitive: usize,
    receiver: Receiver,
    span: Span,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let Some(name) = field.ident.clone() else {
            Err(Error::new_spanned(field, "Field must be named."))?
        };

        let span = attr.span();

        let FieldAttribute {
            identifier,
            accumulator,
        } = attr.meta.require_list()?.parse_args()?;

        let primitive = match &accumulator {
            Some(closure) => closure_primitive(closure)?,
            None => option_primitive(&field.ty)?,
        };

        let Some(index) = PRIMITIVES
            .iter()
            .position(|p| primitive.to_token_stream().to_string() == *p)
        else {
            Err(Error::new_spanned(
                &primitive,
                "Received values must be one of `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `f32` or `f64`.",
            ))?
        };

        Ok(Some(Self {
            identifier,
            primitive: index,
            receiver: Receiver {
                name,
                accumulator: accumulator.map(|c| (field.ty.clone(), c)),
            },
            span,
        }))
    }
}

/// The primitive named by the annotated second parameter of an accumulator.
fn closure_primitive(closure: &ExprClosure) -> Result<Type> {
    if closure.inputs.len() != 2 {
        Err(Error::new_spanned(
            closure,
            "Accumulator closure must have two parameters.",
        ))?
    }

    let Some(Pat::Type(parameter)) = closure.inputs.iter().nth(1) else {
        Err(Error::new_spanned(
            closure,
            "Accumulator closure's second parameter must be annotated with the received primitive.",
        ))?
    };

    Ok((*parameter.ty).clone())
}

/// The `T` of a plain `Option<T>` field.
fn option_primitive(ty: &Type) -> Result<Type> {
    let Type::Path(path) = ty else {
        Err(Error::new_spanned(ty, "Field must have a type annotation."))?
    };

    let segment = match path.path.segments.last() {
        Some(segment) if segment.ident == "Option" => segment,
        _ => Err(Error::new_spanned(
            &path.path,
            "Field without an accumulator must have type `Option<T>`.",
        ))?,
    };

    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        Err(Error::new_spanned(
            &segment.arguments,
            "Field of type `Option<T>` must have a generic parameter.",
        ))?
    };

    match arguments.args.first() {
        Some(GenericArgument::Type(inner)) => Ok(inner.clone()),
        _ => Err(Error::new_spanned(
            &arguments.args,
            "Generic argument of a field of type `Option<T>` must be a type.",
        )),
    }
}

struct FieldAttribute {
    identifier: FieldIdentifier,
    accumulator: Option<ExprClosure>,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let identifier = if input.peek(Ident) {
            let ident = input.parse::<Ident>()?;

            if ident != "time" {
                Err(Error::new_spanned(
                    ident,
                    "Field identifier must be an integer literal or `time`.",
                ))?
            }

            FieldIdentifier::Time
        } else {
            FieldIdentifier::Number(input.parse::<LitInt>()?)
        };

        let accumulator = if input.is_empty() {
            None
        } else {
            input.parse::<Token![,]>()?;
            Some(input.parse::<ExprClosure>()?)
        };

        Ok(Self {
            identifier,
            accumulator,
        })
    }
}
