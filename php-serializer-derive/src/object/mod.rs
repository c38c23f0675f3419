// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

mod field_meta;

use field_meta::{parse_class_meta, parse_field_meta};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields, GenericParam};

pub fn derive_php_object(input: &DeriveInput) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "PhpObject can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "PhpObject can only be derived for structs",
            ))
        }
    };

    let class_meta = parse_class_meta(&input.attrs)?;
    let class_name = class_meta.name.unwrap_or_else(|| name.to_string());

    let mut field_exprs = Vec::with_capacity(fields.len());
    for field in fields {
        let meta = parse_field_meta(field)?;
        if meta.skip {
            continue;
        }
        // named fields always have an ident
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let field_name = meta.rename.unwrap_or_else(|| ident.to_string());
        let transient = if meta.transient {
            quote! { .transient() }
        } else {
            quote! {}
        };
        field_exprs.push(quote! {
            php_serializer_core::value::Field::new(
                #field_name,
                <#ty as php_serializer_core::value::ToValue>::declared_type(),
                php_serializer_core::value::ToValue::to_value(&self.#ident),
            )
            #transient
        });
    }

    let mut generics = input.generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(ty) = param {
            ty.bounds
                .push(parse_quote!(php_serializer_core::value::ToValue));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics php_serializer_core::value::PhpClass for #name #ty_generics #where_clause {
            fn php_class() -> php_serializer_core::types::ClassType {
                php_serializer_core::types::ClassType::new(#class_name)
            }
        }

        impl #impl_generics php_serializer_core::value::ToValue for #name #ty_generics #where_clause {
            fn to_value(&self) -> php_serializer_core::value::Value {
                let object = php_serializer_core::value::ObjectValue::new(
                    <Self as php_serializer_core::value::PhpClass>::php_class(),
                )
                #(.with_field(#field_exprs))*;
                php_serializer_core::value::Value::object(object)
            }

            fn declared_type() -> php_serializer_core::types::TypeDescriptor {
                php_serializer_core::types::TypeDescriptor::class(
                    <Self as php_serializer_core::value::PhpClass>::php_class(),
                )
            }
        }
    })
}
