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

//! Parsing of `#[php(...)]` attributes.
//!
//! On the struct:
//! - `name = "..."`: class name written to the output (default: the struct name)
//!
//! On a field:
//! - `rename = "..."`: field name before the naming strategy applies (default: the field name)
//! - `skip`: leave the field out of the object entirely
//! - `transient`: mark the field transient, exclusion strategies decide whether it is written

use syn::{Attribute, Field, LitStr};

/// Parsed `#[php(...)]` attributes of a struct.
#[derive(Debug, Clone, Default)]
pub struct PhpClassMeta {
    pub name: Option<String>,
}

/// Parsed `#[php(...)]` attributes of a field.
#[derive(Debug, Clone, Default)]
pub struct PhpFieldMeta {
    pub rename: Option<String>,
    pub skip: bool,
    pub transient: bool,
}

fn php_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("php"))
}

pub fn parse_class_meta(attrs: &[Attribute]) -> syn::Result<PhpClassMeta> {
    let mut meta = PhpClassMeta::default();
    for attr in php_attrs(attrs) {
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("name") {
                let lit: LitStr = nested.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "class name must not be empty"));
                }
                meta.name = Some(lit.value());
                Ok(())
            } else {
                Err(nested.error("unsupported php attribute, expected `name`"))
            }
        })?;
    }
    Ok(meta)
}

pub fn parse_field_meta(field: &Field) -> syn::Result<PhpFieldMeta> {
    let mut meta = PhpFieldMeta::default();
    for attr in php_attrs(&field.attrs) {
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                let lit: LitStr = nested.value()?.parse()?;
                meta.rename = Some(lit.value());
            } else if nested.path.is_ident("skip") {
                meta.skip = true;
            } else if nested.path.is_ident("transient") {
                meta.transient = true;
            } else {
                return Err(nested.error(
                    "unsupported php attribute, expected `rename`, `skip` or `transient`",
                ));
            }
            Ok(())
        })?;
    }
    Ok(meta)
}
