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

//! # PHP Serializer Derive Macros
//!
//! This crate provides procedural macros for the PHP serializer.
//!
//! ## Available Macros
//!
//! ### `#[derive(PhpObject)]`
//!
//! Implements `PhpClass` and `ToValue` for a struct with named fields, so
//! the struct is written as a plain PHP object. Fields keep their
//! declaration order.
//!
//! **Attributes:**
//! - `#[php(name = "App\\Model\\User")]` on the struct: class name
//! - `#[php(rename = "...")]` on a field: field name
//! - `#[php(skip)]` on a field: never written
//! - `#[php(transient)]` on a field: marked transient for exclusion strategies
//!
//! **Example:**
//! ```rust
//! use php_serializer_core::builder::SerializerBuilder;
//! use php_serializer_core::naming::IdentityNamingStrategy;
//! use php_serializer_derive::PhpObject;
//!
//! #[derive(PhpObject)]
//! struct Foo {
//!     field: i32,
//!     #[php(skip)]
//!     cache: Vec<u8>,
//! }
//!
//! let serializer = SerializerBuilder::new()
//!     .set_naming_strategy(IdentityNamingStrategy)
//!     .build();
//! let foo = Foo { field: 10, cache: vec![] };
//! assert_eq!(
//!     serializer.serialize_to_string(&foo).unwrap(),
//!     "O:3:\"Foo\":1:{s:5:\"field\";i:10;}"
//! );
//! ```
//!
//! The generated code refers to `php_serializer_core`, which must be a
//! dependency of the crate using the macro.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;

#[proc_macro_derive(PhpObject, attributes(php))]
pub fn proc_macro_derive_php_object(input: proc_macro::TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_php_object(&input)
}
