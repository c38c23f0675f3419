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

//! # PHP Serializer
//!
//! Serializes Rust values into the notation of PHP's native `serialize()`
//! function, so that PHP code can restore them with `unserialize()`.
//!
//! ## Key Features
//!
//! - **PHP compatible output**: integers, floats, booleans, strings, arrays,
//!   plain objects and `Serializable` objects
//! - **Shared and cyclic graphs**: repeated objects become `r:<id>;`,
//!   repeated arrays `R:<id>;`
//! - **Pluggable adapters**: register an adapter for any type; the most
//!   specific registered type wins regardless of registration order
//! - **Policies**: naming strategies (PSR namespaces, snake_case fields) and
//!   field exclusion strategies
//! - **Charsets**: string lengths are byte lengths under the configured charset
//!
//! ## Object Serialization
//!
//! ```rust
//! use php_serializer::{PhpObject, SerializerBuilder};
//!
//! #[derive(PhpObject)]
//! struct Address {
//!     city: String,
//! }
//!
//! #[derive(PhpObject)]
//! #[php(name = "app.model.Person")]
//! struct Person {
//!     name: String,
//!     age: i32,
//!     address: Address,
//!     tags: Vec<String>,
//! }
//!
//! let serializer = SerializerBuilder::new().build();
//! let person = Person {
//!     name: "Ann".to_string(),
//!     age: 30,
//!     address: Address { city: "Oslo".to_string() },
//!     tags: vec!["admin".to_string()],
//! };
//! let out = serializer.serialize_to_string(&person).unwrap();
//! assert_eq!(
//!     out,
//!     "O:16:\"App\\Model\\Person\":4:{\
//!      s:4:\"name\";s:3:\"Ann\";\
//!      s:3:\"age\";i:30;\
//!      s:7:\"address\";O:7:\"Address\":1:{s:4:\"city\";s:4:\"Oslo\";}\
//!      s:4:\"tags\";a:1:{i:0;s:5:\"admin\";}}"
//! );
//! ```
//!
//! ## Custom Adapters
//!
//! ```rust
//! use php_serializer::{ClassType, Error, SerializerBuilder, TypeDescriptor, Value};
//! use php_serializer::serializer::SerializableObjectAdapter;
//! use php_serializer::value::{Field, ObjectValue};
//!
//! let money = TypeDescriptor::class(ClassType::new("Money"));
//! let serializer = SerializerBuilder::new()
//!     .register_builtin_adapters()
//!     .register_adapter(
//!         money,
//!         SerializableObjectAdapter::new(|object: &ObjectValue| match object.field("cents") {
//!             Some(Field { value: Value::Long(cents), .. }) => Ok(cents.to_string().into_bytes()),
//!             _ => Err(Error::type_error("Money without cents")),
//!         }),
//!     )
//!     .build();
//! # let _ = serializer;
//! ```
//!
//! ## Error Handling
//!
//! Serialization fails only on configuration or adapter defects: a value
//! without a matching adapter (`NoAdapterFound`), an adapter writing tokens
//! out of order (`IllegalStateTransition`) or tracking a value twice
//! (`TrackerMisuse`). The partial output of a failed call is discarded.

pub use php_serializer_core::{
    buffer, builder, charset, config, error, exclusion, naming, php_serializer, resolver,
    serializer, state, types, value,
};
pub use php_serializer_core::{
    ClassType, Error, PhpClass, PhpSerializer, PrimitiveType, SerializerBuilder, ToValue,
    TypeDescriptor, Value,
};
pub use php_serializer_derive::PhpObject;
