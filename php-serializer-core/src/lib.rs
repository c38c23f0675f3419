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

//! # PHP Serializer Core
//!
//! This is the core implementation of the PHP serializer. It turns typed
//! values into the text produced by PHP's native `serialize()` function,
//! including shared and cyclic object graphs.
//!
//! ## Architecture
//!
//! The core library is organized into several key modules:
//!
//! - **`php_serializer`**: Serialization entry point and public API
//! - **`builder`**: Fluent assembly of a serializer from defaults and user adapters
//! - **`buffer`**: Token writer for the serialize() grammar
//! - **`state`**: Writer state machine that rejects out-of-order tokens
//! - **`serializer`**: Type adapters, one per grammar production
//! - **`resolver`**: Capability matcher, adapter registry and reference tracking
//! - **`value`**: Runtime values and conversion from Rust data
//! - **`types`**: Type descriptors and grammar tokens
//! - **`naming`** / **`exclusion`**: Policies for class names, field names and visible fields
//! - **`charset`**: Byte encodings for strings
//! - **`error`**: Error handling and result types
//!
//! ## Key Concepts
//!
//! ### Adapter Resolution
//!
//! Every value has a runtime [`TypeDescriptor`](types::TypeDescriptor). The
//! [`AdapterRegistry`](resolver::registry::AdapterRegistry) keeps its entries
//! ordered from most to least specific and returns the first adapter whose
//! descriptor accepts the value's type:
//!
//! - a boxed type and its primitive are interchangeable (`Integer` / `int`)
//! - arrays are covariant in their component type (`Object[]` accepts `String[]`)
//! - `Object` (`TypeDescriptor::Any`) accepts every non-primitive type
//!
//! ### References
//!
//! Objects, arrays, collections and maps are shared handles. The built-in
//! adapters for them are wrapped in a
//! [`ReferableAdapter`](serializer::ReferableAdapter): a value met a second
//! time in the same call is written as `r:<id>;` (objects) or `R:<id>;`
//! (arrays), which also makes cyclic graphs terminate.
//!
//! ## Usage
//!
//! This crate is typically used through the higher-level `php-serializer`
//! crate, which adds the `PhpObject` derive macro.
//!
//! ```rust
//! use php_serializer_core::builder::SerializerBuilder;
//! use php_serializer_core::naming::IdentityNamingStrategy;
//! use php_serializer_core::types::{ClassType, PrimitiveType, TypeDescriptor};
//! use php_serializer_core::value::{Field, ObjectValue, Value};
//!
//! let serializer = SerializerBuilder::new()
//!     .set_naming_strategy(IdentityNamingStrategy)
//!     .build();
//! let foo = Value::object(ObjectValue::new(ClassType::new("Foo")).with_field(Field::new(
//!     "field",
//!     TypeDescriptor::Primitive(PrimitiveType::Int),
//!     Value::Int(10),
//! )));
//! assert_eq!(
//!     serializer.serialize_to_string(&foo).unwrap(),
//!     "O:3:\"Foo\":1:{s:5:\"field\";i:10;}"
//! );
//! ```

pub mod buffer;
pub mod builder;
pub mod charset;
pub mod config;
pub mod error;
pub mod exclusion;
pub mod naming;
pub mod php_serializer;
pub mod resolver;
pub mod serializer;
pub mod state;
pub mod types;
pub mod value;

pub use builder::SerializerBuilder;
pub use error::Error;
pub use php_serializer::PhpSerializer;
pub use types::{ClassType, PrimitiveType, TypeDescriptor};
pub use value::{PhpClass, ToValue, Value};
