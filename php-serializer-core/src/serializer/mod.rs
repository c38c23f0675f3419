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

//! Type adapters: one grammar production per adapter.
//!
//! An adapter receives a value whose runtime type it was registered for,
//! writes that value through the [`Writer`] and hands nested values back to
//! [`WriteContext::write_value`], which resolves their adapters through the
//! same registry.

use crate::buffer::Writer;
use crate::error::Error;
use crate::resolver::context::WriteContext;
use crate::value::Value;

mod array;
mod bool;
mod collection;
mod datetime;
mod map;
mod number;
pub mod referable;
pub mod serializable;
mod string;
pub mod struct_;

pub use self::array::ArrayAdapter;
pub use self::bool::BooleanAdapter;
pub use self::collection::CollectionAdapter;
pub use self::datetime::DateTimeAdapter;
pub use self::map::MapAdapter;
pub use self::number::{DoubleAdapter, FloatAdapter, IntegerAdapter, LongAdapter};
pub use self::referable::{ReferableAdapter, ReferenceKind};
pub use self::serializable::SerializableObjectAdapter;
pub use self::string::StringAdapter;
pub use self::struct_::ObjectAdapter;

/// Encoding strategy for the values of one registered type.
///
/// Implementations must not keep the value beyond the call.
pub trait TypeAdapter {
    fn write(
        &self,
        value: &Value,
        writer: &mut Writer,
        context: &mut WriteContext,
    ) -> Result<(), Error>;
}

/// Adapter backed by a closure, see [`from_fn`].
pub struct FnAdapter<F>(F);

/// Turns a closure into a [`TypeAdapter`].
///
/// ```rust
/// use php_serializer_core::error::Error;
/// use php_serializer_core::serializer::{from_fn, TypeAdapter};
/// use php_serializer_core::value::Value;
///
/// let upper = from_fn(|value, writer, context| match value {
///     Value::String(s) => writer.write_str(&s.to_uppercase(), context.charset()),
///     _ => Err(Error::type_error("expected a string")),
/// });
/// ```
pub fn from_fn<F>(f: F) -> FnAdapter<F>
where
    F: Fn(&Value, &mut Writer, &mut WriteContext) -> Result<(), Error>,
{
    FnAdapter(f)
}

impl<F> TypeAdapter for FnAdapter<F>
where
    F: Fn(&Value, &mut Writer, &mut WriteContext) -> Result<(), Error>,
{
    fn write(
        &self,
        value: &Value,
        writer: &mut Writer,
        context: &mut WriteContext,
    ) -> Result<(), Error> {
        (self.0)(value, writer, context)
    }
}

/// Error for an adapter handed a value it does not encode.
#[cold]
pub(crate) fn unexpected_value(adapter: &str, value: &Value) -> Error {
    Error::type_error(format!("{} cannot write {:?}", adapter, value))
}
