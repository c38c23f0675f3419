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

use crate::buffer::Writer;
use crate::error::Error;
use crate::resolver::context::WriteContext;
use crate::serializer::{unexpected_value, TypeAdapter};
use crate::value::{ObjectValue, Value};

/// Objects that encode their own body, written as
/// `C:<name-len>:"<class>":<payload-len>:{<payload>}`.
///
/// ```rust
/// use php_serializer_core::serializer::SerializableObjectAdapter;
///
/// let adapter = SerializableObjectAdapter::new(|object| {
///     Ok(format!("{} fields", object.fields.len()).into_bytes())
/// });
/// ```
pub struct SerializableObjectAdapter<F> {
    encode: F,
}

impl<F> SerializableObjectAdapter<F>
where
    F: Fn(&ObjectValue) -> Result<Vec<u8>, Error>,
{
    pub fn new(encode: F) -> Self {
        SerializableObjectAdapter { encode }
    }
}

impl<F> TypeAdapter for SerializableObjectAdapter<F>
where
    F: Fn(&ObjectValue) -> Result<Vec<u8>, Error>,
{
    fn write(
        &self,
        value: &Value,
        writer: &mut Writer,
        context: &mut WriteContext,
    ) -> Result<(), Error> {
        let object = match value {
            Value::Object(object) => object.borrow(),
            other => return Err(unexpected_value("SerializableObjectAdapter", other)),
        };
        // encode before opening, a failing encoder leaves the writer untouched
        let payload = (self.encode)(&*object)?;
        let class_name = context.naming().class_name(&object.class);
        writer.begin_serializable_object(&context.charset().encode(&class_name))?;
        writer.write_payload(&payload)
    }
}
