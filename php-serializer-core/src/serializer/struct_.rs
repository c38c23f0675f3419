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
use crate::value::{Field, Value};

/// Plain objects: `O:<name-len>:"<class>":<n>:{<name><value>...}`.
///
/// The class and field names come from the context's naming strategy, the
/// fields written are those its exclusion strategy keeps, in declaration
/// order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectAdapter;

impl TypeAdapter for ObjectAdapter {
    fn write(
        &self,
        value: &Value,
        writer: &mut Writer,
        context: &mut WriteContext,
    ) -> Result<(), Error> {
        let object = match value {
            Value::Object(object) => object.borrow(),
            other => return Err(unexpected_value("ObjectAdapter", other)),
        };
        let exclusion = context.exclusion();
        let naming = context.naming();
        let charset = context.charset();
        let fields: Vec<&Field> = object
            .fields
            .iter()
            .filter(|field| !exclusion.should_skip_field(field))
            .collect();
        let class_name = naming.class_name(&object.class);
        writer.begin_object(&charset.encode(&class_name), fields.len())?;
        for field in fields {
            writer.write_str_key(&naming.field_name(&field.name), charset)?;
            context.write_value(&field.value, writer)?;
        }
        writer.end()
    }
}
