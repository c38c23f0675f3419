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
use crate::value::{ArrayKey, Value};

/// Maps become associative arrays, `a:<n>:{<key><value>...}`, in entry order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MapAdapter;

impl TypeAdapter for MapAdapter {
    fn write(
        &self,
        value: &Value,
        writer: &mut Writer,
        context: &mut WriteContext,
    ) -> Result<(), Error> {
        let map = match value {
            Value::Map(map) => map.borrow(),
            other => return Err(unexpected_value("MapAdapter", other)),
        };
        writer.begin_array(map.entries.len())?;
        for (key, entry) in map.entries.iter() {
            match key {
                ArrayKey::Int(i) => writer.write_int_key(*i)?,
                ArrayKey::Str(s) => writer.write_str_key(s, context.charset())?,
            }
            context.write_value(entry, writer)?;
        }
        writer.end()
    }
}
