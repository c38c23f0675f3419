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
use crate::value::Value;

/// `b:0;` / `b:1;`
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanAdapter;

impl TypeAdapter for BooleanAdapter {
    #[inline(always)]
    fn write(&self, value: &Value, writer: &mut Writer, _: &mut WriteContext) -> Result<(), Error> {
        match value {
            Value::Bool(v) => writer.write_bool(*v),
            other => Err(unexpected_value("BooleanAdapter", other)),
        }
    }
}
