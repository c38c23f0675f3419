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

/// `s:<len>:"<bytes>";` for strings and chars, `len` counts the bytes of
/// the charset configured on the serializer.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringAdapter;

impl TypeAdapter for StringAdapter {
    fn write(
        &self,
        value: &Value,
        writer: &mut Writer,
        context: &mut WriteContext,
    ) -> Result<(), Error> {
        match value {
            Value::String(s) => writer.write_str(s, context.charset()),
            Value::Char(c) => {
                let mut buf = [0u8; 4];
                writer.write_str(c.encode_utf8(&mut buf), context.charset())
            }
            other => Err(unexpected_value("StringAdapter", other)),
        }
    }
}
