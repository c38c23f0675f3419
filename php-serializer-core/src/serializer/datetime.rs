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

pub const DATE_TIME_CLASS_NAME: &str = "DateTime";
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
/// PHP's timezone_type for a timezone given by identifier.
const TIMEZONE_TYPE_ID: i64 = 3;
const TIMEZONE: &str = "UTC";

/// Writes a date time the way PHP serializes a `DateTime` object:
///
/// ```text
/// O:8:"DateTime":3:{s:4:"date";s:26:"2024-01-02 03:04:05.000000";s:13:"timezone_type";i:3;s:8:"timezone";s:3:"UTC";}
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DateTimeAdapter;

impl TypeAdapter for DateTimeAdapter {
    fn write(
        &self,
        value: &Value,
        writer: &mut Writer,
        context: &mut WriteContext,
    ) -> Result<(), Error> {
        let date_time = match value {
            Value::DateTime(date_time) => date_time,
            other => return Err(unexpected_value("DateTimeAdapter", other)),
        };
        let charset = context.charset();
        writer.begin_object(&charset.encode(DATE_TIME_CLASS_NAME), 3)?;
        writer.write_str_key("date", charset)?;
        writer.write_str(&date_time.format(DATE_FORMAT).to_string(), charset)?;
        writer.write_str_key("timezone_type", charset)?;
        writer.write_int(TIMEZONE_TYPE_ID)?;
        writer.write_str_key("timezone", charset)?;
        writer.write_str(TIMEZONE, charset)?;
        writer.end()
    }
}
