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

macro_rules! impl_number_adapter {
    ($(#[$meta:meta])* $name:ident, |$writer:ident| { $($pattern:pat => $write:expr,)+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl TypeAdapter for $name {
            #[inline(always)]
            fn write(
                &self,
                value: &Value,
                $writer: &mut Writer,
                _: &mut WriteContext,
            ) -> Result<(), Error> {
                match value {
                    $($pattern => $write,)+
                    other => Err(unexpected_value(stringify!($name), other)),
                }
            }
        }
    };
}

impl_number_adapter!(
    /// `i:<n>;` for bytes, shorts and ints.
    IntegerAdapter,
    |writer| {
        Value::Byte(v) => writer.write_int(*v as i64),
        Value::Short(v) => writer.write_int(*v as i64),
        Value::Int(v) => writer.write_int(*v as i64),
    }
);

impl_number_adapter!(
    /// `i:<n>;`, PHP integers are 64 bit.
    LongAdapter,
    |writer| {
        Value::Long(v) => writer.write_int(*v),
    }
);

impl_number_adapter!(
    /// `d:<n>;` with the digits of the single precision value.
    FloatAdapter,
    |writer| {
        Value::Float(v) => writer.write_float(*v),
    }
);

impl_number_adapter!(
    DoubleAdapter,
    |writer| {
        Value::Double(v) => writer.write_double(*v),
        Value::Float(v) => writer.write_double(*v as f64),
    }
);
