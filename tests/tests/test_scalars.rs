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

use chrono::NaiveDate;
use php_serializer::charset::Charset;
use php_serializer::value::{Field, ObjectValue};
use php_serializer::{ClassType, PhpSerializer, SerializerBuilder, ToValue, TypeDescriptor, Value};
use proptest::prelude::*;

#[test]
fn test_integers() {
    let serializer = PhpSerializer::default();
    assert_eq!(serializer.serialize(&10).unwrap(), b"i:10;");
    assert_eq!(serializer.serialize(&-3i8).unwrap(), b"i:-3;");
    assert_eq!(serializer.serialize(&300i16).unwrap(), b"i:300;");
    assert_eq!(serializer.serialize(&(1i64 << 40)).unwrap(), b"i:1099511627776;");
    assert_eq!(serializer.serialize(&i64::MIN).unwrap(), b"i:-9223372036854775808;");
    assert_eq!(serializer.serialize(&255u8).unwrap(), b"i:255;");
    assert_eq!(serializer.serialize(&u32::MAX).unwrap(), b"i:4294967295;");
}

#[test]
fn test_floats() {
    let serializer = PhpSerializer::default();
    let php = |value: &dyn ToValue| serializer.serialize_to_string(value).unwrap();
    assert_eq!(php(&0.5f64), "d:0.5;");
    assert_eq!(php(&0.1f64), "d:0.1;");
    assert_eq!(php(&0.1f32), "d:0.1;");
    assert_eq!(php(&3.0f64), "d:3;");
    assert_eq!(php(&-1.25f32), "d:-1.25;");
    assert_eq!(php(&f64::INFINITY), "d:INF;");
    assert_eq!(php(&f32::NEG_INFINITY), "d:-INF;");
    assert_eq!(php(&f64::NAN), "d:NAN;");
}

#[test]
fn test_large_and_small_floats() {
    let serializer = PhpSerializer::default();
    let php = |value: &dyn ToValue| serializer.serialize_to_string(value).unwrap();
    assert_eq!(php(&1e20f64), "d:1.0E+20;");
    assert_eq!(php(&-1e20f64), "d:-1.0E+20;");
    assert_eq!(php(&1.5e-7f64), "d:1.5E-7;");
    assert_eq!(php(&1e-5f64), "d:1.0E-5;");
    assert_eq!(php(&0.0001f64), "d:0.0001;");
    assert_eq!(php(&1e16f64), "d:10000000000000000;");
    assert_eq!(php(&1e20f32), "d:1.0E+20;");
}

#[test]
fn test_booleans_and_null() {
    let serializer = PhpSerializer::default();
    assert_eq!(serializer.serialize(&true).unwrap(), b"b:1;");
    assert_eq!(serializer.serialize(&false).unwrap(), b"b:0;");
    assert_eq!(serializer.serialize(&Value::Null).unwrap(), b"N;");
    assert_eq!(serializer.serialize(&None::<i32>).unwrap(), b"N;");
    assert_eq!(serializer.serialize(&Some(3)).unwrap(), b"i:3;");
}

#[test]
fn test_strings() {
    let serializer = PhpSerializer::default();
    assert_eq!(serializer.serialize_to_string("foo").unwrap(), "s:3:\"foo\";");
    assert_eq!(serializer.serialize_to_string("").unwrap(), "s:0:\"\";");
    assert_eq!(
        serializer.serialize_to_string(&"a \"quoted\" word".to_string()).unwrap(),
        "s:15:\"a \"quoted\" word\";"
    );
    // lengths are byte lengths
    assert_eq!(serializer.serialize_to_string("café").unwrap(), "s:5:\"café\";");
    assert_eq!(serializer.serialize_to_string(&'é').unwrap(), "s:2:\"é\";");
}

#[test]
fn test_latin1_strings() {
    let serializer = SerializerBuilder::new().set_charset(Charset::Latin1).build();
    assert_eq!(serializer.serialize("café").unwrap(), b"s:4:\"caf\xe9\";");
    assert_eq!(serializer.serialize("\u{20ac}5").unwrap(), b"s:2:\"?5\";");
    assert_eq!(serializer.serialize_to_string("plain").unwrap(), "s:5:\"plain\";");
}

#[test]
fn test_charset_set_on_serializer() {
    let object = Value::object(ObjectValue::new(ClassType::new("Foo")).with_field(Field::new(
        "é",
        TypeDescriptor::string(),
        Value::String("é".to_string()),
    )));
    let serializer = PhpSerializer::default().charset(Charset::Latin1);
    // field names and values share one charset
    assert_eq!(
        serializer.serialize(&object).unwrap(),
        b"O:3:\"Foo\":1:{s:1:\"\xe9\";s:1:\"\xe9\";}"
    );
    assert_eq!(serializer.serialize("é").unwrap(), b"s:1:\"\xe9\";");
}

#[test]
fn test_non_utf8_output_is_not_a_string() {
    if php_serializer::error::should_panic_on_error() {
        return;
    }
    let serializer = SerializerBuilder::new().set_charset(Charset::Latin1).build();
    let err = serializer.serialize_to_string("café").unwrap_err();
    assert!(matches!(err, php_serializer::Error::EncodingError(_)));
}

#[test]
fn test_utf16_lengths() {
    let serializer = SerializerBuilder::new().set_charset(Charset::Utf16Le).build();
    assert_eq!(serializer.serialize("hi").unwrap(), b"s:4:\"h\x00i\x00\";");
}

#[test]
fn test_date_time() {
    let date_time = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_micro_opt(3, 4, 5, 6)
        .unwrap();
    let serializer = PhpSerializer::default();
    assert_eq!(
        serializer.serialize_to_string(&date_time).unwrap(),
        "O:8:\"DateTime\":3:{\
         s:4:\"date\";s:26:\"2024-01-02 03:04:05.000006\";\
         s:13:\"timezone_type\";i:3;\
         s:8:\"timezone\";s:3:\"UTC\";}"
    );
}

proptest! {
    #[test]
    fn test_string_length_counts_bytes(s in "\\PC*") {
        let out = PhpSerializer::default().serialize(&s).unwrap();
        let prefix = format!("s:{}:\"", s.len());
        prop_assert!(out.starts_with(prefix.as_bytes()));
        prop_assert!(out.ends_with(b"\";"));
        prop_assert_eq!(out.len(), prefix.len() + s.len() + 2);
    }
}
