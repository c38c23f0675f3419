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

use php_serializer::serializer::{ReferableAdapter, SerializableObjectAdapter};
use php_serializer::value::{Field, ObjectValue};
use php_serializer::{
    ClassType, Error, PhpSerializer, PrimitiveType, SerializerBuilder, TypeDescriptor, Value,
};

fn money_class() -> ClassType {
    ClassType::new("Money")
}

fn money(cents: i64) -> Value {
    Value::object(ObjectValue::new(money_class()).with_field(Field::new(
        "cents",
        TypeDescriptor::Primitive(PrimitiveType::Long),
        Value::Long(cents),
    )))
}

fn encode_money(object: &ObjectValue) -> Result<Vec<u8>, Error> {
    match object.field("cents") {
        Some(Field {
            value: Value::Long(cents),
            ..
        }) => Ok(cents.to_string().into_bytes()),
        _ => Err(Error::type_error("Money without cents")),
    }
}

fn serializer() -> PhpSerializer {
    SerializerBuilder::new()
        .register_builtin_adapters()
        .register_adapter(
            TypeDescriptor::class(money_class()),
            SerializableObjectAdapter::new(encode_money),
        )
        .build()
}

#[test]
fn test_serializable_object() {
    assert_eq!(
        serializer().serialize_to_string(&money(1250)).unwrap(),
        "C:5:\"Money\":4:{1250}"
    );
}

#[test]
fn test_serializable_object_in_array() {
    let prices = Value::array(TypeDescriptor::Any, vec![money(1), money(-20)]);
    assert_eq!(
        serializer().serialize_to_string(&prices).unwrap(),
        "a:2:{i:0;C:5:\"Money\":1:{1}i:1;C:5:\"Money\":3:{-20}}"
    );
}

#[test]
fn test_empty_payload() {
    let serializer = SerializerBuilder::new()
        .register_builtin_adapters()
        .register_adapter(
            TypeDescriptor::class(money_class()),
            SerializableObjectAdapter::new(|_: &ObjectValue| Ok(Vec::new())),
        )
        .build();
    assert_eq!(serializer.serialize(&money(1)).unwrap(), b"C:5:\"Money\":0:{}");
}

#[test]
fn test_shared_serializable_object() {
    let serializer = SerializerBuilder::new()
        .register_builtin_adapters()
        .register_adapter(
            TypeDescriptor::class(money_class()),
            ReferableAdapter::object(SerializableObjectAdapter::new(encode_money)),
        )
        .build();
    let price = money(5);
    let prices = Value::array(TypeDescriptor::Any, vec![price.clone(), price]);
    assert_eq!(
        serializer.serialize_to_string(&prices).unwrap(),
        "a:2:{i:0;C:5:\"Money\":1:{5}i:1;r:2;}"
    );
}

#[test]
fn test_failing_encoder() {
    if php_serializer::error::should_panic_on_error() {
        return;
    }
    let broken = Value::object(ObjectValue::new(money_class()));
    let err = serializer().serialize(&broken).unwrap_err();
    assert!(matches!(err, Error::TypeError(_)));
}
