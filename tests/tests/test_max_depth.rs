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

use php_serializer::serializer::ObjectAdapter;
use php_serializer::value::{Field, ObjectValue};
use php_serializer::{ClassType, Error, PhpSerializer, SerializerBuilder, TypeDescriptor, Value};

#[test]
fn test_depth_within_limit() {
    let serializer = SerializerBuilder::new().max_depth(5).build();
    let nested = vec![vec![vec![vec![1]]]];
    assert_eq!(
        serializer.serialize_to_string(&nested).unwrap(),
        "a:1:{i:0;a:1:{i:0;a:1:{i:0;a:1:{i:0;i:1;}}}}"
    );
}

#[test]
fn test_depth_exceeded() {
    if php_serializer::error::should_panic_on_error() {
        return;
    }
    let serializer = SerializerBuilder::new().max_depth(3).build();
    let nested = vec![vec![vec![vec![1]]]];
    let err = serializer.serialize(&nested).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)));
    assert!(err.to_string().contains("Maximum nesting depth (3) exceeded"));

    let serializer = PhpSerializer::default().max_depth(2);
    assert!(serializer.serialize(&vec![vec![1]]).is_err());
    assert!(serializer.serialize(&vec![1]).is_ok());
}

#[test]
fn test_cycle_without_references() {
    if php_serializer::error::should_panic_on_error() {
        return;
    }
    // a plain object adapter does not track references, so the cycle never ends
    let serializer = SerializerBuilder::new()
        .register_builtin_adapters()
        .register_adapter(TypeDescriptor::Any, ObjectAdapter)
        .max_depth(16)
        .build();
    let node = Value::object(ObjectValue::new(ClassType::new("Node")));
    node.as_object()
        .unwrap()
        .borrow_mut()
        .push_field(Field::new("next", TypeDescriptor::Any, node.clone()));
    let err = serializer.serialize(&node).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)));
    node.as_object().unwrap().borrow_mut().fields.clear();
}

#[test]
fn test_cycle_with_references() {
    let serializer = SerializerBuilder::new().max_depth(2).build();
    let node = Value::object(ObjectValue::new(ClassType::new("Node")));
    node.as_object()
        .unwrap()
        .borrow_mut()
        .push_field(Field::new("next", TypeDescriptor::Any, node.clone()));
    assert_eq!(
        serializer.serialize(&node).unwrap(),
        b"O:4:\"Node\":1:{s:4:\"next\";r:1;}"
    );
    node.as_object().unwrap().borrow_mut().fields.clear();
}
