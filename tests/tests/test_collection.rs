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

use php_serializer::types::ClassType;
use php_serializer::value::ArrayKey;
use php_serializer::{PhpSerializer, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, LinkedList, VecDeque};

#[test]
fn test_vec() {
    let serializer = PhpSerializer::default();
    assert_eq!(
        serializer.serialize_to_string(&vec![1, 2, 3]).unwrap(),
        "a:3:{i:0;i:1;i:1;i:2;i:2;i:3;}"
    );
    assert_eq!(serializer.serialize_to_string(&Vec::<String>::new()).unwrap(), "a:0:{}");
    assert_eq!(
        serializer.serialize_to_string(&[true, false][..]).unwrap(),
        "a:2:{i:0;b:1;i:1;b:0;}"
    );
}

#[test]
fn test_nested_vec() {
    let serializer = PhpSerializer::default();
    let nested = vec![vec!["a".to_string()], vec![]];
    assert_eq!(
        serializer.serialize_to_string(&nested).unwrap(),
        "a:2:{i:0;a:1:{i:0;s:1:\"a\";}i:1;a:0:{}}"
    );
}

#[test]
fn test_vec_of_options() {
    let serializer = PhpSerializer::default();
    assert_eq!(
        serializer.serialize_to_string(&vec![Some(1.5), None]).unwrap(),
        "a:2:{i:0;d:1.5;i:1;N;}"
    );
}

#[test]
fn test_lists() {
    let serializer = PhpSerializer::default();
    let deque: VecDeque<i64> = [5, 6].into_iter().collect();
    assert_eq!(
        serializer.serialize_to_string(&deque).unwrap(),
        "a:2:{i:0;i:5;i:1;i:6;}"
    );
    let list: LinkedList<char> = ['x'].into_iter().collect();
    assert_eq!(serializer.serialize_to_string(&list).unwrap(), "a:1:{i:0;s:1:\"x\";}");
}

#[test]
fn test_set() {
    let serializer = PhpSerializer::default();
    let set: BTreeSet<i32> = [3, 1].into_iter().collect();
    assert_eq!(
        serializer.serialize_to_string(&set).unwrap(),
        "a:2:{i:0;i:1;i:1;i:3;}"
    );
}

#[test]
fn test_custom_collection_class() {
    let serializer = PhpSerializer::default();
    let bag = Value::collection(
        ClassType::new("Bag"),
        vec![Value::String("a".to_string()), Value::Int(1)],
    );
    assert_eq!(
        serializer.serialize_to_string(&bag).unwrap(),
        "a:2:{i:0;s:1:\"a\";i:1;i:1;}"
    );
}

#[test]
fn test_string_keyed_map() {
    let serializer = PhpSerializer::default();
    let mut map = BTreeMap::new();
    map.insert("b".to_string(), 2);
    map.insert("a".to_string(), 1);
    assert_eq!(
        serializer.serialize_to_string(&map).unwrap(),
        "a:2:{s:1:\"a\";i:1;s:1:\"b\";i:2;}"
    );
}

#[test]
fn test_int_keyed_map() {
    let serializer = PhpSerializer::default();
    let mut map = BTreeMap::new();
    map.insert(-1i64, "neg".to_string());
    map.insert(10i64, "ten".to_string());
    assert_eq!(
        serializer.serialize_to_string(&map).unwrap(),
        "a:2:{i:-1;s:3:\"neg\";i:10;s:3:\"ten\";}"
    );
}

#[test]
fn test_hash_map() {
    let serializer = PhpSerializer::default();
    let mut map = HashMap::new();
    map.insert('k', vec![1u16]);
    assert_eq!(
        serializer.serialize_to_string(&map).unwrap(),
        "a:1:{s:1:\"k\";a:1:{i:0;i:1;}}"
    );
    assert_eq!(
        serializer.serialize_to_string(&HashMap::<String, i32>::new()).unwrap(),
        "a:0:{}"
    );
}

#[test]
fn test_map_value_keeps_entry_order() {
    let serializer = PhpSerializer::default();
    let map = Value::map(vec![
        (ArrayKey::from("z"), Value::Bool(true)),
        (ArrayKey::Int(0), Value::Null),
        (ArrayKey::from("a"), Value::Long(7)),
    ]);
    assert_eq!(
        serializer.serialize_to_string(&map).unwrap(),
        "a:3:{s:1:\"z\";b:1;i:0;N;s:1:\"a\";i:7;}"
    );
}
