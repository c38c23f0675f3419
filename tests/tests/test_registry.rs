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

use php_serializer::resolver::registry::AdapterRegistry;
use php_serializer::serializer::{from_fn, TypeAdapter};
use php_serializer::value::{ObjectValue, ToValue};
use php_serializer::{ClassType, Error, PrimitiveType, SerializerBuilder, TypeDescriptor, Value};
use proptest::prelude::*;

/// Adapter writing its own name as a string, whatever the value.
fn tag(name: &'static str) -> impl TypeAdapter {
    from_fn(move |_, writer, context| writer.write_str(name, context.charset()))
}

fn hierarchy() -> (TypeDescriptor, TypeDescriptor, TypeDescriptor) {
    let base = ClassType::new("Base");
    let middle = ClassType::new("Middle").extends(base.clone().into());
    let leaf = ClassType::new("Leaf").extends(middle.clone().into());
    (base.into(), middle.into(), leaf.into())
}

fn object_of(descriptor: &TypeDescriptor) -> Value {
    match descriptor {
        TypeDescriptor::Class(class) => Value::object(ObjectValue::new((**class).clone())),
        _ => panic!("not a class: {}", descriptor),
    }
}

#[test]
fn test_empty_registry_resolves_nothing() {
    let registry = AdapterRegistry::new();
    for descriptor in [
        TypeDescriptor::Any,
        TypeDescriptor::Primitive(PrimitiveType::Int),
        TypeDescriptor::array_of(TypeDescriptor::string()),
    ] {
        assert!(matches!(
            registry.resolve(&descriptor),
            Err(Error::NoAdapterFound(_))
        ));
    }
}

#[test]
fn test_resolving_unregistered_type_fails_serialization() {
    if php_serializer::error::should_panic_on_error() {
        return;
    }
    let serializer = SerializerBuilder::new()
        .register_adapter(TypeDescriptor::string(), tag("string"))
        .build();
    let err = serializer.serialize(&1).unwrap_err();
    assert_eq!(err.to_string(), "No adapter registered for Integer");
}

#[test]
fn test_primitive_resolves_boxed_adapter_and_back() {
    let serializer = SerializerBuilder::new()
        .register_adapter(TypeDescriptor::Boxed(PrimitiveType::Long), tag("boxed"))
        .build();
    assert_eq!(serializer.serialize_to_string(&7i64).unwrap(), "s:5:\"boxed\";");

    let mut registry = AdapterRegistry::new();
    registry.register(TypeDescriptor::Primitive(PrimitiveType::Long), tag("primitive"));
    assert!(registry
        .resolve(&TypeDescriptor::Boxed(PrimitiveType::Long))
        .is_ok());
}

#[test]
fn test_array_covariance() {
    let serializer = SerializerBuilder::new()
        .register_adapter(TypeDescriptor::array_of(TypeDescriptor::Any), tag("objects"))
        .build();
    let strings = vec!["a".to_string()];
    assert_eq!(serializer.serialize_to_string(&strings).unwrap(), "s:7:\"objects\";");

    let serializer = SerializerBuilder::new()
        .register_adapter(TypeDescriptor::array_of(TypeDescriptor::Any), tag("objects"))
        .register_adapter(TypeDescriptor::array_of(TypeDescriptor::string()), tag("strings"))
        .build();
    assert_eq!(serializer.serialize_to_string(&strings).unwrap(), "s:7:\"strings\";");
    assert_eq!(serializer.serialize_to_string(&vec![1]).unwrap(), "s:7:\"objects\";");
}

#[test]
fn test_number_adapter_covers_all_numbers() {
    let serializer = SerializerBuilder::new()
        .register_adapter(TypeDescriptor::number(), tag("number"))
        .build();
    for out in [
        serializer.serialize_to_string(&1i8),
        serializer.serialize_to_string(&1i64),
        serializer.serialize_to_string(&1.5f64),
    ] {
        assert_eq!(out.unwrap(), "s:6:\"number\";");
    }
    if !php_serializer::error::should_panic_on_error() {
        assert!(serializer.serialize(&true).is_err());
    }
}

#[test]
fn test_specific_collection_adapter_wins_over_any() {
    let serializer = SerializerBuilder::new()
        .register_adapter(TypeDescriptor::Any, tag("any"))
        .register_adapter(TypeDescriptor::collection(), tag("collection"))
        .build();
    let list = Value::list(vec![]);
    assert_eq!(serializer.serialize_to_string(&list).unwrap(), "s:10:\"collection\";");
    assert_eq!(serializer.serialize_to_string("x").unwrap(), "s:3:\"any\";");
}

#[test]
fn test_snapshot_is_in_specificity_order() {
    let (base, middle, leaf) = hierarchy();
    let mut registry = AdapterRegistry::new();
    registry.register(base.clone(), tag("base"));
    registry.register(leaf.clone(), tag("leaf"));
    registry.register(TypeDescriptor::string(), tag("string"));
    registry.register(middle.clone(), tag("middle"));
    let order: Vec<TypeDescriptor> = registry.snapshot().into_iter().map(|(d, _)| d).collect();
    assert_eq!(order, vec![leaf, middle, base, TypeDescriptor::string()]);
}

#[test]
fn test_reregistration_overrides() {
    let serializer = SerializerBuilder::new()
        .register_adapter(TypeDescriptor::string(), tag("first"))
        .register_adapter(TypeDescriptor::string(), tag("second"))
        .build();
    assert_eq!(serializer.get_registry().len(), 1);
    assert_eq!(serializer.serialize_to_string("x").unwrap(), "s:6:\"second\";");
}

#[test]
fn test_declared_types_of_rust_values() {
    assert_eq!(
        Vec::<i32>::declared_type(),
        TypeDescriptor::array_of(TypeDescriptor::Primitive(PrimitiveType::Int))
    );
    assert_eq!(
        Option::<i32>::declared_type(),
        TypeDescriptor::Boxed(PrimitiveType::Int)
    );
}

proptest! {
    #[test]
    fn test_most_specific_adapter_regardless_of_order(
        order in Just(vec![0usize, 1, 2, 3, 4]).prop_shuffle()
    ) {
        let (base, middle, leaf) = hierarchy();
        let entries = [
            (TypeDescriptor::Any, "any"),
            (base.clone(), "base"),
            (middle.clone(), "middle"),
            (leaf.clone(), "leaf"),
            (TypeDescriptor::string(), "string"),
        ];
        let mut builder = SerializerBuilder::new();
        for i in order {
            let (descriptor, name) = entries[i].clone();
            builder = builder.register_adapter(descriptor, tag(name));
        }
        let serializer = builder.build();

        prop_assert_eq!(serializer.serialize_to_string(&object_of(&leaf)).unwrap(), "s:4:\"leaf\";");
        prop_assert_eq!(serializer.serialize_to_string(&object_of(&middle)).unwrap(), "s:6:\"middle\";");
        prop_assert_eq!(serializer.serialize_to_string(&object_of(&base)).unwrap(), "s:4:\"base\";");
        prop_assert_eq!(serializer.serialize_to_string("s").unwrap(), "s:6:\"string\";");
        prop_assert_eq!(serializer.serialize_to_string(&1).unwrap(), "s:3:\"any\";");

        let descriptors = serializer.get_registry().descriptors();
        let position = |d: &TypeDescriptor| descriptors.iter().position(|x| x == d).unwrap();
        prop_assert!(position(&leaf) < position(&middle));
        prop_assert!(position(&middle) < position(&base));
        prop_assert!(position(&base) < position(&TypeDescriptor::Any));
        prop_assert!(position(&TypeDescriptor::string()) < position(&TypeDescriptor::Any));
    }
}
