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

use php_serializer::builder::{SerializerFactory, SerializerBuilder};
use php_serializer::charset::Charset;
use php_serializer::config::DEFAULT_MAX_DEPTH;
use php_serializer::exclusion::FieldExclusionStrategy;
use php_serializer::naming::NamingStrategy;
use php_serializer::resolver::registry::AdapterRegistry;
use php_serializer::serializer::from_fn;
use php_serializer::{PhpSerializer, PrimitiveType, TypeDescriptor};
use std::cell::Cell;
use std::rc::Rc;

struct CountingFactory(Rc<Cell<u32>>);

impl SerializerFactory for CountingFactory {
    fn create(
        &self,
        naming: Box<dyn NamingStrategy>,
        exclusion: Box<dyn FieldExclusionStrategy>,
        registry: AdapterRegistry,
    ) -> PhpSerializer {
        self.0.set(self.0.get() + 1);
        PhpSerializer::new(naming, exclusion, registry)
    }
}

#[test]
fn test_defaults() {
    let serializer = SerializerBuilder::new().build();
    assert_eq!(serializer.get_config().charset(), Charset::Utf8);
    assert_eq!(serializer.get_config().max_depth(), DEFAULT_MAX_DEPTH);
    let registry = serializer.get_registry();
    for descriptor in [
        TypeDescriptor::Any,
        TypeDescriptor::Boxed(PrimitiveType::Boolean),
        TypeDescriptor::Boxed(PrimitiveType::Int),
        TypeDescriptor::Boxed(PrimitiveType::Double),
        TypeDescriptor::string(),
        TypeDescriptor::date_time(),
        TypeDescriptor::array_of(TypeDescriptor::Any),
        TypeDescriptor::collection(),
        TypeDescriptor::map(),
    ] {
        assert!(registry.contains(&descriptor), "missing {}", descriptor);
    }
    // Object accepts everything and must come last
    assert_eq!(registry.descriptors().last(), Some(&TypeDescriptor::Any));
}

#[test]
fn test_user_adapters_only() {
    let serializer = SerializerBuilder::new()
        .register_adapter(
            TypeDescriptor::Boxed(PrimitiveType::Int),
            from_fn(|_, writer, _| writer.write_int(42)),
        )
        .build();
    assert_eq!(serializer.get_registry().len(), 1);
    assert_eq!(serializer.serialize(&1).unwrap(), b"i:42;");
}

#[test]
fn test_override_builtin() {
    let serializer = SerializerBuilder::new()
        .register_builtin_adapters()
        .register_adapter(
            TypeDescriptor::Boxed(PrimitiveType::Int),
            from_fn(|_, writer, _| writer.write_int(42)),
        )
        .build();
    assert_eq!(
        serializer.get_registry().len(),
        PhpSerializer::default().get_registry().len()
    );
    assert_eq!(serializer.serialize(&1).unwrap(), b"i:42;");
    assert_eq!(serializer.serialize(&1i16).unwrap(), b"i:1;");
    assert_eq!(
        serializer.serialize_to_string(&vec![1, 2]).unwrap(),
        "a:2:{i:0;i:42;i:1;i:42;}"
    );
}

#[test]
fn test_custom_factory() {
    let created = Rc::new(Cell::new(0));
    let serializer = SerializerBuilder::new()
        .with_factory(CountingFactory(created.clone()))
        .max_depth(8)
        .build();
    assert_eq!(created.get(), 1);
    // the builder configuration is applied to what the factory returns
    assert_eq!(serializer.get_config().max_depth(), 8);
    assert_eq!(serializer.serialize(&"x").unwrap(), b"s:1:\"x\";");
}

#[test]
fn test_charset() {
    let serializer = SerializerBuilder::new().set_charset(Charset::Latin1).build();
    assert_eq!(serializer.get_config().charset(), Charset::Latin1);
    assert_eq!(serializer.serialize(&'é').unwrap(), b"s:1:\"\xe9\";");
    assert_eq!(
        serializer.serialize(&vec!["ü".to_string()]).unwrap(),
        b"a:1:{i:0;s:1:\"\xfc\";}"
    );
}

#[test]
fn test_serializer_is_reusable() {
    let serializer = PhpSerializer::default();
    for i in 0..3 {
        assert_eq!(
            serializer.serialize_to_string(&i).unwrap(),
            format!("i:{};", i)
        );
    }
}
