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

//! Fluent assembly of a [`PhpSerializer`].
//!
//! ```rust
//! use php_serializer_core::builder::SerializerBuilder;
//! use php_serializer_core::exclusion::TransientExclusionStrategy;
//! use php_serializer_core::naming::IdentityNamingStrategy;
//!
//! let serializer = SerializerBuilder::new()
//!     .set_naming_strategy(IdentityNamingStrategy)
//!     .add_exclusion_strategy(TransientExclusionStrategy)
//!     .build();
//! assert_eq!(serializer.serialize(&true).unwrap(), b"b:1;");
//! ```

use crate::charset::Charset;
use crate::config::Config;
use crate::exclusion::{DisjunctionExclusionStrategy, FieldExclusionStrategy, NoExclusionStrategy};
use crate::naming::{NamingStrategy, PsrNamingStrategy};
use crate::php_serializer::PhpSerializer;
use crate::resolver::registry::AdapterRegistry;
use crate::serializer::{
    ArrayAdapter, BooleanAdapter, CollectionAdapter, DateTimeAdapter, DoubleAdapter,
    FloatAdapter, IntegerAdapter, LongAdapter, MapAdapter, ObjectAdapter, ReferableAdapter,
    StringAdapter, TypeAdapter,
};
use crate::types::{PrimitiveType, TypeDescriptor};
use log::debug;
use std::rc::Rc;

/// Creates the serializer once the builder has assembled its parts.
pub trait SerializerFactory {
    fn create(
        &self,
        naming: Box<dyn NamingStrategy>,
        exclusion: Box<dyn FieldExclusionStrategy>,
        registry: AdapterRegistry,
    ) -> PhpSerializer;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSerializerFactory;

impl SerializerFactory for DefaultSerializerFactory {
    fn create(
        &self,
        naming: Box<dyn NamingStrategy>,
        exclusion: Box<dyn FieldExclusionStrategy>,
        registry: AdapterRegistry,
    ) -> PhpSerializer {
        PhpSerializer::new(naming, exclusion, registry)
    }
}

pub struct SerializerBuilder {
    factory: Box<dyn SerializerFactory>,
    builtin_adapters: bool,
    adapters: Vec<(TypeDescriptor, Rc<dyn TypeAdapter>)>,
    exclusion_strategies: Vec<Box<dyn FieldExclusionStrategy>>,
    naming: Box<dyn NamingStrategy>,
    config: Config,
}

impl Default for SerializerBuilder {
    fn default() -> Self {
        SerializerBuilder {
            factory: Box::new(DefaultSerializerFactory),
            builtin_adapters: false,
            adapters: Vec::new(),
            exclusion_strategies: Vec::new(),
            naming: Box::new(PsrNamingStrategy),
            config: Config::default(),
        }
    }
}

impl SerializerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_factory<F: SerializerFactory + 'static>(mut self, factory: F) -> Self {
        self.factory = Box::new(factory);
        self
    }

    /// Registers the adapters for booleans, numbers, strings, date times,
    /// arrays, collections, maps and plain objects.
    ///
    /// They are also registered when [`SerializerBuilder::build`] is called
    /// without any adapter.
    pub fn register_builtin_adapters(mut self) -> Self {
        self.builtin_adapters = true;
        self
    }

    /// Registers `adapter` for `descriptor`. User adapters are registered
    /// after the built-in ones, so they replace them for equal descriptors.
    pub fn register_adapter<A: TypeAdapter + 'static>(
        mut self,
        descriptor: TypeDescriptor,
        adapter: A,
    ) -> Self {
        self.adapters.push((descriptor, Rc::new(adapter)));
        self
    }

    pub fn add_exclusion_strategy<S: FieldExclusionStrategy + 'static>(
        mut self,
        strategy: S,
    ) -> Self {
        self.exclusion_strategies.push(Box::new(strategy));
        self
    }

    pub fn set_naming_strategy<N: NamingStrategy + 'static>(mut self, naming: N) -> Self {
        self.naming = Box::new(naming);
        self
    }

    /// Charset for strings, array keys, field and class names.
    pub fn set_charset(mut self, charset: Charset) -> Self {
        self.config.charset = charset;
        self
    }

    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn build(self) -> PhpSerializer {
        let mut registry = AdapterRegistry::new();
        if self.builtin_adapters || self.adapters.is_empty() {
            register_builtin_adapters(&mut registry);
        }
        for (descriptor, adapter) in self.adapters {
            registry.register_rc(descriptor, adapter);
        }
        let mut strategies = self.exclusion_strategies;
        let exclusion: Box<dyn FieldExclusionStrategy> = match strategies.len() {
            0 => Box::new(NoExclusionStrategy),
            1 => strategies.remove(0),
            _ => Box::new(DisjunctionExclusionStrategy::new(strategies)),
        };
        debug!(
            "Building serializer with {} adapters, charset {}",
            registry.len(),
            self.config.charset
        );
        self.factory
            .create(self.naming, exclusion, registry)
            .with_config(self.config)
    }
}

/// Registers the built-in adapters into `registry`.
///
/// Objects are written once per serialize call and referenced with `r:`
/// afterwards; arrays, collections and maps are referenced with `R:`.
pub fn register_builtin_adapters(registry: &mut AdapterRegistry) {
    let integer: Rc<dyn TypeAdapter> = Rc::new(IntegerAdapter);
    let string: Rc<dyn TypeAdapter> = Rc::new(StringAdapter);
    registry.register(TypeDescriptor::Any, ReferableAdapter::object(ObjectAdapter));
    registry.register(TypeDescriptor::Boxed(PrimitiveType::Boolean), BooleanAdapter);
    registry.register_rc(TypeDescriptor::Boxed(PrimitiveType::Byte), integer.clone());
    registry.register_rc(TypeDescriptor::Boxed(PrimitiveType::Short), integer.clone());
    registry.register_rc(TypeDescriptor::Boxed(PrimitiveType::Int), integer);
    registry.register(TypeDescriptor::Boxed(PrimitiveType::Long), LongAdapter);
    registry.register(TypeDescriptor::Boxed(PrimitiveType::Float), FloatAdapter);
    registry.register(TypeDescriptor::Boxed(PrimitiveType::Double), DoubleAdapter);
    registry.register_rc(TypeDescriptor::Boxed(PrimitiveType::Char), string.clone());
    registry.register_rc(TypeDescriptor::string(), string);
    registry.register(TypeDescriptor::date_time(), DateTimeAdapter);
    registry.register(
        TypeDescriptor::array_of(TypeDescriptor::Any),
        ReferableAdapter::value(ArrayAdapter),
    );
    registry.register(
        TypeDescriptor::collection(),
        ReferableAdapter::value(CollectionAdapter),
    );
    registry.register(TypeDescriptor::map(), ReferableAdapter::value(MapAdapter));
}
