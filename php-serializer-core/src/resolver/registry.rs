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

use crate::error::Error;
use crate::resolver::capability::is_assignable;
use crate::serializer::TypeAdapter;
use crate::types::TypeDescriptor;
use log::{debug, trace};
use std::rc::Rc;

/// Ordered list of adapters, most specific type first.
///
/// Every entry precedes the entries registered for its supertypes, so the
/// first entry that accepts a type during [`AdapterRegistry::resolve`] is
/// the most specific one. Entries for unrelated types keep their
/// registration order.
///
/// The registry is filled once while configuring a serializer and is only
/// read while serializing. It is not `Sync`; registering while another
/// serialization holds a reference is not supported.
#[derive(Default, Clone)]
pub struct AdapterRegistry {
    entries: Vec<(TypeDescriptor, Rc<dyn TypeAdapter>)>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<A: TypeAdapter + 'static>(&mut self, descriptor: TypeDescriptor, adapter: A) {
        self.register_rc(descriptor, Rc::new(adapter));
    }

    /// Registers a shared adapter for `descriptor`.
    ///
    /// The entry is inserted in front of the first entry registered for a
    /// supertype of `descriptor`, or appended when there is none. An entry
    /// for an equal descriptor has its adapter replaced and keeps its place.
    pub fn register_rc(&mut self, descriptor: TypeDescriptor, adapter: Rc<dyn TypeAdapter>) {
        if let Some(entry) = self.entries.iter_mut().find(|(d, _)| *d == descriptor) {
            debug!("Replacing adapter for {}", descriptor);
            entry.1 = adapter;
            return;
        }
        let position = self
            .entries
            .iter()
            .position(|(existing, _)| is_assignable(existing, &descriptor))
            .unwrap_or(self.entries.len());
        debug!("Registering adapter for {} at position {}", descriptor, position);
        self.entries.insert(position, (descriptor, adapter));
    }

    /// Finds the adapter of the first entry accepting `descriptor`.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Result<&Rc<dyn TypeAdapter>, Error> {
        match self
            .entries
            .iter()
            .find(|(candidate, _)| is_assignable(candidate, descriptor))
        {
            Some((candidate, adapter)) => {
                trace!("Resolved {} to the adapter registered for {}", descriptor, candidate);
                Ok(adapter)
            }
            None => Err(Error::no_adapter_found(descriptor.to_string())),
        }
    }

    /// Copy of the current entries in resolution order.
    pub fn snapshot(&self) -> Vec<(TypeDescriptor, Rc<dyn TypeAdapter>)> {
        self.entries.clone()
    }

    /// Registered descriptors in resolution order.
    pub fn descriptors(&self) -> Vec<TypeDescriptor> {
        self.entries.iter().map(|(d, _)| d.clone()).collect()
    }

    pub fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        self.entries.iter().any(|(d, _)| d == descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
