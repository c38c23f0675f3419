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
use crate::charset::Charset;
use crate::config::Config;
use crate::error::Error;
use crate::exclusion::FieldExclusionStrategy;
use crate::naming::NamingStrategy;
use crate::resolver::ref_resolver::ReferenceTracker;
use crate::resolver::registry::AdapterRegistry;
use crate::value::{Value, ValueIdentity};

/// State of one top-level serialize call.
///
/// Borrows the serializer's registry and policies and owns the reference
/// tracker, so ids never leak from one call into the next.
pub struct WriteContext<'a> {
    registry: &'a AdapterRegistry,
    naming: &'a dyn NamingStrategy,
    exclusion: &'a dyn FieldExclusionStrategy,
    config: &'a Config,
    pub ref_tracker: ReferenceTracker,
    current_depth: u32,
}

impl<'a> WriteContext<'a> {
    pub fn new(
        registry: &'a AdapterRegistry,
        naming: &'a dyn NamingStrategy,
        exclusion: &'a dyn FieldExclusionStrategy,
        config: &'a Config,
    ) -> WriteContext<'a> {
        WriteContext {
            registry,
            naming,
            exclusion,
            config,
            ref_tracker: ReferenceTracker::new(),
            current_depth: 0,
        }
    }

    pub fn get_registry(&self) -> &'a AdapterRegistry {
        self.registry
    }

    pub fn naming(&self) -> &'a dyn NamingStrategy {
        self.naming
    }

    pub fn exclusion(&self) -> &'a dyn FieldExclusionStrategy {
        self.exclusion
    }

    #[inline(always)]
    pub fn charset(&self) -> Charset {
        self.config.charset
    }

    #[inline(always)]
    pub fn reference_of(&self, identity: ValueIdentity) -> Option<u32> {
        self.ref_tracker.reference_of(identity)
    }

    /// Records `identity` as written in `slot`, normally
    /// [`Writer::next_slot`](crate::buffer::Writer::next_slot) right before
    /// the value is written.
    #[inline(always)]
    pub fn track(&mut self, identity: ValueIdentity, slot: u32) -> Result<u32, Error> {
        self.ref_tracker.track(identity, slot)
    }

    /// Writes `value` with the adapter registered for its runtime type.
    ///
    /// `Null` is written directly, it has no type to resolve.
    pub fn write_value(&mut self, value: &Value, writer: &mut Writer) -> Result<(), Error> {
        let descriptor = match value.type_descriptor() {
            Some(descriptor) => descriptor,
            None => return writer.write_null(),
        };
        let registry = self.registry;
        let adapter = registry.resolve(&descriptor)?;
        self.inc_depth()?;
        let result = adapter.write(value, writer, self);
        self.dec_depth();
        result
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.config.max_depth {
            return Err(Error::depth_exceed(format!(
                "Maximum nesting depth ({}) exceeded. Current depth: {}. \
                This may indicate a cycle through an adapter that does not track references \
                or an overly deep value. Consider increasing max_depth if this is expected.",
                self.config.max_depth, self.current_depth
            )));
        }
        Ok(())
    }

    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    pub fn depth(&self) -> u32 {
        self.current_depth
    }
}
