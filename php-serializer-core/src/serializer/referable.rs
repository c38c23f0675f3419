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
use crate::serializer::TypeAdapter;
use crate::value::Value;
use std::rc::Rc;

/// Back-reference token written for a value seen before.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `r:<id>;`, the same object handle.
    Object,
    /// `R:<id>;`, the same array slot.
    Value,
}

/// Decorator that writes each shared value once.
///
/// The first time a value is met it is tracked, then written by the inner
/// adapter. Tracking happens before delegating, so a cycle leading back to
/// the value finds it tracked and gets a back-reference. Scalars have no
/// identity and always go straight to the inner adapter.
#[derive(Clone)]
pub struct ReferableAdapter {
    inner: Rc<dyn TypeAdapter>,
    kind: ReferenceKind,
}

impl ReferableAdapter {
    pub fn new(inner: Rc<dyn TypeAdapter>, kind: ReferenceKind) -> Self {
        ReferableAdapter { inner, kind }
    }

    pub fn object<A: TypeAdapter + 'static>(inner: A) -> Self {
        Self::new(Rc::new(inner), ReferenceKind::Object)
    }

    pub fn value<A: TypeAdapter + 'static>(inner: A) -> Self {
        Self::new(Rc::new(inner), ReferenceKind::Value)
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }
}

impl TypeAdapter for ReferableAdapter {
    fn write(
        &self,
        value: &Value,
        writer: &mut Writer,
        context: &mut WriteContext,
    ) -> Result<(), Error> {
        let identity = match value.identity() {
            Some(identity) => identity,
            None => return self.inner.write(value, writer, context),
        };
        if let Some(id) = context.reference_of(identity) {
            return match self.kind {
                ReferenceKind::Object => writer.write_object_reference(id),
                ReferenceKind::Value => writer.write_value_reference(id),
            };
        }
        context.track(identity, writer.next_slot())?;
        self.inner.write(value, writer, context)
    }
}
