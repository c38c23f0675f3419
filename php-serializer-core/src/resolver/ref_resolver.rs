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

use crate::ensure;
use crate::error::Error;
use crate::value::ValueIdentity;
use std::collections::HashMap;

/// Reference tracker for shared and cyclic values during serialization.
///
/// Maps the allocation address of every referable value seen so far to the
/// slot it was written in, see [`Writer::next_slot`]. A referable adapter
/// asks for an existing id before writing a value; when there is one it
/// writes a back-reference instead of the value.
///
/// [`Writer::next_slot`]: crate::buffer::Writer::next_slot
///
/// # Examples
///
/// ```rust
/// use php_serializer_core::resolver::ref_resolver::ReferenceTracker;
/// use php_serializer_core::value::ValueIdentity;
/// use std::rc::Rc;
///
/// let mut tracker = ReferenceTracker::new();
/// let shared = Rc::new(42);
/// let identity = ValueIdentity::of(&shared);
///
/// // First encounter, the value has to be written, here in slot 3
/// assert_eq!(tracker.reference_of(identity), None);
/// assert_eq!(tracker.track(identity, 3).unwrap(), 3);
///
/// // Second encounter, a back-reference is written instead
/// assert_eq!(tracker.reference_of(ValueIdentity::of(&shared.clone())), Some(3));
/// ```
#[derive(Default)]
pub struct ReferenceTracker {
    /// Maps pointer addresses to reference IDs
    refs: HashMap<usize, u32>,
}

impl ReferenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id previously assigned to `identity`, `None` if it was never tracked.
    #[inline(always)]
    pub fn reference_of(&self, identity: ValueIdentity) -> Option<u32> {
        self.refs.get(&identity.addr()).copied()
    }

    /// Records that an untracked value is written in `slot`, which becomes
    /// its reference id.
    ///
    /// Tracking a value twice is an error; callers check
    /// [`ReferenceTracker::reference_of`] first.
    pub fn track(&mut self, identity: ValueIdentity, slot: u32) -> Result<u32, Error> {
        ensure!(
            !self.refs.contains_key(&identity.addr()),
            Error::tracker_misuse(format!(
                "value at {:#x} is already tracked as reference {}",
                identity.addr(),
                self.refs[&identity.addr()]
            ))
        );
        self.refs.insert(identity.addr(), slot);
        Ok(slot)
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Forget every tracked value.
    pub fn clear(&mut self) {
        self.refs.clear();
    }
}
