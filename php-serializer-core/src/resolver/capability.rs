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

use crate::types::TypeDescriptor;

/// Decides whether a value of type `requested` can be handled by an adapter
/// registered for `candidate`.
///
/// Two array types are compared by their component types, one level at a
/// time. Otherwise primitives are replaced by their boxed type on both sides
/// and `candidate` must be `requested` itself or one of its supertypes.
///
/// ```rust
/// use php_serializer_core::resolver::capability::is_assignable;
/// use php_serializer_core::types::{PrimitiveType, TypeDescriptor};
///
/// let boxed = TypeDescriptor::Boxed(PrimitiveType::Int);
/// let primitive = TypeDescriptor::Primitive(PrimitiveType::Int);
/// assert!(is_assignable(&boxed, &primitive));
/// assert!(is_assignable(&TypeDescriptor::Any, &TypeDescriptor::string()));
/// assert!(!is_assignable(&TypeDescriptor::string(), &TypeDescriptor::Any));
/// ```
pub fn is_assignable(candidate: &TypeDescriptor, requested: &TypeDescriptor) -> bool {
    if let (TypeDescriptor::Array(candidate), TypeDescriptor::Array(requested)) =
        (candidate, requested)
    {
        return is_assignable(candidate, requested);
    }
    is_same_or_supertype(&candidate.boxed(), &requested.boxed())
}

// Both sides are already boxed.
fn is_same_or_supertype(candidate: &TypeDescriptor, requested: &TypeDescriptor) -> bool {
    if candidate == requested || *candidate == TypeDescriptor::Any {
        return true;
    }
    requested
        .supertypes()
        .iter()
        .any(|supertype| is_same_or_supertype(candidate, supertype))
}
