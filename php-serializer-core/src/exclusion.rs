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

use crate::value::Field;

/// Decides which fields of an object are left out of its body.
pub trait FieldExclusionStrategy {
    fn should_skip_field(&self, field: &Field) -> bool;
}

impl<F> FieldExclusionStrategy for F
where
    F: Fn(&Field) -> bool,
{
    fn should_skip_field(&self, field: &Field) -> bool {
        self(field)
    }
}

/// Keeps every field.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoExclusionStrategy;

impl FieldExclusionStrategy for NoExclusionStrategy {
    fn should_skip_field(&self, _field: &Field) -> bool {
        false
    }
}

/// Skips fields marked transient.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransientExclusionStrategy;

impl FieldExclusionStrategy for TransientExclusionStrategy {
    fn should_skip_field(&self, field: &Field) -> bool {
        field.is_transient()
    }
}

/// Skips class-level (static) fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticExclusionStrategy;

impl FieldExclusionStrategy for StaticExclusionStrategy {
    fn should_skip_field(&self, field: &Field) -> bool {
        field.is_static()
    }
}

/// Skips a field when any of its strategies does.
#[derive(Default)]
pub struct DisjunctionExclusionStrategy {
    strategies: Vec<Box<dyn FieldExclusionStrategy>>,
}

impl DisjunctionExclusionStrategy {
    pub fn new(strategies: Vec<Box<dyn FieldExclusionStrategy>>) -> Self {
        DisjunctionExclusionStrategy { strategies }
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl FieldExclusionStrategy for DisjunctionExclusionStrategy {
    fn should_skip_field(&self, field: &Field) -> bool {
        self.strategies.iter().any(|s| s.should_skip_field(field))
    }
}
