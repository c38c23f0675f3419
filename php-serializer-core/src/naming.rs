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

use crate::types::ClassType;
use heck::ToSnakeCase;

/// Renders class and field names as they appear in the output.
pub trait NamingStrategy {
    fn class_name(&self, class: &ClassType) -> String;

    fn field_name(&self, raw_name: &str) -> String;
}

/// Writes names exactly as declared.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityNamingStrategy;

impl NamingStrategy for IdentityNamingStrategy {
    fn class_name(&self, class: &ClassType) -> String {
        class.name().to_string()
    }

    fn field_name(&self, raw_name: &str) -> String {
        raw_name.to_string()
    }
}

/// Maps dotted class names onto PSR-4 style PHP namespaces.
///
/// ```rust
/// use php_serializer_core::naming::{NamingStrategy, PsrNamingStrategy};
/// use php_serializer_core::types::ClassType;
///
/// let class = ClassType::new("com.acme.model.User");
/// assert_eq!(PsrNamingStrategy.class_name(&class), "Com\\Acme\\Model\\User");
/// assert_eq!(PsrNamingStrategy.field_name("firstName"), "firstName");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PsrNamingStrategy;

impl NamingStrategy for PsrNamingStrategy {
    fn class_name(&self, class: &ClassType) -> String {
        class
            .name()
            .split('.')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join("\\")
    }

    fn field_name(&self, raw_name: &str) -> String {
        raw_name.to_string()
    }
}

/// PSR class names with snake_case field names.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnakeCaseNamingStrategy;

impl NamingStrategy for SnakeCaseNamingStrategy {
    fn class_name(&self, class: &ClassType) -> String {
        PsrNamingStrategy.class_name(class)
    }

    fn field_name(&self, raw_name: &str) -> String {
        raw_name.to_snake_case()
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
