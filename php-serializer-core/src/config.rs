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

use crate::charset::Charset;

pub const DEFAULT_MAX_DEPTH: u32 = 512;

/// Configuration for PHP serialization.
///
/// Shared between the [`PhpSerializer`](crate::php_serializer::PhpSerializer)
/// and every [`WriteContext`](crate::resolver::context::WriteContext) it
/// creates.
#[derive(Clone, Debug)]
pub struct Config {
    /// Charset used for strings, array keys, field and class names.
    pub charset: Charset,
    /// Maximum number of nested adapter calls for one value.
    pub max_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            charset: Charset::Utf8,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
