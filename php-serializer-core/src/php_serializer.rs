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
use crate::builder::SerializerBuilder;
use crate::charset::Charset;
use crate::config::Config;
use crate::ensure;
use crate::error::Error;
use crate::exclusion::FieldExclusionStrategy;
use crate::naming::NamingStrategy;
use crate::resolver::context::WriteContext;
use crate::resolver::registry::AdapterRegistry;
use crate::value::ToValue;
use log::trace;

/// Serializer producing PHP `serialize()` output.
///
/// Holds the adapter registry and the naming and exclusion policies. Each
/// call to [`PhpSerializer::serialize`] uses its own writer and reference
/// tracker, so one serializer can be reused for any number of values.
///
/// # Examples
///
/// ```rust
/// use php_serializer_core::php_serializer::PhpSerializer;
///
/// let serializer = PhpSerializer::default();
/// assert_eq!(serializer.serialize(&10).unwrap(), b"i:10;");
/// assert_eq!(serializer.serialize_to_string("foo").unwrap(), "s:3:\"foo\";");
/// assert_eq!(serializer.serialize(&Vec::<i32>::new()).unwrap(), b"a:0:{}");
/// ```
///
/// Custom configuration:
///
/// ```rust
/// use php_serializer_core::charset::Charset;
/// use php_serializer_core::php_serializer::PhpSerializer;
///
/// let serializer = PhpSerializer::default()
///     .charset(Charset::Latin1)
///     .max_depth(64);
/// ```
pub struct PhpSerializer {
    registry: AdapterRegistry,
    naming: Box<dyn NamingStrategy>,
    exclusion: Box<dyn FieldExclusionStrategy>,
    config: Config,
}

impl Default for PhpSerializer {
    fn default() -> Self {
        SerializerBuilder::new().build()
    }
}

impl PhpSerializer {
    pub fn new(
        naming: Box<dyn NamingStrategy>,
        exclusion: Box<dyn FieldExclusionStrategy>,
        registry: AdapterRegistry,
    ) -> Self {
        PhpSerializer {
            registry,
            naming,
            exclusion,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Charset for strings, array keys, field and class names.
    pub fn charset(mut self, charset: Charset) -> Self {
        self.config.charset = charset;
        self
    }

    /// Sets the maximum number of nested adapter calls for one value.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn get_registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn serialize<T: ToValue + ?Sized>(&self, value: &T) -> Result<Vec<u8>, Error> {
        let mut writer = Writer::default();
        self.serialize_with_writer(value, &mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Serializes into a `String`, fails with [`Error::EncodingError`] when the
    /// configured charset produced bytes that are not UTF-8.
    pub fn serialize_to_string<T: ToValue + ?Sized>(&self, value: &T) -> Result<String, Error> {
        let bytes = self.serialize(value)?;
        String::from_utf8(bytes).map_err(|e| {
            Error::encoding_error(format!(
                "Output is not valid UTF-8 at byte {}, serialize to bytes with charset {}",
                e.utf8_error().valid_up_to(),
                self.config.charset
            ))
        })
    }

    /// Writes one root value into `writer`, which must not have been
    /// written to before.
    ///
    /// On error the writer content is incomplete and must be discarded.
    pub fn serialize_with_writer<T: ToValue + ?Sized>(
        &self,
        value: &T,
        writer: &mut Writer,
    ) -> Result<(), Error> {
        let value = value.to_value();
        trace!("Serializing {:?}", value);
        let mut context = WriteContext::new(
            &self.registry,
            self.naming.as_ref(),
            self.exclusion.as_ref(),
            &self.config,
        );
        context.write_value(&value, writer)?;
        ensure!(
            writer.is_finished(),
            Error::illegal_state_transition(format!(
                "Serialization returned with the writer {}",
                writer.state()
            ))
        );
        Ok(())
    }
}
