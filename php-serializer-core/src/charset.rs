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

//! Charsets used to turn Rust strings into the raw bytes of a `s:` token.
//!
//! PHP strings are byte strings, so the length written in `s:<len>:"..."` is
//! the length of the encoded bytes, not the number of characters.

use crate::error::Error;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Byte written for characters the charset cannot represent.
pub const REPLACEMENT_BYTE: u8 = b'?';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    #[default]
    Utf8,
    /// ISO-8859-1.
    Latin1,
    /// US-ASCII.
    Ascii,
    Utf16Le,
    Utf16Be,
}

impl Charset {
    /// Canonical name, as understood by [`Charset::for_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Latin1 => "ISO-8859-1",
            Charset::Ascii => "US-ASCII",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Utf16Be => "UTF-16BE",
        }
    }

    /// Looks a charset up by its canonical name or a common alias, ignoring case.
    ///
    /// ```rust
    /// use php_serializer_core::charset::Charset;
    ///
    /// assert_eq!(Charset::for_name("iso-8859-1"), Some(Charset::Latin1));
    /// assert_eq!(Charset::for_name("utf8"), Some(Charset::Utf8));
    /// assert_eq!(Charset::for_name("EBCDIC"), None);
    /// ```
    pub fn for_name(name: &str) -> Option<Charset> {
        let normalized = name.trim().to_ascii_uppercase().replace('_', "-");
        match normalized.as_str() {
            "UTF-8" | "UTF8" => Some(Charset::Utf8),
            "ISO-8859-1" | "ISO8859-1" | "LATIN1" | "LATIN-1" => Some(Charset::Latin1),
            "US-ASCII" | "ASCII" => Some(Charset::Ascii),
            "UTF-16LE" | "UTF16LE" => Some(Charset::Utf16Le),
            "UTF-16BE" | "UTF16BE" => Some(Charset::Utf16Be),
            _ => None,
        }
    }

    /// Encodes `s`, borrowing when the UTF-8 bytes can be used as they are.
    pub fn encode<'a>(&self, s: &'a str) -> Cow<'a, [u8]> {
        match self {
            Charset::Utf8 => Cow::Borrowed(s.as_bytes()),
            Charset::Latin1 => encode_single_byte(s, 0xFF),
            Charset::Ascii => encode_single_byte(s, 0x7F),
            Charset::Utf16Le => Cow::Owned(s.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Charset::Utf16Be => Cow::Owned(s.encode_utf16().flat_map(u16::to_be_bytes).collect()),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::for_name(s).ok_or_else(|| Error::unsupported(format!("Unsupported charset {s:?}")))
    }
}

fn encode_single_byte(s: &str, max: u32) -> Cow<'_, [u8]> {
    if s.is_ascii() {
        return Cow::Borrowed(s.as_bytes());
    }
    Cow::Owned(
        s.chars()
            .map(|c| {
                let code = c as u32;
                if code <= max {
                    code as u8
                } else {
                    REPLACEMENT_BYTE
                }
            })
            .collect(),
    )
}
