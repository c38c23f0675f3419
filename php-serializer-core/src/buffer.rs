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
use crate::error::Error;
use crate::state::{Operation, WriterState};
use crate::types::Token;
use std::fmt::{Display, LowerExp};
use std::mem;

/// Token writer for the PHP serialize() grammar.
///
/// Every method first moves the [`WriterState`] through the matching
/// [`Operation`] and only writes bytes when the transition is legal. A
/// rejected call leaves both the buffer and the state untouched.
///
/// The writer also numbers the value slots the way `unserialize()` does:
/// every value written in a value position takes the next slot, starting
/// with the root at 1. Keys and `R:` back-references take none.
///
/// ```rust
/// use php_serializer_core::buffer::Writer;
/// use php_serializer_core::charset::Charset;
///
/// let mut writer = Writer::default();
/// writer.begin_array(1).unwrap();
/// writer.write_int_key(0).unwrap();
/// writer.write_str("foo", Charset::Utf8).unwrap();
/// writer.end().unwrap();
/// assert_eq!(writer.dump(), b"a:1:{i:0;s:3:\"foo\";}");
/// assert!(writer.write_null().is_err());
/// ```
pub struct Writer {
    pub(crate) bf: Vec<u8>,
    state: WriterState,
    /// Value slots taken so far.
    slots: u32,
}

impl Default for Writer {
    fn default() -> Self {
        Writer::with_capacity(0)
    }
}

impl Writer {
    pub fn with_capacity(capacity: usize) -> Self {
        Writer {
            bf: Vec::with_capacity(capacity),
            state: WriterState::InitialValue,
            slots: 0,
        }
    }

    pub fn reset(&mut self) {
        // keep capacity and reset len to 0
        self.bf.clear();
        self.state = WriterState::InitialValue;
        self.slots = 0;
    }

    /// Slot the next value will take, which is the id a back-reference to
    /// that value uses.
    #[inline(always)]
    pub fn next_slot(&self) -> u32 {
        self.slots + 1
    }

    pub fn dump(&self) -> Vec<u8> {
        self.bf.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn state(&self) -> &WriterState {
        &self.state
    }

    #[inline(always)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    fn apply(&mut self, operation: Operation) -> Result<(), Error> {
        self.transition(operation)?;
        if operation.is_value() {
            self.slots += 1;
        }
        Ok(())
    }

    fn transition(&mut self, operation: Operation) -> Result<(), Error> {
        let state = mem::replace(&mut self.state, WriterState::Finished);
        match state.transition(operation) {
            Ok(next) => {
                self.state = next;
                Ok(())
            }
            Err(rejected) => {
                let err = Error::illegal_state_transition(rejected.to_string());
                self.state = rejected.state;
                Err(err)
            }
        }
    }

    #[inline(always)]
    fn token(&mut self, token: Token) {
        self.bf.push(token.into());
        self.bf.push(b':');
    }

    #[inline(always)]
    fn decimal<T: Display>(&mut self, value: T) {
        self.bf.extend_from_slice(value.to_string().as_bytes());
    }

    /// Shortest digits that parse back to `value`, laid out like PHP with
    /// `serialize_precision = -1`. Magnitudes in `[1.0E-4, 1.0E+17)` are
    /// positional, the rest `<d>.<digits>E<sign><exp>`.
    fn finite_double<T: Display + LowerExp>(&mut self, value: T) {
        let scientific = format!("{value:e}");
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };
        if !(-4..17).contains(&exponent) {
            self.bf.extend_from_slice(mantissa.as_bytes());
            if !mantissa.contains('.') {
                self.bf.extend_from_slice(b".0");
            }
            self.bf.push(b'E');
            self.bf.push(if exponent < 0 { b'-' } else { b'+' });
            self.decimal(exponent.unsigned_abs());
        } else {
            self.decimal(value);
        }
    }

    fn quoted(&mut self, bytes: &[u8]) {
        self.decimal(bytes.len());
        self.bf.extend_from_slice(b":\"");
        self.bf.extend_from_slice(bytes);
        self.bf.push(b'"');
    }

    pub fn write_null(&mut self) -> Result<(), Error> {
        self.apply(Operation::Scalar)?;
        self.bf.extend_from_slice(b"N;");
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), Error> {
        self.apply(Operation::Scalar)?;
        self.token(Token::Boolean);
        self.bf.push(if value { b'1' } else { b'0' });
        self.bf.push(b';');
        Ok(())
    }

    pub fn write_int(&mut self, value: i64) -> Result<(), Error> {
        self.apply(Operation::Scalar)?;
        self.write_int_token(value);
        Ok(())
    }

    pub fn write_double(&mut self, value: f64) -> Result<(), Error> {
        self.apply(Operation::Scalar)?;
        self.token(Token::Double);
        if value.is_nan() {
            self.bf.extend_from_slice(b"NAN");
        } else if value.is_infinite() {
            let literal: &[u8] = if value > 0.0 { b"INF" } else { b"-INF" };
            self.bf.extend_from_slice(literal);
        } else {
            self.finite_double(value);
        }
        self.bf.push(b';');
        Ok(())
    }

    /// Writes a float with the shortest digits of its single precision value,
    /// `0.1f32` is written as `d:0.1;` rather than its widened `f64` digits.
    pub fn write_float(&mut self, value: f32) -> Result<(), Error> {
        if !value.is_finite() {
            return self.write_double(value as f64);
        }
        self.apply(Operation::Scalar)?;
        self.token(Token::Double);
        self.finite_double(value);
        self.bf.push(b';');
        Ok(())
    }

    /// Writes `s` encoded with `charset`, the declared length counts bytes.
    pub fn write_str(&mut self, s: &str, charset: Charset) -> Result<(), Error> {
        self.write_string_bytes(&charset.encode(s))
    }

    pub fn write_string_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.apply(Operation::Scalar)?;
        self.write_string_token(bytes);
        Ok(())
    }

    /// Back-reference to an object handle, `r:<id>;`.
    pub fn write_object_reference(&mut self, id: u32) -> Result<(), Error> {
        self.apply(Operation::Scalar)?;
        self.token(Token::ObjectReference);
        self.decimal(id);
        self.bf.push(b';');
        Ok(())
    }

    /// Back-reference to a shared value, `R:<id>;`.
    ///
    /// Unlike every other value it takes no slot of its own.
    pub fn write_value_reference(&mut self, id: u32) -> Result<(), Error> {
        self.transition(Operation::Scalar)?;
        self.token(Token::ValueReference);
        self.decimal(id);
        self.bf.push(b';');
        Ok(())
    }

    pub fn write_int_key(&mut self, key: i64) -> Result<(), Error> {
        self.apply(Operation::Key)?;
        self.write_int_token(key);
        Ok(())
    }

    pub fn write_str_key(&mut self, key: &str, charset: Charset) -> Result<(), Error> {
        self.apply(Operation::Key)?;
        self.write_string_token(&charset.encode(key));
        Ok(())
    }

    /// Opens `a:<len>:{`, exactly `len` key/value pairs must follow.
    pub fn begin_array(&mut self, len: usize) -> Result<(), Error> {
        self.apply(Operation::BeginArray(len))?;
        self.token(Token::Array);
        self.decimal(len);
        self.bf.extend_from_slice(b":{");
        Ok(())
    }

    /// Opens `O:<name-len>:"<name>":<len>:{`, exactly `len` fields must follow.
    pub fn begin_object(&mut self, class_name: &[u8], len: usize) -> Result<(), Error> {
        self.apply(Operation::BeginPlainObject(len))?;
        self.token(Token::Object);
        self.quoted(class_name);
        self.bf.push(b':');
        self.decimal(len);
        self.bf.extend_from_slice(b":{");
        Ok(())
    }

    /// Opens `C:<name-len>:"<name>":`, the body is written by
    /// [`Writer::write_payload`].
    pub fn begin_serializable_object(&mut self, class_name: &[u8]) -> Result<(), Error> {
        self.apply(Operation::BeginSerializableObject)?;
        self.token(Token::Serializable);
        self.quoted(class_name);
        self.bf.push(b':');
        Ok(())
    }

    /// Writes `<len>:{<payload>}` and closes the serializable object.
    pub fn write_payload(&mut self, payload: &[u8]) -> Result<(), Error> {
        self.apply(Operation::Payload)?;
        self.decimal(payload.len());
        self.bf.extend_from_slice(b":{");
        self.bf.extend_from_slice(payload);
        self.bf.push(b'}');
        Ok(())
    }

    /// Closes the innermost array or object body.
    pub fn end(&mut self) -> Result<(), Error> {
        self.apply(Operation::End)?;
        self.bf.push(b'}');
        Ok(())
    }

    fn write_int_token(&mut self, value: i64) {
        self.token(Token::Integer);
        self.decimal(value);
        self.bf.push(b';');
    }

    fn write_string_token(&mut self, bytes: &[u8]) {
        self.token(Token::String);
        self.quoted(bytes);
        self.bf.push(b';');
    }
}
