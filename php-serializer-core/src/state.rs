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

//! Structural position of a [`Writer`](crate::buffer::Writer).
//!
//! Every structure opened by the writer pushes a new state that owns the
//! state to return to once the structure is closed. The table below lists
//! which operations each state accepts. "value" means a key was just written
//! (or, for `InitialValue`, the root value is expected).
//!
//! | state                      | begin_* / scalar | key              | end            | payload |
//! |----------------------------|------------------|------------------|----------------|---------|
//! | `InitialValue`             | yes, parent `Finished` | -          | -              | -       |
//! | `InArray` / `InPlainObjectBody` | after a key | entries left     | all entries written | -  |
//! | `InSerializableObjectBody` | -                | -                | -              | pops to parent |
//! | `Finished`                 | -                | -                | -              | -       |

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterState {
    /// Nothing written yet, the root value is expected.
    InitialValue,
    InArray {
        parent: Box<WriterState>,
        /// Entries still to be written.
        remaining: usize,
        /// A key was written and its value is pending.
        awaiting_value: bool,
    },
    InPlainObjectBody {
        parent: Box<WriterState>,
        remaining: usize,
        awaiting_value: bool,
    },
    /// Only the opaque payload may follow.
    InSerializableObjectBody { parent: Box<WriterState> },
    Finished,
}

/// Structural operations issued by the writer before it emits bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    BeginArray(usize),
    BeginPlainObject(usize),
    BeginSerializableObject,
    /// Key of an array entry or name of an object field.
    Key,
    /// Any single-token value: scalar, null or back-reference.
    Scalar,
    End,
    Payload,
}

impl Operation {
    /// Whether the operation writes a value, as opposed to a key or a
    /// structural delimiter.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Operation::BeginArray(_)
                | Operation::BeginPlainObject(_)
                | Operation::BeginSerializableObject
                | Operation::Scalar
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::BeginArray(n) => write!(f, "begin array of {n}"),
            Operation::BeginPlainObject(n) => write!(f, "begin object of {n} fields"),
            Operation::BeginSerializableObject => f.write_str("begin serializable object"),
            Operation::Key => f.write_str("key"),
            Operation::Scalar => f.write_str("scalar"),
            Operation::End => f.write_str("end"),
            Operation::Payload => f.write_str("payload"),
        }
    }
}

/// A transition the current state does not allow. The state is handed back
/// unchanged.
#[derive(Debug)]
pub struct Rejected {
    pub state: WriterState,
    pub operation: Operation,
}

impl WriterState {
    /// Whether a value (scalar or nested structure) may be written now.
    pub fn expects_value(&self) -> bool {
        match self {
            WriterState::InitialValue => true,
            WriterState::InArray { awaiting_value, .. }
            | WriterState::InPlainObjectBody { awaiting_value, .. } => *awaiting_value,
            WriterState::InSerializableObjectBody { .. } | WriterState::Finished => false,
        }
    }

    #[inline(always)]
    pub fn is_finished(&self) -> bool {
        matches!(self, WriterState::Finished)
    }

    /// Nesting depth, `InitialValue` and `Finished` are at 0.
    pub fn depth(&self) -> usize {
        match self {
            WriterState::InitialValue | WriterState::Finished => 0,
            WriterState::InArray { parent, .. }
            | WriterState::InPlainObjectBody { parent, .. }
            | WriterState::InSerializableObjectBody { parent } => parent.depth() + 1,
        }
    }

    pub fn transition(self, operation: Operation) -> Result<WriterState, Rejected> {
        match (self, operation) {
            (state, Operation::Scalar) if state.expects_value() => Ok(state.after_value()),
            (state, Operation::BeginArray(remaining)) if state.expects_value() => {
                Ok(WriterState::InArray {
                    parent: Box::new(state.after_value()),
                    remaining,
                    awaiting_value: false,
                })
            }
            (state, Operation::BeginPlainObject(remaining)) if state.expects_value() => {
                Ok(WriterState::InPlainObjectBody {
                    parent: Box::new(state.after_value()),
                    remaining,
                    awaiting_value: false,
                })
            }
            (state, Operation::BeginSerializableObject) if state.expects_value() => {
                Ok(WriterState::InSerializableObjectBody {
                    parent: Box::new(state.after_value()),
                })
            }
            (
                WriterState::InArray {
                    parent,
                    remaining,
                    awaiting_value: false,
                },
                Operation::Key,
            ) if remaining > 0 => Ok(WriterState::InArray {
                parent,
                remaining: remaining - 1,
                awaiting_value: true,
            }),
            (
                WriterState::InPlainObjectBody {
                    parent,
                    remaining,
                    awaiting_value: false,
                },
                Operation::Key,
            ) if remaining > 0 => Ok(WriterState::InPlainObjectBody {
                parent,
                remaining: remaining - 1,
                awaiting_value: true,
            }),
            (
                WriterState::InArray {
                    parent,
                    remaining: 0,
                    awaiting_value: false,
                }
                | WriterState::InPlainObjectBody {
                    parent,
                    remaining: 0,
                    awaiting_value: false,
                },
                Operation::End,
            ) => Ok(*parent),
            (WriterState::InSerializableObjectBody { parent }, Operation::Payload) => Ok(*parent),
            (state, operation) => Err(Rejected { state, operation }),
        }
    }

    // State to continue in once the value this state expects is complete.
    fn after_value(self) -> WriterState {
        match self {
            WriterState::InitialValue => WriterState::Finished,
            WriterState::InArray {
                parent, remaining, ..
            } => WriterState::InArray {
                parent,
                remaining,
                awaiting_value: false,
            },
            WriterState::InPlainObjectBody {
                parent, remaining, ..
            } => WriterState::InPlainObjectBody {
                parent,
                remaining,
                awaiting_value: false,
            },
            other => other,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            WriterState::InitialValue => "before the root value",
            WriterState::InArray { .. } => "inside an array",
            WriterState::InPlainObjectBody { .. } => "inside an object body",
            WriterState::InSerializableObjectBody { .. } => "inside a serializable object body",
            WriterState::Finished => "after the root value was finished",
        }
    }
}

impl fmt::Display for WriterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriterState::InArray {
                remaining,
                awaiting_value,
                ..
            }
            | WriterState::InPlainObjectBody {
                remaining,
                awaiting_value,
                ..
            } => write!(
                f,
                "{} ({} entries left{})",
                self.describe(),
                remaining,
                if *awaiting_value { ", value pending" } else { "" }
            ),
            _ => f.write_str(self.describe()),
        }
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Illegal {} {}", self.operation, self.state)
    }
}
