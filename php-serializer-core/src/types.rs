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

use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

pub const STRING_CLASS: &str = "String";
pub const NUMBER_CLASS: &str = "Number";
pub const COLLECTION_CLASS: &str = "Collection";
pub const LIST_CLASS: &str = "List";
pub const SET_CLASS: &str = "Set";
pub const MAP_CLASS: &str = "Map";
pub const DATE_TIME_CLASS: &str = "DateTime";

/// Leading byte of every token of the PHP serialize() grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Token {
    Null = b'N',
    Boolean = b'b',
    Integer = b'i',
    Double = b'd',
    String = b's',
    Array = b'a',
    Object = b'O',
    Serializable = b'C',
    /// Back-reference to an object handle (`r:<id>;`).
    ObjectReference = b'r',
    /// Back-reference to a value slot (`R:<id>;`).
    ValueReference = b'R',
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// Name of the boxed counterpart, e.g. `Integer` for `int`.
    pub fn boxed_name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Char => "Character",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveType::Boolean | PrimitiveType::Char)
    }
}

/// A named class or interface together with the types it directly extends.
///
/// Two class types are the same type when their names are equal.
#[derive(Clone, Debug)]
pub struct ClassType {
    name: String,
    supertypes: Vec<TypeDescriptor>,
}

impl ClassType {
    pub fn new<S: Into<String>>(name: S) -> ClassType {
        ClassType {
            name: name.into(),
            supertypes: Vec::new(),
        }
    }

    pub fn extends(mut self, supertype: TypeDescriptor) -> ClassType {
        self.supertypes.push(supertype);
        self
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn supertypes(&self) -> &[TypeDescriptor] {
        &self.supertypes
    }
}

impl PartialEq for ClassType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassType {}

impl Hash for ClassType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Identifies a runtime type for adapter resolution.
///
/// `Any` is the supertype of every non-primitive descriptor. Primitive and
/// boxed descriptors of the same kind are distinct types but are treated as
/// equivalent by the capability matcher.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Any,
    Primitive(PrimitiveType),
    Boxed(PrimitiveType),
    Class(Rc<ClassType>),
    Array(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn class(class: ClassType) -> TypeDescriptor {
        TypeDescriptor::Class(Rc::new(class))
    }

    pub fn array_of(component: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::Array(Box::new(component))
    }

    pub fn string() -> TypeDescriptor {
        TypeDescriptor::class(ClassType::new(STRING_CLASS))
    }

    pub fn number() -> TypeDescriptor {
        TypeDescriptor::class(ClassType::new(NUMBER_CLASS))
    }

    pub fn collection() -> TypeDescriptor {
        TypeDescriptor::class(ClassType::new(COLLECTION_CLASS))
    }

    pub fn list() -> TypeDescriptor {
        TypeDescriptor::class(ClassType::new(LIST_CLASS).extends(TypeDescriptor::collection()))
    }

    pub fn set() -> TypeDescriptor {
        TypeDescriptor::class(ClassType::new(SET_CLASS).extends(TypeDescriptor::collection()))
    }

    pub fn map() -> TypeDescriptor {
        TypeDescriptor::class(ClassType::new(MAP_CLASS))
    }

    pub fn date_time() -> TypeDescriptor {
        TypeDescriptor::class(ClassType::new(DATE_TIME_CLASS))
    }

    #[inline(always)]
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }

    #[inline(always)]
    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_))
    }

    /// Element descriptor of an array type.
    pub fn component(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Array(component) => Some(component),
            _ => None,
        }
    }

    /// The boxed equivalent of a primitive descriptor, any other descriptor unchanged.
    pub fn boxed(&self) -> TypeDescriptor {
        match self {
            TypeDescriptor::Primitive(p) => TypeDescriptor::Boxed(*p),
            other => other.clone(),
        }
    }

    /// Types this descriptor directly extends, not including the implicit `Any`.
    pub fn supertypes(&self) -> Vec<TypeDescriptor> {
        match self {
            TypeDescriptor::Boxed(p) if p.is_numeric() => vec![TypeDescriptor::number()],
            TypeDescriptor::Class(class) => class.supertypes().to_vec(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Any => f.write_str("Object"),
            TypeDescriptor::Primitive(p) => f.write_str(p.name()),
            TypeDescriptor::Boxed(p) => f.write_str(p.boxed_name()),
            TypeDescriptor::Class(class) => f.write_str(class.name()),
            TypeDescriptor::Array(component) => write!(f, "{}[]", component),
        }
    }
}

impl From<ClassType> for TypeDescriptor {
    fn from(class: ClassType) -> Self {
        TypeDescriptor::class(class)
    }
}
