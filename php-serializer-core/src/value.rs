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

//! Runtime values handed to the serializer.
//!
//! Scalars are stored inline. Arrays, collections, maps and objects are
//! shared handles so a graph can reference the same node twice, or itself.
//! The identity of such a node is the address of its allocation, never its
//! contents: two equal but separately allocated maps are two nodes.

use crate::types::{ClassType, PrimitiveType, TypeDescriptor};
use chrono::NaiveDateTime;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::rc::Rc;

pub type ArrayRef = Rc<RefCell<ArrayValue>>;
pub type CollectionRef = Rc<RefCell<CollectionValue>>;
pub type MapRef = Rc<RefCell<MapValue>>;
pub type ObjectRef = Rc<RefCell<ObjectValue>>;

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    String(String),
    DateTime(NaiveDateTime),
    Array(ArrayRef),
    Collection(CollectionRef),
    Map(MapRef),
    Object(ObjectRef),
}

/// Address of a shared node, used as the key for reference tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueIdentity(usize);

impl ValueIdentity {
    pub fn of<T>(rc: &Rc<T>) -> ValueIdentity {
        ValueIdentity(Rc::as_ptr(rc) as *const () as usize)
    }

    #[inline(always)]
    pub fn addr(&self) -> usize {
        self.0
    }
}

impl Value {
    pub fn array(element_type: TypeDescriptor, elements: Vec<Value>) -> Value {
        Value::Array(Rc::new(RefCell::new(ArrayValue {
            element_type,
            elements,
        })))
    }

    pub fn list(elements: Vec<Value>) -> Value {
        Value::collection(ClassType::new(crate::types::LIST_CLASS), elements)
    }

    pub fn collection(class: ClassType, elements: Vec<Value>) -> Value {
        let class = if class.supertypes().is_empty() {
            default_collection_class(class)
        } else {
            class
        };
        Value::Collection(Rc::new(RefCell::new(CollectionValue {
            class: Rc::new(class),
            elements,
        })))
    }

    pub fn map(entries: Vec<(ArrayKey, Value)>) -> Value {
        Value::Map(Rc::new(RefCell::new(MapValue {
            class: Rc::new(ClassType::new(crate::types::MAP_CLASS)),
            entries,
        })))
    }

    pub fn object(object: ObjectValue) -> Value {
        Value::Object(Rc::new(RefCell::new(object)))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Identity of a shared node, `None` for scalars and null.
    pub fn identity(&self) -> Option<ValueIdentity> {
        match self {
            Value::Array(rc) => Some(ValueIdentity::of(rc)),
            Value::Collection(rc) => Some(ValueIdentity::of(rc)),
            Value::Map(rc) => Some(ValueIdentity::of(rc)),
            Value::Object(rc) => Some(ValueIdentity::of(rc)),
            _ => None,
        }
    }

    /// Runtime type used to resolve an adapter. Scalars report their boxed
    /// type; `Null` has none.
    pub fn type_descriptor(&self) -> Option<TypeDescriptor> {
        let descriptor = match self {
            Value::Null => return None,
            Value::Bool(_) => TypeDescriptor::Boxed(PrimitiveType::Boolean),
            Value::Byte(_) => TypeDescriptor::Boxed(PrimitiveType::Byte),
            Value::Short(_) => TypeDescriptor::Boxed(PrimitiveType::Short),
            Value::Int(_) => TypeDescriptor::Boxed(PrimitiveType::Int),
            Value::Long(_) => TypeDescriptor::Boxed(PrimitiveType::Long),
            Value::Float(_) => TypeDescriptor::Boxed(PrimitiveType::Float),
            Value::Double(_) => TypeDescriptor::Boxed(PrimitiveType::Double),
            Value::Char(_) => TypeDescriptor::Boxed(PrimitiveType::Char),
            Value::String(_) => TypeDescriptor::string(),
            Value::DateTime(_) => TypeDescriptor::date_time(),
            Value::Array(array) => TypeDescriptor::array_of(array.borrow().element_type.clone()),
            Value::Collection(c) => TypeDescriptor::Class(c.borrow().class.clone()),
            Value::Map(m) => TypeDescriptor::Class(m.borrow().class.clone()),
            Value::Object(o) => TypeDescriptor::Class(o.borrow().class.clone()),
        };
        Some(descriptor)
    }
}

// A class with no declared supertypes passed to `Value::collection` is still
// a collection.
fn default_collection_class(class: ClassType) -> ClassType {
    if class.name() == crate::types::COLLECTION_CLASS {
        class
    } else {
        class.extends(TypeDescriptor::collection())
    }
}

impl fmt::Debug for Value {
    // Containers print their size only, a cyclic graph would never finish.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(v) => write!(f, "Bool({v})"),
            Value::Byte(v) => write!(f, "Byte({v})"),
            Value::Short(v) => write!(f, "Short({v})"),
            Value::Int(v) => write!(f, "Int({v})"),
            Value::Long(v) => write!(f, "Long({v})"),
            Value::Float(v) => write!(f, "Float({v})"),
            Value::Double(v) => write!(f, "Double({v})"),
            Value::Char(v) => write!(f, "Char({v:?})"),
            Value::String(v) => write!(f, "String({v:?})"),
            Value::DateTime(v) => write!(f, "DateTime({v})"),
            Value::Array(a) => match a.try_borrow() {
                Ok(a) => write!(f, "Array<{}>[{}]", a.element_type, a.elements.len()),
                Err(_) => f.write_str("Array<..>"),
            },
            Value::Collection(c) => match c.try_borrow() {
                Ok(c) => write!(f, "{}[{}]", c.class.name(), c.elements.len()),
                Err(_) => f.write_str("Collection<..>"),
            },
            Value::Map(m) => match m.try_borrow() {
                Ok(m) => write!(f, "{}{{{}}}", m.class.name(), m.entries.len()),
                Err(_) => f.write_str("Map<..>"),
            },
            Value::Object(o) => match o.try_borrow() {
                Ok(o) => write!(f, "{}({} fields)", o.class.name(), o.fields.len()),
                Err(_) => f.write_str("Object<..>"),
            },
        }
    }
}

/// A fixed-length array whose declared component type takes part in
/// adapter resolution.
pub struct ArrayValue {
    pub element_type: TypeDescriptor,
    pub elements: Vec<Value>,
}

pub struct CollectionValue {
    pub class: Rc<ClassType>,
    pub elements: Vec<Value>,
}

pub struct MapValue {
    pub class: Rc<ClassType>,
    pub entries: Vec<(ArrayKey, Value)>,
}

/// Key of a PHP array entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl From<i64> for ArrayKey {
    fn from(v: i64) -> Self {
        ArrayKey::Int(v)
    }
}

impl From<&str> for ArrayKey {
    fn from(v: &str) -> Self {
        ArrayKey::Str(v.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(v: String) -> Self {
        ArrayKey::Str(v)
    }
}

pub struct ObjectValue {
    pub class: Rc<ClassType>,
    pub fields: Vec<Field>,
}

impl ObjectValue {
    pub fn new(class: ClassType) -> ObjectValue {
        ObjectValue {
            class: Rc::new(class),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> ObjectValue {
        self.fields.push(field);
        self
    }

    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Replaces the value of an existing field, returns false if there is none.
    pub fn set_field(&mut self, name: &str, value: Value) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value;
                true
            }
            None => false,
        }
    }
}

/// A declared field of an object together with its current value.
#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    pub declared_type: TypeDescriptor,
    pub value: Value,
    transient: bool,
    is_static: bool,
}

impl Field {
    pub fn new<S: Into<String>>(name: S, declared_type: TypeDescriptor, value: Value) -> Field {
        Field {
            name: name.into(),
            declared_type,
            value,
            transient: false,
            is_static: false,
        }
    }

    pub fn transient(mut self) -> Field {
        self.transient = true;
        self
    }

    pub fn class_level(mut self) -> Field {
        self.is_static = true;
        self
    }

    #[inline(always)]
    pub fn is_transient(&self) -> bool {
        self.transient
    }

    #[inline(always)]
    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

/// Conversion of native Rust data into a [`Value`].
pub trait ToValue {
    fn to_value(&self) -> Value;

    /// Type a field or element of this Rust type is declared with.
    fn declared_type() -> TypeDescriptor
    where
        Self: Sized,
    {
        TypeDescriptor::Any
    }
}

/// Implemented by structs that describe a PHP class, usually through
/// `#[derive(PhpObject)]`.
pub trait PhpClass {
    fn php_class() -> ClassType;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::Any
    }
}

macro_rules! impl_primitive_to_value {
    ($($ty:ty => $variant:ident, $prim:ident;)*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn declared_type() -> TypeDescriptor {
                    TypeDescriptor::Primitive(PrimitiveType::$prim)
                }
            }
        )*
    };
}

impl_primitive_to_value! {
    bool => Bool, Boolean;
    i8 => Byte, Byte;
    i16 => Short, Short;
    i32 => Int, Int;
    i64 => Long, Long;
    f32 => Float, Float;
    f64 => Double, Double;
    char => Char, Char;
}

// Unsigned integers widen to the next signed type; u64 does not fit in any.
impl ToValue for u8 {
    fn to_value(&self) -> Value {
        Value::Short(*self as i16)
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::Primitive(PrimitiveType::Short)
    }
}

impl ToValue for u16 {
    fn to_value(&self) -> Value {
        Value::Int(*self as i32)
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::Primitive(PrimitiveType::Int)
    }
}

impl ToValue for u32 {
    fn to_value(&self) -> Value {
        Value::Long(*self as i64)
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::Primitive(PrimitiveType::Long)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::string()
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::date_time()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::Any
    }
}

impl<T: ToValue> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn declared_type() -> TypeDescriptor {
        T::declared_type()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn declared_type() -> TypeDescriptor {
        T::declared_type().boxed()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::array(T::declared_type(), self.iter().map(T::to_value).collect())
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::array_of(T::declared_type())
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::array(T::declared_type(), self.iter().map(T::to_value).collect())
    }
}

macro_rules! impl_collection_to_value {
    ($($ty:ident => $name:ident, $descriptor:ident;)*) => {
        $(
            impl<T: ToValue> ToValue for $ty<T> {
                fn to_value(&self) -> Value {
                    Value::collection(
                        ClassType::new(crate::types::$name),
                        self.iter().map(T::to_value).collect(),
                    )
                }

                fn declared_type() -> TypeDescriptor {
                    TypeDescriptor::$descriptor()
                }
            }
        )*
    };
}

impl_collection_to_value! {
    VecDeque => LIST_CLASS, list;
    LinkedList => LIST_CLASS, list;
    HashSet => SET_CLASS, set;
    BTreeSet => SET_CLASS, set;
}

/// Rust types usable as keys of a PHP array.
pub trait ToArrayKey {
    fn to_array_key(&self) -> ArrayKey;
}

impl ToArrayKey for String {
    fn to_array_key(&self) -> ArrayKey {
        ArrayKey::Str(self.clone())
    }
}

impl ToArrayKey for &str {
    fn to_array_key(&self) -> ArrayKey {
        ArrayKey::Str(self.to_string())
    }
}

impl ToArrayKey for char {
    fn to_array_key(&self) -> ArrayKey {
        ArrayKey::Str(self.to_string())
    }
}

macro_rules! impl_int_array_key {
    ($($ty:ty),*) => {
        $(
            impl ToArrayKey for $ty {
                fn to_array_key(&self) -> ArrayKey {
                    ArrayKey::Int(*self as i64)
                }
            }
        )*
    };
}

impl_int_array_key!(i8, i16, i32, i64, u8, u16, u32);

impl<K: ToArrayKey, V: ToValue> ToValue for HashMap<K, V> {
    fn to_value(&self) -> Value {
        Value::map(
            self.iter()
                .map(|(k, v)| (k.to_array_key(), v.to_value()))
                .collect(),
        )
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::map()
    }
}

impl<K: ToArrayKey, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::map(
            self.iter()
                .map(|(k, v)| (k.to_array_key(), v.to_value()))
                .collect(),
        )
    }

    fn declared_type() -> TypeDescriptor {
        TypeDescriptor::map()
    }
}
