//! Simple types and typed attribute descriptors
//!
//! A simple type converts between an attribute's string form and a Rust
//! value. Descriptors pair an attribute name with a simple type and declare
//! its presence semantics (optional with an optional default, or required).

use std::marker::PhantomData;

use super::element::Element;
use super::errors::{OxmlError, OxmlResult};

/// Conversion between attribute text and a typed value
pub trait SimpleType {
    /// Rust type of the parsed value
    type Value;

    /// Parse attribute text. `attr` is used for error reporting only.
    fn from_xml(attr: &str, text: &str) -> OxmlResult<Self::Value>;

    /// Render a value as attribute text
    fn to_xml(value: &Self::Value) -> String;
}

/// `xsd:string`
pub struct XsdString;

impl SimpleType for XsdString {
    type Value = String;

    fn from_xml(_attr: &str, text: &str) -> OxmlResult<String> {
        Ok(text.to_string())
    }

    fn to_xml(value: &String) -> String {
        value.clone()
    }
}

/// `ST_OnOff`: `1`, `true`, `on` / `0`, `false`, `off`
pub struct StOnOff;

impl SimpleType for StOnOff {
    type Value = bool;

    fn from_xml(attr: &str, text: &str) -> OxmlResult<bool> {
        match text {
            "1" | "true" | "on" => Ok(true),
            "0" | "false" | "off" => Ok(false),
            other => Err(OxmlError::invalid_value(attr, other)),
        }
    }

    fn to_xml(value: &bool) -> String {
        let text = if *value { "1" } else { "0" };
        text.to_string()
    }
}

/// `ST_DecimalNumber`, used for `w:id`
pub struct StDecimalNumber;

impl SimpleType for StDecimalNumber {
    type Value = i64;

    fn from_xml(attr: &str, text: &str) -> OxmlResult<i64> {
        text.trim()
            .parse::<i64>()
            .map_err(|_| OxmlError::invalid_value(attr, text))
    }

    fn to_xml(value: &i64) -> String {
        value.to_string()
    }
}

/// Attribute that may be absent, optionally falling back to a default
pub struct OptionalAttribute<T: SimpleType> {
    name: &'static str,
    default: Option<T::Value>,
    _type: PhantomData<T>,
}

impl<T: SimpleType> OptionalAttribute<T> {
    /// Optional attribute without a default
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            _type: PhantomData,
        }
    }

    /// Optional attribute that reads as `default` when absent
    pub fn with_default(name: &'static str, default: T::Value) -> Self {
        Self {
            name,
            default: Some(default),
            _type: PhantomData,
        }
    }

    /// Read the attribute; `Ok(None)` when absent and no default is declared
    pub fn get(&self, element: &Element) -> OxmlResult<Option<T::Value>>
    where
        T::Value: Clone,
    {
        match element.get(self.name) {
            Some(text) => T::from_xml(self.name, text).map(Some),
            None => Ok(self.default.clone()),
        }
    }

    /// Write the attribute; `None` removes it
    pub fn set(&self, element: &mut Element, value: Option<&T::Value>) {
        match value {
            Some(v) => element.set(self.name, T::to_xml(v)),
            None => {
                element.remove(self.name);
            }
        }
    }
}

/// Attribute that must be present
pub struct RequiredAttribute<T: SimpleType> {
    name: &'static str,
    _type: PhantomData<T>,
}

impl<T: SimpleType> RequiredAttribute<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            _type: PhantomData,
        }
    }

    /// Read the attribute, failing with `MissingAttribute` when absent
    pub fn get(&self, element: &Element) -> OxmlResult<T::Value> {
        let text = element
            .get(self.name)
            .ok_or_else(|| OxmlError::MissingAttribute(self.name.to_string()))?;
        T::from_xml(self.name, text)
    }

    pub fn set(&self, element: &mut Element, value: &T::Value) {
        element.set(self.name, T::to_xml(value));
    }
}
