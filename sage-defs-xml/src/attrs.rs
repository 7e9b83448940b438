use std::collections::HashMap;
use std::str::FromStr;

use quick_xml::events::BytesStart;
use sage_defs_core::DefinitionError;

/// Local (namespace-stripped) name of an element.
pub(crate) fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_string()
}

/// The attributes of one element, keyed by local name.
pub(crate) struct Attributes {
    element: String,
    values: HashMap<String, String>,
}

impl Attributes {
    pub(crate) fn read(e: &BytesStart<'_>) -> Result<Self, DefinitionError> {
        let mut values = HashMap::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).to_string();
            let value = attr.unescape_value()?.to_string();
            values.insert(key, value);
        }
        Ok(Self {
            element: local_name(e),
            values,
        })
    }

    pub(crate) fn element(&self) -> &str {
        &self.element
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub(crate) fn optional(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    pub(crate) fn required(&self, name: &str) -> Result<String, DefinitionError> {
        self.optional(name)
            .ok_or_else(|| DefinitionError::missing_attribute(&self.element, name))
    }

    pub(crate) fn parse<T: FromStr>(&self, name: &str) -> Result<Option<T>, DefinitionError> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| DefinitionError::invalid_value(name, raw)),
        }
    }

    /// XML Schema booleans: `true`, `false`, `1`, `0`.
    pub(crate) fn parse_bool(&self, name: &str) -> Result<Option<bool>, DefinitionError> {
        match self.get(name).map(str::trim) {
            None => Ok(None),
            Some("true") | Some("1") => Ok(Some(true)),
            Some("false") | Some("0") => Ok(Some(false)),
            Some(raw) => Err(DefinitionError::invalid_value(name, raw)),
        }
    }
}
