use thiserror::Error;

/// Errors that can occur while reading a definition or manifest file.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not well-formed XML
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    /// An attribute could not be read
    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    /// The document is well-formed but not a definition document
    #[error("Invalid definition file: {0}")]
    InvalidDocument(String),

    /// A required attribute is missing from an element
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    /// An attribute value could not be converted to its expected type
    #[error("Invalid value '{value}' for attribute '{attribute}'")]
    InvalidValue { attribute: String, value: String },
}

impl DefinitionError {
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }

    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    pub fn invalid_value(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}
