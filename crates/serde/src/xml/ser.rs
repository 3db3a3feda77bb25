//! XML emission over quick-xml.

use std::io::Write;

use mjcf::Validate;
use mjcf_serde_support::{ToElement, XmlElement};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::{Result, SerdeError};

/// Serialize a model element to an MJCF XML string.
///
/// # Examples
///
/// ```ignore
/// use mjcf::Mujoco;
/// use mjcf_serde::to_xml_string;
///
/// let model = Mujoco::default();
/// let xml = to_xml_string(&model)?;
/// ```
pub fn to_xml_string<T>(value: &T) -> Result<String>
where
    T: ToElement + Validate,
{
    let mut buffer = Vec::new();
    to_xml_writer(value, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| SerdeError::Custom(e.to_string()))
}

/// Serialize a model element to a pretty-printed MJCF XML string with
/// two-space indentation.
pub fn to_xml_string_pretty<T>(value: &T) -> Result<String>
where
    T: ToElement + Validate,
{
    let mut buffer = Vec::new();
    let element = checked_element(value)?;
    let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);
    write_document(&mut writer, &element)?;
    String::from_utf8(buffer).map_err(|e| SerdeError::Custom(e.to_string()))
}

/// Serialize a model element to an MJCF XML byte vector.
pub fn to_xml_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ToElement + Validate,
{
    let mut buffer = Vec::new();
    to_xml_writer(value, &mut buffer)?;
    Ok(buffer)
}

/// Serialize a model element to an MJCF XML writer.
pub fn to_xml_writer<T, W>(value: &T, writer: W) -> Result<()>
where
    T: ToElement + Validate,
    W: Write,
{
    let element = checked_element(value)?;
    let mut writer = Writer::new(writer);
    write_document(&mut writer, &element)
}

/// Validates the instance and builds its element tree.
fn checked_element<T>(value: &T) -> Result<XmlElement>
where
    T: ToElement + Validate,
{
    value.validate()?;
    let element = value.to_element()?;
    if element.tag().is_empty() {
        return Err(SerdeError::Custom(
            "virtual attribute-only nodes cannot be serialized as documents".to_string(),
        ));
    }
    Ok(element)
}

fn write_document<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_element(writer, element)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.tag());
    for (name, value) in element.attributes() {
        start.push_attribute((*name, value.as_str()));
    }

    if element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else {
        writer.write_event(Event::Start(start))?;
        for child in element.children() {
            write_element(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(element.tag())))?;
    }

    Ok(())
}
