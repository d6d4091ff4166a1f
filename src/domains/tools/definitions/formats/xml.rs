//! XML parsing tool.
//!
//! Converts an XML document into JSON using the xml2js layout:
//!
//! - the document becomes `{ "<root name>": <element> }`
//! - an element with no attributes and no child elements becomes its
//!   trimmed text
//! - any other element becomes an object holding `"$"` (attributes),
//!   `"_"` (text, when not blank) and one array per child element name

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

const FORMAT: &str = "XML";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the XML parse tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ParseXmlParams {
    /// XML document to parse.
    pub content: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Parse XML tool.
pub struct ParseXmlTool;

impl ToolDefinition for ParseXmlTool {
    const NAME: &'static str = "parse_xml";
    const DESCRIPTION: &'static str = "Parse an XML document into JSON. Attributes are placed under \"$\", text under \"_\", and child elements are grouped into arrays by tag name.";

    type Params = ParseXmlParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let root = parse_document(&params.content)?;

        let mut document = Map::new();
        document.insert(root.name.clone(), root.to_json());
        to_pretty_json(&Value::Object(document))
    }
}

// ============================================================================
// Element tree
// ============================================================================

#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> ToolResult<Self> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| ToolError::parse(FORMAT, format!("invalid element name: {e}")))?
            .to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| ToolError::parse(FORMAT, e))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| ToolError::parse(FORMAT, format!("invalid attribute name: {e}")))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| ToolError::parse(FORMAT, e))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            ..Default::default()
        })
    }

    fn to_json(&self) -> Value {
        let text = self.text.trim();
        if self.attributes.is_empty() && self.children.is_empty() {
            return Value::String(text.to_string());
        }

        let mut object = Map::new();
        if !self.attributes.is_empty() {
            let attributes = self
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            object.insert("$".to_string(), Value::Object(attributes));
        }
        if !text.is_empty() {
            object.insert("_".to_string(), Value::String(text.to_string()));
        }
        for child in &self.children {
            if let Value::Array(items) = object
                .entry(child.name.clone())
                .or_insert_with(|| Value::Array(Vec::new()))
            {
                items.push(child.to_json());
            }
        }
        Value::Object(object)
    }
}

/// Attach a closed element to its parent, or make it the document root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> ToolResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(ToolError::parse(
            FORMAT,
            format!("multiple root elements (found <{}>)", element.name),
        ));
    }
    *root = Some(element);
    Ok(())
}

fn parse_document(xml: &str) -> ToolResult<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(Element::open(e)?),
            Ok(Event::Empty(ref e)) => {
                let element = Element::open(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ToolError::parse(FORMAT, "unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|err| ToolError::parse(FORMAT, err))?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(ToolError::parse(FORMAT, "text outside of the root element"));
                    }
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::Eof) => {
                if !stack.is_empty() {
                    let unclosed: Vec<&str> = stack.iter().map(|el| el.name.as_str()).collect();
                    return Err(ToolError::parse(
                        FORMAT,
                        format!("unclosed element(s): <{}>", unclosed.join(">, <")),
                    ));
                }
                break;
            }
            // Declarations, comments, processing instructions, doctypes
            Ok(_) => {}
            Err(e) => {
                return Err(ToolError::parse(
                    FORMAT,
                    format!("at position {}: {}", reader.error_position(), e),
                ));
            }
        }
    }

    root.ok_or_else(|| ToolError::parse(FORMAT, "no root element found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(content: &str) -> ToolResult<Value> {
        let output = ParseXmlTool::execute(ParseXmlParams {
            content: content.to_string(),
        })?;
        Ok(serde_json::from_str(&output).unwrap())
    }

    #[test]
    fn test_parse_nested_document() {
        let xml = r#"<?xml version="1.0"?>
            <catalog>
                <book id="b1" lang="en"><title>Rust</title><price>30</price></book>
                <book id="b2"><title>Go &amp; more</title></book>
            </catalog>"#;
        let value = run(xml).unwrap();
        assert_eq!(
            value,
            json!({
                "catalog": {
                    "book": [
                        { "$": { "id": "b1", "lang": "en" }, "title": ["Rust"], "price": ["30"] },
                        { "$": { "id": "b2" }, "title": ["Go & more"] }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_text_only_root() {
        assert_eq!(run("<note> hello </note>").unwrap(), json!({ "note": "hello" }));
    }

    #[test]
    fn test_attributes_and_text() {
        assert_eq!(
            run(r#"<msg level="warn">disk <![CDATA[low]]></msg>"#).unwrap(),
            json!({ "msg": { "$": { "level": "warn" }, "_": "disk low" } })
        );
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(
            run("<root><item/></root>").unwrap(),
            json!({ "root": { "item": [""] } })
        );
    }

    #[test]
    fn test_mismatched_tags() {
        let err = run("<a><b></a>").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse XML"));
    }

    #[test]
    fn test_unclosed_element() {
        assert!(run("<a><b></b>").is_err());
    }

    #[test]
    fn test_empty_document() {
        assert!(run("").is_err());
    }
}
