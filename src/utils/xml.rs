// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Minimal element tree built on top of `quick-xml` events.
//!
//! Only what configuration documents need: element names, nesting, and the
//! leading text of an element. Attributes and the XML declaration are
//! dropped; comments and processing instructions are dropped too but still
//! count as the first content of their parent.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("XML contains invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("failed to read XML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    text: Option<String>,
    children: Vec<XmlElement>,
    has_content: bool,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            text: None,
            children: Vec::new(),
            has_content: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text of the element when its first content is non-blank text.
    ///
    /// `None` for empty elements, whitespace-only content, and elements whose
    /// content starts with a child element, a comment or a processing
    /// instruction.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    pub fn first_child_element(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    // Blank text is not a content node
    fn accept_text(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        if !self.has_content {
            self.text = Some(text.to_owned());
        }
        self.has_content = true;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument {
    roots: Vec<XmlElement>,
}

impl XmlDocument {
    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut roots = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = std::str::from_utf8(e.name().as_ref())?.to_owned();
                    stack.push(XmlElement::new(name));
                }
                Event::Empty(e) => {
                    let name = std::str::from_utf8(e.name().as_ref())?.to_owned();
                    attach(&mut stack, &mut roots, XmlElement::new(name));
                }
                Event::Text(t) => {
                    if let Some(current) = stack.last_mut() {
                        let text = t.unescape()?;
                        current.accept_text(&text);
                    }
                }
                Event::CData(c) => {
                    if let Some(current) = stack.last_mut() {
                        current.accept_text(std::str::from_utf8(&c)?);
                    }
                }
                Event::Comment(_) | Event::PI(_) => {
                    if let Some(current) = stack.last_mut() {
                        current.has_content = true;
                    }
                }
                Event::End(_) => {
                    // quick-xml rejects unmatched end tags before they get here
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, &mut roots, element);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(XmlError::UnexpectedEof(open.name));
        }

        Ok(Self { roots })
    }

    pub fn load_file(path: &Path) -> Result<Self, XmlError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn first_child_element(&self, name: &str) -> Option<&XmlElement> {
        self.roots.iter().find(|root| root.name == name)
    }
}

fn attach(stack: &mut [XmlElement], roots: &mut Vec<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => {
            parent.has_content = true;
            parent.children.push(element);
        }
        None => roots.push(element),
    }
}
