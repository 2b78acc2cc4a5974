//! Typed page tree
//!
//! Fetched HTML is converted into a small owned tree of elements and text
//! fragments. Extractors only ever talk to this tree through the query
//! methods on [`Element`], so they can be exercised against hand-built trees
//! as easily as against parsed documents.

/// Heading levels used for titles of programs and news items
pub const HEADINGS_H1_TO_H4: &[&str] = &["h1", "h2", "h3", "h4"];

/// Heading levels used for facility names and policy sections
pub const HEADINGS_H1_TO_H5: &[&str] = &["h1", "h2", "h3", "h4", "h5"];

/// A node of the page tree
#[derive(Debug)]
pub enum PageNode {
    Element(Element),
    Text(String),
}

impl From<Element> for PageNode {
    fn from(element: Element) -> Self {
        PageNode::Element(element)
    }
}

impl From<&str> for PageNode {
    fn from(text: &str) -> Self {
        PageNode::Text(text.to_string())
    }
}

/// An element with its tag name, attributes and ordered children
#[derive(Debug, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<PageNode>,
}

/// A text fragment together with the element that directly contains it
#[derive(Debug, Clone, Copy)]
pub struct TextMatch<'a> {
    pub text: &'a str,
    pub parent: &'a Element,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: impl Into<PageNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_child(text)
    }

    /// Returns the value of an attribute, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if this element's tag is one of `tags`
    pub fn has_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.tag == *tag)
    }

    /// Iterates every node below this element in document order, paired with
    /// its immediate parent. The element itself is not included.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().map(|child| (child, self)).collect(),
        }
    }

    /// Iterates the descendant elements in document order
    pub fn descendant_elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.descendants().filter_map(|(node, _)| match node {
            PageNode::Element(element) => Some(element),
            PageNode::Text(_) => None,
        })
    }

    /// Iterates the descendant text fragments in document order
    pub fn text_fragments(&self) -> impl Iterator<Item = TextMatch<'_>> + '_ {
        self.descendants().filter_map(|(node, parent)| match node {
            PageNode::Text(text) => Some(TextMatch {
                text: text.as_str(),
                parent,
            }),
            PageNode::Element(_) => None,
        })
    }

    /// All descendant text concatenated as-is, whitespace included
    pub fn text(&self) -> String {
        self.text_fragments().map(|fragment| fragment.text).collect()
    }

    /// Descendant text with every fragment trimmed, empty fragments dropped
    /// and the rest joined by single spaces
    pub fn stripped_text(&self) -> String {
        self.text_fragments()
            .map(|fragment| fragment.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First descendant heading among `levels`
    pub fn find_first_heading(&self, levels: &[&str]) -> Option<&Element> {
        self.descendant_elements().find(|element| element.has_tag(levels))
    }

    /// Every descendant element whose tag is one of `tags`, in document order
    pub fn find_all_by_tag(&self, tags: &[&str]) -> Vec<&Element> {
        self.descendant_elements()
            .filter(|element| element.has_tag(tags))
            .collect()
    }

    /// First descendant text fragment containing `keyword`, case-insensitively
    pub fn find_first_text_containing(&self, keyword: &str) -> Option<TextMatch<'_>> {
        let keyword = keyword.to_lowercase();
        self.text_fragments()
            .find(|fragment| fragment.text.to_lowercase().contains(&keyword))
    }

    /// First descendant element whose `class` attribute contains `fragment`
    pub fn find_first_with_class_containing(&self, fragment: &str) -> Option<&Element> {
        let fragment = fragment.to_lowercase();
        self.descendant_elements().find(|element| {
            element
                .attr("class")
                .is_some_and(|class| class.to_lowercase().contains(&fragment))
        })
    }
}

impl Drop for Element {
    // Flattens the subtree first; pages nest arbitrarily deep.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let PageNode::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// Depth-first, document-order walk over a subtree
pub struct Descendants<'a> {
    stack: Vec<(&'a PageNode, &'a Element)>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (&'a PageNode, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, parent) = self.stack.pop()?;
        if let PageNode::Element(element) = node {
            self.stack
                .extend(element.children.iter().rev().map(|child| (child, element)));
        }
        Some((node, parent))
    }
}

/// A fetched and parsed page
#[derive(Debug)]
pub struct Page {
    root: Element,
}

impl Page {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// The document element (`<html>` for parsed pages)
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Whole-page text, exactly as it appears between the tags
    pub fn text(&self) -> String {
        self.root.text()
    }
}

/// Returns true if `haystack` contains any of `keywords`, ignoring case.
/// Keywords are expected in lowercase.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Returns the first `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
