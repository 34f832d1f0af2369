//! A small subset of CSS selectors: tag, `#id` and `.class` compounds joined
//! by the descendant combinator.

use crate::scene::node::{Node, NodeId};
use crate::scene::tree::Scene;
use crate::LandingError;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(part: &str) -> Result<Self, LandingError> {
        let mut compound = Compound::default();
        let mut rest = part;

        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        if tag_end > 0 {
            compound.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while !rest.is_empty() {
            let marker = rest.as_bytes()[0];
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() || !name.chars().all(is_name_char) {
                return Err(LandingError::InvalidSelector(part.to_string()));
            }
            match marker {
                b'.' => compound.classes.push(name.to_string()),
                _ => {
                    if compound.id.is_some() {
                        return Err(LandingError::InvalidSelector(part.to_string()));
                    }
                    compound.id = Some(name.to_string());
                }
            }
            rest = &body[end..];
        }

        if let Some(tag) = &compound.tag {
            if !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(LandingError::InvalidSelector(part.to_string()));
            }
        }
        Ok(compound)
    }

    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if node.kind.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.element_id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| node.has_class(class))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Parsed selector
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    source: String,
    steps: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, LandingError> {
        let steps = source
            .split_whitespace()
            .map(Compound::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if steps.is_empty() {
            return Err(LandingError::InvalidSelector(source.to_string()));
        }
        Ok(Self {
            source: source.to_string(),
            steps,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `id` matches, with its ancestors satisfying the leading steps
    pub fn matches(&self, scene: &Scene, id: NodeId) -> bool {
        let Some((last, ancestors)) = self.steps.split_last() else {
            return false;
        };
        let Some(node) = scene.get(id) else {
            return false;
        };
        if !last.matches(node) {
            return false;
        }

        // Greedy right-to-left walk is sufficient for descendant-only chains.
        let mut remaining = ancestors.iter().rev().peekable();
        let mut cursor = node.parent();
        while let Some(step) = remaining.peek() {
            let Some(parent_id) = cursor else {
                return false;
            };
            let Some(parent) = scene.get(parent_id) else {
                return false;
            };
            if step.matches(parent) {
                remaining.next();
            }
            cursor = parent.parent();
        }
        true
    }
}

impl FromStr for Selector {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::node::ElementKind;

    #[test]
    fn test_parse_compounds() {
        assert!(Selector::parse(".main .text").is_ok());
        assert!(Selector::parse("h1.title#hero").is_ok());
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse(".").is_err());
        assert!(Selector::parse("#a#b").is_err());
        assert!(Selector::parse(".main > .text").is_err());
    }

    #[test]
    fn test_descendant_matching() {
        let mut scene = Scene::new();
        let main = scene.append_root(Node::div().class("main"));
        let wrapper = scene.append(main, Node::div().class("imagesdiv"));
        let text = scene.append(wrapper, Node::div().class("text"));
        let stray = scene.append_root(Node::div().class("text"));

        let selector = Selector::parse(".main .text").unwrap();
        assert!(selector.matches(&scene, text));
        assert!(!selector.matches(&scene, stray));
        assert!(!selector.matches(&scene, main));
    }

    #[test]
    fn test_tag_and_id() {
        let mut scene = Scene::new();
        let heading = scene.append_root(Node::new(ElementKind::Heading(1)).id("title"));
        assert!(Selector::parse("h1").unwrap().matches(&scene, heading));
        assert!(Selector::parse("#title").unwrap().matches(&scene, heading));
        assert!(!Selector::parse("h3#title").unwrap().matches(&scene, heading));
    }
}
