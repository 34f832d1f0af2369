use crate::scene::style::Style;
use serde::{Deserialize, Serialize};

/// Index of a node inside its [`Scene`](crate::scene::tree::Scene)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// What a node draws as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    Div,
    Svg { view_box: (f64, f64, f64, f64) },
    Defs,
    Mask,
    /// Full-size svg rectangle with a fill colour
    Rect { fill: String },
    Group,
    SvgText { font_size: f64, font_family: String },
    /// Svg `<image>`, optionally drawn through a mask
    SvgImage { href: String, mask: Option<String> },
    Image { src: String, alt: String },
    Heading(u8),
    Paragraph,
    Button,
    /// Glyph from an icon font, named by its class
    Icon,
}

impl ElementKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Div => "div",
            ElementKind::Svg { .. } => "svg",
            ElementKind::Defs => "defs",
            ElementKind::Mask => "mask",
            ElementKind::Rect { .. } => "rect",
            ElementKind::Group => "g",
            ElementKind::SvgText { .. } => "text",
            ElementKind::SvgImage { .. } => "image",
            ElementKind::Image { .. } => "img",
            ElementKind::Heading(1) => "h1",
            ElementKind::Heading(2) => "h2",
            ElementKind::Heading(_) => "h3",
            ElementKind::Paragraph => "p",
            ElementKind::Button => "button",
            ElementKind::Icon => "i",
        }
    }

    /// Elements that never carry children or text
    pub fn is_void(&self) -> bool {
        matches!(
            self,
            ElementKind::Image { .. } | ElementKind::Rect { .. } | ElementKind::SvgImage { .. }
        )
    }
}

/// A visual element
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: ElementKind,
    pub element_id: Option<String>,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub style: Style,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) attached: bool,
}

impl Node {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            element_id: None,
            classes: Vec::new(),
            text: None,
            style: Style::default(),
            parent: None,
            children: Vec::new(),
            attached: true,
        }
    }

    pub fn div() -> Self {
        Self::new(ElementKind::Div)
    }

    /// Add space separated classes
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.element_id = Some(id.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
