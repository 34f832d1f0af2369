pub mod html;
pub mod markup;
pub mod node;
pub mod selector;
pub mod style;
pub mod transform;
pub mod tree;

pub use node::{ElementKind, Node, NodeId};
pub use selector::Selector;
pub use style::{Style, TransformOrigin};
pub use transform::Affine;
pub use tree::Scene;
