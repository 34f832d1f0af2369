//! HTML serialization of a [`Scene`].
//!
//! Every element carries a `data-node` attribute with its [`NodeId`] so a
//! DOM binding can patch styles in place between structural changes.

use crate::animation::props::format_amount;
use crate::scene::node::{ElementKind, Node, NodeId};
use crate::scene::tree::Scene;
use std::fmt::Write;

/// Layout rules for the semantic classes the scene uses
pub const STYLESHEET: &str = r#"
html, body { margin: 0; background: #000; color: #fff; overflow-x: hidden; }
.svg { position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; overflow: hidden; background: #000; }
.svg svg { width: 100%; height: 100vh; }
.main { width: 100%; }
.landing { position: relative; width: 100%; height: 100vh; overflow: hidden; background: #000; }
.navbar { position: absolute; top: 0; left: 0; z-index: 10; width: 100%; padding: 24px 40px; box-sizing: border-box; }
.logo { display: flex; gap: 28px; align-items: center; }
.lines { display: flex; flex-direction: column; gap: 5px; }
.line { height: 4px; width: 24px; background: #fff; }
.line:nth-child(2) { width: 20px; }
.line:nth-child(3) { width: 12px; }
.logo h3 { margin: -4px 0 0; font-size: 2.25rem; line-height: 1; }
.imagesdiv { position: relative; width: 100%; height: 100vh; overflow: hidden; }
.imagesdiv img { position: absolute; }
.sky, .bg { top: 0; left: 0; width: 100%; height: 100%; object-fit: cover; }
.text { position: absolute; top: 4.5rem; left: 50%; display: flex; flex-direction: column; gap: 12px; text-align: center; translate: -50% 0; }
.text h1 { margin: 0; font-size: 12rem; line-height: 1; }
.text h1:nth-child(1), .text h1:nth-child(3) { margin-left: -10rem; }
.text h1:nth-child(2) { margin-left: 5rem; }
.character { left: 50%; max-height: 90vh; object-fit: contain; }
.btmbar { position: absolute; bottom: 0; left: 0; width: 100%; padding: 24px 40px; box-sizing: border-box; background: linear-gradient(to top, #000, transparent); }
.scroll-hint { display: flex; align-items: center; gap: 12px; }
.scroll-hint h3 { font-family: monospace; font-size: 1.25rem; margin: 0; }
.product { position: absolute; height: 55px; top: 50%; left: 50%; translate: -50% -50%; }
.feature { width: 100%; min-height: 100vh; background: #000; display: flex; align-items: center; justify-content: center; padding: 40px 16px; box-sizing: border-box; }
.cntnr { display: flex; flex-wrap: wrap; gap: 40px; width: 100%; max-width: 1400px; }
.limg { flex: 1 1 50%; display: flex; align-items: center; justify-content: center; }
.limg img { max-width: 100%; max-height: 100%; object-fit: contain; }
.rg { flex: 1 1 40%; }
.rg h1 { font-size: 3.75rem; margin: 0; }
.rg p { font-family: monospace; font-size: 1.125rem; margin-top: 16px; }
.cta { margin-top: 32px; padding: 16px 24px; background: #eab308; color: #000; font: bold 1.25rem monospace; letter-spacing: 0.05em; border: 0; }
"#;

/// Serialize the attached tree
pub fn render(scene: &Scene) -> String {
    let mut out = String::new();
    for root in scene.roots() {
        render_node(scene, *root, &mut out);
    }
    out
}

/// A standalone page around [`render`]
pub fn render_document(scene: &Scene, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/remixicon/fonts/remixicon.css\">\n\
         <style>{}</style>\n</head>\n<body>\n<div id=\"landing-root\">{}</div>\n</body>\n</html>\n",
        escape(title),
        STYLESHEET,
        render(scene)
    )
}

fn render_node(scene: &Scene, id: NodeId, out: &mut String) {
    let Some(node) = scene.get(id) else {
        return;
    };
    let tag = node.kind.tag();

    let _ = write!(out, "<{} data-node=\"{}\"", tag, id.0);
    write_attributes(node, out);
    if let Some(id_attr) = &node.element_id {
        let _ = write!(out, " id=\"{}\"", escape(id_attr));
    }
    if !node.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&node.classes.join(" ")));
    }
    let css = node.style.to_css();
    if !css.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape(&css));
    }

    if node.kind.is_void() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&escape(text));
    }
    for child in node.children() {
        render_node(scene, *child, out);
    }
    let _ = write!(out, "</{}>", tag);
}

fn write_attributes(node: &Node, out: &mut String) {
    match &node.kind {
        ElementKind::Svg { view_box } => {
            let (x, y, w, h) = *view_box;
            let _ = write!(
                out,
                " viewBox=\"{} {} {} {}\" preserveAspectRatio=\"xMidYMid slice\"",
                format_amount(x),
                format_amount(y),
                format_amount(w),
                format_amount(h)
            );
        }
        ElementKind::Rect { fill } => {
            let _ = write!(out, " width=\"100%\" height=\"100%\" fill=\"{}\"", escape(fill));
        }
        ElementKind::SvgText {
            font_size,
            font_family,
        } => {
            let _ = write!(
                out,
                " x=\"50%\" y=\"50%\" font-size=\"{}\" text-anchor=\"middle\" fill=\"white\" \
                 dominant-baseline=\"middle\" font-family=\"{}\"",
                format_amount(*font_size),
                escape(font_family)
            );
        }
        ElementKind::SvgImage { href, mask } => {
            let _ = write!(
                out,
                " href=\"{}\" width=\"100%\" height=\"100%\" preserveAspectRatio=\"xMidYMid slice\"",
                escape(href)
            );
            if let Some(mask) = mask {
                let _ = write!(out, " mask=\"url(#{})\"", escape(mask));
            }
        }
        ElementKind::Image { src, alt } => {
            let _ = write!(out, " src=\"{}\" alt=\"{}\"", escape(src), escape(alt));
        }
        _ => {}
    }
}

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AssetManifest;
    use crate::scene::markup::{build_main, build_splash};

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_splash_markup() {
        let mut scene = Scene::new();
        build_splash(&mut scene, &AssetManifest::default());
        let html = render(&scene);
        assert!(html.starts_with("<div data-node=\"0\" class=\"svg\">"));
        assert!(html.contains("viewBox=\"0 0 800 600\""));
        assert!(html.contains("<mask data-node=\"3\" id=\"viMask\">"));
        assert!(html.contains(">VI</text>"));
        assert!(html.contains("mask=\"url(#viMask)\""));
        assert!(html.contains("href=\"./bg.png\""));
    }

    #[test]
    fn test_main_markup_carries_poses() {
        let mut scene = Scene::new();
        build_main(&mut scene, &AssetManifest::default());
        let html = render(&scene);
        assert!(html.contains("class=\"main\" style=\"transform: translate(0px, 0px) rotate(-10deg) scale(1.7)"));
        assert!(html.contains("bottom: -15%"));
        assert!(html.contains(">Download Now</button>"));
        assert!(html.contains("<i data-node="));
    }

    #[test]
    fn test_removed_nodes_are_not_rendered() {
        let mut scene = Scene::new();
        let overlay = build_splash(&mut scene, &AssetManifest::default());
        scene.remove(overlay);
        assert_eq!(render(&scene), "");
        assert!(render_document(&scene, "Landing").contains("<div id=\"landing-root\"></div>"));
    }
}
