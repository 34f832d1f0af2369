//! The page's element trees.
//!
//! Resting poses here are the starting points the reveal animates away from;
//! they must stay in step with the targets in [`crate::view::reveal`].

use crate::animation::props::Value;
use crate::core::config::AssetManifest;
use crate::core::constants::{SPLASH_FONT_SIZE, SPLASH_MASK_ID, SPLASH_VIEW_BOX};
use crate::scene::node::{ElementKind, Node, NodeId};
use crate::scene::style::Style;
use crate::scene::tree::Scene;

pub const SPLASH_CLASS: &str = "svg";
pub const MASK_GROUP_CLASS: &str = "vi-mask-group";
pub const MAIN_CLASS: &str = "main";
pub const SKY_CLASS: &str = "sky";
pub const BACKGROUND_CLASS: &str = "bg";
pub const CHARACTER_CLASS: &str = "character";
pub const TEXT_CLASS: &str = "text";

const BRAND: &str = "Rockstar";
const HERO_WORDS: [&str; 3] = ["grand", "theft", "auto"];
const FEATURE_HEADINGS: [&str; 2] = ["Still Running,", "Not Hunting"];
const FEATURE_LINES: [&str; 3] = [
    "In this city, loyalty is currency.",
    "Run the streets, rule the game.",
    "Born to break rules, built to survive.",
];
const CALL_TO_ACTION: &str = "Download Now";
const SCROLL_HINT: &str = "Scroll Down";
const SCROLL_ICON: &str = "ri-arrow-down-line";

/// Full-screen black overlay showing the background through a "VI" mask
pub fn build_splash(scene: &mut Scene, assets: &AssetManifest) -> NodeId {
    let overlay = scene.append_root(Node::div().class(SPLASH_CLASS));
    let svg = scene.append(
        overlay,
        Node::new(ElementKind::Svg {
            view_box: SPLASH_VIEW_BOX,
        }),
    );

    let defs = scene.append(svg, Node::new(ElementKind::Defs));
    let mask = scene.append(defs, Node::new(ElementKind::Mask).id(SPLASH_MASK_ID));
    scene.append(
        mask,
        Node::new(ElementKind::Rect {
            fill: "black".to_string(),
        }),
    );
    let group = scene.append(mask, Node::new(ElementKind::Group).class(MASK_GROUP_CLASS));
    scene.append(
        group,
        Node::new(ElementKind::SvgText {
            font_size: SPLASH_FONT_SIZE,
            font_family: "Arial Black".to_string(),
        })
        .text("VI"),
    );

    scene.append(
        svg,
        Node::new(ElementKind::SvgImage {
            href: assets.background.clone(),
            mask: Some(SPLASH_MASK_ID.to_string()),
        }),
    );
    overlay
}

/// Hero section plus the feature block below it, in the pre-reveal pose
pub fn build_main(scene: &mut Scene, assets: &AssetManifest) -> NodeId {
    let main = scene.append_root(Node::div().class(MAIN_CLASS).style(Style::posed(-10.0, 1.7)));
    let landing = scene.append(main, Node::div().class("landing"));

    build_navbar(scene, landing);
    build_hero(scene, landing, assets);
    build_bottom_bar(scene, landing, assets);
    build_feature(scene, main, assets);
    main
}

fn build_navbar(scene: &mut Scene, parent: NodeId) {
    let navbar = scene.append(parent, Node::div().class("navbar"));
    let logo = scene.append(navbar, Node::div().class("logo"));
    let lines = scene.append(logo, Node::div().class("lines"));
    for _ in 0..3 {
        scene.append(lines, Node::div().class("line"));
    }
    scene.append(logo, Node::new(ElementKind::Heading(3)).text(BRAND));
}

fn build_hero(scene: &mut Scene, parent: NodeId, assets: &AssetManifest) {
    let images = scene.append(parent, Node::div().class("imagesdiv"));
    scene.append(
        images,
        image(&assets.sky)
            .class(SKY_CLASS)
            .style(Style::posed(-20.0, 1.5)),
    );
    scene.append(
        images,
        image(&assets.background)
            .class(BACKGROUND_CLASS)
            .style(Style::posed(-3.0, 1.8)),
    );

    let text = scene.append(
        images,
        Node::div().class(TEXT_CLASS).style(Style::posed(-10.0, 1.2)),
    );
    for word in HERO_WORDS {
        scene.append(text, Node::new(ElementKind::Heading(1)).text(word));
    }

    scene.append(
        images,
        image(&assets.character).class(CHARACTER_CLASS).style(
            Style::posed(-5.0, 1.2)
                .with_x(Value::percent(-50.0))
                .with_bottom(Value::percent(-15.0)),
        ),
    );
}

fn build_bottom_bar(scene: &mut Scene, parent: NodeId, assets: &AssetManifest) {
    let bar = scene.append(parent, Node::div().class("btmbar"));
    let hint = scene.append(bar, Node::div().class("scroll-hint"));
    scene.append(hint, Node::new(ElementKind::Icon).class(SCROLL_ICON));
    scene.append(hint, Node::new(ElementKind::Heading(3)).text(SCROLL_HINT));
    scene.append(bar, image(&assets.product).class("product"));
}

fn build_feature(scene: &mut Scene, parent: NodeId, assets: &AssetManifest) {
    let section = scene.append(parent, Node::div().class("feature"));
    let container = scene.append(section, Node::div().class("cntnr"));

    let left = scene.append(container, Node::div().class("limg"));
    scene.append(left, image(&assets.feature));

    let right = scene.append(container, Node::div().class("rg"));
    for heading in FEATURE_HEADINGS {
        scene.append(right, Node::new(ElementKind::Heading(1)).text(heading));
    }
    for line in FEATURE_LINES {
        scene.append(right, Node::new(ElementKind::Paragraph).text(line));
    }
    scene.append(
        right,
        Node::new(ElementKind::Button).class("cta").text(CALL_TO_ACTION),
    );
}

fn image(src: &str) -> Node {
    Node::new(ElementKind::Image {
        src: src.to_string(),
        alt: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_structure() {
        let mut scene = Scene::new();
        let overlay = build_splash(&mut scene, &AssetManifest::default());
        assert_eq!(scene.first(".svg"), Some(overlay));
        assert_eq!(scene.select(".vi-mask-group").len(), 1);
        assert_eq!(scene.select("#viMask rect").len(), 1);
        let text = scene.first(".vi-mask-group text").unwrap();
        assert_eq!(scene.get(text).unwrap().text.as_deref(), Some("VI"));
        assert_eq!(scene.select("image").len(), 1);
    }

    #[test]
    fn test_main_structure_and_poses() {
        let mut scene = Scene::new();
        let main = build_main(&mut scene, &AssetManifest::default());
        assert_eq!(scene.style(main).map(|s| (s.rotate, s.scale)), Some((-10.0, 1.7)));

        for class in [".sky", ".bg", ".character", ".main .text", ".navbar", ".btmbar"] {
            assert_eq!(scene.select(class).len(), 1, "{}", class);
        }
        assert_eq!(scene.select(".text h1").len(), 3);
        assert_eq!(scene.select(".line").len(), 3);
        assert_eq!(scene.select(".rg p").len(), 3);
        assert_eq!(scene.select("button.cta").len(), 1);
        assert_eq!(scene.select("i.ri-arrow-down-line").len(), 1);

        let character = scene.first(".character").unwrap();
        let pose = scene.style(character).unwrap();
        assert_eq!(pose.x, Value::percent(-50.0));
        assert_eq!(pose.bottom, Some(Value::percent(-15.0)));
    }
}
