use featconf_core::model::{FeatureGroup, FeatureNode, GroupType, ModelMetadata};

/// Build the mobile-phone fixture model used across the suites
///
/// ```text
/// MobilePhone*
///  ├─ Calls*
///  ├─ GPS
///  ├─ Screen* ─ (XOR) Basic | Colour | HighResolution
///  └─ Media   ─ (OR)  Camera (requires HighResolution) | MP3
/// ```
#[allow(dead_code)]
pub fn phone_model() -> FeatureNode {
    FeatureNode::new("MobilePhone")
        .mandatory()
        .with_child(FeatureNode::new("Calls").mandatory())
        .with_child(FeatureNode::new("GPS"))
        .with_child(
            FeatureNode::new("Screen").mandatory().with_group(FeatureGroup::new(
                GroupType::Xor,
                vec![
                    FeatureNode::new("Basic"),
                    FeatureNode::new("Colour"),
                    FeatureNode::new("HighResolution"),
                ],
            )),
        )
        .with_child(
            FeatureNode::new("Media").with_group(FeatureGroup::new(
                GroupType::Or,
                vec![
                    FeatureNode::new("Camera").requires("HighResolution"),
                    FeatureNode::new("MP3"),
                ],
            )),
        )
}

/// Metadata for the fixture model, as the visualization collaborator derives it
#[allow(dead_code)]
pub fn phone_metadata() -> ModelMetadata {
    ModelMetadata::from_tree(&phone_model())
}
