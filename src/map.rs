//! GeoJSON marker layers for the shelter maps.
//!
//! The map renderer is external. These layers carry the position of each
//! shelter and the styling hints it needs as feature properties.

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use serde::Serialize;
use serde_json::json;

use crate::loader::ProvinceBoundary;
use crate::reports::{AdoptionTier, ShelterSummary};

/// Adoptions represented by one unit of circle-marker radius.
pub const ADOPTIONS_PER_RADIUS: f64 = 300.0;

/// Adoption board linked from every tier-marker popup.
pub const SHELTER_LINK_URL: &str =
    "https://www.karma.or.kr/human_boardA/animal_board.php?act=list&bid=animal";

/// Stroke and fill applied to every province outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryStyle {
    pub color: &'static str,
    pub fill_color: &'static str,
    pub weight: u32,
}

pub fn boundary_style() -> BoundaryStyle {
    BoundaryStyle {
        color: "black",
        fill_color: "white",
        weight: 5,
    }
}

/// Province outlines with [`boundary_style`] merged into each feature's
/// properties. Existing properties are kept. A bare geometry has nowhere to
/// carry style and is returned as is.
pub fn styled_boundaries(boundary: &ProvinceBoundary) -> GeoJson {
    let style = boundary_style();
    let mut geojson = boundary.as_geojson().clone();
    match &mut geojson {
        GeoJson::FeatureCollection(fc) => {
            for feature in &mut fc.features {
                apply_style(feature, style);
            }
        }
        GeoJson::Feature(feature) => apply_style(feature, style),
        GeoJson::Geometry(_) => {}
    }
    geojson
}

fn apply_style(feature: &mut Feature, style: BoundaryStyle) {
    let props = feature.properties.get_or_insert_with(JsonObject::new);
    props.insert("color".to_string(), json!(style.color));
    props.insert("fillColor".to_string(), json!(style.fill_color));
    props.insert("weight".to_string(), json!(style.weight));
}

/// Hover text shown for a shelter marker.
pub fn tooltip(summary: &ShelterSummary) -> String {
    format!("{} ({} 개 입양)", summary.shelter_name, summary.adoptions)
}

/// Click-through HTML for a tier marker: name, adoption count and a link to
/// the adoption board.
pub fn popup(summary: &ShelterSummary) -> String {
    format!(
        "<div style='font-size: 8pt; font-weight: bold; width:200px; height: 60px;'>\
         {}:<br> {}개<br><a href='{SHELTER_LINK_URL}' target='_blank'>Click here to visit Website</a></div>",
        summary.shelter_name, summary.adoptions
    )
}

/// Marker colour and icon name for a tier.
pub fn tier_style(tier: AdoptionTier) -> (&'static str, &'static str) {
    match tier {
        AdoptionTier::Good => ("blue", "smile"),
        AdoptionTier::Okay => ("green", "meh"),
        AdoptionTier::Bad => ("red", "frown"),
    }
}

fn point_feature(summary: &ShelterSummary, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            summary.longitude,
            summary.latitude,
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn base_properties(summary: &ShelterSummary) -> JsonObject {
    let mut props = JsonObject::new();
    props.insert("name".to_string(), json!(summary.shelter_name));
    props.insert("adoptions".to_string(), json!(summary.adoptions));
    props.insert("tooltip".to_string(), json!(tooltip(summary)));
    props
}

/// Circle markers sized by adoption volume.
pub fn adoption_markers(summaries: &[ShelterSummary]) -> FeatureCollection {
    let features = summaries
        .iter()
        .map(|summary| {
            let mut props = base_properties(summary);
            props.insert(
                "radius".to_string(),
                json!(summary.adoptions as f64 / ADOPTIONS_PER_RADIUS),
            );
            props.insert("color".to_string(), json!("blue"));
            point_feature(summary, props)
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Icon markers styled by tier. Untiered summaries are rated from their
/// adoption count.
pub fn tier_markers(summaries: &[ShelterSummary]) -> FeatureCollection {
    let features = summaries
        .iter()
        .map(|summary| {
            let tier = summary
                .adoption_tier
                .unwrap_or_else(|| AdoptionTier::from_adoptions(summary.adoptions));
            let (color, icon) = tier_style(tier);

            let mut props = base_properties(summary);
            props.insert("tier".to_string(), json!(tier.label()));
            props.insert("color".to_string(), json!(color));
            props.insert("icon".to_string(), json!(icon));
            props.insert("popup".to_string(), json!(popup(summary)));
            props.insert("link_url".to_string(), json!(SHELTER_LINK_URL));
            point_feature(summary, props)
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
