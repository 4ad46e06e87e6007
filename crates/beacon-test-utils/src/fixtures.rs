// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A small area library for lifecycle and CLI tests.
//!
//! Hertfordshire's five districts are laid out as adjacent 0.1-degree squares
//! along latitude 51.6 to 51.7, so any run of neighbouring districts unions
//! into a single polygon. Luton sits to the north, on its own.

use beacon_areas::AreaLibrary;
use beacon_core::Template;

pub const ENGLAND: &str = "ctry19-E92000001";
pub const HERTFORDSHIRE: &str = "ctyua19-E10000015";
pub const LUTON: &str = "ctyua19-E06000032";
pub const BROXBOURNE: &str = "lad20-E07000095";
pub const DACORUM: &str = "lad20-E07000096";
pub const HERTSMERE: &str = "lad20-E07000098";
pub const NORTH_HERTFORDSHIRE: &str = "lad20-E07000099";
pub const THREE_RIVERS: &str = "lad20-E07000102";
pub const BUSHEY_HEATH: &str = "wd20-E05004648";
pub const BUSHEY_NORTH: &str = "wd20-E05004649";
pub const ADEYFIELD_EAST: &str = "wd20-E05004580";
pub const BARNFIELD: &str = "wd20-E05008917";

pub const AREA_LIBRARY_JSON: &str = r#"{
    "areas": [
        { "id": "ctry19-E92000001", "name": "England",
          "polygon": [[51.0, -1.0], [51.0, 0.5], [52.5, 0.5], [52.5, -1.0]] },
        { "id": "ctyua19-E10000015", "name": "Hertfordshire",
          "polygon": [[51.6, -0.5], [51.6, 0.0], [51.7, 0.0], [51.7, -0.5]] },
        { "id": "ctyua19-E06000032", "name": "Luton",
          "polygon": [[52.0, -0.5], [52.0, -0.4], [52.1, -0.4], [52.1, -0.5]] },
        { "id": "lad20-E07000096", "name": "Dacorum", "parent": "ctyua19-E10000015",
          "polygon": [[51.6, -0.5], [51.6, -0.4], [51.7, -0.4], [51.7, -0.5]] },
        { "id": "lad20-E07000102", "name": "Three Rivers", "parent": "ctyua19-E10000015",
          "polygon": [[51.6, -0.4], [51.6, -0.3], [51.7, -0.3], [51.7, -0.4]] },
        { "id": "lad20-E07000098", "name": "Hertsmere", "parent": "ctyua19-E10000015",
          "polygon": [[51.6, -0.3], [51.6, -0.2], [51.7, -0.2], [51.7, -0.3]] },
        { "id": "lad20-E07000099", "name": "North Hertfordshire", "parent": "ctyua19-E10000015",
          "polygon": [[51.6, -0.2], [51.6, -0.1], [51.7, -0.1], [51.7, -0.2]] },
        { "id": "lad20-E07000095", "name": "Broxbourne", "parent": "ctyua19-E10000015",
          "polygon": [[51.6, -0.1], [51.6, 0.0], [51.7, 0.0], [51.7, -0.1]] },
        { "id": "wd20-E05004648", "name": "Bushey Heath", "parent": "lad20-E07000098",
          "polygon": [[51.6, -0.3], [51.6, -0.2], [51.65, -0.2], [51.65, -0.3]] },
        { "id": "wd20-E05004649", "name": "Bushey North", "parent": "lad20-E07000098",
          "polygon": [[51.65, -0.3], [51.65, -0.2], [51.7, -0.2], [51.7, -0.3]] },
        { "id": "wd20-E05004580", "name": "Adeyfield East", "parent": "lad20-E07000096",
          "polygon": [[51.6, -0.5], [51.6, -0.4], [51.7, -0.4], [51.7, -0.5]] },
        { "id": "wd20-E05008917", "name": "Barnfield", "parent": "ctyua19-E06000032",
          "polygon": [[52.0, -0.5], [52.0, -0.4], [52.1, -0.4], [52.1, -0.5]] }
    ]
}"#;

/// The fixture library, parsed.
///
/// # Panics
///
/// Never in practice: the document is a compile-time constant covered by tests.
pub fn area_library() -> AreaLibrary {
    AreaLibrary::from_json(AREA_LIBRARY_JSON).expect("fixture area library is valid")
}

/// A flood-warning template with one placeholder.
pub fn flood_template(version: i64) -> Template {
    Template {
        id: "template-flood".to_string(),
        name: "Flood warning".to_string(),
        version,
        content: "Severe flooding expected in ((area)). Move to higher ground.".to_string(),
    }
}
