//! Material registry: per-material physical properties loaded from JSON.
//!
//! The elements file has a top-level `elements` array with exactly
//! `Material::COUNT` entries:
//!
//! ```json
//! { "elements": [
//!     { "index": 0, "type": 0, "weight": 0, "viscosity": 0, "name": "Air" },
//!     ...
//! ] }
//! ```
//!
//! `type` is the `MaterialClass` code. An optional `color` (`[r, g, b, a]`)
//! overrides the built-in palette entry for that index.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::cell::{Color, Material, MaterialClass};
use crate::error::ConfigError;

/// Default display colors, indexed by material ordinal.
const PALETTE: [Color; Material::COUNT] = [
    Color::rgba(0, 0, 0, 255),       // Air
    Color::rgba(211, 176, 131, 255), // Sand
    Color::rgba(130, 130, 130, 255), // Stone
    Color::rgba(0, 121, 241, 255),   // Water
    Color::rgba(80, 80, 80, 255),    // Bedrock
];

/// Physical and display properties of one material.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Properties {
    pub class: MaterialClass,
    /// Downward movement sub-steps per tick.
    pub weight: u32,
    /// Lateral sub-steps a liquid takes once it cannot fall.
    pub viscosity: u32,
    pub name: String,
    pub color: Color,
}

#[derive(Deserialize)]
struct ElementEntry {
    index: usize,
    #[serde(rename = "type")]
    class: MaterialClass,
    weight: u32,
    viscosity: u32,
    name: String,
    #[serde(default)]
    color: Option<Color>,
}

/// Read-only property table, one record per `Material`.
///
/// `Registry::default()` is the unloaded table: every record is
/// zero-initialized, so nothing moves on a grid that uses it.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Registry {
    properties: [Properties; Material::COUNT],
}

impl Registry {
    /// The catalog shipped in `resources/elements.json`.
    #[must_use]
    pub fn builtin() -> Self {
        let entry = |material: Material, class, weight, viscosity| Properties {
            class,
            weight,
            viscosity,
            name: material.to_string(),
            color: PALETTE[material.index()],
        };
        Self {
            properties: [
                entry(Material::Air, MaterialClass::Empty, 0, 0),
                entry(Material::Sand, MaterialClass::Powder, 3, 0),
                entry(Material::Stone, MaterialClass::Solid, 0, 0),
                entry(Material::Water, MaterialClass::Liquid, 2, 4),
                entry(Material::Bedrock, MaterialClass::Solid, 0, 0),
            ],
        }
    }

    /// Read and parse an elements file.
    ///
    /// # Errors
    ///
    /// `ConfigError::Io` if the file cannot be read, otherwise any error
    /// from [`Registry::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(&text)?;
        info!(path = %path.display(), materials = Material::COUNT, "loaded material registry");
        Ok(registry)
    }

    /// Parse an elements document.
    ///
    /// # Errors
    ///
    /// Fails if the text is not JSON, has no `elements` array, lists the
    /// wrong number of entries, repeats or overruns an index, gives Air a
    /// class other than Empty, or makes Bedrock a powder or liquid.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_json::from_str(text)?;
        let entries = document
            .get("elements")
            .and_then(Value::as_array)
            .ok_or(ConfigError::MissingElements)?;
        if entries.len() != Material::COUNT {
            return Err(ConfigError::CountMismatch {
                expected: Material::COUNT,
                found: entries.len(),
            });
        }

        let mut slots: [Option<Properties>; Material::COUNT] = Default::default();
        for value in entries {
            let entry = ElementEntry::deserialize(value)?;
            let slot = slots
                .get_mut(entry.index)
                .ok_or(ConfigError::IndexOutOfRange(entry.index))?;
            if slot.is_some() {
                return Err(ConfigError::DuplicateIndex(entry.index));
            }
            debug!(
                index = entry.index,
                name = %entry.name,
                class = %entry.class,
                weight = entry.weight,
                viscosity = entry.viscosity,
                "material entry"
            );
            *slot = Some(Properties {
                class: entry.class,
                weight: entry.weight,
                viscosity: entry.viscosity,
                name: entry.name,
                color: entry.color.unwrap_or(PALETTE[entry.index]),
            });
        }

        // Exact count plus no duplicates means every slot is filled.
        let registry = Self {
            properties: slots.map(Option::unwrap_or_default),
        };
        let air = registry.class(Material::Air);
        if air != MaterialClass::Empty {
            return Err(ConfigError::AirNotEmpty(air));
        }
        let bedrock = registry.class(Material::Bedrock);
        if matches!(bedrock, MaterialClass::Powder | MaterialClass::Liquid) {
            return Err(ConfigError::BedrockMovable(bedrock));
        }
        Ok(registry)
    }

    #[must_use]
    pub fn properties(&self, material: Material) -> &Properties {
        &self.properties[material.index()]
    }

    #[must_use]
    pub fn class(&self, material: Material) -> MaterialClass {
        self.properties(material).class
    }

    #[must_use]
    pub fn color(&self, material: Material) -> Color {
        self.properties(material).color
    }

    #[must_use]
    pub fn weight(&self, material: Material) -> u32 {
        self.properties(material).weight
    }

    #[must_use]
    pub fn viscosity(&self, material: Material) -> u32 {
        self.properties(material).viscosity
    }

    #[must_use]
    pub fn name(&self, material: Material) -> &str {
        &self.properties(material).name
    }

    /// RGBA8 bytes for every material in ordinal order, for a color
    /// lookup texture.
    #[must_use]
    pub fn color_table(&self) -> Vec<u8> {
        self.properties
            .iter()
            .flat_map(|p| p.color.to_array())
            .collect()
    }
}
