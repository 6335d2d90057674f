//! Named filter presets and the catalog they are looked up in.
//!
//! A preset is a partial adjustment vector. Applying it is a full
//! replacement: start from [`Adjustments::NEUTRAL`] and overlay the preset's
//! channels, so anything the preset does not mention resets to neutral.
//!
//! The catalog is supplied once, is immutable afterwards and keeps its
//! insertion order. [`PresetCatalog::builtin`] holds the stock looks.

use serde::{Deserialize, Serialize};

use crate::{Adjustments, Channel, Error, FilterChain, PartialAdjustments, Result};

/// A named partial override of the adjustment vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPreset {
    /// Lookup identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Channels this preset overrides.
    #[serde(default)]
    pub adjustments: PartialAdjustments,
}

impl FilterPreset {
    /// Creates a preset.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        adjustments: PartialAdjustments,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            adjustments,
        }
    }

    /// The vector this preset produces when applied.
    pub fn resolve(&self) -> Adjustments {
        Adjustments::NEUTRAL.overlay(&self.adjustments)
    }

    /// Filter chain of the resolved vector, for preset thumbnails.
    pub fn preview_chain(&self) -> FilterChain {
        FilterChain::from_adjustments(&self.resolve())
    }
}

/// Ordered, immutable collection of presets keyed by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FilterPreset>", into = "Vec<FilterPreset>")]
pub struct PresetCatalog {
    presets: Vec<FilterPreset>,
}

impl PresetCatalog {
    /// Builds a catalog, rejecting duplicate identifiers.
    pub fn new(presets: Vec<FilterPreset>) -> Result<Self> {
        for (i, preset) in presets.iter().enumerate() {
            if presets[..i].iter().any(|p| p.id == preset.id) {
                return Err(Error::duplicate_preset(preset.id.clone()));
            }
        }
        Ok(Self { presets })
    }

    /// Catalog with no presets; every lookup misses.
    pub fn empty() -> Self {
        Self {
            presets: Vec::new(),
        }
    }

    /// The stock looks shipped with the editor.
    pub fn builtin() -> Self {
        use Channel::*;

        let p = PartialAdjustments::new;
        Self {
            presets: vec![
                FilterPreset::new("none", "None", p()),
                FilterPreset::new("vivid", "Vivid", p().with(Saturation, 30.0).with(Contrast, 15.0)),
                FilterPreset::new("warm", "Warm", p().with(Temperature, 25.0).with(Saturation, 10.0)),
                FilterPreset::new("cool", "Cool", p().with(Temperature, -25.0).with(Saturation, 5.0)),
                FilterPreset::new("dramatic", "Dramatic", p().with(Contrast, 40.0).with(Saturation, -10.0)),
                FilterPreset::new("fade", "Fade", p().with(Contrast, -20.0).with(Brightness, 10.0)),
                FilterPreset::new("noir", "Noir", p().with(Saturation, -100.0).with(Contrast, 30.0)),
                FilterPreset::new(
                    "vintage",
                    "Vintage",
                    p().with(Saturation, -20.0)
                        .with(Temperature, 15.0)
                        .with(Contrast, -10.0),
                ),
            ],
        }
    }

    /// Looks up a preset by identifier.
    pub fn get(&self, id: &str) -> Option<&FilterPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Returns `true` if `id` names a preset in this catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Presets in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilterPreset> {
        self.presets.iter()
    }

    /// Identifiers in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.id.as_str())
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Returns `true` if the catalog holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<FilterPreset>> for PresetCatalog {
    type Error = Error;

    fn try_from(presets: Vec<FilterPreset>) -> Result<Self> {
        Self::new(presets)
    }
}

impl From<PresetCatalog> for Vec<FilterPreset> {
    fn from(catalog: PresetCatalog) -> Self {
        catalog.presets
    }
}

impl<'a> IntoIterator for &'a PresetCatalog {
    type Item = &'a FilterPreset;
    type IntoIter = std::slice::Iter<'a, FilterPreset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_order() {
        let catalog = PresetCatalog::builtin();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(
            ids,
            ["none", "vivid", "warm", "cool", "dramatic", "fade", "noir", "vintage"]
        );
    }

    #[test]
    fn resolve_resets_unspecified_channels() {
        let catalog = PresetCatalog::builtin();
        let noir = catalog.get("noir").unwrap().resolve();
        assert_eq!(noir.saturation, -100.0);
        assert_eq!(noir.contrast, 30.0);
        assert_eq!(noir.brightness, 0.0);
        assert_eq!(noir.temperature, 0.0);
    }

    #[test]
    fn none_preset_is_neutral() {
        let catalog = PresetCatalog::builtin();
        assert!(catalog.get("none").unwrap().resolve().is_neutral());
        assert!(catalog.get("none").unwrap().preview_chain().is_identity());
    }

    #[test]
    fn unknown_id_misses() {
        let catalog = PresetCatalog::builtin();
        assert!(catalog.get("sepia").is_none());
        assert!(!catalog.contains("sepia"));
        assert!(PresetCatalog::empty().get("none").is_none());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let presets = vec![
            FilterPreset::new("a", "A", PartialAdjustments::new()),
            FilterPreset::new("a", "Again", PartialAdjustments::new()),
        ];
        let err = PresetCatalog::new(presets).unwrap_err();
        assert!(matches!(err, Error::DuplicatePreset { ref id } if id == "a"));
    }

    #[test]
    fn catalog_from_yaml() {
        let yaml = r#"
- id: punch
  name: Punch
  adjustments: { contrast: 25, saturation: 20 }
- id: plain
  name: Plain
"#;
        let catalog: PresetCatalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("punch").unwrap().resolve().contrast, 25.0);
        assert!(catalog.get("plain").unwrap().adjustments.is_empty());
    }

    #[test]
    fn catalog_yaml_rejects_duplicates() {
        let yaml = "[{id: x, name: X}, {id: x, name: Y}]";
        assert!(serde_yaml::from_str::<PresetCatalog>(yaml).is_err());
    }
}
