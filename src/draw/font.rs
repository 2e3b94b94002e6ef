//! Font descriptor for text primitives.

/// Slant requested from the backend's toy font selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlant {
    Normal,
    Italic,
    Oblique,
}

/// Weight requested from the backend's toy font selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font configuration for text rendering.
///
/// Text primitives always use [`FontDescriptor::text_default`]; the type exists
/// so the face travels through the [`DrawingSurface`](super::DrawingSurface)
/// seam as one value.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace")
    pub family: String,
    pub slant: FontSlant,
    pub weight: FontWeight,
    /// Size in device units
    pub size: f64,
}

impl FontDescriptor {
    /// Family used by [`draw_text`](super::draw_text).
    pub const TEXT_FAMILY: &'static str = "Sans";
    /// Size used by [`draw_text`](super::draw_text).
    pub const TEXT_SIZE: f64 = 13.0;

    pub fn new(family: impl Into<String>, slant: FontSlant, weight: FontWeight, size: f64) -> Self {
        Self {
            family: family.into(),
            slant,
            weight,
            size,
        }
    }

    /// Sans-serif at normal slant and weight, 13 device units.
    pub fn text_default() -> Self {
        Self::new(
            Self::TEXT_FAMILY,
            FontSlant::Normal,
            FontWeight::Normal,
            Self::TEXT_SIZE,
        )
    }
}

impl From<FontSlant> for cairo::FontSlant {
    fn from(slant: FontSlant) -> Self {
        match slant {
            FontSlant::Normal => cairo::FontSlant::Normal,
            FontSlant::Italic => cairo::FontSlant::Italic,
            FontSlant::Oblique => cairo::FontSlant::Oblique,
        }
    }
}

impl From<FontWeight> for cairo::FontWeight {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Normal => cairo::FontWeight::Normal,
            FontWeight::Bold => cairo::FontWeight::Bold,
        }
    }
}
