use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{Font, FontMetrics, FontdueMetrics, NullMetrics};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a face loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FaceId(pub(crate) usize);

#[derive(Debug, Default, Clone, Copy)]
struct Family {
    regular: Option<FaceId>,
    bold: Option<FaceId>,
}

/// Resolves [`Font`] requests to loaded fontdue faces.
///
/// Faces are registered under a family name (matched case-insensitively),
/// either as the regular or the bold face of that family. Resolution order:
///
/// 1. the bold face, if the request is bold and one is registered
/// 2. the regular face of the family
/// 3. the same lookup against the fallback family
///
/// Anything else is unresolved and measures as [`NullMetrics`].
#[derive(Default)]
pub struct FontSystem {
    faces: Vec<Arc<fontdue::Font>>,
    families: HashMap<String, Family>,
    fallback: Option<String>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType face and registers it for `family`.
    ///
    /// Registering a second face for the same family and weight replaces the
    /// first.
    pub fn load_font(&mut self, family: &str, bold: bool, bytes: &[u8]) -> Result<FaceId, FontLoadError> {
        let face = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FaceId(self.faces.len());
        self.faces.push(Arc::new(face));

        let entry = self.families.entry(family_key(family)).or_default();
        if bold {
            entry.bold = Some(id);
        } else {
            entry.regular = Some(id);
        }
        log::debug!("registered {} face for family {family:?}", if bold { "bold" } else { "regular" });
        Ok(id)
    }

    /// Family consulted when a request names an unknown family.
    pub fn set_fallback_family(&mut self, family: impl Into<String>) {
        self.fallback = Some(family.into());
    }

    #[inline]
    pub fn has_family(&self, family: &str) -> bool {
        self.families.contains_key(&family_key(family))
    }

    /// Returns the face a request resolves to, if any.
    pub fn resolve(&self, font: &Font) -> Option<FaceId> {
        self.lookup(font.family(), font.is_bold()).or_else(|| {
            let fallback = self.fallback.as_deref()?;
            self.lookup(fallback, font.is_bold())
        })
    }

    /// Metrics for `font`, or zero metrics when it cannot be resolved.
    pub fn metrics(&self, font: &Font) -> Arc<dyn FontMetrics> {
        match self.resolve(font).and_then(|id| self.faces.get(id.0)) {
            Some(face) => Arc::new(FontdueMetrics::new(Arc::clone(face), font.size() as f32)),
            None => {
                log::debug!("no face for {font}; using zero metrics");
                Arc::new(NullMetrics)
            }
        }
    }

    fn lookup(&self, family: &str, bold: bool) -> Option<FaceId> {
        let entry = self.families.get(&family_key(family))?;
        if bold {
            entry.bold.or(entry.regular)
        } else {
            entry.regular.or(entry.bold)
        }
    }
}

fn family_key(family: &str) -> String {
    family.trim().to_lowercase()
}
