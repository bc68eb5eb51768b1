use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rusttype::Font;
use std::{collections::HashMap, sync::Arc};

use super::CardError;
use crate::assets;

/// The two bundled typeface weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    SemiBold,
}

impl FontWeight {
    fn bytes(self) -> &'static [u8] {
        match self {
            FontWeight::Regular => assets::FONT_REGULAR,
            FontWeight::SemiBold => assets::FONT_SEMIBOLD,
        }
    }
}

static FONT_CACHE: Lazy<Mutex<HashMap<FontWeight, Arc<Font<'static>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Parses an embedded font on first use and hands out the cached copy after.
/// A parse failure means the bundled asset is corrupt; callers treat it as
/// fatal.
pub fn load(weight: FontWeight) -> Result<Arc<Font<'static>>, CardError> {
    if let Some(f) = FONT_CACHE.lock().get(&weight) {
        return Ok(Arc::clone(f));
    }

    let f = Font::try_from_bytes(weight.bytes())
        .ok_or_else(|| CardError::Font(format!("failed to parse {weight:?} font")))?;

    let f = Arc::new(f);
    FONT_CACHE.lock().insert(weight, Arc::clone(&f));
    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_weights_parse() {
        assert!(load(FontWeight::Regular).is_ok());
        assert!(load(FontWeight::SemiBold).is_ok());
    }
}
