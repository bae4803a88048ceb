/// Pixels with an alpha value below this are considered transparent and skipped.
pub const MIN_ALPHA: u8 = 125;
/// Pixels with all three channels above this are considered near-white and skipped.
pub const NEAR_WHITE_THRESHOLD: u8 = 220;

/// A trait used to implement filters for the pixel sampling process.
///
/// Every sampled pixel is run through the filters before it is counted towards the palette. A pixel is kept only if
/// every filter allows it. This trait allows the library consumer to implement custom filters.
///
/// See [`crate::PaletteService::add_filter`] on how to add filters to the sampling process.
pub trait Filter: Send + Sync {
    /// Return whether a given pixel should be counted or not. `alpha` is `None` when the image has no alpha channel.
    fn is_allowed(&self, rgb: (u8, u8, u8), alpha: Option<u8>) -> bool;
}

/// The default filter included in every [`crate::PaletteService`] by default.
///
/// This filter will disallow pixels that are mostly transparent, and pixels that are very close to white. Pixels from
/// images without an alpha channel are always considered opaque.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilter;
impl Filter for DefaultFilter {
    fn is_allowed(&self, (r, g, b): (u8, u8, u8), alpha: Option<u8>) -> bool {
        is_opaque(alpha) && !is_near_white(r, g, b)
    }
}

fn is_opaque(alpha: Option<u8>) -> bool {
    alpha.map_or(true, |a| a >= MIN_ALPHA)
}

fn is_near_white(r: u8, g: u8, b: u8) -> bool {
    r > NEAR_WHITE_THRESHOLD && g > NEAR_WHITE_THRESHOLD && b > NEAR_WHITE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_boundary() {
        assert!(!DefaultFilter.is_allowed((10, 20, 30), Some(124)));
        assert!(DefaultFilter.is_allowed((10, 20, 30), Some(125)));
        assert!(DefaultFilter.is_allowed((10, 20, 30), None));
    }

    #[test]
    fn near_white_needs_all_channels() {
        assert!(!DefaultFilter.is_allowed((221, 221, 221), Some(255)));
        assert!(DefaultFilter.is_allowed((220, 221, 221), Some(255)));
        assert!(DefaultFilter.is_allowed((255, 255, 0), None));
        assert!(!DefaultFilter.is_allowed((230, 230, 230), None));
    }

    #[test]
    fn transparent_white_is_rejected() {
        assert!(!DefaultFilter.is_allowed((255, 255, 255), Some(0)));
    }
}
