//! Application-level configuration constants.

/// Outbound webhook receiving every lead.
pub const WEBHOOK_URL: &str =
    "https://n8n.energum.earth/webhook/dfb660da-1480-40a5-bbdc-7579e6772fe1";

// Submission
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur est survenue. Veuillez réessayer.";

// Map defaults (Paris)
pub const DEFAULT_LATITUDE: f64 = 48.8566;
pub const DEFAULT_LONGITUDE: f64 = 2.3522;
pub const DEFAULT_ZOOM: f64 = 13.0;
pub const MAP_HEIGHT_PX: u32 = 400;

// Tile provider
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

// UI constants
pub const COORDINATE_DISPLAY_DECIMALS: usize = 6;
pub const READY_POLL_MS: u32 = 50;

/// Image URLs for the map marker, handed to the map widget at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerIconUrls {
    pub icon: &'static str,
    pub retina_icon: &'static str,
    pub shadow: &'static str,
}

pub const MARKER_ICON_URLS: MarkerIconUrls = MarkerIconUrls {
    icon: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png",
    retina_icon: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon-2x.png",
    shadow: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png",
};

/// Pixel geometry of the marker image, as `(x, y)` pairs.
///
/// `anchor` is the image point placed on the selected coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerIconMetrics {
    pub size: (f64, f64),
    pub anchor: (f64, f64),
    pub popup_anchor: (f64, f64),
    pub shadow_size: (f64, f64),
}

pub const MARKER_ICON_METRICS: MarkerIconMetrics = MarkerIconMetrics {
    size: (25.0, 41.0),
    anchor: (12.0, 41.0),
    popup_anchor: (1.0, -34.0),
    shadow_size: (41.0, 41.0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retina_marker_is_the_2x_image() {
        let urls = MARKER_ICON_URLS;
        assert_ne!(urls.retina_icon, urls.icon);
        assert!(urls.retina_icon.ends_with("marker-icon-2x.png"));
        assert!(urls.icon.ends_with("marker-icon.png"));
    }

    #[test]
    fn marker_tip_sits_on_the_coordinate() {
        let m = MARKER_ICON_METRICS;
        // Pin tip is the bottom-centre pixel of the image.
        assert_eq!(m.anchor.0, (m.size.0 / 2.0).floor());
        assert_eq!(m.anchor.1, m.size.1);
        assert!(m.popup_anchor.1 < 0.0);
        assert_eq!(m.shadow_size.1, m.size.1);
    }
}
