/// Search radius used by the proximity endpoint when `rayon` is absent
pub const DEFAULT_PROXIMITY_RADIUS_KM: f64 = 5.0;

/// Avatar assigned to accounts created without a photo
pub const DEFAULT_PHOTO_URL: &str = "https://www.gravatar.com/avatar/?d=identicon";
