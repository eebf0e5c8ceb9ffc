/// Versioned base path for every REST resource.
pub const API_PREFIX: &str = "/api/v1";
