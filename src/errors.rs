use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading document '{name}'.", { name: &str });
define_client_error!(
    UnsupportedMediaType,
    "Unsupported document type for '{name}'. Expected a PDF or an image.",
    { name: &str }
);

// Configuration-related.
define_client_error!(
    InvalidYearRange,
    "Invalid year range {start}..={end}: the start year must not be after the end year, and the range may cover at most 1000 years.",
    { start: i32, end: i32 }
);
define_client_error!(
    MissingApiKey,
    "Missing extraction API key (set {env_var}).",
    { env_var: &str }
);
define_client_error!(
    InvalidConfigValue,
    "Invalid value for {name}: '{value}'.",
    { name: &str, value: &str }
);

// Extraction-related.
define_internal_error!(
    ExtractionRequestFailed,
    "Extraction request for '{document}' failed.",
    { document: &str }
);
define_internal_error!(
    ExtractionRejected,
    "Extraction service rejected '{document}' with status {status}.",
    { document: &str, status: u16 }
);
define_internal_error!(
    InvalidExtractionResponse,
    "Extraction service returned an unreadable response for '{document}'.",
    { document: &str }
);
