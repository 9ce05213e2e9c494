use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(WriteError, "Error writing file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid JSON in collection '{collection}'.", { collection: &str });
define_client_error!(
    InvalidDocument,
    "Invalid document '{id}' in collection '{collection}'.",
    { collection: &str, id: &str }
);
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(
    InvalidAmount,
    "Invalid amount for '{field}': '{value}'.",
    { field: &str, value: &str }
);

// Store-related.
define_client_error!(
    RecordNotFound,
    "No record '{id}' in collection '{collection}'.",
    { collection: &str, id: &str }
);
define_internal_error!(
    StoreUnavailable,
    "Document store unavailable: {details}.",
    { details: &str }
);
