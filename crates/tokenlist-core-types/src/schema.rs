//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Token identifiers
pub const FIELD_SYMBOL: &str = "symbol";
pub const FIELD_PATH: &str = "path";

// Collection sizes
pub const FIELD_TOKEN_COUNT: &str = "token_count";
pub const FIELD_ENTRY_COUNT: &str = "entry_count";

// Versioning
pub const FIELD_CLASSIFICATION: &str = "classification";
pub const FIELD_VERSION: &str = "version";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
