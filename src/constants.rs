pub const THREAD_NAME: &str = "person_api";

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "8000";

/// Log level used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Person ids the in-memory directory knows about unless `--known-ids` is given.
pub const DEFAULT_KNOWN_IDS: &str = "1,2,3,4,5";
/// Default upper bound of a request body in bytes, mostly relevant to image uploads [default: 10 MiB]
pub const DEFAULT_MAX_UPLOAD_BYTES: &str = "10485760";

/// Multipart field name carrying the uploaded image
pub const IMAGE_FIELD_NAME: &str = "image";
/// Cookie name read by the contact form
pub const ADS_COOKIE_NAME: &str = "ads";

pub const PERSON_EXISTS_MESSAGE: &str = "It exists!";
pub const PERSON_NOT_FOUND_DETAIL: &str = "this person does not exist";
