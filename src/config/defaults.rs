//! Default values for optional configuration fields.
//!
//! The table is mode-independent. Whether a default is actually applied is
//! decided by validation, which only fills admission fields in admission mode
//! and informer fields in informer mode.

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default admission webhook listen address.
pub const DEFAULT_ADDR: &str = ":8443";

/// Default webhook serving certificate.
pub const DEFAULT_CERT_PATH: &str = "cert.pem";

/// Default webhook serving key.
pub const DEFAULT_KEY_PATH: &str = "key.pem";

/// Default CA bundle used to verify API server client certificates.
pub const DEFAULT_CACERT_PATH: &str = "cacert.pem";

/// Default informer resync interval. Zero disables periodic resync.
pub const DEFAULT_INFORMER_RESYNC_INTERVAL: &str = "0";

/// Optional configuration fields known to the defaults table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LogLevel,
    LogPath,
    PodLabel,
    PodAnnotation,
    Addr,
    CertPath,
    KeyPath,
    CaCertPath,
    InsecureSkipClientVerification,
    Kubeconfig,
    InformerResyncInterval,
}

/// The default for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    Flag(bool),
    /// No static default; the field stays unset or is filled by the parser.
    Absent,
}

impl Field {
    /// Default value for this field.
    pub const fn default_value(self) -> FieldDefault {
        match self {
            Field::LogLevel => FieldDefault::Text(DEFAULT_LOG_LEVEL),
            Field::Addr => FieldDefault::Text(DEFAULT_ADDR),
            Field::CertPath => FieldDefault::Text(DEFAULT_CERT_PATH),
            Field::KeyPath => FieldDefault::Text(DEFAULT_KEY_PATH),
            Field::CaCertPath => FieldDefault::Text(DEFAULT_CACERT_PATH),
            Field::InsecureSkipClientVerification => FieldDefault::Flag(false),
            Field::InformerResyncInterval => FieldDefault::Text(DEFAULT_INFORMER_RESYNC_INTERVAL),
            // kubeconfig comes from the environment, the rest have no value.
            Field::LogPath | Field::PodLabel | Field::PodAnnotation | Field::Kubeconfig => {
                FieldDefault::Absent
            }
        }
    }
}

impl FieldDefault {
    /// Text default, if this is one.
    pub const fn as_text(self) -> Option<&'static str> {
        match self {
            FieldDefault::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Boolean default, if this is one.
    pub const fn as_flag(self) -> Option<bool> {
        match self {
            FieldDefault::Flag(value) => Some(value),
            _ => None,
        }
    }
}

/// Returns `value` when set and non-empty, otherwise the field's text default.
///
/// Fields without a text default resolve to an empty string.
pub(crate) fn text_or_default(value: Option<String>, field: Field) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| field.default_value().as_text().unwrap_or_default().to_string())
}

/// Returns `value` when set, otherwise the field's boolean default.
pub(crate) fn flag_or_default(value: Option<bool>, field: Field) -> bool {
    value.unwrap_or_else(|| field.default_value().as_flag().unwrap_or_default())
}
