use http::StatusCode;

/// Standard reason phrase for a status code
///
/// Falls back to `"Unknown Error"` for codes without a registered phrase.
pub fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Error")
}

/// Named failure kinds, each bound to a fixed status and code
///
/// Declaration order is the classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalServer,
}

impl ErrorKind {
    /// Every kind, highest priority first
    pub const ALL: [Self; 6] = [
        Self::Validation,
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::InternalServer,
    ];

    /// HTTP status bound to this kind
    pub const fn status(self) -> StatusCode {
        match self {
            Self::Validation | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServer => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code bound to this kind
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::InternalServer => "INTERNAL_ERROR",
        }
    }

    /// Message used when a failure of this kind is built without one
    pub fn reason_phrase(self) -> &'static str {
        reason_phrase(self.status())
    }
}
