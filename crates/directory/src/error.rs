use std::fmt;
use thiserror::Error;

/// The remote collection a request was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Users,
    User,
    Posts,
}

impl Resource {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::User => "user data",
            Self::Posts => "posts",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Failure of a single API call.
///
/// `Status` covers non-2xx responses. `Transport` covers everything that
/// prevented a usable body: connection errors, timeouts and decode failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch {resource}")]
    Status { resource: Resource, status: u16 },
    #[error("{message}")]
    Transport { resource: Resource, message: String },
}

impl FetchError {
    pub fn transport(resource: Resource, message: impl Into<String>) -> Self {
        Self::Transport {
            resource,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn resource(&self) -> Resource {
        match self {
            Self::Status { resource, .. } | Self::Transport { resource, .. } => *resource,
        }
    }

    /// HTTP status for `Status` failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_the_resource() {
        let err = FetchError::Status {
            resource: Resource::Users,
            status: 500,
        };
        assert_eq!(err.to_string(), "Failed to fetch users");
        assert_eq!(err.status(), Some(500));

        let err = FetchError::Status {
            resource: Resource::User,
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to fetch user data");
    }

    #[test]
    fn transport_message_is_passed_through() {
        let err = FetchError::transport(Resource::Posts, "Unable to reach the server");
        assert_eq!(err.to_string(), "Unable to reach the server");
        assert_eq!(err.resource(), Resource::Posts);
        assert_eq!(err.status(), None);
    }
}
