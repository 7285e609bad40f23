/// What a view shows. Exactly one of loading, failure or data at any time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> ViewState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Counter of loads started by one view.
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Starts a new load; every ticket handed out before is now stale.
    pub fn next(&mut self) -> FetchTicket {
        self.current = self.current.wrapping_add(1);
        FetchTicket {
            generation: self.current,
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.current
    }
}

/// Proof of which load a result belongs to. Not `Clone`: a load settles once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a load only settles through its ticket"]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
