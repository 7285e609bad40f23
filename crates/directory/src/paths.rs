//! Route paths shared by the list links and the detail route.

use crate::types::UserId;

pub const USERS: &str = "/users";

/// Link target of a user card.
#[must_use]
pub fn user_detail(id: UserId) -> String {
    format!("{USERS}/{id}")
}

/// Converts the `:id` route segment back into a user id.
#[must_use]
pub fn parse_user_id(segment: &str) -> Option<UserId> {
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_link_round_trips_the_id() {
        for raw in [-1_i64, 0, 1, 10, 9_999] {
            let id = UserId(raw);
            let href = user_detail(id);
            let segment = href.rsplit('/').next().unwrap_or_default();
            assert_eq!(parse_user_id(segment), Some(id));
        }
        assert_eq!(user_detail(UserId(3)), "/users/3");
    }

    #[test]
    fn non_numeric_segments_are_rejected() {
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id(" 3"), None);
        assert_eq!(parse_user_id("1.5"), None);
    }
}
