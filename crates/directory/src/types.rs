use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

/// Numeric user identifier shared by the list links and the detail route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse::<i64>().map(Self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// A user as returned by `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub address: Address,
    pub company: Company,
}

impl UserSummary {
    /// Street, suite, city and zipcode joined with commas.
    #[must_use]
    pub fn address_line(&self) -> String {
        let Address {
            street,
            suite,
            city,
            zipcode,
        } = &self.address;
        format!("{street}, {suite}, {city}, {zipcode}")
    }
}

/// A user as returned by `GET /users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub company: Company,
}

impl UserProfile {
    /// Street and city only, as shown on the detail page.
    #[must_use]
    pub fn short_address(&self) -> String {
        format!("{}, {}", self.address.street, self.address.city)
    }

    /// Decodes a `GET /users/{id}` body. `null` and `{}` mean the user does
    /// not exist and decode to `None`.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body is neither empty nor a profile.
    pub fn from_body(body: serde_json::Value) -> Result<Option<Self>, serde_json::Error> {
        match &body {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(body).map(Some),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

/// Ready payload of the detail view. A missing profile renders as "not found".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDetail {
    pub profile: Option<UserProfile>,
    pub posts: Vec<Post>,
}

// The API sends numeric post ids; keep their textual form.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Number(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile_body() -> serde_json::Value {
        json!({
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": {
                "street": "Victor Plains",
                "suite": "Suite 879",
                "city": "Wisokyburgh",
                "zipcode": "90566-7771",
                "geo": { "lat": "-43.9509", "lng": "-34.4618" }
            },
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net",
            "company": { "name": "Deckow-Crist", "catchPhrase": "Proactive" }
        })
    }

    #[test]
    fn user_id_round_trips_through_text() {
        for raw in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
            let id = UserId(raw);
            assert_eq!(id.to_string().parse::<UserId>().ok(), Some(id));
        }
        assert_eq!("-1".parse::<UserId>().ok(), Some(UserId(-1)));
        assert!("abc".parse::<UserId>().is_err());
        assert!("1.5".parse::<UserId>().is_err());
    }

    #[test]
    fn summary_ignores_unknown_fields_and_joins_address() {
        let summary: UserSummary = serde_json::from_value(profile_body()).unwrap();
        assert_eq!(summary.id, UserId(2));
        assert_eq!(
            summary.address_line(),
            "Victor Plains, Suite 879, Wisokyburgh, 90566-7771"
        );
        assert_eq!(summary.company.name, "Deckow-Crist");
    }

    #[test]
    fn negative_id_does_not_break_the_list() {
        let mut negative = profile_body();
        negative["id"] = json!(-1);
        let users: Vec<UserSummary> =
            serde_json::from_value(json!([negative, profile_body()])).unwrap();
        assert_eq!(users[0].id, UserId(-1));
        assert_eq!(users[1].id, UserId(2));
    }

    #[test]
    fn profile_body_decodes_short_address() {
        let profile = UserProfile::from_body(profile_body()).unwrap().unwrap();
        assert_eq!(profile.phone, "010-692-6593 x09125");
        assert_eq!(profile.short_address(), "Victor Plains, Wisokyburgh");
    }

    #[test]
    fn empty_profile_body_is_not_found() {
        assert_eq!(UserProfile::from_body(json!({})).unwrap(), None);
        assert_eq!(UserProfile::from_body(serde_json::Value::Null).unwrap(), None);
        assert!(UserProfile::from_body(json!({ "id": 1 })).is_err());
    }

    #[test]
    fn post_accepts_numeric_and_text_ids() {
        let posts: Vec<Post> = serde_json::from_value(json!([
            { "userId": 1, "id": 7, "title": "t", "body": "b" },
            { "userId": 1, "id": "x-8", "title": "t2", "body": "b2" }
        ]))
        .unwrap();
        assert_eq!(posts[0].id, "7");
        assert_eq!(posts[0].user_id, UserId(1));
        assert_eq!(posts[1].id, "x-8");
    }
}
