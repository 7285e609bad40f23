//! Plain-text rendering of settled views.

use std::fmt::Write;
use userdir_directory::{Post, UserCard, UserProfile};

pub const NOT_FOUND: &str = "User not found.";

/// One block per card, separated by a blank line.
#[must_use]
pub fn cards(cards: &[UserCard]) -> String {
    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", card.name);
        let _ = writeln!(out, "  {}", card.email);
        let _ = writeln!(out, "  {}", card.address);
        let _ = writeln!(out, "  {}", card.company);
        let _ = writeln!(out, "  {}", card.href);
    }
    out
}

/// Profile fields followed by the posts in the order the API returned them.
#[must_use]
pub fn profile(profile: &UserProfile, posts: &[Post]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.name);
    let _ = writeln!(out, "Email:   {}", profile.email);
    let _ = writeln!(out, "Address: {}", profile.short_address());
    let _ = writeln!(out, "Company: {}", profile.company.name);
    let _ = writeln!(out, "Phone:   {}", profile.phone);
    let _ = writeln!(out);
    let _ = writeln!(out, "Posts by {}", profile.name);

    for post in posts {
        let _ = writeln!(out);
        let _ = writeln!(out, "- {}", post.title);
        for line in post.body.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdir_directory::{Address, Company, UserId};

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: UserId(1),
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770-736-8031 x56442".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
            },
            company: Company {
                name: "Romaguera-Crona".to_string(),
            },
        }
    }

    #[test]
    fn cards_are_separated_by_blank_lines() {
        let card = UserCard {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            address: "s, su, c, z".to_string(),
            company: "Acme".to_string(),
            href: "/users/1".to_string(),
        };
        let rendered = cards(&[card.clone(), card]);
        assert_eq!(rendered.matches("Ann\n").count(), 2);
        assert!(rendered.contains("  /users/1\n\nAnn\n"));
        assert_eq!(cards(&[]), "");
    }

    #[test]
    fn profile_lists_fields_then_posts() {
        let posts = vec![
            Post {
                id: "1".to_string(),
                title: "first".to_string(),
                body: "line one\nline two".to_string(),
                user_id: UserId(1),
            },
            Post {
                id: "2".to_string(),
                title: "second".to_string(),
                body: "body".to_string(),
                user_id: UserId(1),
            },
        ];
        let rendered = profile(&sample_profile(), &posts);

        assert!(rendered.starts_with("Leanne Graham\n"));
        assert!(rendered.contains("Address: Kulas Light, Gwenborough\n"));
        assert!(rendered.contains("Phone:   1-770-736-8031 x56442\n"));
        assert!(rendered.contains("Posts by Leanne Graham\n"));
        assert!(rendered.contains("- first\n  line one\n  line two\n"));
        let first = rendered.find("- first").unwrap_or_default();
        let second = rendered.find("- second").unwrap_or_default();
        assert!(first < second);
    }

    #[test]
    fn profile_without_posts_has_only_heading() {
        let rendered = profile(&sample_profile(), &[]);
        assert!(rendered.ends_with("Posts by Leanne Graham\n"));
    }
}
