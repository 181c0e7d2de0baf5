use std::collections::HashSet;

use shopgen_core::User;

use super::{GenContext, USER_WINDOW_DAYS, faker};

pub fn generate_users(ctx: &mut GenContext<'_>) -> Vec<User> {
    let mut emails = HashSet::new();
    (1..=ctx.record_count())
        .map(|user_id| {
            let first_name = faker::first_name(&mut ctx.rng);
            let last_name = faker::last_name(&mut ctx.rng);
            let email = unique_email(ctx, user_id, &mut emails);
            User {
                user_id,
                first_name,
                last_name,
                email,
                phone: faker::phone_number(&mut ctx.rng),
                address: faker::postal_address(&mut ctx.rng),
                city: faker::city(&mut ctx.rng),
                country: faker::country(&mut ctx.rng),
                created_at: ctx.timestamp_within(USER_WINDOW_DAYS),
            }
        })
        .collect()
}

/// Draw emails until an unused one appears; once the attempt budget is
/// spent, tag the last draw with `+<user_id>` which no faker output contains.
fn unique_email(ctx: &mut GenContext<'_>, user_id: u32, seen: &mut HashSet<String>) -> String {
    let mut candidate = String::new();
    for _ in 0..ctx.options.max_email_attempts {
        candidate = faker::safe_email(&mut ctx.rng);
        if seen.insert(candidate.clone()) {
            return candidate;
        }
    }

    let tagged = match candidate.split_once('@') {
        Some((local, domain)) => format!("{local}+{user_id}@{domain}"),
        None => format!("user+{user_id}@example.com"),
    };
    seen.insert(tagged.clone());
    tagged
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::GenerateOptions;

    #[test]
    fn emails_stay_unique_when_retries_are_exhausted() {
        let options = GenerateOptions {
            record_count: 200,
            max_email_attempts: 1,
            ..GenerateOptions::default()
        };
        let mut ctx = GenContext::new(&options);
        let users = generate_users(&mut ctx);

        let emails: HashSet<&str> = users.iter().map(|user| user.email.as_str()).collect();
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn created_at_falls_within_two_years_of_anchor() {
        let options = GenerateOptions::default();
        let mut ctx = GenContext::new(&options);
        for user in generate_users(&mut ctx) {
            assert!(user.created_at <= options.anchor);
            let age = options.anchor - user.created_at;
            assert!(age.num_days() <= USER_WINDOW_DAYS);
        }
    }
}
