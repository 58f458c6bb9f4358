//! Default seed content for collections that have never been written.
//!
//! Seed sets are deterministic in shape but time-relative: timestamps are
//! computed backwards from "now" so a fresh deployment looks recently
//! active. Nominations and postcards start empty.

use chrono::{Duration, Utc};

use super::records::{Nomination, Pledge, Postcard, Wish};

/// The four pledge cards shown on the pledge wall.
const PLEDGE_TYPES: [(&str, &str); 4] = [
    ("mentor", "Mentor a Woman"),
    ("amplify", "Amplify Women's Voices"),
    ("educate", "Educate Yourself"),
    ("support", "Support Women-Owned Businesses"),
];

/// Three starter wishes, staggered 2h / 1h / 30m into the past.
pub fn wish_seeds() -> Vec<Wish> {
    let now = Utc::now();
    [
        (
            Duration::hours(2),
            "Happy Women's Day to all the incredible women who inspire us daily!",
        ),
        (
            Duration::hours(1),
            "To my mom, sister, and all women in my life - thank you for your strength and love!",
        ),
        (
            Duration::minutes(30),
            "Celebrating the achievements and resilience of women everywhere!",
        ),
    ]
    .into_iter()
    .map(|(ago, message)| {
        let at = now - ago;
        Wish {
            id: at.timestamp_millis(),
            message: message.to_string(),
            date: at,
        }
    })
    .collect()
}

/// 83 starter pledges (for 8/3), cycling the pledge cards 100s apart.
pub fn pledge_seeds() -> Vec<Pledge> {
    let now = Utc::now();
    (0..83i64)
        .map(|i| {
            let (pledge_id, text) = PLEDGE_TYPES[(i % 4) as usize];
            let at = now - Duration::milliseconds(i * 100_000);
            Pledge {
                id: at.timestamp_millis(),
                pledge_id: pledge_id.to_string(),
                text: text.to_string(),
                date: at,
            }
        })
        .collect()
}

/// Nominations start empty.
pub fn nomination_seeds() -> Vec<Nomination> {
    Vec::new()
}

/// Postcards start empty.
pub fn postcard_seeds() -> Vec<Postcard> {
    Vec::new()
}
