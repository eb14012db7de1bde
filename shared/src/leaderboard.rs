use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::MIN_SEARCH_QUERY_LEN;

const ID_FIELDS: [&str; 3] = ["id", "user_id", "telegram_id"];
const PHOTO_FIELDS: [&str; 3] = ["photo_url", "avatar", "photo"];
const PLAY_COUNT_FIELDS: [&str; 6] = [
    "play_count",
    "plays",
    "games",
    "games_played",
    "spins",
    "total_spins",
];

/// Body of `GET /api/leaderboard`: either a bare array or `{ "users": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LeaderboardPayload {
    Users(Vec<Map<String, Value>>),
    Wrapped { users: Vec<Map<String, Value>> },
}

impl LeaderboardPayload {
    pub fn into_records(self) -> Vec<Map<String, Value>> {
        match self {
            LeaderboardPayload::Users(users) | LeaderboardPayload::Wrapped { users } => users,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: i64,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub play_count: u64,
}

impl LeaderboardEntry {
    /// Maps one wire record into the canonical shape. Records without a usable
    /// identifier are dropped.
    pub fn from_record(record: &Map<String, Value>) -> Option<Self> {
        let id = ID_FIELDS
            .iter()
            .find_map(|field| record.get(*field).and_then(as_i64))?;

        let photo_url = PHOTO_FIELDS
            .iter()
            .find_map(|field| non_empty_str(record, field))
            .map(str::to_string);

        let play_count = PLAY_COUNT_FIELDS
            .iter()
            .find_map(|field| record.get(*field).and_then(as_u64))
            .unwrap_or(0);

        Some(Self {
            rank: 0,
            id,
            display_name: display_name(record, id),
            photo_url,
            play_count,
        })
    }

    pub fn initial(&self) -> String {
        self.display_name
            .trim_start_matches('@')
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    pub fn matches(&self, query: &str) -> bool {
        self.display_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

fn non_empty_str<'a>(record: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn display_name(record: &Map<String, Value>, id: i64) -> String {
    if let Some(username) = non_empty_str(record, "username") {
        return format!("@{}", username.trim_start_matches('@'));
    }

    let full_name = [
        non_empty_str(record, "first_name"),
        non_empty_str(record, "last_name"),
    ]
    .iter()
    .flatten()
    .copied()
    .collect::<Vec<_>>()
    .join(" ");
    if !full_name.is_empty() {
        return full_name;
    }

    non_empty_str(record, "name")
        .map(str::to_string)
        .unwrap_or_else(|| format!("User {}", id))
}

/// Canonical, ranked leaderboard: most plays first, ties keep server order.
pub fn normalize(payload: LeaderboardPayload) -> Vec<LeaderboardEntry> {
    let records = payload.into_records();
    let mut entries: Vec<LeaderboardEntry> = records
        .iter()
        .filter_map(|record| {
            let entry = LeaderboardEntry::from_record(record);
            if entry.is_none() {
                log::warn!("Dropping leaderboard record without an id");
            }
            entry
        })
        .collect();

    entries.sort_by(|a, b| b.play_count.cmp(&a.play_count));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    entries
}

/// Search over display names. Short queries do not filter at all.
pub fn filter_entries(entries: &[LeaderboardEntry], query: &str) -> Vec<LeaderboardEntry> {
    let query = query.trim();
    if query.chars().count() < MIN_SEARCH_QUERY_LEN {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| entry.matches(query))
        .cloned()
        .collect()
}

pub fn rank_badge(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Vec<LeaderboardEntry> {
        normalize(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_accepts_bare_array_and_wrapped_users() {
        let users = json!([
            { "id": 1, "username": "alice", "plays": 3 },
            { "id": 2, "username": "bob", "plays": 9 }
        ]);
        let bare = parse(users.clone());
        let wrapped = parse(json!({ "users": users }));
        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].display_name, "@bob");
        assert_eq!(bare[0].rank, 1);
        assert_eq!(bare[1].rank, 2);
    }

    #[test]
    fn test_alternate_field_names() {
        let entries = parse(json!([
            { "user_id": "42", "first_name": "Ivan", "last_name": "Petrov", "games_played": "17", "avatar": "https://t.me/i/a.jpg" },
            { "telegram_id": 7, "name": "Guest", "total_spins": 4.0 },
            { "id": 9, "first_name": "Solo", "spins": 20 },
            { "id": 10 }
        ]));

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].display_name, "Solo");
        assert_eq!(entries[1].id, 42);
        assert_eq!(entries[1].display_name, "Ivan Petrov");
        assert_eq!(entries[1].play_count, 17);
        assert_eq!(entries[1].photo_url.as_deref(), Some("https://t.me/i/a.jpg"));
        assert_eq!(entries[2].display_name, "Guest");
        assert_eq!(entries[2].play_count, 4);
        assert_eq!(entries[3].display_name, "User 10");
        assert_eq!(entries[3].play_count, 0);
    }

    #[test]
    fn test_records_without_id_are_dropped() {
        let entries = parse(json!([{ "username": "ghost", "plays": 100 }, { "id": 1 }]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 1);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let entries = parse(json!([
            { "id": 1, "plays": 5 },
            { "id": 2, "plays": 8 },
            { "id": 3, "plays": 5 }
        ]));
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_short_query_returns_everything() {
        let entries = parse(json!([
            { "id": 1, "username": "StarHunter", "plays": 2 },
            { "id": 2, "username": "LuckyOne", "plays": 1 }
        ]));
        assert_eq!(filter_entries(&entries, ""), entries);
        assert_eq!(filter_entries(&entries, "xy"), entries);
        assert_eq!(filter_entries(&entries, "  lu "), entries);
    }

    #[test]
    fn test_long_query_filters_case_insensitively() {
        let entries = parse(json!([
            { "id": 1, "username": "StarHunter", "plays": 2 },
            { "id": 2, "username": "LuckyOne", "plays": 1 },
            { "id": 3, "first_name": "Hunter", "plays": 0 }
        ]));
        let found = filter_entries(&entries, "HUNT");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].rank, 1);
        assert_eq!(found[1].rank, 3);
        assert!(filter_entries(&entries, "zzz").is_empty());
    }

    #[test]
    fn test_initial_and_badges() {
        let entries = parse(json!([{ "id": 1, "username": "zed", "plays": 1 }]));
        assert_eq!(entries[0].initial(), "Z");
        assert_eq!(rank_badge(1), Some("🥇"));
        assert_eq!(rank_badge(4), None);
    }
}
