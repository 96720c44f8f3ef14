// src/api/types.rs
//
// Wire types for the collection service. Field names match the JSON the
// service emits; the client never re-sorts or re-derives what the service
// already computed (counts, any_in_club, ordering).

use serde::{Deserialize, Serialize};

/// One row of GET /players.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlayerSummary {
    pub slug: String,
    pub display_name: String,
    pub base_card_image_url: Option<String>,
    pub base_card_rating: Option<i32>,
    pub any_in_club: bool,
    pub in_club_count: u32,
    pub total_cards: u32,
}

/// One card inside GET /players/{slug}.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Card {
    pub card_slug: String,
    pub name: String,
    pub rating: i32,
    pub version: String,
    pub image_url: Option<String>,
    pub card_url: String,
    pub in_club: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlayerDetail {
    pub slug: String,
    pub display_name: String,
    pub in_club_count: u32,
    pub total_cards: u32,
    pub cards: Vec<Card>,
}

/// PATCH body for /cards/{slug}/club.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CardUpdate {
    pub in_club: bool,
}

/// POST /scrape acknowledgement.
#[derive(Clone, Debug, Deserialize)]
pub struct JobAck {
    pub status: String,
    pub message: String,
}

/// GET /scrape/status.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct JobStatus {
    pub in_progress: bool,
}

/// GET /players/counts.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PlayerCounts {
    pub total: u64,
    pub in_club: u64,
}
