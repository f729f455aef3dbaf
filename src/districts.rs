//! Static mapping from feed-emitted station and district names to the 18
//! canonical Hong Kong district names.
//!
//! The table is maintained in lockstep with upstream feed naming: a name the
//! feeds start emitting that is missing here degrades silently to a raw-name
//! passthrough row rather than failing the run.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const CANONICAL_DISTRICTS: [&str; 18] = [
    "中西區",
    "灣仔區",
    "東區",
    "南區",
    "油尖旺區",
    "深水埗區",
    "九龍城區",
    "黃大仙區",
    "觀塘區",
    "葵青區",
    "荃灣區",
    "屯門區",
    "元朗區",
    "北區",
    "大埔區",
    "沙田區",
    "西貢區",
    "離島區",
];

static STATION_DISTRICTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // AQHI and HKO monitoring stations
        ("Central", "中西區"),
        ("Wan Chai", "灣仔區"),
        ("Causeway Bay", "灣仔區"),
        ("Eastern", "東區"),
        ("North Point", "東區"),
        ("Kwun Tong", "觀塘區"),
        ("Sham Shui Po", "深水埗區"),
        ("Mong Kok", "油尖旺區"),
        ("Kwai Chung", "葵青區"),
        ("Tsuen Wan", "荃灣區"),
        ("Tuen Mun", "屯門區"),
        ("Tung Chung", "離島區"),
        ("Tai Po", "大埔區"),
        ("Sha Tin", "沙田區"),
        ("Yuen Long", "元朗區"),
        ("Hong Kong Observatory", "油尖旺區"),
        ("King's Park", "九龍城區"),
        ("Wong Chuk Hang", "南區"),
        ("Sai Kung", "西貢區"),
        ("Tseung Kwan O", "西貢區"),
        ("Cheung Chau", "離島區"),
        ("Lau Fau Shan", "元朗區"),
        ("Tai Mei Tuk", "大埔區"),
        ("Ta Kwu Ling", "北區"),
        ("Tap Mun", "大埔區"),
        ("Happy Valley", "灣仔區"),
        ("Stanley", "南區"),
        // English district names, as the district-level feeds emit them
        ("Central and Western", "中西區"),
        ("Central/Western", "中西區"),
        ("Southern", "南區"),
        ("Yau Tsim Mong", "油尖旺區"),
        ("Kowloon City", "九龍城區"),
        ("Wong Tai Sin", "黃大仙區"),
        ("Kwai Tsing", "葵青區"),
        ("North", "北區"),
        ("Islands", "離島區"),
    ])
});

/// Canonical Chinese district name for a feed-emitted station or district
/// name. Unmapped names come back unchanged.
pub fn normalize(name: &str) -> String {
    let trimmed = name.trim();
    match STATION_DISTRICTS.get(trimmed) {
        Some(district) => (*district).to_string(),
        None => trimmed.to_string(),
    }
}
