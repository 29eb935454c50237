//! Estimated travel minutes between named trip locations.

use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_TRAVEL_MINUTES: u32 = 20;

/// `from -> (to -> minutes)`. Each direction is listed on its own; nothing is
/// mirrored automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTravelTable {
    pub routes: BTreeMap<String, BTreeMap<String, u32>>,
    pub default_minutes: u32,
}

/// On-disk form of a travel table. A file without `default_minutes`
/// inherits the configured fallback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TravelTableFile {
    #[serde(default)]
    pub routes: BTreeMap<String, BTreeMap<String, u32>>,
    #[serde(default)]
    pub default_minutes: Option<u32>,
}

impl TravelTableFile {
    pub fn into_table(self, fallback_minutes: u32) -> LocationTravelTable {
        LocationTravelTable {
            routes: self.routes,
            default_minutes: self.default_minutes.unwrap_or(fallback_minutes),
        }
    }
}

impl Default for LocationTravelTable {
    fn default() -> Self {
        Self {
            routes: BTreeMap::new(),
            default_minutes: DEFAULT_TRAVEL_MINUTES,
        }
    }
}

impl LocationTravelTable {
    pub fn new(default_minutes: u32) -> Self {
        Self {
            routes: BTreeMap::new(),
            default_minutes,
        }
    }

    /// Register one direction of a route.
    pub fn insert(&mut self, from: &str, to: &str, minutes: u32) {
        self.routes
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), minutes);
    }

    /// Register both directions with the same duration.
    pub fn insert_both(&mut self, a: &str, b: &str, minutes: u32) {
        self.insert(a, b, minutes);
        self.insert(b, a, minutes);
    }

    /// Minutes from `from` to `to`. Never absent:
    /// 1. exact match on both names
    /// 2. substring containment (either direction) on both names, first hit in
    ///    table order
    /// 3. `default_minutes`
    pub fn lookup(&self, from: &str, to: &str) -> u32 {
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return self.default_minutes;
        }

        if let Some(m) = self.routes.get(from).and_then(|dests| dests.get(to)) {
            return *m;
        }

        self.routes
            .iter()
            .filter(|(origin, _)| loosely_matches(from, origin))
            .flat_map(|(_, dests)| dests.iter())
            .find(|(dest, _)| loosely_matches(to, dest))
            .map(|(_, m)| *m)
            .unwrap_or(self.default_minutes)
    }

    /// Table shipped with the application: the Prague / Bohemia trip.
    pub fn builtin(default_minutes: u32) -> Self {
        let mut t = Self::new(default_minutes);

        // Prague old town and castle district
        t.insert_both("프라하 성", "카를교", 15);
        t.insert_both("프라하 성", "구시가지 광장", 25);
        t.insert_both("프라하 성", "바츨라프 광장", 30);
        t.insert_both("프라하 성", "성 비투스 대성당", 5);
        t.insert_both("성 비투스 대성당", "황금소로", 5);
        t.insert_both("카를교", "구시가지 광장", 10);
        t.insert_both("카를교", "바츨라프 광장", 20);
        t.insert_both("카를교", "존 레논 벽", 5);
        t.insert_both("구시가지 광장", "천문시계", 3);
        t.insert_both("구시가지 광장", "바츨라프 광장", 10);
        t.insert_both("구시가지 광장", "하벨 시장", 5);
        t.insert_both("바츨라프 광장", "국립 박물관", 5);

        // Hotel and transport hubs
        t.insert_both("호텔", "프라하 성", 30);
        t.insert_both("호텔", "구시가지 광장", 20);
        t.insert_both("호텔", "프라하 공항", 40);
        t.insert_both("구시가지 광장", "프라하 공항", 45);
        t.insert_both("프라하 중앙역", "구시가지 광장", 15);

        // Day trips
        t.insert_both("프라하", "체스키크룸로프", 180);
        t.insert_both("프라하", "쿠트나 호라", 90);
        t.insert_both("프라하", "카를로비 바리", 140);
        t.insert_both("체스키크룸로프 성", "체스키크룸로프 광장", 10);

        t
    }
}

fn loosely_matches(name: &str, key: &str) -> bool {
    !key.is_empty() && (name.contains(key) || key.contains(name))
}
