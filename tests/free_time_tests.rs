use rtripagenda::config::{Config, FreeTimeMinutes};
use rtripagenda::core::schedule::Rules;
use rtripagenda::core::schedule::classify::classify;
use rtripagenda::core::schedule::free_time::{
    DayKey, bucket_by_day, flatten, free_time_anchor, synthesize_free_time,
};
use rtripagenda::models::activity::RawActivity;
use rtripagenda::models::entry::{EnrichedEntry, TimeCategory};
use rtripagenda::models::region::Region;
use std::collections::BTreeMap;

fn day(times: &[(&str, &str)], rules: &Rules) -> Vec<EnrichedEntry> {
    let raw: Vec<RawActivity> = times
        .iter()
        .map(|(t, name)| RawActivity::new("1", "2025-08-06", t, name, None))
        .collect();
    classify(&raw, rules)
}

fn rules_with(minutes: FreeTimeMinutes) -> Rules {
    Rules::from_config(&Config {
        free_time_minutes: minutes,
        ..Config::default()
    })
}

fn free_slots(entries: &[EnrichedEntry]) -> Vec<&EnrichedEntry> {
    entries.iter().filter(|e| e.is_free_time()).collect()
}

#[test]
fn test_slot_one_hour_after_last_activity() {
    let rules = Rules::default();
    let buckets = bucket_by_day(day(&[("09:00", "A"), ("10:00", "B")], &rules));
    let out = flatten(synthesize_free_time(buckets, &rules));

    let slots = free_slots(&out);
    assert_eq!(slots.len(), 1);
    let slot = slots[0];
    assert_eq!(slot.time, "11:00");
    assert_eq!(slot.id, "free_time_2025-08-06_1");
    assert_eq!(slot.activity, "자유시간");
    assert_eq!(slot.region.as_str(), "1");
    assert_eq!(slot.time_category, TimeCategory::Morning);
    assert!(slot.location.is_none());
    // appended at the end of the day
    assert!(out.last().is_some_and(EnrichedEntry::is_free_time));
}

#[test]
fn test_running_twice_keeps_one_slot() {
    let rules = Rules::default();
    let buckets = bucket_by_day(day(&[("09:00", "A"), ("15:20", "B")], &rules));

    let once = synthesize_free_time(buckets, &rules);
    let twice = synthesize_free_time(once.clone(), &rules);

    assert_eq!(free_slots(&flatten(twice.clone())).len(), 1);
    assert_eq!(once, twice);
}

#[test]
fn test_minute_policy() {
    let zero = rules_with(FreeTimeMinutes::Zero);
    let keep = rules_with(FreeTimeMinutes::Preserve);
    let entries = day(&[("09:00", "A"), ("10:40", "B")], &zero);

    assert_eq!(free_time_anchor(&entries, &zero), (11, 0));
    assert_eq!(free_time_anchor(&entries, &keep), (11, 40));
}

#[test]
fn test_anchor_clamped_to_ceiling() {
    let zero = rules_with(FreeTimeMinutes::Zero);
    let keep = rules_with(FreeTimeMinutes::Preserve);

    let late = day(&[("21:30", "A")], &zero);
    assert_eq!(free_time_anchor(&late, &zero), (22, 0));
    assert_eq!(free_time_anchor(&late, &keep), (22, 30));

    let later = day(&[("22:30", "A")], &zero);
    assert_eq!(free_time_anchor(&later, &zero), (22, 0));
    assert_eq!(free_time_anchor(&later, &keep), (22, 30));

    let midnight = day(&[("23:45", "A")], &zero);
    assert_eq!(free_time_anchor(&midnight, &zero), (22, 0));
}

#[test]
fn test_clamped_slot_is_kept_in_time_order() {
    let rules = Rules::default();
    let buckets = bucket_by_day(day(&[("20:00", "A"), ("22:30", "야경 투어")], &rules));
    let out = flatten(synthesize_free_time(buckets, &rules));

    let times: Vec<&str> = out.iter().map(|e| e.time.as_str()).collect();
    assert_eq!(times, ["20:00", "22:00", "22:30"]);
    assert_eq!(out[1].time_category, TimeCategory::Evening);
}

#[test]
fn test_empty_day_gets_ceiling_anchor() {
    let rules = Rules::default();
    let mut buckets: BTreeMap<DayKey, Vec<EnrichedEntry>> = BTreeMap::new();
    buckets.insert(("2025-08-08".to_string(), Region::new("3")), Vec::new());

    let out = flatten(synthesize_free_time(buckets, &rules));

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].time, "22:00");
    assert_eq!(out[0].id, "free_time_2025-08-08_3");
}

#[test]
fn test_day_with_free_activity_is_skipped() {
    let rules = Rules::default();
    let buckets = bucket_by_day(day(&[("09:00", "A"), ("14:00", "자유시간 및 쇼핑")], &rules));
    let out = flatten(synthesize_free_time(buckets, &rules));

    assert!(free_slots(&out).is_empty());
    assert_eq!(out.len(), 2);
}

#[test]
fn test_departure_day_is_skipped_unless_disabled() {
    let entries = day(&[("07:00", "조식"), ("10:00", "프라하 공항 출발")], &Rules::default());

    let out = flatten(synthesize_free_time(bucket_by_day(entries.clone()), &Rules::default()));
    assert!(free_slots(&out).is_empty());

    let lenient = Rules::from_config(&Config {
        skip_departure_days: false,
        ..Config::default()
    });
    let out = flatten(synthesize_free_time(bucket_by_day(entries), &lenient));
    assert_eq!(free_slots(&out).len(), 1);
    assert_eq!(free_slots(&out)[0].time, "11:00");
}

#[test]
fn test_one_slot_per_date_and_region() {
    let rules = Rules::default();
    let raw = [
        RawActivity::new("1", "2025-08-06", "09:00", "A", None),
        RawActivity::new("2", "2025-08-06", "13:00", "B", None),
        RawActivity::new("1", "2025-08-07", "16:00", "C", None),
    ];
    let out = flatten(synthesize_free_time(bucket_by_day(classify(&raw, &rules)), &rules));

    let mut ids: Vec<&str> = free_slots(&out).iter().map(|e| e.id.as_str()).collect();
    ids.sort();
    assert_eq!(
        ids,
        [
            "free_time_2025-08-06_1",
            "free_time_2025-08-06_2",
            "free_time_2025-08-07_1"
        ]
    );
}

#[test]
fn test_huge_offset_clamps_to_ceiling() {
    let rules = Rules::from_config(&Config {
        free_time_offset_minutes: u32::MAX,
        ..Config::default()
    });
    let bucket = day(&[("10:00", "A")], &rules);

    assert_eq!(free_time_anchor(&bucket, &rules), (22, 0));
}
