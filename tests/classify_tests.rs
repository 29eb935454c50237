use rtripagenda::config::Config;
use rtripagenda::core::schedule::Rules;
use rtripagenda::core::schedule::classify::{classify, classify_one, detect_meal, time_category};
use rtripagenda::models::activity::{MealType, RawActivity};
use rtripagenda::models::entry::{EntryKind, TimeCategory};

fn at(time: &str) -> RawActivity {
    RawActivity::new("1", "2025-08-06", time, "관람", Some("프라하 성"))
}

#[test]
fn test_time_category_boundaries() {
    let rules = Rules::default();
    let cases = [
        ("00:00", TimeCategory::Morning),
        ("11:59", TimeCategory::Morning),
        ("12:00", TimeCategory::Afternoon),
        ("17:59", TimeCategory::Afternoon),
        ("18:00", TimeCategory::Evening),
        ("23:59", TimeCategory::Evening),
    ];

    for (time, expected) in cases {
        let entries = classify(&[at(time)], &rules);
        assert_eq!(entries[0].time_category, expected, "time {time}");
        assert_eq!(time_category(time, &rules), expected, "time {time}");
    }
}

#[test]
fn test_missing_or_malformed_time_defaults_to_nine() {
    let rules = Rules::default();

    for bad in ["", "   ", "25:00", "noon", "12-30"] {
        let e = classify_one(&at(bad), &rules);
        assert_eq!(e.time, "09:00", "input {bad:?}");
        assert_eq!(e.time_category, TimeCategory::Morning);
    }
}

#[test]
fn test_classify_keeps_fields_and_marks_activity() {
    let raw = at("14:30").with_id("x1");
    let e = classify_one(&raw, &Rules::default());

    assert_eq!(e.id, "x1");
    assert_eq!(e.region.as_str(), "1");
    assert_eq!(e.date, "2025-08-06");
    assert_eq!(e.time, "14:30");
    assert_eq!(e.location.as_deref(), Some("프라하 성"));
    assert_eq!(e.kind, EntryKind::Activity);
    assert!(!e.is_meal);
    assert!(!e.is_travel());
    assert!(!e.is_free_time());
}

#[test]
fn test_meal_detected_from_keywords() {
    let rules = Rules::default();

    let breakfast = classify_one(
        &RawActivity::new("1", "2025-08-06", "07:30", "호텔 조식", Some("호텔")),
        &rules,
    );
    assert!(breakfast.is_meal);
    assert_eq!(breakfast.meal_type, Some(MealType::Breakfast));

    let dinner = classify_one(
        &RawActivity::new("1", "2025-08-06", "18:30", "석식 (현지식)", None),
        &rules,
    );
    assert!(dinner.is_meal);
    assert_eq!(dinner.meal_type, Some(MealType::Dinner));

    assert_eq!(detect_meal("Team LUNCH", &rules), Some(MealType::Lunch));
    assert_eq!(detect_meal("카를교 산책", &rules), None);
}

#[test]
fn test_existing_meal_flag_is_kept() {
    let raw = RawActivity::new("1", "2025-08-06", "12:00", "레스토랑", Some("구시가지 광장"))
        .with_meal(None);
    let e = classify_one(&raw, &Rules::default());

    assert!(e.is_meal);
    assert_eq!(e.meal_type, None);

    // an explicit meal type wins over the keyword guess
    let raw = RawActivity::new("1", "2025-08-06", "12:00", "조식 뷔페", None)
        .with_meal(Some(MealType::Lunch));
    assert_eq!(classify_one(&raw, &Rules::default()).meal_type, Some(MealType::Lunch));
}

#[test]
fn test_meal_keywords_are_configurable() {
    let cfg = Config {
        breakfast_keywords: vec!["colazione".into()],
        lunch_keywords: vec!["pranzo".into()],
        dinner_keywords: vec![],
        ..Config::default()
    };
    let rules = Rules::from_config(&cfg);

    assert_eq!(detect_meal("Colazione in hotel", &rules), Some(MealType::Breakfast));
    assert_eq!(detect_meal("pranzo libero", &rules), Some(MealType::Lunch));
    // the default Korean words are gone
    assert_eq!(detect_meal("호텔 조식", &rules), None);
}

#[test]
fn test_classify_empty_input() {
    assert!(classify(&[], &Rules::default()).is_empty());
}

#[test]
fn test_time_with_seconds_keeps_its_hour() {
    let rules = Rules::default();
    let entry = classify_one(&at("14:30:00"), &rules);

    assert_eq!(entry.time, "14:30");
    assert_eq!(entry.time_category, TimeCategory::Afternoon);
}
