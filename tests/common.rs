#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rta() -> Command {
    cargo_bin_cmd!("rtripagenda")
}

/// A unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtripagenda.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so the CLI runs on defaults and never
/// touches the user's home directory.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{}_cfg", name), "conf")
}

pub fn write_feed(name: &str, json: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, json).expect("write feed");
    p
}

/// Two regions on a Prague trip. Region 1 flies home on the second day.
pub const PRAGUE_FEED: &str = r#"{
  "success": true,
  "schedules": [
    { "id": "a1", "region": "1", "date": "2025-08-06", "time": "07:30", "activity": "호텔 조식", "location": "호텔" },
    { "id": "a2", "region": "1", "date": "2025-08-06", "time": "09:00", "activity": "프라하 성 투어", "location": "프라하 성",
      "description": "성 비투스 대성당과 황금소로를 포함한 가이드 투어" },
    { "id": "a3", "region": "1", "date": "2025-08-06", "time": "10:30", "activity": "카를교 산책", "location": "카를교" },
    { "id": "a4", "region": "1", "date": "2025-08-06", "time": "12:00", "activity": "중식", "location": "구시가지 광장", "isMeal": true, "mealType": "lunch" },
    { "id": "a5", "region": "1", "date": "2025-08-06", "time": "14:00", "activity": "천문시계 관람", "location": "구시가지 광장" },
    { "id": "a6", "region": "1", "date": "2025-08-07", "time": "10:00", "activity": "프라하 공항 출국", "location": "프라하 공항" },
    { "id": "b1", "region": "2", "date": "2025-08-06", "time": "09:00", "activity": "바츨라프 광장", "location": "바츨라프 광장" },
    { "id": "b2", "region": "2", "date": "2025-08-06", "time": "11:00", "activity": "국립 박물관", "location": "국립 박물관" }
  ]
}"#;
