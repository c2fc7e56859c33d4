use std::fs;
use std::path::Path;

use jiff::{civil::date, tz::TimeZone, Zoned};
use lounge_core::{Kiosk, KioskBuilder, KioskConfig, Locale};
use tempfile::TempDir;

/// A week of timetable rows: two lunch sittings a day plus noise rows that
/// the parser must drop.
pub const LESSONS: &str = "\
101\tLunch\tMon\t1100\t30\tMatsal\t7A
102\tLunch\tMon\t1100\t30\tMatsal\t7B
103\tLunch\tMon\t1130\t30\tMatsal\t8A
104\tLunch\tMon\t1140\t30\tMatsal\t7A
105\tLunch\tMon\t1130\t30\tMatsal\tSupport 9A
106\tLunch\tMon\t1130\t30\tMatsal\tPrao grupp
107\tEnglish\tMon\t1130\t60\tB12\t9B
108\tLunch\tTue\t1100\t45\tMatsal\t8B
109\tLunch\tSat\t1200\t30\tMatsal\t9C
110\tLunch\tWed
";

pub const MENU: &str = "\
# Lunch menu, spring term
[WEEK 11]
[MONDAY]
Pancakes

[WEEK 12]
[MONDAY]
Tomato soup
Bread
[TUESDAY]
Baked fish
[THURSDAY]
Pea soup
Pancakes
";

/// Create a kiosk reading sources from a fresh temporary directory.
pub fn create_test_kiosk() -> (TempDir, Kiosk) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let kiosk = create_kiosk_in(temp_dir.path());
    (temp_dir, kiosk)
}

pub fn create_kiosk_in(dir: &Path) -> Kiosk {
    let config = KioskConfig {
        time_zone: Some("UTC".to_string()),
        locale: Locale::English,
        menu_path: Some(dir.join("menu.txt")),
        timetable_path: Some(dir.join("Lessons.txt")),
        ..KioskConfig::default()
    };
    KioskBuilder::new()
        .with_config(config)
        .build()
        .expect("Failed to create kiosk")
}

pub fn write_sources(dir: &Path) {
    fs::write(dir.join("menu.txt"), MENU).expect("Failed to write menu");
    fs::write(dir.join("Lessons.txt"), LESSONS).expect("Failed to write timetable");
}

/// A UTC instant; 2024-03-18 is the Monday of ISO week 12.
pub fn utc(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> Zoned {
    date(year, month, day)
        .at(hour, minute, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("Invalid test instant")
}
