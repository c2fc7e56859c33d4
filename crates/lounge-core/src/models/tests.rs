#[cfg(test)]
mod model_tests {
    use crate::{
        error::KioskError,
        models::{ClockTime, Interval, LunchEvent, LunchSchedule, MenuByDay, WeeklySchedule},
    };

    fn interval(open: &str, close: &str) -> Interval {
        Interval::new(open.parse().unwrap(), close.parse().unwrap())
    }

    #[test]
    fn test_clock_time_parsing() {
        assert_eq!("11:00".parse::<ClockTime>().unwrap().minutes(), 660);
        assert_eq!("09:05".parse::<ClockTime>().unwrap().minutes(), 545);
        assert_eq!("24:00".parse::<ClockTime>().unwrap(), ClockTime::END_OF_DAY);
        assert!("24:01".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("1200".parse::<ClockTime>().is_err());
        assert!("ab:cd".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_clock_time_rejects_huge_hours() {
        assert!("1092:59".parse::<ClockTime>().is_err());
        assert!("1092:15".parse::<ClockTime>().is_err());
        assert!("65535:00".parse::<ClockTime>().is_err());
        let schedule: serde_json::Result<Interval> =
            serde_json::from_str(r#"{"open": "1092:59", "close": "12:00"}"#);
        assert!(schedule.is_err());
    }

    #[test]
    fn test_clock_time_display() {
        assert_eq!(ClockTime::hm(9, 5).to_string(), "09:05");
        assert_eq!(ClockTime::hm(13, 45).to_string(), "13:45");
    }

    #[test]
    fn test_weekly_schedule_from_json() {
        let json = r#"{
            "monday": [{"open": "11:00", "close": "13:45"}],
            "friday": [{"open": "08:00", "close": "09:00"}, {"open": "11:00", "close": "12:30"}]
        }"#;
        let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();

        assert_eq!(schedule.day(1), &[interval("11:00", "13:45")]);
        assert_eq!(schedule.day(5).len(), 2);
        assert!(schedule.day(0).is_empty());
        assert!(schedule.day(6).is_empty());
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_weekly_schedule_rejects_bad_clock_time() {
        let json = r#"{"monday": [{"open": "11:00", "close": "25:00"}]}"#;
        assert!(serde_json::from_str::<WeeklySchedule>(json).is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_interval() {
        let schedule =
            WeeklySchedule::default().with_day(2, vec![interval("13:00", "11:00")]);
        let err = schedule.validate().unwrap_err();
        assert!(matches!(err, KioskError::InvalidInput { ref field, .. } if field == "schedule.tuesday"));
    }

    #[test]
    fn test_validate_rejects_overlap_and_unsorted() {
        let overlapping = WeeklySchedule::default()
            .with_day(3, vec![interval("08:00", "10:00"), interval("09:30", "11:00")]);
        assert!(overlapping.validate().is_err());

        let unsorted = WeeklySchedule::default()
            .with_day(3, vec![interval("12:00", "13:00"), interval("08:00", "09:00")]);
        assert!(unsorted.validate().is_err());

        let adjacent = WeeklySchedule::default()
            .with_day(3, vec![interval("08:00", "09:00"), interval("09:00", "10:00")]);
        assert!(adjacent.validate().is_ok());
    }

    #[test]
    fn test_always_closed() {
        assert!(WeeklySchedule::default().is_always_closed());
        let schedule = WeeklySchedule::default().with_day(6, vec![interval("10:00", "11:00")]);
        assert!(!schedule.is_always_closed());
    }

    #[test]
    fn test_lunch_schedule_keeps_days_sorted() {
        let mut schedule = LunchSchedule::new();
        assert!(schedule.insert(2, LunchEvent::new("9B", 700, 730)));
        assert!(schedule.insert(2, LunchEvent::new("8B", 660, 705)));
        assert!(schedule.insert(2, LunchEvent::new("7C", 680, 710)));

        let starts: Vec<u16> = schedule.events_on(2).iter().map(|e| e.start_minute).collect();
        assert_eq!(starts, vec![660, 680, 700]);
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_lunch_schedule_has_all_school_days() {
        let schedule = LunchSchedule::new();
        let days: Vec<u8> = schedule.iter().map(|(day, _)| day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_lunch_schedule_ignores_weekends() {
        let mut schedule = LunchSchedule::new();
        assert!(!schedule.insert(0, LunchEvent::new("8A", 660, 700)));
        assert!(!schedule.insert(6, LunchEvent::new("8A", 660, 700)));
        assert!(schedule.events_on(0).is_empty());
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_lunch_event_activity_is_half_open() {
        let event = LunchEvent::new("8A", 660, 705);
        assert!(!event.is_active_at(659));
        assert!(event.is_active_at(660));
        assert!(event.is_active_at(704));
        assert!(!event.is_active_at(705));
    }

    #[test]
    fn test_menu_by_day_text() {
        let mut menu = MenuByDay::new(12);
        assert!(menu.is_empty());

        menu.append_line(1, "Soup");
        menu.append_line(1, "Bread");
        menu.append_line(6, "Ignored");

        assert_eq!(menu.text(1), Some("Soup\nBread\n"));
        assert_eq!(menu.text(2), None);
        assert_eq!(menu.text(6), None);
        assert!(!menu.is_empty());
    }
}
