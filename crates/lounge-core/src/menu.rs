//! Weekly menu file parsing.
//!
//! The menu file holds several weeks at once. A `[WEEK <n>]` marker starts a
//! week section and whole-line `[MONDAY]` .. `[FRIDAY]` markers select the
//! day inside it; the lines that follow are that day's menu. Any other
//! whole-line `[...]` marker ends the current day. Blank lines and lines
//! starting with `#` are ignored.
//!
//! ```text
//! # Spring term
//! [WEEK 12]
//! [MONDAY]
//! Tomato soup
//! [TUESDAY]
//! Baked fish
//! ```

use jiff::civil::Date;

use crate::models::MenuByDay;

/// ISO 8601 week number of `date`.
///
/// Week 1 is the week containing the year's first Thursday, so early January
/// may belong to week 52 or 53 of the previous year.
pub fn iso_week(date: Date) -> i8 {
    date.iso_week_date().week()
}

/// Extracts the Monday to Friday text of `target_week` from a menu file.
///
/// Days without any line, and all days when the file has no section for the
/// week, come back empty so they render as "no menu".
///
/// # Examples
///
/// ```rust
/// use lounge_core::menu::parse_menu;
///
/// let menu = parse_menu("[WEEK 12]\n[MONDAY]\nSoup\n[TUESDAY]\nFish\n", 12);
/// assert_eq!(menu.text(1), Some("Soup\n"));
/// assert_eq!(menu.text(3), None);
/// ```
pub fn parse_menu(text: &str, target_week: i8) -> MenuByDay {
    let mut menu = MenuByDay::new(target_week);
    let mut in_week = false;
    let mut day: Option<u8> = None;

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(week) = week_marker(line) {
            in_week = week == Some(target_week);
            day = None;
            continue;
        }
        if let Some(name) = section_marker(line) {
            if in_week {
                day = day_from_name(name);
            }
            continue;
        }

        if let (true, Some(day)) = (in_week, day) {
            menu.append_line(day, line);
        }
    }

    menu
}

/// The text of a whole-line `[...]` marker. Lines that merely start with a
/// bracket, like `[V] Falafel`, are menu text.
fn section_marker(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    (!inner.contains(['[', ']'])).then(|| inner.trim())
}

/// `Some(week)` for a `[WEEK <n>]` line; the inner `None` means the number
/// could not be read, which closes any open week.
fn week_marker(line: &str) -> Option<Option<i8>> {
    let marker = section_marker(line)?;
    let prefix = marker.get(..4)?;
    let rest = &marker[4..];
    if !prefix.eq_ignore_ascii_case("week") || !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim().parse().ok())
}

/// Sunday-zero weekday number of an English school day name.
fn day_from_name(name: &str) -> Option<u8> {
    match name.to_ascii_lowercase().as_str() {
        "monday" => Some(1),
        "tuesday" => Some(2),
        "wednesday" => Some(3),
        "thursday" => Some(4),
        "friday" => Some(5),
        _ => None,
    }
}
