//! Parse staff roster CSV exports into typed staff members.
//!
//! Expected columns after the header row:
//! id,name,role,shift,skills,max_rooms_per_day,working_days,active
//!
//! `skills` is `|`-separated. `working_days` accepts a small grammar:
//! a range (`mon-fri`, wrapping ranges like `fri-mon` included), a comma
//! list (`mon,wed,fri`), or the keywords `weekdays`, `weekends`, `all`.

use anyhow::{anyhow, Context, Result};
use chrono::Weekday;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

use roomflow_core::{Shift, StaffMember, StaffRole};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_from_name(s: &str) -> Option<Weekday> {
    match s {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse the working-days grammar.
pub fn parse_working_days(spec: &str) -> Result<HashSet<Weekday>> {
    let spec = spec.trim().to_lowercase();

    match spec.as_str() {
        "all" => return Ok(WEEK.into_iter().collect()),
        "weekdays" => return Ok(WEEK[..5].iter().copied().collect()),
        "weekends" => return Ok([Weekday::Sat, Weekday::Sun].into_iter().collect()),
        _ => {}
    }

    let range_re = Regex::new(r"^([a-z]{3,9})\s*-\s*([a-z]{3,9})$")?;
    if let Some(caps) = range_re.captures(&spec) {
        let from = weekday_from_name(&caps[1])
            .ok_or_else(|| anyhow!("unknown weekday in range: {}", &caps[1]))?;
        let to = weekday_from_name(&caps[2])
            .ok_or_else(|| anyhow!("unknown weekday in range: {}", &caps[2]))?;

        let fi = from.num_days_from_monday() as usize;
        let ti = to.num_days_from_monday() as usize;
        // Ranges wrap: fri-mon means fri,sat,sun,mon.
        let len = if ti >= fi { ti - fi + 1 } else { 7 - fi + ti + 1 };
        return Ok((0..len).map(|k| WEEK[(fi + k) % 7]).collect());
    }

    spec.split(',')
        .map(|part| {
            let part = part.trim();
            weekday_from_name(part).ok_or_else(|| anyhow!("unknown weekday: {part}"))
        })
        .collect()
}

fn parse_role(s: &str) -> Option<StaffRole> {
    match s.trim().to_lowercase().as_str() {
        "housekeeper" => Some(StaffRole::Housekeeper),
        "supervisor" => Some(StaffRole::Supervisor),
        "maintenance" => Some(StaffRole::Maintenance),
        _ => None,
    }
}

fn parse_shift(s: &str) -> Option<Shift> {
    match s.trim().to_lowercase().as_str() {
        "morning" => Some(Shift::Morning),
        "afternoon" => Some(Shift::Afternoon),
        "evening" => Some(Shift::Evening),
        "night" => Some(Shift::Night),
        _ => None,
    }
}

fn parse_active(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "" | "true" | "yes" | "1" | "active")
}

/// Parse a staff roster CSV, returning all valid members.
/// Skips leading banner rows and the header automatically.
pub fn parse_staff_csv(path: impl AsRef<Path>) -> Result<Vec<StaffMember>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut staff = Vec::new();
    let mut header_found = false;

    for result in rdr.records() {
        let record = result?;
        if !header_found {
            if record.get(0).map(|s| s.trim().to_lowercase()) == Some("id".to_string()) {
                header_found = true;
            }
            continue;
        }

        let id = record.get(0).unwrap_or("").trim();
        if id.is_empty() {
            continue;
        }

        let (role, shift) = match (
            parse_role(record.get(2).unwrap_or("")),
            parse_shift(record.get(3).unwrap_or("")),
        ) {
            (Some(r), Some(s)) => (r, s),
            _ => continue, // skip rows with unknown role or shift
        };

        let working_days = match parse_working_days(record.get(6).unwrap_or("weekdays")) {
            Ok(days) => days,
            Err(_) => continue,
        };

        let member = StaffMember {
            id: id.to_string(),
            name: record.get(1).unwrap_or("").trim().to_string(),
            role,
            shift,
            skills: record
                .get(4)
                .unwrap_or("")
                .split('|')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            max_rooms_per_day: record.get(5).unwrap_or("").trim().parse().unwrap_or(8),
            working_days,
            is_active: parse_active(record.get(7).unwrap_or("")),
        };
        if member.validate().is_ok() {
            staff.push(member);
        }
    }

    Ok(staff)
}
