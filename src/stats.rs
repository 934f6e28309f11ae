use crate::dates::day_name;
use crate::feedback::{weekly_message, UsageBand};
use crate::models::{DailyEntry, WeeklyDay, WeeklyOverview, WeeklyStats};
use chrono::NaiveDate;

/// Builds the per-day view and summary for a 7-day window.
///
/// Recomputed on every call; nothing here is cached.
pub fn weekly_overview(window: &[DailyEntry], today: NaiveDate) -> WeeklyOverview {
    let days: Vec<WeeklyDay> = window.iter().map(|entry| weekly_day(entry, today)).collect();
    let stats = weekly_stats(&days);
    WeeklyOverview {
        message: weekly_message(stats.total_items),
        days,
        stats,
    }
}

pub fn weekly_day(entry: &DailyEntry, today: NaiveDate) -> WeeklyDay {
    let total = entry.total();
    WeeklyDay {
        date: entry.date,
        day: day_name(entry.date),
        cigarettes: entry.cigarettes,
        vapes: entry.vapes,
        total,
        is_today: entry.date == today,
        band: UsageBand::from_total(total),
    }
}

/// Totals, best/worst day and the daily average of a window.
///
/// Ties for best and worst resolve to the earliest day. The average always
/// divides by 7, however many days carry data.
pub fn weekly_stats(days: &[WeeklyDay]) -> WeeklyStats {
    const WINDOW: f64 = 7.0;

    let total_cigarettes: u64 = days.iter().map(|d| u64::from(d.cigarettes)).sum();
    let total_vapes: u64 = days.iter().map(|d| u64::from(d.vapes)).sum();
    let total_items = total_cigarettes + total_vapes;
    let days_with_data = days.iter().filter(|d| d.total > 0).count();

    let best_day = days
        .iter()
        .fold(None::<&WeeklyDay>, |best, day| match best {
            Some(best) if day.total >= best.total => Some(best),
            _ => Some(day),
        })
        .cloned()
        .unwrap_or_else(empty_day);
    let worst_day = days
        .iter()
        .fold(None::<&WeeklyDay>, |worst, day| match worst {
            Some(worst) if day.total <= worst.total => Some(worst),
            _ => Some(day),
        })
        .cloned()
        .unwrap_or_else(empty_day);

    let average_per_day = total_items as f64 / WINDOW;

    WeeklyStats {
        total_cigarettes,
        total_vapes,
        total_items,
        days_with_data,
        best_day,
        worst_day,
        average_per_day,
        average_display: format!("{average_per_day:.1}"),
    }
}

fn empty_day() -> WeeklyDay {
    let date = NaiveDate::default();
    weekly_day(&DailyEntry::placeholder(date), date)
}
