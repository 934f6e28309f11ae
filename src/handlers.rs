use crate::articles::{Article, ARTICLES};
use crate::dates::{format_date, format_display_date, parse_date};
use crate::errors::AppError;
use crate::feedback::{daily_feedback, daily_summary};
use crate::motivation::random_quote;
use crate::models::{
    DailyEntry, GoalRequest, MotivationResponse, QuoteResponse, SaveEntryRequest,
    SavedEntryResponse, TodayResponse, UserGoal, WeeklyOverview,
};
use crate::state::AppState;
use crate::stats::weekly_overview;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde_json::Value;
use tracing::{error, info};

/// Runs a store operation off the async workers; store I/O is blocking.
async fn blocking<T, F>(op: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op).await.map_err(AppError::internal)
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = state.clock.today();
    let _guard = state.write_lock.lock().await;
    let entries = state.entries.clone();
    let entry = blocking(move || entries.get_entry_by_date(today)).await?;
    Ok(Html(render_index(today, entry.as_ref())))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let today = state.clock.today();
    let _guard = state.write_lock.lock().await;
    let entries = state.entries.clone();
    let entry = blocking(move || entries.get_entry_by_date(today)).await?;

    Ok(Json(TodayResponse {
        date: format_date(today),
        display_date: format_display_date(today),
        headline: daily_summary(entry.as_ref()),
        entry,
    }))
}

pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<DailyEntry>>, AppError> {
    let _guard = state.write_lock.lock().await;
    let entries = state.entries.clone();
    Ok(Json(blocking(move || entries.get_entries()).await?))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DailyEntry>, AppError> {
    let date = parse_date(&date).ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))?;
    let _guard = state.write_lock.lock().await;
    let entries = state.entries.clone();
    blocking(move || entries.get_entry_by_date(date))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no entry for {}", format_date(date))))
}

pub async fn save_entry(
    State(state): State<AppState>,
    Json(payload): Json<SaveEntryRequest>,
) -> Result<Json<SavedEntryResponse>, AppError> {
    let entry = DailyEntry {
        date: state.clock.today(),
        cigarettes: coerce_count(payload.cigarettes.as_ref()),
        vapes: coerce_count(payload.vapes.as_ref()),
        recorded_at: state.clock.timestamp_millis(),
    };

    let _guard = state.write_lock.lock().await;
    let entries = state.entries.clone();
    let to_save = entry.clone();
    if let Err(err) = blocking(move || entries.save_entry(to_save)).await? {
        error!("failed to save entry for {}: {err}", entry.date);
        return Err(err.into());
    }
    info!(
        "saved {}: {} cigarettes, {} vapes",
        entry.date, entry.cigarettes, entry.vapes
    );

    Ok(Json(SavedEntryResponse {
        feedback: daily_feedback(entry.total()),
        entry,
    }))
}

pub async fn get_weekly(State(state): State<AppState>) -> Result<Json<WeeklyOverview>, AppError> {
    let today = state.clock.today();
    let _guard = state.write_lock.lock().await;
    let entries = state.entries.clone();
    let window = blocking(move || entries.get_last_7_days()).await?;
    Ok(Json(weekly_overview(&window, today)))
}

pub async fn get_goal(State(state): State<AppState>) -> Result<Json<Option<UserGoal>>, AppError> {
    let _guard = state.write_lock.lock().await;
    let goals = state.goals.clone();
    Ok(Json(blocking(move || goals.get_goal()).await?))
}

pub async fn save_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<UserGoal>, AppError> {
    let goal = UserGoal {
        kind: payload.kind,
        target_per_day: payload.target_per_day,
        start_date: state.clock.today(),
        description: payload.description.trim().to_string(),
    };

    let _guard = state.write_lock.lock().await;
    let goals = state.goals.clone();
    let to_save = goal.clone();
    blocking(move || goals.save_goal(&to_save)).await??;
    Ok(Json(goal))
}

pub async fn get_motivation(
    State(state): State<AppState>,
) -> Result<Json<MotivationResponse>, AppError> {
    let _guard = state.write_lock.lock().await;
    let motivation = state.motivation.clone();
    let response = blocking(move || MotivationResponse {
        quote: motivation.todays_quote(),
        last_shown: motivation.last_motivation_date(),
        shown_today: motivation.shown_today(),
    })
    .await?;
    Ok(Json(response))
}

pub async fn mark_motivation(
    State(state): State<AppState>,
) -> Result<Json<MotivationResponse>, AppError> {
    let _guard = state.write_lock.lock().await;
    let motivation = state.motivation.clone();
    let quote = motivation.todays_quote();
    let today = blocking(move || motivation.mark_shown_today()).await??;
    Ok(Json(MotivationResponse {
        quote,
        last_shown: Some(today),
        shown_today: true,
    }))
}

pub async fn next_quote() -> Json<QuoteResponse> {
    Json(QuoteResponse {
        quote: random_quote(),
    })
}

pub async fn list_articles() -> Json<&'static [Article]> {
    Json(ARTICLES)
}

/// Form values arrive as numbers or strings; anything that is not a
/// non-negative integer counts as zero.
fn coerce_count(value: Option<&Value>) -> u32 {
    let parsed = match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(text)) => leading_integer(text),
        _ => None,
    };
    parsed
        .filter(|n| *n > 0)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Integer prefix of `text`, so "12 cigs" reads as 12.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let digits_start = usize::from(text.starts_with(['-', '+']));
    let digits_end = text[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| i + digits_start);
    if digits_end == digits_start {
        return None;
    }
    text[..digits_end].parse().ok()
}
