use crate::dates::{format_date, format_display_date};
use crate::feedback::daily_summary;
use crate::models::DailyEntry;
use chrono::NaiveDate;

pub fn render_index(today: NaiveDate, entry: Option<&DailyEntry>) -> String {
    let value = |count: Option<u32>| count.map(|c| c.to_string()).unwrap_or_default();
    INDEX_HTML
        .replace("{{DATE_KEY}}", &format_date(today))
        .replace("{{DISPLAY_DATE}}", &format_display_date(today))
        .replace("{{HEADLINE}}", daily_summary(entry))
        .replace("{{CIGARETTES}}", &value(entry.map(|e| e.cigarettes)))
        .replace("{{VAPES}}", &value(entry.map(|e| e.vapes)))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Quit Tracker</title>
  <style>
    :root {
      --bg: #f3f6f1;
      --ink: #24302a;
      --muted: #66736b;
      --card: #ffffff;
      --smoke-free: #3f9b6b;
      --low: #4a7fb5;
      --moderate: #d99a2b;
      --high: #c8513f;
      --shadow: 0 18px 40px rgba(36, 48, 42, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      display: grid;
      gap: 24px;
    }

    section {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 16px;
    }

    h1, h2 {
      margin: 0;
    }

    .muted {
      color: var(--muted);
      margin: 0;
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 14px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.95rem;
    }

    input, select, button {
      font: inherit;
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid #cfd8d2;
    }

    button {
      background: var(--ink);
      color: #fff;
      border: none;
      cursor: pointer;
    }

    .notice {
      display: none;
      padding: 12px 14px;
      border-radius: 10px;
      justify-content: space-between;
      gap: 12px;
    }

    .notice[data-type="ok"] {
      display: flex;
      background: #e2f3e9;
    }

    .notice[data-type="error"] {
      display: flex;
      background: #f8e0dc;
    }

    .notice button {
      background: transparent;
      color: inherit;
      padding: 0 4px;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
    }

    .metric {
      background: var(--bg);
      border-radius: 14px;
      padding: 14px;
    }

    .metric strong {
      display: block;
      font-size: 1.7rem;
    }

    .bars {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 10px;
      align-items: end;
      height: 180px;
    }

    .bar {
      display: grid;
      gap: 6px;
      text-align: center;
      align-content: end;
      height: 100%;
      font-size: 0.85rem;
    }

    .bar span.fill {
      display: block;
      border-radius: 8px 8px 0 0;
      min-height: 4px;
    }

    .bar.today {
      font-weight: 700;
    }

    .quote {
      font-size: 1.25rem;
      font-style: italic;
      margin: 0;
    }

    .articles {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 12px;
    }

    .article {
      background: var(--bg);
      border-radius: 14px;
      padding: 14px;
      display: grid;
      gap: 6px;
    }

    .article a {
      color: var(--ink);
      font-weight: 600;
    }

    .fill.smoke-free { background: var(--smoke-free); }
    .fill.low { background: var(--low); }
    .fill.moderate { background: var(--moderate); }
    .fill.high { background: var(--high); }
  </style>
</head>
<body>
  <main class="app">
    <div class="notice" id="notice" role="status">
      <span id="notice-text"></span>
      <button type="button" id="notice-close" aria-label="Dismiss">&times;</button>
    </div>

    <section>
      <h1>Daily Tracker</h1>
      <p class="muted" id="today" data-date="{{DATE_KEY}}">{{DISPLAY_DATE}}</p>
      <p id="headline">{{HEADLINE}}</p>
      <form id="entry-form">
        <label>Cigarettes smoked today
          <input id="cigarettes" type="number" min="0" value="{{CIGARETTES}}" placeholder="0" />
        </label>
        <label>Vape sessions today
          <input id="vapes" type="number" min="0" value="{{VAPES}}" placeholder="0" />
        </label>
        <button type="submit" id="entry-save">Save entry</button>
      </form>
    </section>

    <section>
      <h2>Weekly overview</h2>
      <p class="muted" id="weekly-message">Loading...</p>
      <div class="metrics">
        <div class="metric"><span>Weekly total</span><strong id="total-items">--</strong></div>
        <div class="metric"><span>Daily average</span><strong id="average">--</strong></div>
        <div class="metric"><span>Best day</span><strong id="best-day">--</strong></div>
        <div class="metric"><span>Active days</span><strong id="active-days">--</strong></div>
      </div>
      <div class="bars" id="bars"></div>
    </section>

    <section>
      <h2>Daily inspiration</h2>
      <p class="quote" id="quote">Loading...</p>
      <div>
        <button type="button" id="quote-next">Get new motivation</button>
      </div>
    </section>

    <section>
      <h2>Personal goal</h2>
      <p class="muted" id="goal-current">No goal set yet.</p>
      <form id="goal-form">
        <label>Track
          <select id="goal-type">
            <option value="cigarettes">Cigarettes</option>
            <option value="vapes">Vapes</option>
            <option value="both">Both</option>
          </select>
        </label>
        <label>Target per day
          <input id="goal-target" type="number" min="0" value="0" />
        </label>
        <label>Description
          <input id="goal-description" type="text" placeholder="Why this goal matters" />
        </label>
        <button type="submit">Save goal</button>
      </form>
    </section>

    <section>
      <h2>Learn more</h2>
      <div class="articles" id="articles"></div>
    </section>
  </main>

  <script>
    const notice = document.getElementById('notice');
    const noticeText = document.getElementById('notice-text');

    const setNotice = (message, type) => {
      noticeText.textContent = message;
      notice.dataset.type = type || '';
    };

    document.getElementById('notice-close').addEventListener('click', () => setNotice('', ''));

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderWeekly = (overview) => {
      const { days, stats, message } = overview;
      document.getElementById('weekly-message').textContent = message;
      document.getElementById('total-items').textContent = stats.totalItems;
      document.getElementById('average').textContent = stats.averageDisplay;
      document.getElementById('best-day').textContent = `${stats.bestDay.total} (${stats.bestDay.day})`;
      document.getElementById('active-days').textContent = `${stats.daysWithData} / 7`;

      const max = Math.max(1, ...days.map((day) => day.total));
      document.getElementById('bars').innerHTML = days
        .map((day) => {
          const height = Math.round((day.total / max) * 130);
          const title = `${day.cigarettes} cigarettes, ${day.vapes} vapes`;
          return `<div class="bar${day.isToday ? ' today' : ''}" title="${title}">
            <span>${day.total}</span>
            <span class="fill ${day.band}" style="height:${height}px"></span>
            <span>${day.isToday ? 'Today' : day.day}</span>
          </div>`;
        })
        .join('');
    };

    const renderGoal = (goal) => {
      const el = document.getElementById('goal-current');
      if (!goal) {
        el.textContent = 'No goal set yet.';
        return;
      }
      el.textContent = `${goal.description} (at most ${goal.targetPerDay} ${goal.type} per day, since ${goal.startDate})`;
      document.getElementById('goal-type').value = goal.type;
      document.getElementById('goal-target').value = goal.targetPerDay;
      document.getElementById('goal-description').value = goal.description;
    };

    const renderArticles = (articles) => {
      document.getElementById('articles').innerHTML = articles
        .map((article) => `<div class="article">
            <span class="muted">${article.category} &middot; ${article.readTime}</span>
            <a href="${article.url}" target="_blank" rel="noopener noreferrer">${article.title}</a>
            <span>${article.description}</span>
          </div>`)
        .join('');
    };

    const setQuote = (quote) => {
      document.getElementById('quote').textContent = quote;
    };

    const loadMotivation = async () => {
      const motivation = await request('/api/motivation');
      setQuote(motivation.quote);
      if (!motivation.shownToday) {
        await request('/api/motivation', { method: 'POST' });
      }
    };

    document.getElementById('quote-next').addEventListener('click', () => {
      request('/api/motivation/next')
        .then((next) => setQuote(next.quote))
        .catch((err) => setNotice(err.message, 'error'));
    });

    const loadWeekly = async () => renderWeekly(await request('/api/weekly'));
    const loadArticles = async () => renderArticles(await request('/api/articles'));
    const loadGoal = async () => renderGoal(await request('/api/goal'));

    document.getElementById('entry-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const button = document.getElementById('entry-save');
      button.disabled = true;
      try {
        const saved = await request('/api/entries', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            cigarettes: document.getElementById('cigarettes').value,
            vapes: document.getElementById('vapes').value
          })
        });
        document.getElementById('headline').textContent = saved.feedback.title;
        setNotice(`${saved.feedback.title} ${saved.feedback.description}`, 'ok');
        await loadWeekly();
      } catch (err) {
        setNotice(err.message, 'error');
      } finally {
        button.disabled = false;
      }
    });

    document.getElementById('goal-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        const goal = await request('/api/goal', {
          method: 'PUT',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            type: document.getElementById('goal-type').value,
            targetPerDay: Math.max(0, parseInt(document.getElementById('goal-target').value, 10) || 0),
            description: document.getElementById('goal-description').value
          })
        });
        renderGoal(goal);
        setNotice('Goal saved', 'ok');
      } catch (err) {
        setNotice(err.message, 'error');
      }
    });

    Promise.all([loadWeekly(), loadGoal(), loadMotivation(), loadArticles()]).catch((err) => setNotice(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefills_saved_counts() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let entry = DailyEntry {
            date: today,
            cigarettes: 2,
            vapes: 1,
            recorded_at: 1,
        };
        let html = render_index(today, Some(&entry));
        assert!(html.contains(r#"id="cigarettes" type="number" min="0" value="2""#));
        assert!(html.contains(r#"id="vapes" type="number" min="0" value="1""#));
        assert!(html.contains("Sunday, January 5, 2025"));
        assert!(!html.contains("{{"));
        assert!(html.contains("fetch(url, options)"));
        assert!(html.contains("'/api/motivation'"));
        assert!(html.contains("'/api/articles'"));
    }

    #[test]
    fn empty_form_without_entry() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let html = render_index(today, None);
        assert!(html.contains(r#"value="""#));
        assert!(html.contains("Let's track your progress for today!"));
    }
}
