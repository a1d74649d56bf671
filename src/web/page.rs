//! HTML and plain-text rendering of a month listing

use chrono::{Datelike, NaiveDate};

use super::listing::{ListedMatch, MonthListing};
use crate::data_fetcher::api::Month;

const WEEKDAYS_KO: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

const EMPTY_MESSAGE: &str = "경기 정보가 없습니다.";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0 auto; max-width: 960px; padding: 1rem; }
.filters { display: flex; gap: .5rem; align-items: center; margin-bottom: 1rem; }
.month-nav { display: flex; justify-content: space-between; margin-bottom: 1rem; }
table { width: 100%; border-collapse: collapse; margin-bottom: 1.5rem; }
td { padding: .4rem .5rem; border-bottom: 1px solid #ddd; }
.score { text-align: center; font-weight: bold; }
.badge { padding: .1rem .5rem; border-radius: .75rem; font-size: .85rem; }
.badge.scheduled { background: #e3f2fd; color: #0d47a1; }
.badge.live { background: #ffebee; color: #b71c1c; }
.badge.finished { background: #eeeeee; color: #424242; }
.empty { padding: 2rem; text-align: center; color: #757575; }
"#;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Date heading, e.g. `2024년 5월 3일 (금)`.
pub fn format_date_heading(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_KO[date.weekday().num_days_from_monday() as usize];
    format!(
        "{}년 {}월 {}일 ({})",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

fn format_score(listed: &ListedMatch) -> String {
    match listed.game.score() {
        Some((home, away)) => format!("{away} : {home}"),
        None => "vs".to_string(),
    }
}

fn month_link(month: Month, region_id: Option<&str>) -> String {
    match region_id {
        Some(region_id) => format!("?month={month}&amp;region={}", escape_html(region_id)),
        None => format!("?month={month}"),
    }
}

fn render_filters(listing: &MonthListing) -> String {
    let mut html = String::new();
    html.push_str("<form class=\"filters\" method=\"get\" action=\"/matches\">\n");
    html.push_str(&format!(
        "  <input type=\"month\" name=\"month\" value=\"{}\">\n",
        listing.month
    ));
    html.push_str("  <select name=\"region\">\n");
    let all_selected = if listing.region_id.is_none() {
        " selected"
    } else {
        ""
    };
    html.push_str(&format!(
        "    <option value=\"\"{all_selected}>전체 지역</option>\n"
    ));
    for region in &listing.regions {
        let selected = if listing.is_selected_region(region) {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "    <option value=\"{}\"{}>{}</option>\n",
            region.region_id,
            selected,
            escape_html(&region.region_name)
        ));
    }
    html.push_str("  </select>\n");
    html.push_str("  <button type=\"submit\">조회</button>\n");
    html.push_str("</form>\n");

    html.push_str("<nav class=\"month-nav\">\n");
    html.push_str(&format!(
        "  <a href=\"{}\">&laquo; 이전 달</a>\n",
        month_link(listing.month.previous(), listing.region_id.as_deref())
    ));
    html.push_str(&format!(
        "  <strong>{}년 {}월</strong>\n",
        listing.month.year(),
        listing.month.month()
    ));
    html.push_str(&format!(
        "  <a href=\"{}\">다음 달 &raquo;</a>\n",
        month_link(listing.month.next(), listing.region_id.as_deref())
    ));
    html.push_str("</nav>\n");
    html
}

fn render_row(listed: &ListedMatch) -> String {
    let game = &listed.game;
    let attendance = game
        .attendance
        .map(|count| format!("{count}명"))
        .unwrap_or_default();

    format!(
        concat!(
            "    <tr data-match-id=\"{id}\">\n",
            "      <td class=\"time\">{time}</td>\n",
            "      <td class=\"away\">{away}</td>\n",
            "      <td class=\"score\">{score}</td>\n",
            "      <td class=\"home\">{home}</td>\n",
            "      <td class=\"stadium\">{stadium}</td>\n",
            "      <td class=\"region\">{region}</td>\n",
            "      <td><span class=\"badge {css}\">{label}</span></td>\n",
            "      <td class=\"attendance\">{attendance}</td>\n",
            "    </tr>\n"
        ),
        id = escape_html(&game.id),
        time = escape_html(&game.match_time),
        away = escape_html(&game.away_team),
        score = format_score(listed),
        home = escape_html(&game.home_team),
        stadium = escape_html(&game.stadium_name),
        region = escape_html(&game.region_name),
        css = listed.status.css_class,
        label = listed.status.label,
        attendance = attendance,
    )
}

/// Renders the full listing page. Matches are expected in listing order; one
/// section is emitted per run of equal dates.
pub fn render_page(listing: &MonthListing) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>KBO 경기 일정</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str("<h1>KBO 경기 일정</h1>\n");
    html.push_str(&render_filters(listing));

    if listing.is_empty() {
        html.push_str(&format!("<p class=\"empty\">{EMPTY_MESSAGE}</p>\n"));
    } else {
        for day in listing
            .matches
            .chunk_by(|a, b| a.game.match_date == b.game.match_date)
        {
            let date = day[0].game.match_date;
            html.push_str(&format!("<section class=\"day\" data-date=\"{date}\">\n"));
            html.push_str(&format!("  <h2>{}</h2>\n", format_date_heading(date)));
            html.push_str("  <table>\n");
            for listed in day {
                html.push_str(&render_row(listed));
            }
            html.push_str("  </table>\n</section>\n");
        }
    }

    html.push_str(&format!(
        "<footer>기준 시각 {}</footer>\n",
        listing.generated_at.format("%Y-%m-%d %H:%M KST")
    ));
    html.push_str("</body>\n</html>\n");
    html
}

/// Renders the listing as plain text for terminal output.
pub fn render_text(listing: &MonthListing) -> String {
    let mut out = format!(
        "KBO 경기 일정 {}년 {}월\n",
        listing.month.year(),
        listing.month.month()
    );

    if listing.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    for day in listing
        .matches
        .chunk_by(|a, b| a.game.match_date == b.game.match_date)
    {
        out.push('\n');
        out.push_str(&format_date_heading(day[0].game.match_date));
        out.push('\n');
        for listed in day {
            let game = &listed.game;
            let place = if game.region_name.is_empty() {
                game.stadium_name.clone()
            } else {
                format!("{} ({})", game.stadium_name, game.region_name)
            };
            out.push_str(&format!(
                "  {:<5} {} {} {}  {}  [{}]\n",
                game.match_time,
                game.away_team,
                format_score(listed),
                game.home_team,
                place,
                listed.status.label
            ));
        }
    }

    out
}
