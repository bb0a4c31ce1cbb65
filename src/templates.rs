use crate::processing::display::{render_training_report, render_walk_report};
use crate::processing::{TrainingSummary, UNKNOWN_TRAINING_MESSAGE, WalkSummary};

pub fn render_landing_page() -> String {
    include_str!("../templates/landing.html").to_string()
}

pub fn render_training_page(summary: &TrainingSummary) -> String {
    let mut body = String::new();

    body.push_str("<section class=\"results-card\">");
    body.push_str(
        "<div class=\"results-header\"><p class=\"eyebrow\">Отчёт</p><h2>Тренировка</h2></div>",
    );

    body.push_str("<div class=\"summary-grid\">");
    body.push_str(&summary_card("Тип тренировки", summary.activity.label()));
    body.push_str(&summary_card(
        "Длительность",
        &format!("{:.2} ч.", summary.duration_hours),
    ));
    body.push_str(&summary_card(
        "Дистанция",
        &format!("{:.2} км.", summary.distance_km),
    ));
    body.push_str(&summary_card(
        "Скорость",
        &format!("{:.2} км/ч", summary.mean_speed_kmh),
    ));
    body.push_str(&summary_card(
        "Сожгли калорий",
        &format!("{:.2}", summary.calories),
    ));
    body.push_str("</div>");

    body.push_str(&format!(
        "<pre class=\"report\">{}</pre>",
        render_training_report(summary)
    ));
    body.push_str("</section>");

    page_shell(&body)
}

pub fn render_walk_page(summary: &WalkSummary) -> String {
    let mut body = String::new();

    body.push_str("<section class=\"results-card\">");
    body.push_str(
        "<div class=\"results-header\"><p class=\"eyebrow\">Отчёт</p><h2>Дневная прогулка</h2></div>",
    );

    body.push_str("<div class=\"summary-grid\">");
    body.push_str(&summary_card("Количество шагов", &summary.steps.to_string()));
    body.push_str(&summary_card(
        "Дистанция",
        &format!("{:.2} км.", summary.distance_km),
    ));
    body.push_str(&summary_card(
        "Сожгли калорий",
        &format!("{:.2} ккал", summary.calories),
    ));
    body.push_str("</div>");

    body.push_str(&format!(
        "<pre class=\"report\">{}</pre>",
        render_walk_report(summary)
    ));
    body.push_str("</section>");

    page_shell(&body)
}

pub fn render_unknown_training_page() -> String {
    page_shell(&format!(
        "<section class=\"results-card\"><div class=\"results-header\"><p class=\"eyebrow\">Отчёт</p><h2>Тренировка</h2></div><p class=\"notice\">{UNKNOWN_TRAINING_MESSAGE}</p></section>"
    ))
}

fn summary_card(label: &str, value: &str) -> String {
    format!(
        "<div class=\"summary-card\"><p class=\"label\">{label}</p><p class=\"value\">{value}</p></div>"
    )
}

fn page_shell(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>RustySteps</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 0; padding: 0; background: #f7f7f7; }}
    header {{ background: #20232a; color: white; padding: 1rem 2rem; }}
    main {{ padding: 2rem; max-width: 960px; margin: 0 auto; }}
    .results-card {{ background: white; border-radius: 8px; padding: 1.5rem; margin-bottom: 1.5rem; }}
    .results-header .eyebrow {{ color: #2563eb; text-transform: uppercase; font-size: 0.75rem; margin: 0; }}
    .results-header h2 {{ margin: 0.25rem 0 1rem; }}
    .summary-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1rem; }}
    .summary-card {{ background: #f1f5f9; border-radius: 6px; padding: 0.75rem 1rem; }}
    .summary-card .label {{ color: #64748b; font-size: 0.8rem; margin: 0; }}
    .summary-card .value {{ font-size: 1.25rem; font-weight: bold; margin: 0.25rem 0 0; }}
    .report {{ background: #f8fafc; border: 1px solid #e2e8f0; border-radius: 6px; padding: 1rem; }}
    .notice {{ color: #b91c1c; }}
    a {{ color: #2563eb; }}
  </style>
</head>
<body>
  <header><h1>RustySteps</h1></header>
  <main>
    {body}
    <p><a href="/">← Новый пакет</a></p>
  </main>
</body>
</html>"#
    )
}
