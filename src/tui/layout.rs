//! Dashboard layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use crate::session::Prediction;

use super::runtime::{App, InputField};
use super::style;

/// Renders the full dashboard frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(4), // input form
            Constraint::Min(8),    // chart or history
            Constraint::Length(5), // KPI tiles
            Constraint::Length(1), // status line
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_form(frame, app, chunks[1]);
    if app.show_history {
        render_history(frame, app, chunks[2]);
    } else {
        render_chart(frame, app, chunks[2]);
    }
    render_kpis(frame, app, chunks[3]);
    render_status(frame, app, chunks[4]);
    render_footer(frame, app, chunks[5]);
}

/// Header bar: app name, selected zone and instant, prediction count.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let header = Line::from(vec![
        Span::styled(
            " OLA FORECAST ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            form.zone.name(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {} {} {} │ {} predictions ",
            form.date.format("%d-%b-%Y"),
            form.hour12,
            if form.pm { "PM" } else { "AM" },
            app.session.history().len(),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// One form field as a span, highlighted when the cursor is on it.
fn field_span(label: &str, value: String, selected: bool) -> Span<'static> {
    let text = format!(" {label}: {value} ");
    if selected {
        Span::styled(
            text,
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        )
    } else {
        Span::raw(text)
    }
}

/// Editable input form panel.
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let at = |f: InputField| app.field == f;

    let top = Line::from(vec![
        field_span("City", form.zone.to_string(), at(InputField::City)),
        field_span(
            "Date",
            form.date.format("%d-%b-%Y").to_string(),
            at(InputField::Date),
        ),
        field_span("Hour", form.hour12.to_string(), at(InputField::Hour)),
        field_span(
            "AM/PM",
            if form.pm { "PM" } else { "AM" }.to_string(),
            at(InputField::Meridiem),
        ),
    ]);
    let bottom = Line::from(vec![
        field_span(
            "Temp",
            format!("{:.0}°C", form.temperature_c),
            at(InputField::Temperature),
        ),
        field_span(
            "Humidity",
            format!("{:.0}%", form.humidity_pct),
            at(InputField::Humidity),
        ),
        field_span("Season", form.season.to_string(), at(InputField::Season)),
        field_span("Weather", form.weather.to_string(), at(InputField::Weather)),
    ]);

    let block = Block::default().title(" Ride Inputs ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(vec![top, bottom]).block(block), area);
}

/// 24-hour demand chart, or a hint before the first prediction.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" 24-Hour Ride Forecast ")
        .borders(Borders::ALL);

    let Some(prediction) = app.session.current() else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Press p to generate a forecast",
            Style::default().fg(style::HINT_FG),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let data: Vec<(f64, f64)> = prediction
        .series
        .iter()
        .map(|r| {
            (
                f64::from(r.offset as u32),
                f64::from(r.predicted_rides),
            )
        })
        .collect();

    let y_bounds = style::auto_bounds_y(&data);
    let x_hi = data.last().map_or(1.0, |p| p.0).max(1.0);

    let datasets = vec![
        Dataset::default()
            .name(prediction.request.zone.name())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::CHART_COLOR))
            .data(&data),
    ];

    let first_label = prediction
        .series
        .first()
        .map(|r| r.time_label.clone())
        .unwrap_or_default();
    let last_label = prediction
        .series
        .last()
        .map(|r| r.time_label.clone())
        .unwrap_or_default();
    let y_label_lo = format!("{:.0}", y_bounds[0]);
    let y_label_hi = format!("{:.0}", y_bounds[1]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("hour")
                .bounds([0.0, x_hi])
                .labels(vec![first_label, last_label]),
        )
        .y_axis(
            Axis::default()
                .title("rides")
                .bounds(y_bounds)
                .labels(vec![y_label_lo, y_label_hi]),
        );

    frame.render_widget(chart, area);
}

/// Prediction history panel.
fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.session.history();
    let lines = if entries.is_empty() {
        vec![Line::from(Span::styled(
            "  No prediction history yet",
            Style::default().fg(style::HINT_FG),
        ))]
    } else {
        entries
            .iter()
            .map(|e| Line::from(format!("  {e}")))
            .collect()
    };

    let block = Block::default()
        .title(" Prediction History ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One KPI tile with a bordered title and a centered value.
fn kpi_tile(frame: &mut Frame, area: Rect, title: &str, value: String, value_style: Style) {
    let tile = Paragraph::new(Line::from(Span::styled(value, value_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL),
        );
    frame.render_widget(tile, area);
}

/// KPI tile row; omitted entirely until a forecast exists.
fn render_kpis(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prediction) = app.session.current() else {
        return;
    };
    let Prediction { summary, .. } = prediction;

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    kpi_tile(
        frame,
        tiles[0],
        "Current",
        format!("{} rides", summary.current_rides),
        bold,
    );
    kpi_tile(
        frame,
        tiles[1],
        "Peak",
        format!("{} at {}", summary.peak_rides, summary.peak_label),
        bold,
    );
    kpi_tile(
        frame,
        tiles[2],
        "Average",
        format!("{} rides", summary.average_rides),
        bold,
    );
    kpi_tile(
        frame,
        tiles[3],
        "Level",
        summary.level.to_string(),
        bold.fg(style::level_color(summary.level)),
    );
}

/// Status line with the last action's message.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref message) = app.status else {
        return;
    };
    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(style::STATUS_FG),
    )));
    frame.render_widget(status, area);
}

/// Footer with keybinding hints; the CSV hint appears once a forecast exists.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints =
        String::from(" q:Quit  Tab:Field  ←/→:Adjust  p:Predict  r:Reset  h:History");
    if app.session.has_forecast() {
        hints.push_str("  d:Save CSV");
    }
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
