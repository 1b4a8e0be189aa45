use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::{in_month, next_after, on_date, stats, Holiday};
use crate::ui::styles;
use crate::utils::{format_date_long, month_name, relative_age, truncate};

/// Maximum holiday name width in the list before truncation.
const MAX_NAME_WIDTH: usize = 60;

pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme;
    f.render_widget(Block::default().style(styles::base_style(theme)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(1),    // holiday list
            Constraint::Length(1), // next holiday banner
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_list(f, app, chunks[1]);
    render_next_banner(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let s = stats(&app.holidays);
    let lines = vec![
        Line::from(Span::styled(
            format!(" Feriados Argentina {} ", app.year),
            styles::title_style(theme),
        )),
        Line::from(Span::styled(
            format!(
                " {} feriados · {} inamovibles · {} trasladables",
                s.total, s.fixed, s.movable
            ),
            styles::muted_style(theme),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    if app.holidays.is_empty() {
        let message = if app.loading {
            "Cargando feriados..."
        } else {
            "No hay feriados para mostrar"
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", message),
                styles::muted_style(theme),
            ))),
            area,
        );
        return;
    }

    let today = app.today();
    let next = next_after(&app.holidays, today).map(|h| h.date);

    // Group by month, skipping empty months, like the year-at-a-glance
    // view of the original app.
    let mut items: Vec<ListItem> = Vec::new();
    for month in 1..=12 {
        let month_holidays = in_month(&app.holidays, app.year, month);
        if month_holidays.is_empty() {
            continue;
        }
        items.push(ListItem::new(Line::from(Span::styled(
            format!(" {}", month_name(month)),
            styles::month_header_style(theme),
        ))));
        for holiday in month_holidays {
            items.push(ListItem::new(holiday_line(
                holiday,
                app,
                next == Some(holiday.date),
            )));
        }
    }

    f.render_widget(List::new(items), area);
}

fn holiday_line<'a>(holiday: &'a Holiday, app: &App, is_next: bool) -> Line<'a> {
    let theme = app.theme;
    let today = app.today();

    let date_style = if holiday.date == today {
        styles::today_style(theme)
    } else if holiday.date < today {
        styles::muted_style(theme)
    } else if is_next {
        styles::next_style(theme)
    } else {
        styles::base_style(theme)
    };

    let mut spans = vec![
        Span::styled(format!("   {} ", holiday.date.format("%d/%m")), date_style),
        Span::styled(truncate(&holiday.name, MAX_NAME_WIDTH), date_style),
        Span::styled(
            format!("  [{}]", holiday.kind.label()),
            styles::muted_style(theme),
        ),
    ];
    if holiday.date == today {
        spans.push(Span::styled("  ← hoy", styles::today_style(theme)));
    }
    Line::from(spans)
}

fn render_next_banner(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let today = app.today();

    if let Some(h) = on_date(&app.holidays, today) {
        let line = Line::from(vec![
            Span::styled(" ¡Hoy es feriado! ", styles::today_style(theme)),
            Span::styled(h.name.clone(), styles::next_style(theme)),
        ]);
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    let line = match next_after(&app.holidays, today) {
        Some(h) => {
            let days = (h.date - today).num_days();
            let when = if days == 1 {
                "es mañana".to_string()
            } else {
                format!("en {} días", days)
            };
            Line::from(vec![
                Span::styled(" Próximo feriado: ", styles::muted_style(theme)),
                Span::styled(h.name.clone(), styles::next_style(theme)),
                Span::styled(
                    format!(" · {} ({})", format_date_long(h.date), when),
                    styles::muted_style(theme),
                ),
            ])
        }
        None if !app.holidays.is_empty() => Line::from(Span::styled(
            " No quedan feriados este año",
            styles::muted_style(theme),
        )),
        None => Line::default(),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let mut spans: Vec<Span> = Vec::new();

    if let Some(ref error) = app.error {
        spans.push(Span::styled(format!(" {} ", error), styles::error_style(theme)));
    } else if app.loading {
        spans.push(Span::raw(" Actualizando... "));
    } else if let Some(fetched_at) = app.last_updated {
        spans.push(Span::raw(format!(
            " Actualizado {} ",
            relative_age(fetched_at, chrono::Utc::now())
        )));
    }

    for (key, action) in [
        ("←/→", "año"),
        ("r", "actualizar"),
        ("t", "tema"),
        ("x", "limpiar caché"),
        ("q", "salir"),
    ] {
        spans.push(Span::styled(format!(" {} ", key), styles::help_key_style(theme)));
        spans.push(Span::raw(action));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(styles::status_bar_style(theme)),
        area,
    );
}
