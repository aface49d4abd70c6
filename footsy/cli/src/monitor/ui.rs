use crate::ui::{components, widgets};
use crossterm::event::KeyCode;
use footsy::midi::DeviceInfo;
use footsy::monitor::{Monitor, Status, INIT_SYSEX};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const USAGE: &str = r#"
       ? : display help
       i : display device info
<ESC>, q : quit or hide popup
   <C-c> : force quit
"#;

#[derive(PartialEq, Eq, Clone, Copy)]
enum Popup {
    Usage,
    Info,
}

#[derive(Default)]
pub struct Ui {
    popups: components::Popups<Popup>,
    rows: Vec<widgets::log::LogRow>,
}

pub enum UiEvent {
    Continue,
    Exit,
}

impl Ui {
    pub fn append_rows(&mut self, rows: &mut Vec<widgets::log::LogRow>) {
        self.rows.append(rows);
    }

    pub fn handle_keypress(&mut self, key: crossterm::event::KeyEvent) -> UiEvent {
        match key.code {
            KeyCode::Char('?') => self.popups.toggle_visible(Popup::Usage),
            KeyCode::Char('i') => self.popups.toggle_visible(Popup::Info),
            KeyCode::Char('q') | KeyCode::Esc => {
                if !self.popups.any_visible() {
                    return UiEvent::Exit;
                }

                self.popups.hide()
            }
            _ => {}
        }

        UiEvent::Continue
    }

    pub fn render(&mut self, f: &mut Frame, monitor: &Monitor) {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(3), Constraint::Percentage(80)].as_ref())
            .split(f.size());

        render_status(f, monitor, sections[0]);

        widgets::log::render_rows(
            f,
            &crate::title!("messages : {}", monitor.device_name()),
            &self.rows,
            sections[1],
        );

        self.popups
            .render(f, Popup::Usage, crate::title!("usage"), USAGE);
        self.popups
            .render(f, Popup::Info, crate::title!("device"), &info_text(monitor));
    }
}

fn render_status(f: &mut Frame, monitor: &Monitor, area: Rect) {
    let status = monitor.status();
    let color = match status {
        Status::NotSupported => Color::Red,
        Status::NotFound => Color::Yellow,
        Status::Listening => Color::Green,
    };

    let mut spans = vec![Span::styled(
        status.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];

    if let Some(input) = monitor.bound_input() {
        spans.push(Span::styled(
            format!("  in : {input}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(output) = monitor.bound_output() {
        spans.push(Span::styled(
            format!("  out : {output}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                crate::title!("monitor"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(paragraph, area);
}

fn info_text(monitor: &Monitor) -> String {
    let bound = |device: Option<&DeviceInfo>| {
        device.map_or_else(|| "-".to_owned(), ToString::to_string)
    };

    let init: String = INIT_SYSEX.iter().map(|byte| format!("{byte:02x} ")).collect();

    format!(
        "\ndevice : {}\n input : {}\noutput : {}\n  init : {}\n",
        monitor.device_name(),
        bound(monitor.bound_input()),
        bound(monitor.bound_output()),
        init.trim_end(),
    )
}
