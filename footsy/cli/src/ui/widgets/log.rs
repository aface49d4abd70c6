use footsy::midi::MidiData;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

/// One logged message: the status byte in decimal, the data bytes as
/// lowercase hex tokens. Frames are rendered as-is, valid or not.
pub struct LogRow {
    pub timestamp: u64,
    pub status: String,
    pub data: String,
}

impl LogRow {
    pub fn new(message: &MidiData) -> Self {
        let status = message
            .bytes
            .first()
            .map(|byte| byte.to_string())
            .unwrap_or_default();

        let data = message
            .bytes
            .iter()
            .skip(1)
            .map(|byte| format!("0x{byte:x} "))
            .collect();

        Self {
            timestamp: message.timestamp,
            status,
            data,
        }
    }
}

pub fn render_rows(f: &mut Frame, title: &str, rows: &[LogRow], area: Rect) {
    const MAX_NUM_ROWS_ON_SCREEN: usize = 128;

    let row_list: Vec<ListItem> = rows
        .iter()
        .rev()
        .enumerate()
        .take(MAX_NUM_ROWS_ON_SCREEN.min(rows.len()))
        .map(|(i, row)| {
            let style = if i == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(vec![Line::from(vec![
                Span::styled(format!("[ {} ]", row.timestamp), style.fg(Color::Gray)),
                Span::styled(" : ", style.fg(Color::DarkGray)),
                Span::styled(row.status.clone(), style.fg(Color::Cyan)),
                Span::styled(" : ", style.fg(Color::DarkGray)),
                Span::styled(row.data.clone(), style.fg(Color::Yellow)),
            ])])
        })
        .collect();

    let list = List::new(row_list)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        );

    f.render_widget(list, area);
}

#[cfg(test)]
mod test {
    use super::*;

    fn row(bytes: &[u8]) -> LogRow {
        LogRow::new(&MidiData {
            timestamp: 0,
            bytes: bytes.into(),
        })
    }

    #[test]
    fn renders_status_in_decimal_and_data_in_hex() {
        let row = row(&[0x90, 0x3C, 0x7F]);
        assert_eq!(row.status, "144");
        assert_eq!(row.data, "0x3c 0x7f ");
    }

    #[test]
    fn renders_a_status_only_frame_with_empty_data() {
        let row = row(&[0xF8]);
        assert_eq!(row.status, "248");
        assert_eq!(row.data, "");
    }

    #[test]
    fn does_not_zero_pad_data_bytes() {
        let row = row(&[0x90, 0x05, 0x7F]);
        assert_eq!(row.data, "0x5 0x7f ");
    }

    #[test]
    fn renders_an_empty_frame_without_complaint() {
        let row = row(&[]);
        assert_eq!(row.status, "");
        assert_eq!(row.data, "");
    }

    #[test]
    fn keeps_sysex_frames_raw() {
        let row = row(&footsy::monitor::INIT_SYSEX);
        assert_eq!(row.status, "240");
        assert_eq!(row.data, "0x0 0x50 0x7 0x77 0x54 0x7f 0xf7 ");
    }
}
