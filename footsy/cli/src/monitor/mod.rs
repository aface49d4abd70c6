mod ui;

use crate::ui::widgets::log::LogRow;
use footsy::midi::MidiAccess;
use footsy::monitor::{Monitor, Status, DEFAULT_DEVICE_NAME};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// How often the device lists are re-enumerated. The host has no hotplug
/// callback, so presence changes are picked up by polling.
const RESCAN_INTERVAL: Duration = Duration::from_secs(1);

struct TerminalApp {
    ui: ui::Ui,
    monitor: Monitor,
    last_scan: Option<Instant>,
    last_status: Status,
}

impl TerminalApp {
    fn new(monitor: Monitor) -> Self {
        let last_status = monitor.status();
        log::info!("status : {last_status}");

        Self {
            ui: ui::Ui::default(),
            monitor,
            last_scan: None,
            last_status,
        }
    }

    fn scan_due(&self) -> bool {
        self.last_scan
            .map_or(true, |last| last.elapsed() >= RESCAN_INTERVAL)
    }
}

impl crate::app::Base for TerminalApp {
    fn update(&mut self) -> anyhow::Result<crate::app::Flow> {
        if self.scan_due() {
            self.last_scan = Some(Instant::now());

            if let Err(e) = self.monitor.rescan() {
                log::warn!("device scan failed : {e}");
            }
        }

        let status = self.monitor.status();
        if status != self.last_status {
            log::info!("status : {status}");
            self.last_status = status;
        }

        let mut rows: Vec<_> = self.monitor.poll_messages().iter().map(LogRow::new).collect();
        self.ui.append_rows(&mut rows);

        Ok(crate::app::Flow::Continue)
    }

    fn on_keypress(&mut self, key: crossterm::event::KeyEvent) -> anyhow::Result<crate::app::Flow> {
        match self.ui.handle_keypress(key) {
            ui::UiEvent::Continue => Ok(crate::app::Flow::Continue),
            ui::UiEvent::Exit => Ok(crate::app::Flow::Exit),
        }
    }

    fn render(&mut self, f: &mut Frame) {
        self.ui.render(f, &self.monitor);
    }
}

#[derive(Debug, clap::Parser)]
pub struct Options {
    /// Device name to watch for
    #[arg(long, default_value = DEFAULT_DEVICE_NAME)]
    device: String,

    /// Path to log file to write to. Defaults
    /// to system log file at ~/.footsy/log/monitor.log
    #[arg(long)]
    log: Option<std::path::PathBuf>,

    /// Frames per second
    #[arg(long, default_value_t = 30.)]
    fps: f32,
}

pub fn run(
    terminal: &mut Terminal<impl Backend>,
    opts: Options,
    common: crate::CommonOptions,
) -> anyhow::Result<()> {
    if let Some(log_file) = opts.log.or(crate::locations::log_file("monitor")) {
        crate::logger::start("monitor", log_file, common.verbose)?;
    }

    let monitor = match MidiAccess::request() {
        Ok(access) => Monitor::with_access(access, &opts.device),
        Err(e) => {
            log::error!("failed to get midi access : {e}");
            Monitor::unavailable(&opts.device)
        }
    };

    let mut app = TerminalApp::new(monitor);
    crate::app::run(terminal, &mut app, opts.fps.max(1.))
}
