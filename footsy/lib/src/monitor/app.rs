use crate::midi::{DeviceInfo, MidiAccess, MidiData};

/// Name the pedal reports to the host.
pub const DEFAULT_DEVICE_NAME: &str = "Footsy";

/// Frame the pedal firmware expects once after it has been discovered.
pub const INIT_SYSEX: [u8; 8] = [0xF0, 0x00, 0x50, 0x07, 0x77, 0x54, 0x7F, 0xF7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotSupported,
    NotFound,
    Listening,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NotSupported => "MIDI not supported",
            Self::NotFound => "Device not found",
            Self::Listening => "Listening",
        })
    }
}

/// Tracks the named device across scans and keeps it initialized.
///
/// Bindings are compared by port id, never by name or by reference. The
/// stored binding is replaced wholesale on every scan, so a device seen
/// again after an absent scan counts as a new identity and is initialized
/// again.
pub struct Monitor {
    access: Option<MidiAccess>,
    device_name: String,
    bound_input: Option<DeviceInfo>,
    bound_output: Option<DeviceInfo>,
}

impl Monitor {
    /// Takes ownership of a granted access handle. A grant without SysEx
    /// support is discarded here, before any scan.
    pub fn with_access(access: MidiAccess, device_name: impl Into<String>) -> Self {
        let access = if access.sysex_enabled {
            Some(access)
        } else {
            None
        };

        Self {
            access,
            device_name: device_name.into(),
            bound_input: None,
            bound_output: None,
        }
    }

    /// Monitor for a session where the access request failed. Stays in the
    /// unsupported state forever.
    pub fn unavailable(device_name: impl Into<String>) -> Self {
        Self {
            access: None,
            device_name: device_name.into(),
            bound_input: None,
            bound_output: None,
        }
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn bound_input(&self) -> Option<&DeviceInfo> {
        self.bound_input.as_ref()
    }

    pub fn bound_output(&self) -> Option<&DeviceInfo> {
        self.bound_output.as_ref()
    }

    pub fn status(&self) -> Status {
        if self.access.is_none() {
            Status::NotSupported
        } else if self.bound_input.is_none() || self.bound_output.is_none() {
            Status::NotFound
        } else {
            Status::Listening
        }
    }

    /// Re-enumerates both directions and rebinds to the first port named
    /// after the monitored device. Attaches the input stream only when the
    /// input identity changed, and sends the init frame only when the
    /// output identity changed. Does nothing without access.
    pub fn rescan(&mut self) -> anyhow::Result<()> {
        let Some(access) = self.access.as_mut() else {
            return Ok(());
        };

        let found = access
            .inputs
            .list_inputs()?
            .into_iter()
            .find(|device| device.name == self.device_name);

        if let Some(ref device) = found {
            if identity_changed(&self.bound_input, device) {
                access.inputs.attach_to_input(device)?;
                log::debug!("listening to input : {device}");
            }
        }
        self.bound_input = found;

        let found = access
            .outputs
            .list_outputs()?
            .into_iter()
            .find(|device| device.name == self.device_name);

        if let Some(ref device) = found {
            if identity_changed(&self.bound_output, device) {
                access.outputs.attach_to_output(device)?;
                access.outputs.send_midi_message(&INIT_SYSEX)?;
                log::debug!("initialized output : {device}");
            }
        }
        self.bound_output = found;

        Ok(())
    }

    /// Drains the messages received since the last call.
    pub fn poll_messages(&mut self) -> Vec<MidiData> {
        match self.access.as_mut() {
            Some(access) => access.inputs.produce_midi_messages(),
            None => vec![],
        }
    }
}

fn identity_changed(bound: &Option<DeviceInfo>, found: &DeviceInfo) -> bool {
    bound.as_ref().map_or(true, |current| current.id != found.id)
}
