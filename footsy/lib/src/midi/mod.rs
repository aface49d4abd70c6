mod stream;

pub use stream::*;

/// An enumerable MIDI port. Ports are compared by `id`, which is stable
/// while a device stays plugged in and changes when the device is
/// re-enumerated at a different address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub id: String,
    pub name: String,
}

impl std::fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.id)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MidiData {
    pub timestamp: u64,
    pub bytes: Vec<u8>,
}

pub trait MidiReceiving {
    fn list_inputs(&self) -> anyhow::Result<Vec<DeviceInfo>>;
    fn attach_to_input(&mut self, device: &DeviceInfo) -> anyhow::Result<()>;
    fn produce_midi_messages(&mut self) -> Vec<MidiData>;
}

pub trait MidiSending {
    fn list_outputs(&self) -> anyhow::Result<Vec<DeviceInfo>>;
    fn attach_to_output(&mut self, device: &DeviceInfo) -> anyhow::Result<()>;
    fn send_midi_message(&mut self, bytes: &[u8]) -> anyhow::Result<()>;
}

#[derive(Debug, thiserror::Error)]
pub enum MidiError {
    #[error("failed to reach the midi host : {0}")]
    Unavailable(String),
    #[error("no midi port with id {0}")]
    NoSuchPort(String),
}

/// Granted access to the host MIDI system, one stream per direction.
///
/// `sysex_enabled` reports whether system exclusive frames will actually be
/// delivered and accepted. Hosted streams always set it: ALSA and CoreMIDI
/// do not gate SysEx behind a separate grant.
pub struct MidiAccess {
    pub inputs: Box<dyn MidiReceiving>,
    pub outputs: Box<dyn MidiSending>,
    pub sysex_enabled: bool,
}

impl MidiAccess {
    /// Opens the host MIDI system for both directions. Fails when the host
    /// has no usable MIDI backend.
    pub fn request() -> anyhow::Result<Self> {
        Ok(Self {
            inputs: Box::new(HostedMidiInput::new()?),
            outputs: Box::new(HostedMidiOutput::new()?),
            sysex_enabled: true,
        })
    }
}
