use super::*;
use crossbeam::channel::{Receiver, Sender};
use midir::{Ignore, MidiInput, MidiInputConnection, MidiOutput, MidiOutputConnection};

const CLIENT_NAME: &str = "footsy";

fn open_input() -> Result<MidiInput, MidiError> {
    let mut host = MidiInput::new(CLIENT_NAME).map_err(|e| MidiError::Unavailable(e.to_string()))?;
    // deliver sysex and realtime frames instead of filtering them out
    host.ignore(Ignore::None);
    Ok(host)
}

fn open_output() -> Result<MidiOutput, MidiError> {
    MidiOutput::new(CLIENT_NAME).map_err(|e| MidiError::Unavailable(e.to_string()))
}

pub struct HostedMidiInput {
    sender: Sender<MidiData>,
    receiver: Receiver<MidiData>,
    connection: Option<MidiInputConnection<Sender<MidiData>>>,
}

impl HostedMidiInput {
    pub fn new() -> anyhow::Result<Self> {
        // a missing midi system should fail the request itself, not the first scan
        open_input()?;

        let (sender, receiver) = crossbeam::channel::bounded(1_000);

        Ok(Self {
            sender,
            receiver,
            connection: None,
        })
    }
}

impl MidiReceiving for HostedMidiInput {
    fn list_inputs(&self) -> anyhow::Result<Vec<DeviceInfo>> {
        // a fresh host context sees devices plugged in since the last call
        let host = open_input()?;
        host.ports()
            .iter()
            .map(|port| {
                Ok(DeviceInfo {
                    id: port.id(),
                    name: host.port_name(port)?,
                })
            })
            .collect()
    }

    fn attach_to_input(&mut self, device: &DeviceInfo) -> anyhow::Result<()> {
        let host = open_input()?;
        let ports = host.ports();
        let port = ports
            .iter()
            .find(|port| port.id() == device.id)
            .ok_or_else(|| MidiError::NoSuchPort(device.id.clone()))?;

        let callback = |timestamp: u64, bytes: &[u8], sender: &mut Sender<MidiData>| {
            let midi = MidiData {
                timestamp,
                bytes: bytes.into(),
            };

            if let Err(e) = sender.try_send(midi) {
                log::error!("failed to push midi message to the ui thread : {e}");
            }
        };

        // close the previous port before opening the new one
        self.connection = None;
        self.connection = Some(
            host.connect(port, CLIENT_NAME, callback, self.sender.clone())
                .map_err(|e| anyhow::anyhow!(e.to_string()))?,
        );

        log::trace!("midi input attached : {device}");
        Ok(())
    }

    fn produce_midi_messages(&mut self) -> Vec<MidiData> {
        self.receiver.try_iter().collect()
    }
}

pub struct HostedMidiOutput {
    connection: Option<MidiOutputConnection>,
}

impl HostedMidiOutput {
    pub fn new() -> anyhow::Result<Self> {
        open_output()?;
        Ok(Self { connection: None })
    }
}

impl MidiSending for HostedMidiOutput {
    fn list_outputs(&self) -> anyhow::Result<Vec<DeviceInfo>> {
        let host = open_output()?;
        host.ports()
            .iter()
            .map(|port| {
                Ok(DeviceInfo {
                    id: port.id(),
                    name: host.port_name(port)?,
                })
            })
            .collect()
    }

    fn attach_to_output(&mut self, device: &DeviceInfo) -> anyhow::Result<()> {
        let host = open_output()?;
        let ports = host.ports();
        let port = ports
            .iter()
            .find(|port| port.id() == device.id)
            .ok_or_else(|| MidiError::NoSuchPort(device.id.clone()))?;

        self.connection = None;
        self.connection = Some(
            host.connect(port, CLIENT_NAME)
                .map_err(|e| anyhow::anyhow!(e.to_string()))?,
        );

        log::trace!("midi output attached : {device}");
        Ok(())
    }

    fn send_midi_message(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        let Some(connection) = self.connection.as_mut() else {
            anyhow::bail!("no midi output attached");
        };

        connection.send(bytes)?;
        Ok(())
    }
}
