use colored::*;
use footsy::midi::{DeviceInfo, MidiAccess};

pub fn run() -> anyhow::Result<()> {
    let access = MidiAccess::request()?;

    println!("{}", "inputs".bold());
    print_devices(access.inputs.list_inputs()?);

    println!("{}", "outputs".bold());
    print_devices(access.outputs.list_outputs()?);

    Ok(())
}

fn print_devices(devices: Vec<DeviceInfo>) {
    if devices.is_empty() {
        println!("  {}", "none".dimmed());
        return;
    }

    for device in devices {
        println!("  {} {}", device.name, format!("[{}]", device.id).dimmed());
    }
}
