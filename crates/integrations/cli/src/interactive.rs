use anyhow::{Context, Result};
use input_listener::{list_devices, DeviceInfo, DeviceSelector, EventSource, XInputToggle};
use log::{error, warn};
use macro_engine::{EvdevTranslator, KeyEvent, Transition};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::io::{self, BufRead, Write};
use std::thread;

/// Lets the user pick a device and prints every key transition it produces,
/// with the names to use in patterns.
pub fn run() -> Result<()> {
    let devices = list_devices();
    if devices.is_empty() {
        anyhow::bail!("No readable input devices, try running as root");
    }

    println!("Available devices:");
    for (n, device) in devices.iter().enumerate() {
        println!("    {}: {}", n, device);
    }
    println!("Select device:");
    print!(">> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let Some(device) = parse_selection(&line, &devices) else {
        println!("No device selected");
        return Ok(());
    };

    let mut source = EventSource::open(&DeviceSelector::Path(device.path.clone()))
        .with_context(|| format!("Failed to open {}", device.path.display()))?;

    let toggle = match XInputToggle::for_path(&device.path) {
        Ok(toggle) => Some(toggle),
        Err(e) => {
            warn!("Device stays enabled for X: {}", e);
            None
        }
    };

    if let Some(toggle) = toggle {
        toggle.set_state(false)?;
    }

    thread::spawn(move || {
        if let Err(e) = restore_on_signal(toggle) {
            error!("Failed to setup signal handlers: {}", e);
        }
    });

    println!("Now press some buttons, Ctrl+C to exit");

    let result = print_events(&mut source);

    if let Some(toggle) = toggle {
        toggle.restore()?;
    }

    result
}

fn print_events(source: &mut EventSource) -> Result<()> {
    let keyboard = EvdevTranslator::keyboard();
    let pointer = EvdevTranslator::pointer();

    loop {
        for event in source.next_batch()? {
            println!("{}", describe(&event, &keyboard, &pointer));
        }
    }
}

fn parse_selection<'a>(line: &str, devices: &'a [DeviceInfo]) -> Option<&'a DeviceInfo> {
    let index: usize = line.trim().parse().ok()?;
    devices.get(index)
}

fn describe(event: &KeyEvent, keyboard: &EvdevTranslator, pointer: &EvdevTranslator) -> String {
    let action = match event.transition {
        Transition::Press => "press",
        Transition::Release => "release",
        Transition::Repeat => "repeat",
    };

    let name = keyboard
        .key_name(event.code)
        .map(|name| format!("key <{}>", name))
        .or_else(|| {
            pointer
                .key_name(event.code)
                .map(|name| format!("button <{}>", name))
        })
        .unwrap_or_else(|| "unnamed".to_string());

    format!("{:<8}{:<24}code {}", action, name, event.code)
}

fn restore_on_signal(toggle: Option<XInputToggle>) -> Result<()> {
    let mut signals = Signals::new([SIGTERM, SIGINT])?;

    if signals.forever().next().is_some() {
        if let Some(toggle) = toggle {
            if let Err(e) = toggle.restore() {
                error!("Failed to restore device state: {}", e);
            }
        }
        std::process::exit(0);
    }

    Ok(())
}
