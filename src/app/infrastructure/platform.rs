use std::thread;
use std::time::Duration;

use fltk::app::Sender;

use crate::app::domain::messages::Message;

/// How often the OS color scheme is re-read while the window is open.
const SCHEME_POLL_INTERVAL: Duration = Duration::from_secs(5);

pub fn detect_system_dark_mode() -> bool {
    // Windows: AppsUseLightTheme is 0 in dark mode
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
            && let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme")
        {
            return value == 0;
        }
    }

    // Linux: GNOME exposes both a legacy theme name and the newer color-scheme key
    #[cfg(target_os = "linux")]
    {
        if let Some(scheme) = gsettings("color-scheme")
            && scheme.contains("prefer-dark")
        {
            return true;
        }
        if let Some(theme) = gsettings("gtk-theme")
            && theme.to_lowercase().contains("dark")
        {
            return true;
        }
    }

    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            && output.status.success()
        {
            let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
            if style.contains("dark") {
                return true;
            }
        }
    }

    false
}

#[cfg(target_os = "linux")]
fn gsettings(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Poll the OS color scheme on a background thread and post
/// `Message::SystemSchemeChanged` whenever it flips.
pub fn watch_system_scheme(sender: Sender<Message>, initial_dark: bool) {
    let spawned = thread::Builder::new()
        .name("scheme-watcher".to_string())
        .spawn(move || {
            let mut last = initial_dark;
            loop {
                thread::sleep(SCHEME_POLL_INTERVAL);
                let now = detect_system_dark_mode();
                if now != last {
                    tracing::debug!(dark = now, "System color scheme changed");
                    last = now;
                    sender.send(Message::SystemSchemeChanged(now));
                }
            }
        });
    if let Err(e) = spawned {
        tracing::warn!("Failed to start system scheme watcher: {}", e);
    }
}
