//! Input validation used by the pickers.
//!
//! None of these report errors: invalid input degrades to the previous value
//! or to a default, and the directory check only drives advisory feedback.

use std::path::{Path, MAIN_SEPARATOR};

use url::Url;

use crate::choices::ProxyChoice;

/// Largest accepted proxy port. The range mirrors the legacy integer field,
/// not the TCP port range.
pub const MAX_PROXY_PORT: i32 = i32::MAX - 1;

/// Parse a proxy port typed by the user.
///
/// Anything that is not an integer in `0..=MAX_PROXY_PORT` silently yields
/// `previous`, so a bad entry never corrupts the stored port.
pub fn parse_proxy_port(input: &str, previous: i32) -> i32 {
    match input.parse::<i64>() {
        Ok(port) if (0..=i64::from(MAX_PROXY_PORT)).contains(&port) => port as i32,
        _ => {
            log::debug!("Rejected proxy port {:?}, keeping {}", input, previous);
            previous
        }
    }
}

/// Ensure `path` has a leading root and exactly one trailing separator.
///
/// Idempotent: normalizing an already normalized path returns it unchanged.
pub fn add_necessary_slashes(path: &str) -> String {
    if path.is_empty() {
        return MAIN_SEPARATOR.to_string();
    }

    let mut normalized = String::with_capacity(path.len() + 2);
    if !Path::new(path).has_root() {
        normalized.push(MAIN_SEPARATOR);
    }
    normalized.push_str(path);
    if !normalized.ends_with(is_separator) {
        normalized.push(MAIN_SEPARATOR);
    }
    normalized
}

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Whether files could be written under `path`.
///
/// The path does not need to exist yet: the closest existing ancestor must be
/// a writable directory. Nothing is created on disk.
pub fn is_write_access_available(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }

    let mut candidate = Some(Path::new(path));
    while let Some(current) = candidate {
        if let Ok(metadata) = std::fs::metadata(current) {
            return metadata.is_dir() && !metadata.permissions().readonly();
        }
        candidate = current.parent().filter(|parent| !parent.as_os_str().is_empty());
    }
    false
}

/// True for `about:` pseudo-URLs such as `about:blank`
pub fn is_about_url(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| parsed.scheme() == "about")
        .unwrap_or(false)
}

/// Which proxy apps are installed on this device
pub trait ProxyAvailability {
    fn is_orbot_installed(&self) -> bool;
    fn is_i2p_installed(&self) -> bool;
}

/// Downgrade a proxy backend whose app is missing to [`ProxyChoice::None`]
pub fn sanitize_proxy_choice(
    choice: ProxyChoice,
    availability: &dyn ProxyAvailability,
) -> ProxyChoice {
    let available = match choice {
        ProxyChoice::Orbot => availability.is_orbot_installed(),
        ProxyChoice::I2p => availability.is_i2p_installed(),
        ProxyChoice::None | ProxyChoice::Manual => true,
    };

    if available {
        choice
    } else {
        log::info!("{} is not installed, disabling proxy", choice.display_name());
        ProxyChoice::None
    }
}
