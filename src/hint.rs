// Focus hint text. Kept free of web-sys so it can be tested on the host.

/// Human-readable label for a `KeyboardEvent.code`.
#[inline]
pub fn key_label(code: &str) -> &str {
    if let Some(rest) = code.strip_prefix("Key") {
        return rest;
    }
    if let Some(rest) = code.strip_prefix("Digit") {
        return rest;
    }
    match code {
        "ArrowUp" => "↑",
        "ArrowDown" => "↓",
        "ArrowLeft" => "←",
        "ArrowRight" => "→",
        _ => code,
    }
}

/// Text shown under the crosshair; empty when no door is focused.
pub fn hint_text(focused: bool, hold_code: Option<&str>) -> String {
    if !focused {
        return String::new();
    }
    match hold_code {
        Some(code) => format!("Hold {} to open the door", key_label(code)),
        None => "Hold to open the door".to_string(),
    }
}
