use image::Rgba;

/// Parses the color forms the configuration carries into pixels.
///
/// Bare hex codes arrive `#`-prefixed from validation (`#RGB`, `#RGBA`,
/// `#RRGGBB`, `#RRGGBBAA`); `rgb(r, g, b)` and `rgba(r, g, b, a)` forms are
/// parsed directly, with alpha as a 0..1 float. Anything else is `None`,
/// which callers render as fully transparent.
pub fn parse_color(code: &str) -> Option<Rgba<u8>> {
    let code = code.trim();
    if let Some(hex) = code.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = call_args(code, "rgba") {
        return parse_channels(&args, true);
    }
    if let Some(args) = call_args(code, "rgb") {
        return parse_channels(&args, false);
    }
    None
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.is_ascii() {
        return None;
    }
    let wide = |i: usize| u8::from_str_radix(hex.get(i * 2..i * 2 + 2)?, 16).ok();
    let narrow = |i: usize| {
        let v = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
        Some(v << 4 | v)
    };

    match hex.len() {
        3 => Some(Rgba([narrow(0)?, narrow(1)?, narrow(2)?, 255])),
        4 => Some(Rgba([narrow(0)?, narrow(1)?, narrow(2)?, narrow(3)?])),
        6 => Some(Rgba([wide(0)?, wide(1)?, wide(2)?, 255])),
        8 => Some(Rgba([wide(0)?, wide(1)?, wide(2)?, wide(3)?])),
        _ => None,
    }
}

fn call_args(code: &str, name: &str) -> Option<Vec<String>> {
    let rest = code.strip_prefix(name)?.trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split(',').map(|p| p.trim().to_string()).collect())
}

fn parse_channels(args: &[String], with_alpha: bool) -> Option<Rgba<u8>> {
    let expected = if with_alpha { 4 } else { 3 };
    if args.len() != expected {
        return None;
    }
    let channel = |s: &str| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.clamp(0.0, 255.0).round() as u8)
    };
    let alpha = if with_alpha {
        args[3]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)?
    } else {
        255
    };
    Some(Rgba([
        channel(&args[0])?,
        channel(&args[1])?,
        channel(&args[2])?,
        alpha,
    ]))
}
