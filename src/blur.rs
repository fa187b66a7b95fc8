use crate::error::{TessellaError, TessellaResult};

/// Separable Gaussian blur over a single-channel coverage mask, used for
/// drop shadows. Sampling clamps at the edges, so a constant mask stays
/// constant; `radius = 0` is the identity.
pub fn blur_mask(src: &[u8], width: u32, height: u32, radius: u32) -> TessellaResult<Vec<u8>> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| TessellaError::compositing("blur mask size overflow"))?;
    if src.len() != expected {
        return Err(TessellaError::compositing(
            "blur_mask expects src matching width*height",
        ));
    }
    if radius == 0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel(radius);
    let mut tmp = vec![0u8; expected];
    let mut out = vec![0u8; expected];
    blur_pass(src, &mut tmp, width, height, &kernel, true);
    blur_pass(&tmp, &mut out, width, height, &kernel, false);
    Ok(out)
}

fn gaussian_kernel(radius: u32) -> Vec<f32> {
    let r = radius as i32;
    let sigma = (radius as f32 / 2.0).max(0.5);
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f32> = (-r..=r)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

fn blur_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, kernel: &[f32], horizontal: bool) {
    let radius = (kernel.len() / 2) as i64;
    let w = width as i64;
    let h = height as i64;

    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let offset = k as i64 - radius;
                let (sx, sy) = if horizontal {
                    ((x + offset).clamp(0, w - 1), y)
                } else {
                    (x, (y + offset).clamp(0, h - 1))
                };
                acc += weight * f32::from(src[(sy * w + sx) as usize]);
            }
            dst[(y * w + x) as usize] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
}
