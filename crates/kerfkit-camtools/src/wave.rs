//! Sinusoidal edges
//!
//! The compensated wave is a true parallel curve: each sample is pushed along
//! the analytic unit normal of the sine at that sample, not translated.

use crate::feature::{Feature, Motion, Pass};
use kerfkit_core::error::ensure_finite;
use kerfkit_core::{Error, Point, Result, WaveCode, WavePhase, DEFAULT_RESOLUTION};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveOptions {
    /// Samples per period.
    pub resolution: usize,
}

impl Default for WaveOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// `n` periods of a sine wave, `width` long and `height` peak to peak each
#[derive(Debug, Clone)]
pub struct Wave {
    code: WaveCode,
    periods: usize,
    width: f64,
    height: f64,
    kerf: f64,
    resolution: usize,
}

impl Wave {
    pub fn new(
        code: &str,
        periods: usize,
        width: f64,
        height: f64,
        kerf: f64,
        options: WaveOptions,
    ) -> Result<Self> {
        let code: WaveCode = code.parse()?;
        ensure_finite("width", width)?;
        ensure_finite("height", height)?;
        ensure_finite("kerf", kerf)?;
        if periods == 0 {
            return Err(Error::invalid_argument("periods", "must be at least 1"));
        }
        if width <= 0.0 {
            return Err(Error::invalid_argument(
                "width",
                format!("must be positive, got {}", width),
            ));
        }
        if options.resolution == 0 {
            return Err(Error::invalid_argument("resolution", "must be at least 1"));
        }
        Ok(Self {
            code,
            periods,
            width,
            height,
            kerf,
            resolution: options.resolution,
        })
    }

    /// Shape value and its derivative with respect to the phase angle.
    fn shape(&self, t: f64) -> (f64, f64) {
        let (s, c) = t.sin_cos();
        match self.code.phase {
            WavePhase::Rising => (s, c),
            WavePhase::Falling => (-s, -c),
            WavePhase::Crest => (c, -s),
            WavePhase::Trough => (-c, s),
        }
    }

    pub fn profile(&self, kerf: f64) -> Vec<Point> {
        let amplitude = self.height / 2.0;
        let res = self.resolution;
        let step = self.width / res as f64;
        let slope_scale = amplitude * TAU / self.width;

        (0..=self.periods * res)
            .map(|i| {
                let (period, sample) = (i / res, i % res);
                let x = period as f64 * self.width + sample as f64 * step;
                let (value, derivative) = self.shape(TAU * sample as f64 / res as f64);
                let point = Point::new(x, amplitude * value);
                if kerf == 0.0 {
                    return point;
                }
                let slope = slope_scale * derivative;
                let norm = (1.0 + slope * slope).sqrt();
                point.offset(-kerf * slope / norm, kerf / norm)
            })
            .collect()
    }
}

impl Feature for Wave {
    fn name(&self) -> &'static str {
        "wave"
    }

    fn motion(&self) -> Motion {
        Motion::Shifting
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        let local = self.profile(pass.kerf(self.kerf));
        trace!(
            "wave {:?}: heading {} -> {} points",
            pass,
            self.code.orientation.direction.heading(),
            local.len()
        );
        Ok(self.code.orientation.apply(local))
    }
}
