//! `[logo]` configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Logo display parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "logo")]
pub struct LogoConfig {
    /// Render the logo at all.
    pub enable: bool,

    /// Use the vector (SVG) asset instead of the raster one.
    pub svg: bool,

    /// Display width in pixels. Must be greater than zero.
    pub width: u32,

    /// Display height in pixels. Must be greater than zero.
    pub height: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enable: true,
            svg: true,
            width: 45,
            height: 45,
        }
    }
}

impl LogoConfig {
    /// Validate logo dimensions.
    ///
    /// Dimensions are only checked when the logo is enabled; a disabled
    /// logo's dimensions are never read.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.width == 0 {
            diag.error(Self::FIELDS.width, "must be greater than zero");
        }
        if self.height == 0 {
            diag.error(Self::FIELDS.height, "must be greater than zero");
        }
    }
}
