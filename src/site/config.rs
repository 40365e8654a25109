use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::{Breakpoint, Fps, MOBILE_BREAKPOINT_PX, Viewport},
    error::{SiteError, SiteResult},
};

/// Environment variable overriding [`SiteConfig::base_path`].
pub const BASE_PATH_ENV: &str = "VOIDBLOSSOM_BASE_PATH";

/// Site-wide settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for static assets such as `hero.png`.
    pub base_path: String,
    /// Viewports narrower than this are mobile.
    pub mobile_breakpoint_px: u32,
    /// Frame rate hosts use to step the clock.
    pub fps: Fps,
    pub brand: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            fps: Fps::default(),
            brand: "VOIDBLOSSOM".to_string(),
        }
    }
}

impl SiteConfig {
    /// Defaults plus `VOIDBLOSSOM_BASE_PATH`, if set and non-empty.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(base) = std::env::var(BASE_PATH_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            cfg.base_path = base;
        }
        cfg
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> SiteResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SiteError::validation(format!("parse site config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SiteError::validation(format!("open site config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.mobile_breakpoint_px == 0 {
            return Err(SiteError::validation("mobile breakpoint must be > 0"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        Ok(())
    }

    pub fn breakpoint(&self, viewport: Viewport) -> Breakpoint {
        viewport.breakpoint_at(self.mobile_breakpoint_px)
    }

    pub fn is_mobile(&self, viewport: Viewport) -> bool {
        self.breakpoint(viewport) == Breakpoint::Mobile
    }

    /// Join `name` onto the base path with exactly one slash.
    pub fn asset_url(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/config.rs"]
mod tests;
