//! Runtime configuration, read from environment variables.
//!
//! | Variable           | Default                          |
//! |--------------------|----------------------------------|
//! | `DASHBOARD_LAYOUT` | `single_page`                    |
//! | `ASSET_DIR`        | `images` (single page) or `.`    |
//! | `PORT`             | `3000`                           |
//! | `BIND_ADDR`        | `0.0.0.0`                        |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::{DashboardError, Result};
use crate::navigation::Layout;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub layout: Layout,
    pub asset_dir: PathBuf,
    pub port: u16,
    pub bind_addr: IpAddr,
}

impl DashboardConfig {
    /// Defaults for a layout: its conventional asset directory, port 3000 on all interfaces.
    pub fn for_layout(layout: Layout) -> Self {
        Self {
            layout,
            asset_dir: PathBuf::from(layout.default_asset_dir()),
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let layout = match lookup("DASHBOARD_LAYOUT") {
            Some(v) => v.parse::<Layout>()?,
            None => Layout::default(),
        };

        let mut config = Self::for_layout(layout);

        if let Some(dir) = lookup("ASSET_DIR").filter(|d| !d.trim().is_empty()) {
            config.asset_dir = PathBuf::from(dir);
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| DashboardError::Config(format!("invalid PORT: {}", port)))?;
        }

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|_| DashboardError::Config(format!("invalid BIND_ADDR: {}", addr)))?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::for_layout(Layout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.layout, Layout::SinglePage);
        assert_eq!(config.asset_dir, PathBuf::from("images"));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_sidebar_layout_uses_working_dir() {
        let config = DashboardConfig::from_lookup(lookup_from(&[("DASHBOARD_LAYOUT", "sidebar")])).unwrap();
        assert_eq!(config.layout, Layout::Sidebar);
        assert_eq!(config.asset_dir, PathBuf::from("."));
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("ASSET_DIR", "/srv/dashboard/img"),
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
        ]))
        .unwrap();
        assert_eq!(config.asset_dir, PathBuf::from("/srv/dashboard/img"));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            DashboardConfig::from_lookup(lookup_from(&[("PORT", "eighty")])),
            Err(DashboardError::Config(_))
        ));
        assert!(matches!(
            DashboardConfig::from_lookup(lookup_from(&[("DASHBOARD_LAYOUT", "tabs")])),
            Err(DashboardError::UnknownLayout(_))
        ));
        assert!(matches!(
            DashboardConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost:1")])),
            Err(DashboardError::Config(_))
        ));
    }
}
