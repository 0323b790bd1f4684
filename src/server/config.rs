use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_MIN_DIMENSION: u32 = 64;
pub const DEFAULT_MAX_DIMENSION: u32 = 8192;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Origin used in share links, e.g. `https://weeks.example.com`. When unset the request's
    /// `Host` header is used.
    pub public_origin: Option<String>,
    pub min_dimension: u32,
    pub max_dimension: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            public_origin: None,
            min_dimension: DEFAULT_MIN_DIMENSION,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl ServerConfig {
    /// Check one image dimension against the configured bounds.
    pub fn check_dimension(&self, name: &str, value: u32) -> Result<u32, String> {
        if (self.min_dimension..=self.max_dimension).contains(&value) {
            Ok(value)
        } else {
            Err(self.dimension_out_of_range(name))
        }
    }

    pub fn dimension_out_of_range(&self, name: &str) -> String {
        format!(
            "{name} must be between {} and {} pixels",
            self.min_dimension, self.max_dimension
        )
    }

    /// Origin for share links: configured value, else `http://<host>`.
    pub fn origin_for(&self, host: Option<&str>) -> String {
        if let Some(origin) = &self.public_origin {
            return origin.trim_end_matches('/').to_owned();
        }
        match host {
            Some(h) if !h.is_empty() => format!("http://{h}"),
            _ => format!("http://{}", self.bind),
        }
    }
}

/// Pick the bind address: explicit value, then `PORT` on all interfaces, then the default.
pub fn resolve_bind(explicit: Option<SocketAddr>, port: Option<&str>) -> anyhow::Result<SocketAddr> {
    if let Some(addr) = explicit {
        return Ok(addr);
    }
    if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
        let port: u16 = port
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a number between 0 and 65535, got \"{port}\""))?;
        return Ok(SocketAddr::from(([0, 0, 0, 0], port)));
    }
    Ok(DEFAULT_BIND.parse()?)
}
