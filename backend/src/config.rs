//! Where the static host listens and whether it opens a browser tab.

pub struct ServerConfig {
    pub host: &'static str,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1",
            port: 8080,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_is_local() {
        assert_eq!(ServerConfig::default().url(), "http://127.0.0.1:8080");
    }
}
