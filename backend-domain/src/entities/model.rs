// Runtime configuration carried in application state

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    /// Most recent entries kept in the visit log; older ones are evicted.
    pub log_retention: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3180".to_string(),
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 15,
            log_retention: 1000,
        }
    }
}
