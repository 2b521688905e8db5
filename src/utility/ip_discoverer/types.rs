/// Resolves the public IP address by asking IP echo providers in round-robin order.
///
/// The rotation cursor is plain sequential state: `discover` takes `&mut self`
/// and the type makes no guarantees for concurrent use. Callers that need to
/// share one discoverer across tasks must wrap it in a mutex.
#[derive(Debug)]
pub struct IpDiscoverer {
    /// Provider URLs in the order they were supplied, never empty.
    pub(super) providers: Vec<String>,
    /// Index of the next provider to query, always `< providers.len()`.
    pub(super) index: usize,
    pub(super) client: reqwest::Client,
}
