#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimStats {
    pub peers: usize,
    pub baseline_providers: usize,
    pub hashes: usize,
}
