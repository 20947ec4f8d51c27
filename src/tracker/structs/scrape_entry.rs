#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeEntry {
    pub complete: u32,
    pub incomplete: u32,
    /// Always `-1`: completed downloads are not tracked.
    pub downloaded: i32,
}
