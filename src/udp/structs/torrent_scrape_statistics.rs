#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct TorrentScrapeStatistics {
    pub seeders: i32,
    pub completed: i32,
    pub leechers: i32,
}
