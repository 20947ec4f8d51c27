use std::sync::Arc;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::tracker::structs::tracker_context::TrackerContext;

#[derive(Debug)]
pub struct HttpServiceData {
    pub ctx: Arc<TrackerContext>,
    pub http_trackers_config: Arc<HttpTrackersConfig>
}
