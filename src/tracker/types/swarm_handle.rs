use std::sync::Arc;
use parking_lot::RwLock;
use crate::tracker::structs::swarm::Swarm;

pub type SwarmHandle = Arc<RwLock<Swarm>>;
