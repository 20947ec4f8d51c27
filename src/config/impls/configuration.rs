use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::backup_config::BackupConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;

pub const CONFIG_ENV: &str = "SWARM_TRACKER_CONFIG";
pub const CONFIG_DEFAULT_PATH: &str = "config.toml";

impl Configuration {
    pub fn init() -> Configuration {
        let threads = available_parallelism().map(|n| n.get()).unwrap_or(4);
        Configuration {
            log_level: String::from("info"),
            tracker_config: TrackerConfig {
                announce_interval: 1800,
                announce_fuzz: 300,
                numwant_default: 50,
                numwant_limit: 100,
                peers_timeout: 2700,
                peers_cleanup_interval: 300,
                min_leechers: 2,
                fast_mode: false,
                baseline_providers: vec![],
            },
            udp_server: vec![
                UdpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    udp_threads: threads,
                    worker_threads: threads,
                    queue_size: 65536,
                    receive_buffer_size: 4_194_304,
                    send_buffer_size: 4_194_304,
                    reuse_address: true,
                    connection_id_lifetime: 120,
                    use_payload_ip: false,
                }
            ],
            http_server: vec![
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    threads: threads as u64,
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    real_ip: String::new(),
                }
            ],
            backup: BackupConfig {
                enabled: false,
                path: String::from("swarm-tracker.snapshot"),
                interval: 3600,
                save_on_shutdown: true,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    /// Resolves the config path: explicit argument, then the environment, then the default.
    pub fn config_path(explicit: Option<String>) -> String {
        explicit
            .or_else(|| std::env::var(CONFIG_ENV).ok().filter(|path| !path.is_empty()))
            .unwrap_or_else(|| String::from(CONFIG_DEFAULT_PATH))
    }

    pub fn load_from_file(path: Option<String>, create: bool) -> Result<Configuration, CustomError> {
        let path = Self::config_path(path);
        let config = match Configuration::load_file(&path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt at {path}.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create config file automatically"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init()).map_err(|e| {
                    CustomError::new(&format!("could not encode default configuration: {e}"))
                })?;
                return match Configuration::save_file(&path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and restart, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let tracker = &self.tracker_config;
        if tracker.numwant_limit < 1 {
            return Err(ConfigurationError::InvalidValue(String::from("numwant_limit must be at least 1")));
        }
        if tracker.numwant_default > tracker.numwant_limit {
            return Err(ConfigurationError::InvalidValue(String::from("numwant_default exceeds numwant_limit")));
        }
        if tracker.peers_timeout == 0 {
            return Err(ConfigurationError::InvalidValue(String::from("peers_timeout must be positive")));
        }
        if tracker.peers_cleanup_interval == 0 {
            return Err(ConfigurationError::InvalidValue(String::from("peers_cleanup_interval must be positive")));
        }
        for provider in &tracker.baseline_providers {
            Self::validate_address("baseline provider", provider)?;
        }
        let mut connection_id_lifetime = None;
        for udp in self.udp_server.iter().filter(|udp| udp.enabled) {
            Self::validate_address("[UDP] bind_address", &udp.bind_address)?;
            if udp.connection_id_lifetime == 0 {
                return Err(ConfigurationError::InvalidValue(String::from("[UDP] connection_id_lifetime must be positive")));
            }
            // one connection id secret and bucket size serves every listener
            if *connection_id_lifetime.get_or_insert(udp.connection_id_lifetime) != udp.connection_id_lifetime {
                return Err(ConfigurationError::InvalidValue(String::from("[UDP] connection_id_lifetime must be the same on every listener")));
            }
        }
        for http in self.http_server.iter().filter(|http| http.enabled) {
            Self::validate_address("[HTTP] bind_address", &http.bind_address)?;
        }
        if self.backup.enabled && self.backup.path.is_empty() {
            return Err(ConfigurationError::InvalidValue(String::from("[BACKUP] path is empty")));
        }
        Ok(())
    }

    pub fn validate_address(name: &str, value: &str) -> Result<SocketAddr, ConfigurationError>
    {
        value.parse::<SocketAddr>().map_err(|_| {
            ConfigurationError::InvalidValue(format!("{name} \"{value}\" is not an ip:port pair"))
        })
    }
}
