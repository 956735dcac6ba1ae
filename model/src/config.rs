use time::Duration;

pub struct Config {
    pub scheduling: ConfigScheduling,
    pub weather: ConfigWeather,
}

pub struct ConfigScheduling {
    /// minimum number of distinct metocean years the normalizer must provide
    pub minimum_metocean_years: usize,
    /// prefer the first feasible start over the minimum waiting time
    pub optimise_delay: bool,
    /// discard results whose start delay exceeds this cap
    pub maximum_start_delay: Option<Duration>,
}

pub struct ConfigWeather {
    /// absolute per-condition tolerance for window-cache matching
    pub olc_match_tolerance: f64,
    /// windows shorter than this are reported (but kept)
    pub short_window_threshold: Duration,
    /// delays or waiting times longer than this are reported
    pub long_wait_threshold: Duration,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            scheduling: ConfigScheduling {
                minimum_metocean_years: 3,
                optimise_delay: false,
                maximum_start_delay: None,
            },
            weather: ConfigWeather {
                olc_match_tolerance: 0.1,
                short_window_threshold: Duration::from_hours(8),
                long_wait_threshold: Duration::from_hours(720),
            },
        }
    }
}
