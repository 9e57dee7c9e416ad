use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use fibsvc_core::error::{FibsvcError, Result};
use fibsvc_core::fib::MAX_INDEX;
use fibsvc_core::metrics::Rounding;

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "APP_HOST";
pub const ENV_MAX_RANDOM_NUMBER: &str = "APP_MAX_RANDOM_NUMBER";
pub const ENV_METRIC_DECIMAL_PLACES: &str = "APP_METRIC_DECIMAL_PLACES";

/// Upper limit for `metric_decimal_places`; beyond this `10^p` loses f64 precision.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Immutable service configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Exclusive upper bound for the `/payload` random draw.
    pub max_random_number: i64,
    /// `None` reports raw millisecond values.
    pub metric_decimal_places: Option<u32>,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(FibsvcError::Config(format!(
                "{ENV_PORT} must be between 1 and 65535"
            )));
        }
        // n is drawn from [0, max), and F(n) must fit in u64.
        if !(1..=MAX_INDEX + 1).contains(&self.max_random_number) {
            return Err(FibsvcError::Config(format!(
                "{ENV_MAX_RANDOM_NUMBER} must be between 1 and {}",
                MAX_INDEX + 1
            )));
        }
        if let Some(p) = self.metric_decimal_places {
            if p > MAX_DECIMAL_PLACES {
                return Err(FibsvcError::Config(format!(
                    "{ENV_METRIC_DECIMAL_PLACES} is a number of decimal places \
                     (0..={MAX_DECIMAL_PLACES}), not a rounding factor; got {p}"
                )));
            }
        }
        Ok(())
    }

    pub fn rounding(&self) -> Rounding {
        match self.metric_decimal_places {
            Some(p) => Rounding::decimal_places(p),
            None => Rounding::none(),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

pub(crate) fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}
