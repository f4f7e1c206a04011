//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{Config, DNS_PORT};
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for the check.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` on Unix), or the
/// nameservers given with `--nameserver`. Intermediate records are kept in
/// lookup results so that CNAMEs in the answer section stay visible.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the system configuration
/// cannot be read.
pub fn init_resolver(config: &Config) -> Result<TokioAsyncResolver, InitializationError> {
    let (resolver_config, mut opts) = if config.nameservers.is_empty() {
        hickory_resolver::system_conf::read_system_conf()
            .map_err(|e| InitializationError::DnsResolverError(e.to_string()))?
    } else {
        let group = NameServerConfigGroup::from_ips_clear(&config.nameservers, DNS_PORT, true);
        (
            ResolverConfig::from_parts(None, Vec::new(), group),
            ResolverOpts::default(),
        )
    };

    apply_check_options(&mut opts, config.timeout_seconds);
    log::debug!(
        "Resolver: {} nameserver(s), timeout {}s",
        resolver_config.name_servers().len(),
        config.timeout_seconds
    );

    Ok(TokioAsyncResolver::tokio(resolver_config, opts))
}

/// Options every check needs regardless of where the nameservers come from.
pub(crate) fn apply_check_options(opts: &mut ResolverOpts, timeout_seconds: u64) {
    opts.timeout = Duration::from_secs(timeout_seconds);
    // Try the name as given first; queries also mark it fully qualified
    opts.ndots = 0;
    opts.preserve_intermediates = true;
}
