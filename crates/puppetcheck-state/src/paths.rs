use std::path::PathBuf;

/// Where the Puppet agent keeps its state on this platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultPaths {
    pub summary_file: PathBuf,
    pub report_file: PathBuf,
    pub agent_disabled_file: PathBuf,
    pub puppet_config_file: PathBuf,
}

impl DefaultPaths {
    pub fn for_platform() -> Self {
        if cfg!(windows) {
            Self::under("C:/ProgramData/PuppetLabs", "C:/ProgramData/PuppetLabs/puppet/etc")
        } else {
            Self::under("/opt/puppetlabs", "/etc/puppetlabs/puppet")
        }
    }

    pub fn under(data_root: &str, conf_dir: &str) -> Self {
        let data = PathBuf::from(data_root).join("puppet");
        Self {
            summary_file: data.join("public").join("last_run_summary.yaml"),
            report_file: data.join("cache").join("state").join("last_run_report.yaml"),
            agent_disabled_file: data.join("cache").join("state").join("agent_disabled.lock"),
            puppet_config_file: PathBuf::from(conf_dir).join("puppet.conf"),
        }
    }
}
