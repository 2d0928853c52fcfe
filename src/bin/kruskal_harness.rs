use clap::Parser;
use kruskal::harness::{self, HarnessConfig};

/// Builds minimum spanning trees of synthetic graphs and reports each tree
/// with the time its construction took.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Vertex counts to run, one test case each
    #[arg(short, long, value_delimiter = ',', default_values_t = HarnessConfig::default().vertex_counts)]
    vertices: Vec<usize>,

    /// Each graph gets `vertices + edges_offset` edges (or every pair, if fewer)
    #[arg(short, long, default_value_t = HarnessConfig::default().edges_offset)]
    edges_offset: usize,

    /// Edge (i, j) weighs (i + j) * weight_factor
    #[arg(short, long, default_value_t = HarnessConfig::default().weight_factor)]
    weight_factor: i64,
}

impl Args {
    fn into_config(self) -> HarnessConfig {
        HarnessConfig {
            vertex_counts: self.vertices,
            edges_offset: self.edges_offset,
            weight_factor: self.weight_factor,
        }
    }
}

/// Routes `log` records to stderr, filtered by `RUST_LOG`.
fn init_logging() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_default_env().try_init()
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("warning: logging disabled: {}", e);
    }

    let config = Args::parse().into_config();
    log::debug!("harness config: {:?}", config);

    match harness::run(&config) {
        Ok(reports) => {
            for report in reports {
                println!("{}", report);
                println!();
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_is_installed() {
        assert!(init_logging().is_ok());
        // A backend is now registered; a second one is refused.
        assert!(init_logging().is_err());
        assert_ne!(log::max_level(), log::LevelFilter::Off);
    }

    #[test]
    fn test_default_args_match_default_config() {
        let config = Args::try_parse_from(["kruskal_harness"])
            .unwrap()
            .into_config();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn test_args_override_config() {
        let config = Args::try_parse_from(["kruskal_harness", "-v", "4,50", "-e", "2", "-w", "7"])
            .unwrap()
            .into_config();
        assert_eq!(config.vertex_counts, vec![4, 50]);
        assert_eq!(config.edges_offset, 2);
        assert_eq!(config.weight_factor, 7);
    }
}
