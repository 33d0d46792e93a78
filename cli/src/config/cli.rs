use clap::{ArgAction, Args, Parser, Subcommand};
use ordheap::HeapKind;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    #[command(flatten)]
    pub common: CommandLineConfig,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Pushes 1..=count into a min heap and a max heap, then pops both side by side
    Demo(DemoConfig),
    /// Builds a heap from the given values and prints them in pop order
    Drain(DrainConfig),
}

#[derive(Args, Debug, Clone)]
pub struct CommandLineConfig {
    ///  Log level
    #[arg(long, global = true, default_value_t = String::from("info"))]
    pub log_level: String,

    /// Emit logs as json instead of pretty printed
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub json_logs: bool,
}

impl Default for CommandLineConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            json_logs: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DemoConfig {
    #[arg(long, default_value_t = 4)]
    pub count: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { count: 4 }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DrainConfig {
    /// Which end of the ordering comes out first
    #[arg(long, value_enum, default_value_t = HeapKind::Min)]
    pub order: HeapKind,

    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demo_defaults() {
        let cli = Cli::try_parse_from(["ordheap-cli", "demo"]).unwrap();
        let Commands::Demo(config) = cli.command else {
            panic!("expected demo command");
        };
        assert_eq!(config.count, 4);
        assert_eq!(cli.common.log_level, "info");
        assert!(!cli.common.json_logs);
    }

    #[test]
    fn test_drain_parses_order_and_negative_values() {
        let cli = Cli::try_parse_from([
            "ordheap-cli",
            "drain",
            "--order",
            "max",
            "--log-level",
            "debug",
            "5",
            "-3",
            "8",
        ])
        .unwrap();
        let Commands::Drain(config) = cli.command else {
            panic!("expected drain command");
        };
        assert_eq!(config.order, HeapKind::Max);
        assert_eq!(config.values, vec![5, -3, 8]);
        assert_eq!(cli.common.log_level, "debug");
    }

    #[test]
    fn test_drain_requires_values() {
        assert!(Cli::try_parse_from(["ordheap-cli", "drain"]).is_err());
        assert!(Cli::try_parse_from(["ordheap-cli", "drain", "--order", "median", "1"]).is_err());
    }
}
