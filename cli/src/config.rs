use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use maxmin_heap::{HeapConfig, Order};
use std::sync::OnceLock;

static DEFAULT_CONFIG: OnceLock<TopConfig> = OnceLock::new();

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Streams `<label> <score>` lines through a bounded heap and prints the retained items
    Top(TopConfig),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    /// Keep the lowest scores
    Lt,
    /// Keep the highest scores
    Gt,
}

impl From<OrderArg> for Order {
    fn from(input: OrderArg) -> Self {
        match input {
            OrderArg::Lt => Order::Lt,
            OrderArg::Gt => Order::Gt,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `<label>\t<score>` line per item
    Text,
    /// A JSON array of `{"label", "score"}` objects
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct TopConfig {
    /// Number of items to retain
    /// 0 keeps every item
    #[arg(long, default_value_t =
    DEFAULT_CONFIG.get_or_init(TopConfig::default).capacity)]
    pub capacity: usize,

    /// Ordering applied to scores, `lt` retains the lowest and `gt` the highest
    #[arg(long, value_enum, default_value_t =
    DEFAULT_CONFIG.get_or_init(TopConfig::default).order)]
    pub order: OrderArg,

    /// Number of threads concurrently inserting into the heap
    #[arg(long, value_parser = validate_producers, default_value_t =
    DEFAULT_CONFIG.get_or_init(TopConfig::default).producers)]
    pub producers: usize,

    /// File to read items from, stdin when omitted
    #[arg(long)]
    pub input: Option<std::path::PathBuf>,

    #[arg(long, value_enum, default_value_t =
    DEFAULT_CONFIG.get_or_init(TopConfig::default).output)]
    pub output: OutputFormat,

    ///  Log level
    #[arg(long, default_value_t =
    DEFAULT_CONFIG.get_or_init(TopConfig::default).log_level.clone())]
    pub log_level: String,

    /// Emit logs as JSON objects instead of pretty text
    #[arg(long, action=ArgAction::SetTrue)]
    pub json_logs: bool,
}

impl Default for TopConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            order: OrderArg::Lt,
            producers: 4,
            input: None,
            output: OutputFormat::Text,
            log_level: String::from("warn"),
            json_logs: false,
        }
    }
}

impl TopConfig {
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn order(mut self, order: OrderArg) -> Self {
        self.order = order;
        self
    }

    pub fn producers(mut self, producers: usize) -> Self {
        self.producers = producers.max(1);
        self
    }

    pub fn input(mut self, location: std::path::PathBuf) -> Self {
        self.input = Some(location);
        self
    }

    pub fn heap_config(&self) -> HeapConfig {
        HeapConfig::unbounded().capacity(self.capacity)
    }
}

fn validate_producers(val: &str) -> Result<usize, String> {
    let producers: usize = val.parse::<usize>().map_err(|err| err.to_string())?;

    if producers == 0 {
        Err("At least one producer thread is required".to_string())
    } else {
        Ok(producers)
    }
}
