//! Interactive terminal menu over [`lexgraphs`].
//!
//! Builds a single named graph from keyboard input and renders the matrix
//! algorithms as aligned text tables. Runs until `q` or end of input.
//!
//! ```bash
//! # Undirected session with per-operation debug output
//! lexgraphs --mode undirected --log-level debug
//! ```

use std::{
    fmt::Display,
    io::{self, Write},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use itertools::Itertools;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use lexgraphs::{
    algo::{AllPairsShortestPaths, MinimumSpanningTree, SingleSourceShortestPaths},
    io::TableWriter,
    prelude::*,
};

/// Terminal menu for directed and undirected graphs
#[derive(Parser)]
#[command(name = "lexgraphs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph mode for the session
    #[arg(short, long, value_enum, default_value = "directed")]
    mode: Mode,

    /// Minimum verbosity for logging
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

/// Edge interpretation for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every edge stands for itself
    Directed,
    /// Edge insertions and deletions apply to both directions
    Undirected,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Directed => write!(f, "directed"),
            Mode::Undirected => write!(f, "undirected"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn setup_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.directive()))
        .with_target(false)
        .without_time()
        .init();
}

const MENU_WIDTH: usize = 32;

/// Printable menu options. Blank entries separate the option groups, and
/// single characters in front of a colon are hotkeys.
const MENU_OPTIONS: [&str; 17] = [
    "m: menu",
    "v: view",
    "q: quit",
    "",
    "a: add node",
    "b: add edge",
    "",
    "d: delete node",
    "r: delete edge",
    "",
    "f: find node",
    "g: find edge",
    "",
    "W: Warshall",
    "F: Floyd",
    "D: Dijkstra",
    "P: Prim",
];

/// Keyed menu over a single graph, driven line by line from standard input.
struct Menu {
    mode: Mode,
    graph: AdjacencyList,
}

impl Menu {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            graph: AdjacencyList::new(),
        }
    }

    /// Dispatches menu choices until `q` or end of input.
    fn run(&mut self) -> io::Result<ExitCode> {
        self.display_menu();
        loop {
            let Some(line) = self.read_line("menu")? else {
                break;
            };
            let Some(choice) = self.parse_choice(&line) else {
                continue;
            };

            match choice {
                'm' => self.display_menu(),
                'v' => self.view()?,
                'a' => self.add_node()?,
                'b' => self.add_edge()?,
                'd' => self.delete_node()?,
                'r' => self.delete_edge()?,
                'f' => self.find_node()?,
                'g' => self.find_edge()?,
                'D' => self.dijkstra()?,
                'F' => self.floyd()?,
                'W' => self.warshall()?,
                'P' => self.prim()?,
                'q' => break,
                other => {
                    error!("menu case '{other}' is missing, aborting");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Ok(ExitCode::SUCCESS)
    }

    fn display_menu(&self) {
        println!("{}", "*".repeat(MENU_WIDTH));
        for option in MENU_OPTIONS {
            println!("\t{option}");
        }
        println!("{}", "~".repeat(MENU_WIDTH));
    }

    fn display_error(&self, err: impl Display) {
        println!("error> {err}");
    }

    /// Single characters in front of the colons of [`MENU_OPTIONS`].
    fn hotkeys() -> impl Iterator<Item = char> {
        MENU_OPTIONS.iter().filter_map(|option| {
            let (key, _) = option.split_once(':')?;
            key.chars().exactly_one().ok()
        })
    }

    /// Checks one input line against the menu hotkeys.
    fn parse_choice(&self, line: &str) -> Option<char> {
        let Ok(choice) = line.chars().exactly_one() else {
            self.display_error("invalid input (not a single character)");
            return None;
        };
        if !Self::hotkeys().contains(&choice) {
            self.display_error("invalid choice");
            return None;
        }
        Some(choice)
    }

    /// Prompts with `message` and reads one line. `None` stands for end
    /// of input.
    fn read_line(&self, message: &str) -> io::Result<Option<String>> {
        print!("{message}> ");
        io::stdout().flush()?;

        let mut buf = String::new();
        if io::stdin().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Prompts for a single-character name. A rejected line is reported and
    /// folds into `None` with end of input, falling back to the menu.
    fn read_char(&self, message: &str) -> io::Result<Option<NodeName>> {
        let Some(line) = self.read_line(message)? else {
            return Ok(None);
        };
        if line.chars().exactly_one().is_err() {
            self.display_error("invalid input (not a single character)");
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompts for a node name that is a member (`member` set) or still
    /// free (`member` unset).
    fn read_node(&self, message: &str, member: bool) -> io::Result<Option<NodeName>> {
        let Some(name) = self.read_char(message)? else {
            return Ok(None);
        };
        if self.graph.find_node(&name) != member {
            let suffix = if member { "non-" } else { "" };
            self.display_error(format!("node '{name}' is a {suffix}member"));
            return Ok(None);
        }
        Ok(Some(name))
    }

    /// Prompts for an integer weight in `[low,high]`.
    fn read_weight(&self, message: &str, low: Weight, high: Weight) -> io::Result<Option<Weight>> {
        let Some(line) = self.read_line(message)? else {
            return Ok(None);
        };
        let Ok(weight) = line.parse::<Weight>() else {
            self.display_error("invalid input (not an integer)");
            return Ok(None);
        };
        if !(low..=high).contains(&weight) {
            self.display_error(format!("invalid input (weight must be in [{low},{high}])"));
            return Ok(None);
        }
        Ok(Some(weight))
    }

    /// Number of edges as reported to the user. Undirected graphs count
    /// every mirrored pair once.
    fn edge_cardinality(&self) -> NumEdges {
        let count = self.graph.edge_count();
        match self.mode {
            Mode::Directed => count,
            Mode::Undirected => {
                let loops = self.graph.self_loop_count();
                (count - loops) / 2 + loops
            }
        }
    }

    fn view(&self) -> io::Result<()> {
        if self.graph.is_empty() {
            println!("\n\tGraph is empty\n");
            return Ok(());
        }

        let names = self.graph.node_names().collect_vec();
        debug!("all nodes: {names:?}");
        debug!("all edges: {:?}", self.graph.edge_list().collect_vec());

        let mut table = TableWriter::new(io::stdout().lock());
        table.write_weight_matrix(&names, &self.graph.to_matrix())?;

        let mut out = table.into_inner();
        writeln!(out, "node cardinality: {}", self.graph.node_count())?;
        writeln!(out, "edge cardinality: {}", self.edge_cardinality())?;
        writeln!(out)?;
        Ok(())
    }

    fn add_node(&mut self) -> io::Result<()> {
        let Some(name) = self.read_node("Enter node name", false)? else {
            return Ok(());
        };
        self.graph.add_node(&name, None);
        Ok(())
    }

    /// Deletes a node after dropping its incoming edges, in both modes.
    fn delete_node(&mut self) -> io::Result<()> {
        let Some(name) = self.read_node("Enter node name", true)? else {
            return Ok(());
        };
        self.graph.delete_edges_to(&name);
        self.graph.delete_node(&name);
        Ok(())
    }

    fn add_edge(&mut self) -> io::Result<()> {
        let Some(src) = self.read_node("Enter from node", true)? else {
            return Ok(());
        };
        let Some(dst) = self.read_node("Enter to node", true)? else {
            return Ok(());
        };
        let Some(weight) = self.read_weight("Enter weight", 1, 99)? else {
            return Ok(());
        };

        self.graph.add_edge(&src, &dst, weight);
        if self.mode == Mode::Undirected {
            self.graph.add_edge(&dst, &src, weight);
        }
        Ok(())
    }

    fn delete_edge(&mut self) -> io::Result<()> {
        let Some(src) = self.read_node("Enter from node", true)? else {
            return Ok(());
        };
        let Some(dst) = self.read_node("Enter to node", true)? else {
            return Ok(());
        };
        if !self.graph.find_edge(&src, &dst) {
            self.display_error(format!("edge ({src},{dst}) is non-member"));
            return Ok(());
        }

        self.graph.delete_edge(&src, &dst);
        if self.mode == Mode::Undirected {
            self.graph.delete_edge(&dst, &src);
        }
        Ok(())
    }

    fn find_node(&self) -> io::Result<()> {
        let Some(name) = self.read_char("Enter node name")? else {
            return Ok(());
        };
        if self.graph.find_node(&name) {
            println!("\tNode {name} is a member");
        } else {
            println!("\tNode {name} is a non-member");
        }
        Ok(())
    }

    fn find_edge(&self) -> io::Result<()> {
        let Some(src) = self.read_char("Enter from node")? else {
            return Ok(());
        };
        let Some(dst) = self.read_char("Enter to node")? else {
            return Ok(());
        };
        if self.graph.find_edge(&src, &dst) {
            println!("\tEdge ({src},{dst}) is a member");
        } else {
            println!("\tEdge ({src},{dst}) is a non-member");
        }
        Ok(())
    }

    fn floyd(&self) -> io::Result<()> {
        match self.graph.all_pairs_shortest_paths() {
            Ok(distances) => {
                let names = self.graph.node_names().collect_vec();
                let mut table = TableWriter::new(io::stdout().lock());
                table.write_weight_matrix(&names, &distances)?;
            }
            Err(err) => self.display_error(err),
        }
        Ok(())
    }

    fn warshall(&self) -> io::Result<()> {
        match self.graph.transitive_closure() {
            Ok(closure) => {
                let names = self.graph.node_names().collect_vec();
                let mut table = TableWriter::new(io::stdout().lock());
                table.write_reachability_matrix(&names, &closure)?;
            }
            Err(err) => self.display_error(err),
        }
        Ok(())
    }

    fn dijkstra(&self) -> io::Result<()> {
        if self.graph.is_empty() {
            self.display_error(GraphError::EmptyGraph);
            return Ok(());
        }
        let Some(start) = self.read_node("Enter start node", true)? else {
            return Ok(());
        };

        match self.graph.shortest_paths_from(&start) {
            Ok(tree) => {
                let mut table = TableWriter::new(io::stdout().lock());
                table.write_row_header(tree.names())?;
                table.write_weight_row("distance", tree.distances())?;
                table.write_name_row("previous", tree.predecessors())?;
                writeln!(table.into_inner())?;
            }
            Err(err) => self.display_error(err),
        }
        Ok(())
    }

    fn prim(&self) -> io::Result<()> {
        if self.mode == Mode::Directed {
            self.display_error("invalid graph mode");
            return Ok(());
        }
        if self.graph.is_empty() {
            self.display_error(GraphError::EmptyGraph);
            return Ok(());
        }
        let Some(start) = self.read_node("Enter start node", true)? else {
            return Ok(());
        };

        match self.graph.minimum_spanning_tree(&start) {
            Ok(tree) => {
                let mut table = TableWriter::new(io::stdout().lock());
                table.write_row_header(tree.names())?;
                table.write_weight_row("lowcost", tree.lowcost())?;
                table.write_name_row("closest", tree.closest())?;

                let mut out = table.into_inner();
                writeln!(out)?;
                writeln!(out, "\tMST sum: {}\n", tree.total_weight())?;
            }
            Err(err) => self.display_error(err),
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    info!("running in mode: {}", cli.mode);
    match Menu::new(cli.mode).run() {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
