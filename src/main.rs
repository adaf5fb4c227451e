use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use derive_more::Display;
use itertools::Itertools;
use log::info;
use std::error::Error;
use std::io::{BufWriter, Write};
use std::time::Instant;
use subiso::{
    front_end::read_graph,
    matcher::{JoinMode, MatchConfig, Matcher},
    types::Mapping,
};

#[derive(Debug, Display, PartialEq)]
enum Err {
    #[display(fmt = "missing argument {}", _0)]
    MissingArgument(&'static str),
    #[display(fmt = "invalid limit {}", _0)]
    InvalidLimit(String),
}

impl std::error::Error for Err {}

fn value_of<'a>(matches: &'a ArgMatches, name: &'static str) -> Result<&'a str, Err> {
    matches.value_of(name).ok_or(Err::MissingArgument(name))
}

fn write_solution<W: Write>(buf: &mut W, solution: &Mapping) -> std::io::Result<()> {
    writeln!(
        buf,
        "{}",
        solution.iter().map(|(u, v)| format!("{}={}", u, v)).join(",")
    )
}

fn handle_match(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let data = read_graph(value_of(matches, "DATA")?)?;
    let query = read_graph(value_of(matches, "QUERY")?)?;
    let mut config = MatchConfig::new();
    if matches.is_present("connected") {
        config = config.join_mode(JoinMode::Connected);
    }
    if let Some(limit) = matches.value_of("limit") {
        config = config.limit(
            limit
                .parse()
                .map_err(|_| Err::InvalidLimit(String::from(limit)))?,
        );
    }
    let start_time = Instant::now();
    let solutions = Matcher::new(&data, &query).config(config).search();
    info!("search_time: {}", start_time.elapsed().as_millis());
    let stdout = std::io::stdout();
    let mut buf = BufWriter::new(stdout.lock());
    for solution in &solutions {
        write_solution(&mut buf, solution)?;
    }
    buf.flush()?;
    info!("num_solutions: {}", solutions.len());
    Ok(())
}

fn handle_display(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", read_graph(value_of(matches, "GRAPH")?)?);
    Ok(())
}

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", read_graph(value_of(matches, "GRAPH")?)?.info());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("subiso")
        .version(crate_version!())
        .about("In-memory subgraph isomorphism search")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("match")
                .about("Prints every embedding of QUERY in DATA")
                .arg(Arg::with_name("DATA").required(true).index(1))
                .arg(Arg::with_name("QUERY").required(true).index(2))
                .arg(
                    Arg::with_name("connected")
                        .long("connected")
                        .help("Ignores edge directions when matching"),
                )
                .arg(
                    Arg::with_name("limit")
                        .long("limit")
                        .takes_value(true)
                        .help("Stops after this many solutions"),
                ),
        )
        .subcommand(
            SubCommand::with_name("display")
                .about("Prints GRAPH in DOT notation")
                .arg(Arg::with_name("GRAPH").required(true).index(1)),
        )
        .subcommand(
            SubCommand::with_name("info")
                .about("Prints the number of vertices, edges and labels of GRAPH")
                .arg(Arg::with_name("GRAPH").required(true).index(1)),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("match") {
        handle_match(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("display") {
        handle_display(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("info") {
        handle_info(matches)?;
    }
    Ok(())
}
