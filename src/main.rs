use clap::{crate_authors, crate_description, crate_name, crate_version, App, AppSettings, Arg};
use dbg2txt::{
    convert::{convert, parse_k, read_input, Conversion},
    txt,
};
use derive_more::Display;
use log::{error, info};
use std::{
    error::Error,
    io::{self, Write},
    path::Path,
};
use tempfile::NamedTempFile;

#[derive(Debug, Display, PartialEq)]
enum Err {
    #[display(fmt = "verification failed: {}", _0)]
    VerifyError(String),
}

impl std::error::Error for Err {}

fn verify(conversion: &Conversion) -> Result<(), Box<dyn Error>> {
    let graph = txt::load(conversion.text())?;
    let info = conversion.info();
    if graph.num_vertices() != info.num_vertices || graph.num_edges() != info.num_edges {
        return Err(Box::new(Err::VerifyError(format!(
            "reloaded {} vertices and {} edges, expected {} and {}",
            graph.num_vertices(),
            graph.num_edges(),
            info.num_vertices,
            info.num_edges
        ))));
    }
    info!("verified");
    Ok(())
}

fn write_atomically(path: &Path, text: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::AllowNegativeNumbers)
        .after_help(
            r"Each line of the output lists the out-neighbors of a vertex followed by its
label. Vertices with an incoming edge lose their first K-1 characters.",
        )
        .arg(
            Arg::with_name("K")
                .help("MEM or kmer size used to build the graph")
                .required(true),
        )
        .arg(
            Arg::with_name("DOT")
                .help("Graph description emitted by the compacted DBG builder")
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .help("Writes to this file instead of stdout")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verify")
                .help("Reloads the converted graph and checks its size before writing")
                .long("verify")
                .takes_value(false),
        )
        .get_matches();
    let k = parse_k(matches.value_of("K").unwrap())?;
    let input = read_input(matches.value_of("DOT").unwrap())?;
    let conversion = convert(k, &input)?;
    if matches.is_present("verify") {
        verify(&conversion)?;
    }
    let text = conversion.into_text();
    match matches.value_of("output") {
        Some(path) => write_atomically(Path::new(path), &text)?,
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("{}: {}", crate_name!(), e);
        std::process::exit(1);
    }
}
