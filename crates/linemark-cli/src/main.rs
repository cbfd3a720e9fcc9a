use anyhow::{Context, Result, bail};
use clap::Parser;
use linemark_config::{Config, OutputFormat};
use linemark_engine::{ConvertError, HtmlWriter, PlainWriter, Sink, convert};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

/// Convert line-oriented markdown to HTML or plain text.
#[derive(Parser, Debug)]
#[command(name = "linemark", version, about)]
struct Cli {
    /// Markdown file to convert; reads standard input when omitted
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "html|plain")]
    format: Option<OutputFormat>,

    /// Wrap HTML output in a complete page
    #[arg(short, long)]
    standalone: bool,

    /// Stylesheet href for the standalone page
    #[arg(long, value_name = "HREF")]
    stylesheet: Option<String>,

    /// Config file to use instead of ~/.config/linemark/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                log::info!("Config path: {}", path.display());
                Config::load_from_path(path)?
            }
            None => {
                log::info!("Config path: {}", Config::config_path().display());
                Config::load()?
            }
        };
        Ok(self.apply(config))
    }

    /// Command-line flags win over config file values.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.standalone {
            config.standalone = true;
        }
        if let Some(stylesheet) = &self.stylesheet {
            config.stylesheet = stylesheet.clone();
        }
        config
    }

    fn input(&self) -> Result<(String, Box<dyn BufRead>)> {
        match &self.file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                Ok((path.display().to_string(), Box::new(BufReader::new(file))))
            }
            None => Ok(("<stdin>".to_string(), Box::new(io::stdin().lock()))),
        }
    }
}

fn render_into<S: Sink>(input: impl BufRead, mut sink: S) -> Result<S, ConvertError> {
    convert(input, &mut sink)?;
    sink.close();
    Ok(sink)
}

fn render(input: impl BufRead, format: OutputFormat) -> Result<String, ConvertError> {
    match format {
        OutputFormat::Html => render_into(input, HtmlWriter::new()).map(HtmlWriter::into_string),
        OutputFormat::Plain => render_into(input, PlainWriter::new()).map(PlainWriter::into_string),
    }
}

fn standalone_page(body: &str, stylesheet: &str) -> String {
    let href = html_escape::encode_double_quoted_attribute(stylesheet);
    format!(
        "<html>\n\
         <head><link rel=\"stylesheet\" type=\"text/css\" href=\"{href}\" /></head>\n\
         <body><div class=\"linemark\">{body}</div></body>\n\
         </html>\n"
    )
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    log::info!(
        "Output format: {}, standalone: {}",
        config.format,
        config.standalone
    );

    let (name, input) = cli.input()?;
    let mut output =
        render(input, config.format).with_context(|| format!("Failed to convert {name}"))?;

    if config.standalone {
        match config.format {
            OutputFormat::Html => output = standalone_page(&output, &config.stylesheet),
            OutputFormat::Plain => log::warn!("--standalone has no effect on plain output"),
        }
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write output")?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
