//! colorsift - Extract the rules that use one color from a stylesheet

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use colorsift::{ColorCase, FormatOptions, Invocation, MatchPolicy, Outcome};

#[derive(Parser)]
#[command(name = "colorsift")]
#[command(version, about = "Extract the rules that use one color from a stylesheet", long_about = None)]
#[command(after_help = "EXAMPLES:
    colorsift ff0000 style.css            Print the rules using #ff0000
    colorsift ff0000 style.css red.css    Write them to red.css
    colorsift --match substring 333 a.css Also match values containing 333")]
struct Cli {
    /// Color to look for, without the leading #
    #[arg(value_name = "COLOR")]
    color: Option<String>,

    /// Stylesheet to read
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// File to write (prints to stdout when omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// How declaration values are compared with the color
    #[arg(long = "match", value_enum, default_value_t = MatchArg::Exact)]
    match_policy: MatchArg,

    /// Skip reformatting of the generated CSS
    #[arg(long)]
    raw: bool,

    /// Spaces of indentation per declaration
    #[arg(long, default_value_t = 4, value_name = "N")]
    indent: usize,

    /// Letter case for hex colors in the output
    #[arg(long, value_enum, default_value_t = CaseArg::Lower)]
    color_case: CaseArg,

    /// Suppress the confirmation message
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum MatchArg {
    /// Value must be exactly #COLOR
    Exact,
    /// Value only has to contain COLOR (may over-match)
    Substring,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    Lower,
    Upper,
    Preserve,
}

impl Cli {
    fn invocation(&self) -> Invocation {
        let policy = match self.match_policy {
            MatchArg::Exact => MatchPolicy::Exact,
            MatchArg::Substring => MatchPolicy::Substring,
        };
        let color_case = match self.color_case {
            CaseArg::Lower => ColorCase::Lower,
            CaseArg::Upper => ColorCase::Upper,
            CaseArg::Preserve => ColorCase::Preserve,
        };
        let format = (!self.raw).then(|| {
            FormatOptions::default()
                .with_indent(self.indent)
                .with_color_case(color_case)
        });

        Invocation {
            color: self.color.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
            policy,
            format,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match colorsift::run(&cli.invocation()) {
        Ok(Outcome::NoMatches) => ExitCode::SUCCESS,
        Ok(Outcome::Generated(css)) => {
            println!("{css}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Written { .. }) => {
            if !cli.quiet {
                println!("All done!");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
